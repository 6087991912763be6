//! Owned string-keyed property table.
//!
//! [`PropertyTable`] is the explicit form of a property context: build one,
//! pass it to the code that needs it, and inspect it in tests. The
//! process-wide instance in [`super::system`] wraps one of these.

use std::collections::hash_map::{self, HashMap};

use serde::Serialize;

use crate::error::{PropkitError, Result};

/// A mutable mapping from string keys to string values.
///
/// # Example
///
/// ```
/// use propkit::properties::PropertyTable;
///
/// let mut table = PropertyTable::new();
/// table.set_property("app.mode", Some("dev"), None::<fn() -> String>).unwrap();
///
/// assert_eq!(table.get("app.mode"), Some("dev"));
/// assert_eq!(
///     table.get_property("app.port", Some(|| "8080".to_string())),
///     Some("8080".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyTable {
    entries: HashMap<String, String>,
}

impl PropertyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up `key`, falling back to a lazily computed default.
    ///
    /// `default` runs at most once, and only when `key` is missing.
    pub fn get_property<F>(&self, key: &str, default: Option<F>) -> Option<String>
    where
        F: FnOnce() -> String,
    {
        match self.get(key) {
            Some(value) => Some(value.to_string()),
            None => default.map(|f| {
                tracing::trace!("Property '{}' missing, using default", key);
                f()
            }),
        }
    }

    /// Look up `key`, computing `default` on a miss.
    pub fn get_or_else<F>(&self, key: &str, default: F) -> String
    where
        F: FnOnce() -> String,
    {
        self.get_property(key, Some(default)).unwrap_or_default()
    }

    /// Store a value under `key` and return the stored string.
    ///
    /// The value is `value` when present, otherwise the result of
    /// `default`. `default` is not invoked when `value` is present.
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` if both `value` and `default` are
    /// absent. The table is left unchanged.
    pub fn set_property<F>(
        &mut self,
        key: &str,
        value: Option<&str>,
        default: Option<F>,
    ) -> Result<String>
    where
        F: FnOnce() -> String,
    {
        let resolved = resolve_value(key, value, default)?;
        self.insert(key, resolved.clone());
        Ok(resolved)
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Check if the table has `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get all entries sorted by key.
    pub fn sorted_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        entries
    }

    /// Look up `key` as an integer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the stored value is not an integer.
    pub fn get_int<F>(&self, key: &str, default: F) -> Result<i64>
    where
        F: FnOnce() -> i64,
    {
        parse_int(key, self.get(key), default)
    }

    /// Look up `key` as a boolean.
    ///
    /// A stored value is `true` only if it equals `"true"` ignoring ASCII
    /// case; anything else is `false`.
    pub fn get_bool<F>(&self, key: &str, default: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        parse_bool(self.get(key), default)
    }

    /// Load environment-style variables whose name starts with `prefix`.
    ///
    /// The key is the rest of the name, lowercased, with `_` replaced by
    /// `.`, so `APP_DB_HOST` with prefix `APP_` becomes `db.host`. Names that
    /// are exactly `prefix` are skipped.
    ///
    /// Returns the number of entries loaded.
    pub fn load_env<I>(&mut self, prefix: &str, vars: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut loaded = 0;
        for (name, value) in vars {
            let Some(rest) = name.strip_prefix(prefix) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            let key = rest.to_lowercase().replace('_', ".");
            tracing::debug!("Loaded property '{}' from ${}", key, name);
            self.insert(key, value);
            loaded += 1;
        }
        loaded
    }
}

/// Pick the value to store: explicit value first, then the default.
pub(crate) fn resolve_value<F>(key: &str, value: Option<&str>, default: Option<F>) -> Result<String>
where
    F: FnOnce() -> String,
{
    match (value, default) {
        (Some(value), _) => Ok(value.to_string()),
        (None, Some(default)) => Ok(default()),
        (None, None) => Err(PropkitError::ContractViolation {
            key: key.to_string(),
        }),
    }
}

pub(crate) fn parse_int<F>(key: &str, value: Option<&str>, default: F) -> Result<i64>
where
    F: FnOnce() -> i64,
{
    match value {
        Some(value) => value.parse().map_err(|_| PropkitError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "an integer",
        }),
        None => Ok(default()),
    }
}

pub(crate) fn parse_bool<F>(value: Option<&str>, default: F) -> bool
where
    F: FnOnce() -> bool,
{
    match value {
        Some(value) => value.eq_ignore_ascii_case("true"),
        None => default(),
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for PropertyTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for PropertyTable {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
