//! The process-wide property table.
//!
//! [`SystemProperties`] guards a [`PropertyTable`] with an `RwLock` so one
//! instance can be shared by the whole process through [`system`]. Each
//! call is atomic on its own; callers that need a read-modify-write across
//! several calls must coordinate themselves.
//!
//! Defaults are always computed with no lock held, so a default may read
//! the table.

use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;

use super::keys;
use super::table::{parse_bool, parse_int, resolve_value, PropertyTable};

static SYSTEM: LazyLock<SystemProperties> = LazyLock::new(SystemProperties::with_defaults);

/// Get the process-wide property table.
///
/// The table is created on first use and seeded with [`keys::defaults`].
pub fn system() -> &'static SystemProperties {
    &SYSTEM
}

macro_rules! well_known_accessor {
    ($(#[$doc:meta])* $name:ident => $key:path) => {
        $(#[$doc])*
        pub fn $name(&self) -> Option<String> {
            self.get($key)
        }
    };
}

/// A property table that can be shared between threads.
///
/// # Example
///
/// ```
/// use propkit::properties::{PropertyTable, SystemProperties};
///
/// let props = SystemProperties::new(PropertyTable::new());
/// props.set_property("app.mode", Some("dev"), None::<fn() -> String>).unwrap();
///
/// assert_eq!(props.get("app.mode"), Some("dev".to_string()));
/// assert_eq!(props.get_or_else("app.port", || "8080".to_string()), "8080");
/// ```
#[derive(Debug, Default)]
pub struct SystemProperties {
    table: RwLock<PropertyTable>,
}

impl SystemProperties {
    /// Wrap an existing table.
    pub fn new(table: PropertyTable) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }

    /// Create a table seeded with the well-known properties.
    pub fn with_defaults() -> Self {
        Self::new(keys::defaults())
    }

    fn read(&self) -> RwLockReadGuard<'_, PropertyTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PropertyTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).map(str::to_string)
    }

    /// Look up `key`, falling back to a lazily computed default.
    ///
    /// `default` runs at most once, and only when `key` is missing.
    pub fn get_property<F>(&self, key: &str, default: Option<F>) -> Option<String>
    where
        F: FnOnce() -> String,
    {
        match self.get(key) {
            Some(value) => Some(value),
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
        &self,
        key: &str,
        value: Option<&str>,
        default: Option<F>,
    ) -> Result<String>
    where
        F: FnOnce() -> String,
    {
        let resolved = resolve_value(key, value, default)?;
        self.set(key, resolved.clone());
        Ok(resolved)
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        tracing::debug!("Setting property '{}'", key);
        self.write().insert(key, value)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<String> {
        tracing::debug!("Removing property '{}'", key);
        self.write().remove(key)
    }

    /// Check if the table has `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Look up `key` as an integer. See [`PropertyTable::get_int`].
    pub fn get_int<F>(&self, key: &str, default: F) -> Result<i64>
    where
        F: FnOnce() -> i64,
    {
        parse_int(key, self.get(key).as_deref(), default)
    }

    /// Look up `key` as a boolean. See [`PropertyTable::get_bool`].
    pub fn get_bool<F>(&self, key: &str, default: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        parse_bool(self.get(key).as_deref(), default)
    }

    /// Load environment-style variables. See [`PropertyTable::load_env`].
    pub fn load_env<I>(&self, prefix: &str, vars: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.write().load_env(prefix, vars)
    }

    /// Copy the current table.
    pub fn snapshot(&self) -> PropertyTable {
        self.read().clone()
    }

    /// Get all entries sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.read().sorted_entries()
    }

    /// Call `f` for every entry, sorted by key.
    ///
    /// `f` runs on a copy, so it may read or write the table.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &str),
    {
        for (key, value) in self.entries() {
            f(&key, &value);
        }
    }

    /// Replace the whole table, returning the previous one.
    pub fn replace(&self, table: PropertyTable) -> PropertyTable {
        tracing::debug!("Replacing property table ({} entries)", table.len());
        std::mem::replace(&mut *self.write(), table)
    }

    /// Restore the well-known properties, dropping everything else.
    pub fn reset(&self) {
        tracing::debug!("Resetting property table to defaults");
        self.replace(keys::defaults());
    }

    well_known_accessor!(
        /// Operating system name.
        os_name => keys::OS_NAME
    );
    well_known_accessor!(
        /// CPU architecture.
        os_arch => keys::OS_ARCH
    );
    well_known_accessor!(
        /// Operating system family.
        os_family => keys::OS_FAMILY
    );
    well_known_accessor!(
        /// Working directory when the table was seeded.
        user_dir => keys::USER_DIR
    );
    well_known_accessor!(
        /// Home directory of the current user.
        user_home => keys::USER_HOME
    );
    well_known_accessor!(
        /// Login name of the current user.
        user_name => keys::USER_NAME
    );
    well_known_accessor!(
        /// Directory for temporary files.
        tmp_dir => keys::TMP_DIR
    );
    well_known_accessor!(
        /// Separator between path components.
        file_separator => keys::FILE_SEPARATOR
    );
    well_known_accessor!(
        /// Separator between entries of a path list.
        path_separator => keys::PATH_SEPARATOR
    );
    well_known_accessor!(
        /// Native line terminator.
        line_separator => keys::LINE_SEPARATOR
    );
    well_known_accessor!(
        /// Name of this library.
        runtime_name => keys::RUNTIME_NAME
    );
    well_known_accessor!(
        /// Version of this library.
        runtime_version => keys::RUNTIME_VERSION
    );
}
