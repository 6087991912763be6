//! Well-known property keys.
//!
//! These keys describe the running process and host. [`defaults`] builds a
//! table holding every one of them that can be determined; the
//! process-wide table starts from it.

use std::env;
use std::path::MAIN_SEPARATOR_STR;

use crate::predicates::is_not_blank;

use super::table::PropertyTable;

/// Operating system name (`linux`, `macos`, `windows`, ...).
pub const OS_NAME: &str = "os.name";
/// CPU architecture (`x86_64`, `aarch64`, ...).
pub const OS_ARCH: &str = "os.arch";
/// Operating system family (`unix`, `windows`).
pub const OS_FAMILY: &str = "os.family";
/// Working directory at the time the table was seeded.
pub const USER_DIR: &str = "user.dir";
/// Home directory of the current user.
pub const USER_HOME: &str = "user.home";
/// Login name of the current user.
pub const USER_NAME: &str = "user.name";
/// Directory for temporary files.
pub const TMP_DIR: &str = "tmp.dir";
/// Separator between path components.
pub const FILE_SEPARATOR: &str = "file.separator";
/// Separator between entries of a path list such as `PATH`.
pub const PATH_SEPARATOR: &str = "path.separator";
/// Line terminator native to the platform.
pub const LINE_SEPARATOR: &str = "line.separator";
/// Name of this library.
pub const RUNTIME_NAME: &str = "runtime.name";
/// Version of this library.
pub const RUNTIME_VERSION: &str = "runtime.version";

/// Every well-known key.
pub const ALL: &[&str] = &[
    OS_NAME,
    OS_ARCH,
    OS_FAMILY,
    USER_DIR,
    USER_HOME,
    USER_NAME,
    TMP_DIR,
    FILE_SEPARATOR,
    PATH_SEPARATOR,
    LINE_SEPARATOR,
    RUNTIME_NAME,
    RUNTIME_VERSION,
];

#[cfg(windows)]
const PATH_LIST_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const PATH_LIST_SEPARATOR: &str = ":";

#[cfg(windows)]
const NATIVE_LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const NATIVE_LINE_SEPARATOR: &str = "\n";

/// Build a table with the well-known properties of this process.
///
/// Keys whose value cannot be determined are left out.
pub fn defaults() -> PropertyTable {
    let mut table = PropertyTable::new();

    table.insert(OS_NAME, env::consts::OS);
    table.insert(OS_ARCH, env::consts::ARCH);
    table.insert(OS_FAMILY, env::consts::FAMILY);
    table.insert(TMP_DIR, env::temp_dir().display().to_string());
    table.insert(FILE_SEPARATOR, MAIN_SEPARATOR_STR);
    table.insert(PATH_SEPARATOR, PATH_LIST_SEPARATOR);
    table.insert(LINE_SEPARATOR, NATIVE_LINE_SEPARATOR);
    table.insert(RUNTIME_NAME, env!("CARGO_PKG_NAME"));
    table.insert(RUNTIME_VERSION, env!("CARGO_PKG_VERSION"));

    if let Ok(dir) = env::current_dir() {
        table.insert(USER_DIR, dir.display().to_string());
    }
    if let Some(home) = first_var(&["HOME", "USERPROFILE"]) {
        table.insert(USER_HOME, home);
    }
    if let Some(user) = first_var(&["USER", "USERNAME", "LOGNAME"]) {
        table.insert(USER_NAME, user);
    }

    table
}

/// First environment variable in `names` with visible text.
fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| is_not_blank(Some(value.as_str())))
}
