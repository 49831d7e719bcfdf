//! Environment lookup with `_FILE` indirection.
//!
//! For a variable `NAME` the value is taken from, in order:
//! 1. the contents of the file named by `NAME_FILE` (trailing whitespace trimmed)
//! 2. `NAME` itself
//!
//! An unreadable `NAME_FILE` is logged and skipped.

use log::warn;

pub fn read_env(var_name: &str) -> Option<String> {
    let file_var = format!("{var_name}_FILE");
    if let Ok(path) = std::env::var(&file_var) {
        match std::fs::read_to_string(&path) {
            Ok(contents) => return Some(contents.trim_end().to_string()),
            Err(e) => warn!("Ignoring {}: cannot read {}: {}", file_var, path, e),
        }
    }

    std::env::var(var_name).ok()
}

/// Overwrite `target` when the variable is set
pub(crate) fn apply_env_string(var_name: &str, target: &mut String) {
    if let Some(val) = read_env(var_name) {
        *target = val;
    }
}

/// Overwrite `target` when the variable is set ("true"/"1" are true)
pub(crate) fn apply_env_bool(var_name: &str, target: &mut bool) {
    if let Some(val) = read_env(var_name) {
        *target = val == "true" || val == "1";
    }
}

/// Overwrite `target` when the variable is set and parses
pub(crate) fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
    if let Some(val) = read_env(var_name) {
        match val.parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!("Ignoring {}: cannot parse {:?}", var_name, val),
        }
    }
}

pub(crate) fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
    if let Some(val) = read_env(var_name) {
        *target = Some(val);
    }
}
