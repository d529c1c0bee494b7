//! Runtime configuration read from the process environment.

use std::env;

pub const SERVICE_NAME_KEY: &str = "AURIX_SERVICE_NAME";
pub const DEFAULT_SERVICE_NAME: &str = "AURIX_SDICS";

/// Returns the variable's value, or `default` when it is unset or not
/// valid Unicode.
pub fn load_environment_config(key: &str, default: Option<&str>) -> Option<String> {
    env::var(key)
        .ok()
        .or_else(|| default.map(str::to_owned))
}

/// Service name used to tag log lines and metrics.
pub fn service_name() -> String {
    load_environment_config(SERVICE_NAME_KEY, Some(DEFAULT_SERVICE_NAME))
        .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_owned())
}
