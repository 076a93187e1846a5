//! Environment variable naming for the Lokal configuration.
//!
//! Configuration paths such as `api.base_url` map onto variables such as
//! `LOKAL__API__BASE_URL`. The loader and the error messages share these
//! helpers so the two never disagree.

/// The prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "LOKAL";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "api.base_url")
///
/// # Returns
///
/// The environment variable name (e.g., "LOKAL__API__BASE_URL")
pub fn config_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", DEFAULT_PREFIX, CONFIG_SEPARATOR, path).to_uppercase()
}
