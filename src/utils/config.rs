/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is unset or unparsable
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match get_env_or_none(env_var) {
        Some(val) => val,
        None => {
            if let Ok(raw) = env::var(env_var) {
                error!("Failed to parse {}: {}, using default", env_var, raw);
            }
            default
        }
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.trim().parse::<T>().ok())
}

/// Reads a boolean flag from the environment
///
/// Accepts `true`/`false` in any case as well as `1`/`0`, `yes`/`no`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                error!("Failed to parse {}: {}, using default", env_var, other);
                default
            }
        },
        Err(_) => default,
    }
}

/// Picks the explicit value when present, falling back to the environment
///
/// Empty strings count as missing in both places.
pub fn explicit_or_env(value: Option<&str>, env_var: &str) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| env::var(env_var).ok().filter(|v| !v.is_empty()))
}
