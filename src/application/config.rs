/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_EXC_ITERATIONS, DEFAULT_RETRY_DELAY_SECS, DEFAULT_TIMEOUT_SECS, ENV_EMAIL,
    ENV_PASSWORD, ENV_URL,
};
use crate::error::AppError;
use crate::utils::config::{explicit_or_env, get_env_flag, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Authentication credentials for the TestRail API
///
/// The password is never serialized and is redacted from `Debug` output.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Credentials {
    /// TestRail address as given by the user, e.g. `https://example.testrail.com/`
    pub url: String,
    /// Email of the TestRail account
    pub email: String,
    /// Password or API key of the TestRail account
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    /// Resolves credentials from explicit values with an environment fallback
    ///
    /// Missing values are looked up in `TESTRAIL_URL`, `TESTRAIL_EMAIL` and
    /// `TESTRAIL_PASSWORD`. Empty strings count as missing.
    ///
    /// # Errors
    /// [`AppError::Config`] naming the first field that is still missing,
    /// checked in the order url, email, password.
    pub fn resolve(
        url: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, AppError> {
        let url = explicit_or_env(url, ENV_URL).ok_or(AppError::Config { field: "url" })?;
        let email =
            explicit_or_env(email, ENV_EMAIL).ok_or(AppError::Config { field: "email" })?;
        let password = explicit_or_env(password, ENV_PASSWORD)
            .ok_or(AppError::Config { field: "password" })?;
        Ok(Self {
            url,
            email,
            password,
        })
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Options that shape how a session talks to TestRail
pub struct SessionConfig {
    /// How many seconds to wait for the server to send data
    pub timeout: u64,
    /// Whether the server's TLS certificate is verified
    pub verify: bool,
    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
    /// Seconds to wait after a 429 response without a `retry-after` header
    pub retry: u64,
    /// Return `None` instead of raising on not-ok responses
    pub exc: bool,
    /// Retry on HTTP 429
    pub rate_limit: bool,
    /// Do not warn when the base URL is not HTTPS
    pub warn_ignore: bool,
    /// Upper bound on attempts per call, shared by 429 and transport retries
    pub exc_iterations: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            verify: true,
            headers: BTreeMap::new(),
            retry: DEFAULT_RETRY_DELAY_SECS,
            exc: false,
            rate_limit: true,
            warn_ignore: false,
            exc_iterations: DEFAULT_EXC_ITERATIONS,
        }
    }
}

impl SessionConfig {
    /// Builds the session options from `TESTRAIL_*` environment variables
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            timeout: get_env_or_default("TESTRAIL_TIMEOUT", defaults.timeout),
            verify: get_env_flag("TESTRAIL_VERIFY", defaults.verify),
            headers: defaults.headers,
            retry: get_env_or_default("TESTRAIL_RETRY", defaults.retry),
            exc: get_env_flag("TESTRAIL_EXC", defaults.exc),
            rate_limit: get_env_flag("TESTRAIL_RATE_LIMIT", defaults.rate_limit),
            warn_ignore: get_env_flag("TESTRAIL_WARN_IGNORE", defaults.warn_ignore),
            exc_iterations: get_env_or_default(
                "TESTRAIL_EXC_ITERATIONS",
                defaults.exc_iterations,
            ),
        }
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the TestRail API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Transport options
    pub session: SessionConfig,
}

impl Config {
    /// Creates a configuration from already resolved parts
    pub fn new(credentials: Credentials, session: SessionConfig) -> Self {
        Self {
            credentials,
            session,
        }
    }

    /// Creates a configuration from the environment and an optional `.env` file
    ///
    /// # Errors
    /// [`AppError::Config`] when url, email or password cannot be found.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Ok(Self {
            credentials: Credentials::resolve(None, None, None)?,
            session: SessionConfig::from_env(),
        })
    }
}
