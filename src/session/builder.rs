/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::{Config, Credentials, SessionConfig};
use crate::constants::{API_PREFIX, USER_AGENT};
use crate::error::{AppError, TestRailResult};
use crate::model::retry::{RetryConfig, RetryPredicate};
use crate::session::client::Session;
use crate::session::response::{DefaultResponseHandler, ResponseHandler};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Builder for [`Session`] and for types wrapping one, such as [`crate::TestRailApi`]
///
/// Credentials left unset are read from `TESTRAIL_URL`, `TESTRAIL_EMAIL` and
/// `TESTRAIL_PASSWORD` when [`SessionBuilder::build`] runs.
pub struct SessionBuilder<T = Session> {
    url: Option<String>,
    email: Option<String>,
    password: Option<String>,
    config: SessionConfig,
    retry_on: Option<RetryPredicate>,
    handler: Option<Arc<dyn ResponseHandler>>,
    client: Option<Client>,
    target: PhantomData<fn() -> T>,
}

impl<T: From<Session>> Default for SessionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: From<Session>> SessionBuilder<T> {
    /// Creates a builder with default session options
    pub fn new() -> Self {
        Self {
            url: None,
            email: None,
            password: None,
            config: SessionConfig::default(),
            retry_on: None,
            handler: None,
            client: None,
            target: PhantomData,
        }
    }

    /// TestRail address, e.g. `https://example.testrail.com/`
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Account email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Account password or API key
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Takes credentials and options from a full configuration
    pub fn config(mut self, config: Config) -> Self {
        self.url = Some(config.credentials.url);
        self.email = Some(config.credentials.email);
        self.password = Some(config.credentials.password);
        self.config = config.session;
        self
    }

    /// Replaces every session option at once
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Request timeout in seconds
    pub fn timeout(mut self, secs: u64) -> Self {
        self.config.timeout = secs;
        self
    }

    /// Whether TLS certificates are verified
    pub fn verify(mut self, verify: bool) -> Self {
        self.config.verify = verify;
        self
    }

    /// Adds a header sent with every request
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    /// Seconds to wait after a 429 without `retry-after`
    pub fn retry(mut self, secs: u64) -> Self {
        self.config.retry = secs;
        self
    }

    /// Return `None` instead of an error for not-ok responses
    pub fn exc(mut self, exc: bool) -> Self {
        self.config.exc = exc;
        self
    }

    /// Whether HTTP 429 is retried
    pub fn rate_limit(mut self, rate_limit: bool) -> Self {
        self.config.rate_limit = rate_limit;
        self
    }

    /// Silences the warning for plain `http://` URLs
    pub fn warn_ignore(mut self, warn_ignore: bool) -> Self {
        self.config.warn_ignore = warn_ignore;
        self
    }

    /// Maximum attempts per call
    pub fn exc_iterations(mut self, iterations: u32) -> Self {
        self.config.exc_iterations = iterations;
        self
    }

    /// Selects which transport errors are retried (none by default)
    pub fn retry_exceptions<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&reqwest::Error) -> bool + Send + Sync + 'static,
    {
        self.retry_on = Some(Arc::new(predicate));
        self
    }

    /// Same as [`SessionBuilder::retry_exceptions`] for an already shared predicate
    pub fn retry_predicate(mut self, predicate: RetryPredicate) -> Self {
        self.retry_on = Some(predicate);
        self
    }

    /// Replaces the default response handling
    pub fn response_handler(mut self, handler: impl ResponseHandler + 'static) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Uses an existing HTTP client; `timeout` still applies per request but
    /// `verify` is then up to the given client
    pub fn http_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Resolves credentials and creates the session
    ///
    /// # Errors
    /// - [`AppError::Config`] naming the first missing credential (url, email, password)
    /// - [`AppError::InvalidInput`] for a header that is not valid HTTP
    /// - [`AppError::Network`] when the HTTP client cannot be built
    pub fn build(self) -> TestRailResult<T> {
        self.build_session().map(T::from)
    }

    fn build_session(self) -> TestRailResult<Session> {
        let credentials = Credentials::resolve(
            self.url.as_deref(),
            self.email.as_deref(),
            self.password.as_deref(),
        )?;
        let root = credentials
            .url
            .strip_suffix('/')
            .unwrap_or(&credentials.url);
        let base_url = format!("{root}{API_PREFIX}");

        if !self.config.warn_ignore && root.starts_with("http://") {
            warn!(
                "Using HTTP and not HTTPS may cause writeable API requests to return 404 errors"
            );
        }

        let headers = header_map(&self.config)?;
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(self.config.timeout))
                .danger_accept_invalid_certs(!self.config.verify)
                .build()?,
        };

        let mut retry = RetryConfig::new()
            .with_iterations(self.config.exc_iterations)
            .with_delay(self.config.retry)
            .with_rate_limit(self.config.rate_limit);
        if let Some(predicate) = self.retry_on {
            retry = retry.with_retry_on(predicate);
        }

        info!(
            "Create Session{{url: {}, user: {}, timeout: {}, headers: {:?}, verify: {}, exception: {}, retry: {}, iterations: {}}}",
            base_url,
            credentials.email,
            self.config.timeout,
            self.config.headers,
            self.config.verify,
            self.config.exc,
            self.config.retry,
            self.config.exc_iterations
        );

        Ok(Session {
            client,
            credentials,
            base_url,
            config: self.config,
            headers,
            retry,
            handler: self
                .handler
                .unwrap_or_else(|| Arc::new(DefaultResponseHandler)),
        })
    }
}

fn header_map(config: &SessionConfig) -> TestRailResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| AppError::InvalidInput(format!("invalid value for header '{name}': {e}")))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
