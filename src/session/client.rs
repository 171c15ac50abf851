/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::{Config, Credentials, SessionConfig};
use crate::constants::{ATTACHMENT_FIELD, ATTACHMENT_UPLOAD_PREFIX};
use crate::error::TestRailResult;
use crate::model::http::{HttpRequest, Payload, make_http_request, normalize_query};
use crate::model::retry::RetryConfig;
use crate::session::builder::SessionBuilder;
use crate::session::response::{ResponseHandler, is_ok};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Authenticated connection to one TestRail instance
///
/// Every endpoint call goes through [`Session::request_raw`], which sends the
/// request with basic auth and retries it according to the session's
/// [`RetryConfig`]. The final response is then passed to the session's
/// [`ResponseHandler`] unless the caller asked for the raw response.
#[derive(Clone)]
pub struct Session {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
    pub(crate) config: SessionConfig,
    pub(crate) headers: HeaderMap,
    pub(crate) retry: RetryConfig,
    pub(crate) handler: Arc<dyn ResponseHandler>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("user", &self.credentials.email)
            .field("config", &self.config)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Session {
    /// Starts building a session
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Creates a session from a complete configuration
    ///
    /// # Errors
    /// [`crate::AppError::Config`] when a credential is empty and not in the environment,
    /// [`crate::AppError::Network`] when the HTTP client cannot be built.
    pub fn new(config: Config) -> TestRailResult<Self> {
        Self::builder().config(config).build()
    }

    /// Creates a session from `TESTRAIL_*` environment variables and `.env`
    pub fn from_env() -> TestRailResult<Self> {
        Self::new(Config::from_env()?)
    }

    /// Email of the authenticated user
    pub fn user_email(&self) -> &str {
        &self.credentials.email
    }

    /// Base URL including the API prefix, e.g. `https://x.testrail.io/index.php?/api/v2/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session options
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Retry policy applied to every call
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Full URL of an endpoint such as `get_case/1`
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends a GET request and handles the response
    pub async fn get<P>(&self, endpoint: &str, params: &P) -> TestRailResult<Option<Value>>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::GET, endpoint, params, &()).await
    }

    /// Sends a POST request with a JSON body and handles the response
    pub async fn post<P, B>(
        &self,
        endpoint: &str,
        params: &P,
        body: &B,
    ) -> TestRailResult<Option<Value>>
    where
        P: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, params, body).await
    }

    /// Sends a request and passes the final response to the response handler
    ///
    /// `params` must serialize to a map (or `()`); see
    /// [`crate::model::http::normalize_query`]. `body` is sent as JSON unless
    /// it serializes to `null`.
    pub async fn request<P, B>(
        &self,
        method: Method,
        endpoint: &str,
        params: &P,
        body: &B,
    ) -> TestRailResult<Option<Value>>
    where
        P: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let response = self.request_raw(method, endpoint, params, body).await?;
        self.handle_response(response).await
    }

    /// Sends a request and returns the final response without handling it
    ///
    /// Retries still apply. No status classification is done, so a 404 is
    /// returned as `Ok(response)`.
    pub async fn request_raw<P, B>(
        &self,
        method: Method,
        endpoint: &str,
        params: &P,
        body: &B,
    ) -> TestRailResult<Response>
    where
        P: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let query = normalize_query(params)?;
        let payload = Payload::json(body)?;
        self.send(method, endpoint, query, payload).await
    }

    /// Runs the session's response handler with the session's `exc` setting
    pub async fn handle_response(&self, response: Response) -> TestRailResult<Option<Value>> {
        self.handler.handle(response, self.config.exc).await
    }

    /// Uploads a file as the multipart `attachment` field
    ///
    /// The file is read once; every retry sends the same bytes.
    ///
    /// # Errors
    /// [`crate::AppError::Io`] when the file cannot be read, plus the errors of
    /// [`Session::request`].
    pub async fn attachment_request(
        &self,
        endpoint: &str,
        path: impl AsRef<Path>,
    ) -> TestRailResult<Option<Value>> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(ATTACHMENT_FIELD)
            .to_string();
        debug!("Uploading {} ({} bytes) to {}", file_name, bytes.len(), endpoint);

        let response = self
            .send(
                Method::POST,
                endpoint,
                Vec::new(),
                Payload::Attachment { file_name, bytes },
            )
            .await?;
        self.handle_response(response).await
    }

    /// Downloads an attachment to `path`
    ///
    /// Returns the written path on success. Any other status goes through the
    /// response handler: an error, or `None` with `exc` on.
    pub async fn get_attachment(
        &self,
        endpoint: &str,
        path: impl AsRef<Path>,
    ) -> TestRailResult<Option<PathBuf>> {
        let path = path.as_ref();
        let response = self.send(Method::GET, endpoint, Vec::new(), Payload::Empty).await?;

        if is_ok(response.status()) {
            let bytes = response.bytes().await?;
            tokio::fs::write(path, &bytes).await?;
            debug!("Saved {} bytes to {}", bytes.len(), path.display());
            return Ok(Some(path.to_path_buf()));
        }

        self.handle_response(response).await.map(|_| None)
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        query: Vec<(String, String)>,
        payload: Payload,
    ) -> TestRailResult<Response> {
        let request = HttpRequest {
            method,
            url: self.url_for(endpoint),
            query,
            payload,
            headers: &self.headers,
            json_content_type: !endpoint.starts_with(ATTACHMENT_UPLOAD_PREFIX),
            username: &self.credentials.email,
            password: &self.credentials.password,
            timeout: Duration::from_secs(self.config.timeout),
        };
        make_http_request(&self.client, &request, &self.retry).await
    }
}
