/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::ATTACHMENT_FIELD;
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Body of a single request
#[derive(Debug, Clone, Default)]
pub enum Payload {
    /// No body
    #[default]
    Empty,
    /// JSON document
    Json(Value),
    /// Multipart upload with one `attachment` part
    Attachment {
        /// File name reported to the server
        file_name: String,
        /// File contents, read before the first attempt
        bytes: Vec<u8>,
    },
}

impl Payload {
    /// Serializes a body; `()` or `null` become [`Payload::Empty`]
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, AppError> {
        match serde_json::to_value(body)? {
            Value::Null => Ok(Payload::Empty),
            value => Ok(Payload::Json(value)),
        }
    }
}

/// Everything needed to send one logical call, possibly several times
#[derive(Debug, Clone)]
pub struct HttpRequest<'a> {
    /// HTTP method
    pub method: Method,
    /// Full URL, API prefix and endpoint included
    pub url: String,
    /// Normalized query pairs
    pub query: Vec<(String, String)>,
    /// Request body
    pub payload: Payload,
    /// Headers added to every attempt
    pub headers: &'a HeaderMap,
    /// Whether `Content-Type: application/json` is forced
    pub json_content_type: bool,
    /// Basic auth user
    pub username: &'a str,
    /// Basic auth password
    pub password: &'a str,
    /// Per-request timeout
    pub timeout: Duration,
}

impl HttpRequest<'_> {
    fn builder(&self, client: &Client) -> RequestBuilder {
        let mut request = client
            .request(self.method.clone(), &self.url)
            .headers(self.headers.clone())
            .basic_auth(self.username, Some(self.password))
            .timeout(self.timeout);

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        if self.json_content_type {
            request = request.header(CONTENT_TYPE, "application/json");
        }

        match &self.payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(body),
            Payload::Attachment { file_name, bytes } => {
                let part = Part::bytes(bytes.clone()).file_name(file_name.clone());
                request.multipart(Form::new().part(ATTACHMENT_FIELD, part))
            }
        }
    }
}

/// Turns any serializable parameter set into query pairs
///
/// The value must serialize to a map (or to `null`/`()` for no parameters).
/// `null` entries are dropped, lists become comma-joined strings, booleans
/// become `0`/`1` and nested maps are sent as JSON text.
///
/// # Errors
/// [`AppError::InvalidInput`] when the value is not a map.
pub fn normalize_query<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>, AppError> {
    match serde_json::to_value(params)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| query_value(value).map(|value| (key, value)))
            .collect()),
        other => Err(AppError::InvalidInput(format!(
            "query parameters must be a map, got {other}"
        ))),
    }
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(if flag { "1" } else { "0" }.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        object @ Value::Object(_) => Some(object.to_string()),
    }
}

/// Makes an HTTP request, retrying on rate limiting and on selected transport errors
///
/// Both retry reasons share one attempt counter bounded by
/// [`RetryConfig::attempts`]:
///
/// - a transport error accepted by the retry predicate is retried at once;
///   any other transport error is logged and returned;
/// - a 429 response (with rate limiting on) sleeps for `retry-after`
///   seconds, or the configured delay, and retries.
///
/// When attempts run out on 429 the last response is returned so the caller's
/// response handling can classify it.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `request` - Method, URL, query, body and auth of the call
/// * `retry_config` - Retry configuration
///
/// # Returns
///
/// * `Ok(Response)` - The response that ended the loop, whatever its status
/// * `Err(AppError::Network)` - A transport error that was not retried
pub async fn make_http_request(
    client: &Client,
    request: &HttpRequest<'_>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut attempt = 0;

    loop {
        debug!("{} {}", request.method, request.url);

        let response = match request.builder(client).send().await {
            Ok(response) => response,
            Err(err) => {
                if retry_config.should_retry_error(&err, attempt) {
                    attempt += 1;
                    warn!(
                        "Transport error (attempt {}/{}): {}. Retrying...",
                        attempt,
                        retry_config.attempts(),
                        err
                    );
                    continue;
                }
                error!("{}", err);
                return Err(AppError::Network(err));
            }
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if retry_config.should_retry_status(status, attempt) {
            let delay = retry_config.backoff(response.headers());
            attempt += 1;
            warn!(
                "Rate limit exceeded (attempt {}/{}). Waiting {} seconds before retry...",
                attempt,
                retry_config.attempts(),
                delay.as_secs()
            );
            tokio::time::sleep(delay).await;
            continue;
        }

        debug!("Response header: {:?}", response.headers());
        return Ok(response);
    }
}
