/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

/// Turns an HTTP response into the value returned by endpoint methods
///
/// A session holds exactly one handler. Replace the default one to apply a
/// different error policy or decoding to every endpoint.
#[async_trait]
pub trait ResponseHandler: Send + Sync {
    /// Handles a response that ended the retry loop
    ///
    /// # Arguments
    /// * `response` - The final response of the call
    /// * `exc` - Whether not-ok responses are suppressed instead of raised
    async fn handle(&self, response: Response, exc: bool) -> Result<Option<Value>, AppError>;
}

/// Default TestRail response handling
///
/// - not-ok status (4xx, 5xx): logged, then `Err(AppError::StatusCode)` or,
///   with `exc` on, `Ok(None)`;
/// - ok status: the body decoded as JSON, the raw text when it is not JSON,
///   `None` when it is empty or `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResponseHandler;

#[async_trait]
impl ResponseHandler for DefaultResponseHandler {
    async fn handle(&self, response: Response, exc: bool) -> Result<Option<Value>, AppError> {
        let status = response.status();
        let url = response.url().to_string();

        if !is_ok(status) {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            let body = response.text().await.unwrap_or_default();
            error!(
                "Code: {}, reason: {} url: {}, content: {}",
                status.as_u16(),
                reason,
                url,
                body
            );
            if exc {
                return Ok(None);
            }
            return Err(AppError::StatusCode {
                status: status.as_u16(),
                reason,
                url,
                body,
            });
        }

        let text = response.text().await?;
        debug!("Response body: {}", text);
        Ok(decode_body(&text))
    }
}

/// Whether a status counts as success (anything below 400)
pub fn is_ok(status: StatusCode) -> bool {
    !(status.is_client_error() || status.is_server_error())
}

/// Decodes a success body: JSON when possible, raw text otherwise
pub fn decode_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(text.to_string())),
    }
}
