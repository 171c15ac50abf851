// Common utilities for the mock-server tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use testrail_client::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

pub const EMAIL: &str = "user@example.com";
pub const PASSWORD: &str = "secret-key";
/// `Basic` credentials for EMAIL:PASSWORD
pub const BASIC_AUTH: &str = "Basic dXNlckBleGFtcGxlLmNvbTpzZWNyZXQta2V5";

/// Path part of every API request; the endpoint travels in the query string
pub const API_PATH: &str = "/index.php";

/// Starts a mock TestRail server
pub async fn server() -> ServerGuard {
    Server::new_async().await
}

/// Session builder pointed at the mock server with fast retries
pub fn builder<T: From<Session>>(server: &ServerGuard) -> SessionBuilder<T> {
    SessionBuilder::new()
        .url(server.url())
        .email(EMAIL)
        .password(PASSWORD)
        .warn_ignore(true)
        .retry(0)
}

pub fn session(server: &ServerGuard) -> Session {
    builder(server).build().unwrap()
}

pub fn api(server: &ServerGuard) -> TestRailApi {
    builder(server).build().unwrap()
}

/// Matches the `/api/v2/<endpoint>` query part plus the given parameters
pub fn endpoint(endpoint: &str, params: &[(&str, &str)]) -> Matcher {
    let mut matchers = vec![Matcher::UrlEncoded(
        format!("/api/v2/{endpoint}"),
        String::new(),
    )];
    matchers.extend(
        params
            .iter()
            .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string())),
    );
    Matcher::AllOf(matchers)
}

/// Mock for one endpoint answering `body` as JSON
pub fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    name: &str,
    params: &[(&str, &str)],
    body: &Value,
) -> Mock {
    server
        .mock(method, API_PATH)
        .match_query(endpoint(name, params))
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
}

/// Log sink shared between a test and a scoped subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
