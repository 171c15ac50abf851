use crate::common::{self, API_PATH, BASIC_AUTH, endpoint, mock_json};
use mockito::Matcher;
use reqwest::Method;
use serde_json::json;
use testrail_client::prelude::*;

#[tokio::test]
async fn test_get_builds_url_and_sends_basic_auth() {
    let mut server = common::server().await;
    let mock = mock_json(&mut server, "GET", "get_case/1", &[], &json!({"id": 1}))
        .match_header("content-type", "application/json")
        .create_async()
        .await;

    let session = common::session(&server);
    let result = session.get("get_case/1", &()).await.unwrap();

    assert_eq!(result, Some(json!({"id": 1})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trailing_slash_is_not_doubled() {
    let mut server = common::server().await;
    let mock = server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_case/2", &[]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let session: Session = common::builder(&server)
        .url(format!("{}/", server.url()))
        .build()
        .unwrap();
    assert_eq!(
        session.base_url(),
        format!("{}/index.php?/api/v2/", server.url())
    );
    session.get("get_case/2", &()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_query_parameters_are_normalized() {
    let mut server = common::server().await;
    let mock = mock_json(
        &mut server,
        "GET",
        "get_tests/3",
        &[("status_id", "1,5"), ("is_completed", "1")],
        &json!([]),
    )
    .create_async()
    .await;

    let session = common::session(&server);
    session
        .get(
            "get_tests/3",
            &json!({"status_id": [1, 5], "is_completed": true, "label_id": null}),
        )
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mut server = common::server().await;
    let mock = server
        .mock("POST", API_PATH)
        .match_query(endpoint("add_run/1", &[]))
        .match_header("authorization", BASIC_AUTH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "Nightly", "suite_id": 2})))
        .with_status(200)
        .with_body(r#"{"id": 10}"#)
        .create_async()
        .await;

    let session = common::session(&server);
    let result = session
        .post("add_run/1", &(), &json!({"name": "Nightly", "suite_id": 2}))
        .await
        .unwrap();
    assert_eq!(result, Some(json!({"id": 10})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_ok_response_raises_with_details() {
    let mut server = common::server().await;
    server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_case/99", &[]))
        .with_status(400)
        .with_body(r#"{"error": "Field :case_id is not a valid test case."}"#)
        .create_async()
        .await;

    let session = common::session(&server);
    let err = session.get("get_case/99", &()).await.unwrap_err();

    match err {
        AppError::StatusCode {
            status,
            reason,
            url,
            body,
        } => {
            assert_eq!(status, 400);
            assert_eq!(reason, "Bad Request");
            assert!(url.ends_with("get_case/99"));
            assert!(body.contains("not a valid test case"));
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_exc_mode_suppresses_errors() {
    let mut server = common::server().await;
    server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_case/99", &[]))
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;

    let session: Session = common::builder(&server).exc(true).build().unwrap();
    let result = session.get("get_case/99", &()).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_non_json_body_is_returned_as_text() {
    let mut server = common::server().await;
    server
        .mock("POST", API_PATH)
        .match_query(endpoint("delete_case/1", &[]))
        .with_status(200)
        .with_body("Deleted")
        .create_async()
        .await;

    let session = common::session(&server);
    let result = session.post("delete_case/1", &(), &()).await.unwrap();
    assert_eq!(result, Some(json!("Deleted")));
}

#[tokio::test]
async fn test_empty_body_is_none() {
    let mut server = common::server().await;
    server
        .mock("POST", API_PATH)
        .match_query(endpoint("close_run/4", &[]))
        .with_status(200)
        .create_async()
        .await;

    let session = common::session(&server);
    let result = session.post("close_run/4", &(), &()).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_request_raw_skips_response_handling() {
    let mut server = common::server().await;
    server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_case/5", &[]))
        .with_status(404)
        .with_body("missing")
        .create_async()
        .await;

    let session = common::session(&server);
    let response = session
        .request_raw(Method::GET, "get_case/5", &(), &())
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(response.text().await.unwrap(), "missing");
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    let mut server = common::server().await;
    let mock = server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_statuses", &[]))
        .match_header("x-team", "qa")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let session: Session = common::builder(&server)
        .header("X-Team", "qa")
        .build()
        .unwrap();
    session.get("get_statuses", &()).await.unwrap();
    mock.assert_async().await;
}

struct StatusEchoHandler;

#[async_trait]
impl ResponseHandler for StatusEchoHandler {
    async fn handle(
        &self,
        response: reqwest::Response,
        _exc: bool,
    ) -> Result<Option<Value>, AppError> {
        Ok(Some(json!({"status": response.status().as_u16()})))
    }
}

#[tokio::test]
async fn test_custom_response_handler_replaces_default() {
    let mut server = common::server().await;
    server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_case/1", &[]))
        .with_status(500)
        .create_async()
        .await;

    let session: Session = common::builder(&server)
        .response_handler(StatusEchoHandler)
        .build()
        .unwrap();
    let result = session.get("get_case/1", &()).await.unwrap();
    assert_eq!(result, Some(json!({"status": 500})));
}

#[tokio::test]
async fn test_non_map_query_is_rejected() {
    let server = common::server().await;
    let session = common::session(&server);
    let err = session.get("get_case/1", &json!([1, 2])).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
