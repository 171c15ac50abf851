use crate::common::{self, API_PATH, BASIC_AUTH, endpoint};
use mockito::Matcher;
use serde_json::json;
use std::fs;
use tempfile::tempdir;
use testrail_client::prelude::*;

#[tokio::test]
async fn test_upload_sends_multipart_attachment() {
    let mut server = common::server().await;
    let mock = server
        .mock("POST", API_PATH)
        .match_query(endpoint("add_attachment_to_case/3", &[]))
        .match_header("authorization", BASIC_AUTH)
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="attachment"; filename="report.txt""#.to_string()),
            Matcher::Regex("all tests passed".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"attachment_id": 443}"#)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(&path, "all tests passed").unwrap();

    let api = common::api(&server);
    let result = api
        .attachments()
        .add_attachment_to_case(3, &path)
        .await
        .unwrap();

    assert_eq!(result, Some(json!({"attachment_id": 443})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_is_retried_with_the_same_file() {
    let mut server = common::server().await;
    let limited = server
        .mock("POST", API_PATH)
        .match_query(endpoint("add_attachment_to_run/2", &[]))
        .match_body(Matcher::Regex("log line".to_string()))
        .with_status(429)
        .with_header("retry-after", "0")
        .expect(1)
        .create_async()
        .await;
    let ok = server
        .mock("POST", API_PATH)
        .match_query(endpoint("add_attachment_to_run/2", &[]))
        .match_body(Matcher::Regex("log line".to_string()))
        .with_status(200)
        .with_body(r#"{"attachment_id": 1}"#)
        .expect(1)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("run.log");
    fs::write(&path, "log line").unwrap();

    let api = common::api(&server);
    api.attachments()
        .add_attachment_to_run(2, &path)
        .await
        .unwrap();

    limited.assert_async().await;
    ok.assert_async().await;
}

#[tokio::test]
async fn test_upload_of_missing_file_is_io_error() {
    let server = common::server().await;
    let dir = tempdir().unwrap();

    let api = common::api(&server);
    let err = api
        .attachments()
        .add_attachment_to_plan(1, dir.path().join("missing.png"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
}

#[tokio::test]
async fn test_download_writes_file() {
    let mut server = common::server().await;
    server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_attachment/5", &[]))
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(vec![0u8, 159, 146, 150])
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("screenshot.png");

    let api = common::api(&server);
    let written = api.attachments().get_attachment(5, &path).await.unwrap();

    assert_eq!(written, Some(path.clone()));
    assert_eq!(fs::read(&path).unwrap(), vec![0u8, 159, 146, 150]);
}

#[tokio::test]
async fn test_download_failure_raises_and_writes_nothing() {
    let mut server = common::server().await;
    server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_attachment/6", &[]))
        .with_status(404)
        .with_body(r#"{"error": "No attachment"}"#)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.bin");

    let api = common::api(&server);
    let err = api.attachments().get_attachment(6, &path).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_download_failure_in_exc_mode_returns_none() {
    let mut server = common::server().await;
    server
        .mock("GET", API_PATH)
        .match_query(endpoint("get_attachment/6", &[]))
        .with_status(403)
        .create_async()
        .await;

    let dir = tempdir().unwrap();
    let path = dir.path().join("denied.bin");

    let api: TestRailApi = common::builder(&server).exc(true).build().unwrap();
    let written = api.attachments().get_attachment(6, &path).await.unwrap();
    assert_eq!(written, None);
    assert!(!path.exists());
}
