use std::io;
use testrail_client::error::AppError;

fn status_error(status: u16) -> AppError {
    AppError::StatusCode {
        status,
        reason: "Bad Request".to_string(),
        url: "https://example.testrail.io/index.php?/api/v2/get_case/1".to_string(),
        body: r#"{"error":"Field :case_id is not a valid test case."}"#.to_string(),
    }
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config { field: "url" };
    assert_eq!(error.to_string(), "configuration error: no url value set");
}

#[test]
fn test_app_error_display_status_code() {
    let text = status_error(400).to_string();
    assert!(text.contains("400"));
    assert!(text.contains("Bad Request"));
    assert!(text.contains("get_case/1"));
    assert!(text.contains("not a valid test case"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("query must be a map".to_string());
    assert_eq!(error.to_string(), "invalid input: query must be a map");
}

#[test]
fn test_app_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error"));
}

#[test]
fn test_app_error_from_io() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::Io(_)));
    assert!(error.to_string().contains("no such file"));
}

#[test]
fn test_status_accessors() {
    let error = status_error(404);
    assert_eq!(error.status(), Some(404));
    assert!(error.is_status_code());

    let error = AppError::Config { field: "email" };
    assert_eq!(error.status(), None);
    assert!(!error.is_status_code());
}
