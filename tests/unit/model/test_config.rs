use std::collections::BTreeMap;
use testrail_client::prelude::*;

fn credentials() -> Credentials {
    Credentials {
        url: "https://example.testrail.io".to_string(),
        email: "qa@example.com".to_string(),
        password: "api-key".to_string(),
    }
}

#[test]
fn test_credentials_clone() {
    let creds = credentials();
    let cloned = creds.clone();
    assert_eq!(creds, cloned);
}

#[test]
fn test_credentials_serialization_skips_password() {
    let json = serde_json::to_string(&credentials()).unwrap();
    assert!(json.contains("qa@example.com"));
    assert!(!json.contains("api-key"));

    let deserialized: Credentials = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.url, "https://example.testrail.io");
    assert_eq!(deserialized.password, "");
}

#[test]
fn test_credentials_debug_hides_password() {
    let debug = format!("{:?}", credentials());
    assert!(debug.contains("qa@example.com"));
    assert!(!debug.contains("api-key"));
}

#[test]
fn test_session_config_display_is_json() {
    let mut headers = BTreeMap::new();
    headers.insert("x-team".to_string(), "qa".to_string());
    let config = SessionConfig {
        timeout: 10,
        headers,
        ..Default::default()
    };

    let shown: Value = serde_json::from_str(&config.to_string()).unwrap();
    assert_eq!(shown["timeout"], 10);
    assert_eq!(shown["headers"]["x-team"], "qa");
    assert_eq!(shown["exc_iterations"], 3);
}

#[test]
fn test_config_display_never_leaks_password() {
    let config = Config::new(credentials(), SessionConfig::default());
    let shown = config.to_string();
    assert!(shown.contains("example.testrail.io"));
    assert!(!shown.contains("api-key"));
}

#[test]
fn test_session_config_deserialization() {
    let json = r#"{
        "timeout": 5,
        "verify": false,
        "headers": {},
        "retry": 1,
        "exc": true,
        "rate_limit": false,
        "warn_ignore": true,
        "exc_iterations": 7
    }"#;
    let config: SessionConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.timeout, 5);
    assert!(!config.verify);
    assert!(config.exc);
    assert!(!config.rate_limit);
    assert_eq!(config.exc_iterations, 7);
}
