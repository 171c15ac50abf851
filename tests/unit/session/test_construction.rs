use crate::common::CapturedLogs;
use std::env;
use testrail_client::prelude::*;
use tracing::Level;

const HTTP_WARNING: &str = "Using HTTP and not HTTPS";

fn build_with_logs(url: &str, warn_ignore: bool) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        Session::builder()
            .url(url)
            .email("user@example.com")
            .password("key")
            .warn_ignore(warn_ignore)
            .build()
            .unwrap();
    });
    logs.contents()
}

#[test]
fn test_http_url_warns_once() {
    let logs = build_with_logs("http://testrail.local", false);
    assert_eq!(logs.matches(HTTP_WARNING).count(), 1);
}

#[test]
fn test_http_warning_can_be_ignored() {
    let logs = build_with_logs("http://testrail.local", true);
    assert_eq!(logs.matches(HTTP_WARNING).count(), 0);
}

#[test]
fn test_https_url_does_not_warn() {
    let logs = build_with_logs("https://testrail.local", false);
    assert_eq!(logs.matches(HTTP_WARNING).count(), 0);
}

#[test]
fn test_user_email_and_config_accessors() {
    let api: TestRailApi = TestRailApi::builder()
        .url("https://example.testrail.io")
        .email("qa@example.com")
        .password("key")
        .timeout(5)
        .verify(false)
        .build()
        .unwrap();

    assert_eq!(api.user_email(), "qa@example.com");
    assert_eq!(api.session().config().timeout, 5);
    assert!(!api.session().config().verify);
}

#[test]
fn test_session_from_config() {
    let config = Config::new(
        Credentials {
            url: "https://example.testrail.io/".to_string(),
            email: "qa@example.com".to_string(),
            password: "key".to_string(),
        },
        SessionConfig {
            exc: true,
            ..Default::default()
        },
    );
    let session = Session::new(config).unwrap();
    assert_eq!(
        session.base_url(),
        "https://example.testrail.io/index.php?/api/v2/"
    );
    assert!(session.config().exc);
}

// Every test touching TESTRAIL_* variables lives here so they never race
#[test]
fn test_credentials_and_options_from_environment() {
    unsafe {
        env::remove_var("TESTRAIL_URL");
        env::remove_var("TESTRAIL_EMAIL");
        env::remove_var("TESTRAIL_PASSWORD");
    }

    let err = Session::builder().build().unwrap_err();
    assert!(matches!(err, AppError::Config { field: "url" }));
    assert!(err.to_string().contains("url"));

    let err = Session::builder()
        .url("https://example.testrail.io")
        .build()
        .unwrap_err();
    assert!(matches!(err, AppError::Config { field: "email" }));

    let err = Session::builder()
        .url("https://example.testrail.io")
        .email("qa@example.com")
        .password("")
        .build()
        .unwrap_err();
    assert!(matches!(err, AppError::Config { field: "password" }));

    unsafe {
        env::set_var("TESTRAIL_URL", "https://env.testrail.io/");
        env::set_var("TESTRAIL_EMAIL", "env@example.com");
        env::set_var("TESTRAIL_PASSWORD", "env-key");
        env::set_var("TESTRAIL_TIMEOUT", "12");
        env::set_var("TESTRAIL_EXC", "true");
        env::set_var("TESTRAIL_EXC_ITERATIONS", "not-a-number");
    }

    let session = Session::builder().build().unwrap();
    assert_eq!(session.user_email(), "env@example.com");
    assert_eq!(
        session.base_url(),
        "https://env.testrail.io/index.php?/api/v2/"
    );

    let explicit = Session::builder()
        .email("explicit@example.com")
        .build()
        .unwrap();
    assert_eq!(explicit.user_email(), "explicit@example.com");

    let options = SessionConfig::from_env();
    assert_eq!(options.timeout, 12);
    assert!(options.exc);
    assert_eq!(options.exc_iterations, 3);

    let from_env = Session::from_env().unwrap();
    assert_eq!(from_env.config().timeout, 12);

    unsafe {
        env::remove_var("TESTRAIL_URL");
        env::remove_var("TESTRAIL_EMAIL");
        env::remove_var("TESTRAIL_PASSWORD");
        env::remove_var("TESTRAIL_TIMEOUT");
        env::remove_var("TESTRAIL_EXC");
        env::remove_var("TESTRAIL_EXC_ITERATIONS");
    }
}
