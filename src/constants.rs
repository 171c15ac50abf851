/// Route appended to the TestRail base URL for every API call
pub const API_PREFIX: &str = "/index.php?/api/v2/";
/// Environment variable holding the TestRail base URL
pub const ENV_URL: &str = "TESTRAIL_URL";
/// Environment variable holding the account email
pub const ENV_EMAIL: &str = "TESTRAIL_EMAIL";
/// Environment variable holding the account password or API key
pub const ENV_PASSWORD: &str = "TESTRAIL_PASSWORD";
/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Seconds to wait after a 429 response that carries no `retry-after` header
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 3;
/// Default upper bound on attempts per call
pub const DEFAULT_EXC_ITERATIONS: u32 = 3;
/// HTTP status used by TestRail to signal rate limiting
pub const RATE_LIMIT_STATUS_CODE: u16 = 429;
/// Largest page TestRail returns for paged list endpoints
pub const PAGE_MAX: u32 = 250;
/// Endpoint prefix of multipart upload calls; these skip the JSON content type
pub const ATTACHMENT_UPLOAD_PREFIX: &str = "add_attachment";
/// Multipart field name TestRail expects for uploaded files
pub const ATTACHMENT_FIELD: &str = "attachment";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("testrail-client/", env!("CARGO_PKG_VERSION"));
