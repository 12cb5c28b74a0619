/// User agent string used in HTTP requests to identify this client to the rental API
pub const USER_AGENT: &str = "rental-client/0.1.0";
/// Default base URL of the rental backend when none is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default path of the file the token pair is persisted to
pub const DEFAULT_TOKEN_FILE: &str = ".rental_tokens.json";
