//! Endpoint paths and transport limits for the FavQs API.
use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://favqs.com/api";
/// Session creation endpoint.
pub const SESSION_PATH: &str = "session";
/// Quote of the day endpoint.
pub const QOTD_PATH: &str = "qotd";
/// Quote listing endpoint.
pub const QUOTES_PATH: &str = "quotes";

/// Header carrying the server-issued user token.
pub const USER_TOKEN_HEADER: &str = "user-token";

/// Connect and overall request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Idle connections kept per host.
pub const POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Join an endpoint path onto a base URL, tolerating a trailing slash on the base.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
