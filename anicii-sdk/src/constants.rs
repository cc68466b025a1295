// ABOUTME: Centralized constants for the anicii SDK
// ABOUTME: Contains retry configuration, timeouts, and image source URLs

/// Retry configuration constants
pub mod retry {
    use std::time::Duration;

    /// Maximum number of search attempts per fetch
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Delay after the first failed attempt
    pub const INITIAL_DELAY: Duration = Duration::from_millis(1000);

    /// Cap on the delay between attempts
    pub const MAX_DELAY: Duration = Duration::from_millis(10_000);
}

/// HTTP and request timeouts
pub mod timeouts {
    /// Default timeout for search and download requests
    pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
}

/// Image source API details
pub mod api {
    /// Base URL for the image search API
    pub const SEARCH_BASE: &str = "https://api.waifu.im";

    /// Search endpoint path
    pub const SEARCH_PATH: &str = "/search";

    /// Only request images at least this tall
    pub const MIN_HEIGHT: u32 = 2000;

    /// User agent sent with every request
    pub const USER_AGENT: &str = "anicii/0.1.0";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_retry_constants() {
        assert_eq!(retry::MAX_ATTEMPTS, 3);
        assert_eq!(retry::INITIAL_DELAY, Duration::from_millis(1000));
        assert_eq!(retry::MAX_DELAY, Duration::from_millis(10_000));
    }

    #[test]
    fn test_api_constants() {
        assert!(api::SEARCH_BASE.starts_with("https://"));
        assert!(api::SEARCH_PATH.starts_with('/'));
        assert_eq!(api::MIN_HEIGHT, 2000);
    }
}
