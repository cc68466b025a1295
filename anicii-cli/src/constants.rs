// ABOUTME: Centralized constants for the anicii CLI
// ABOUTME: Contains loop timings, defaults, and the external renderer invocation details

/// Default values for unset flags and config entries
pub mod defaults {
    /// Seconds between images
    pub const INTERVAL_SECS: u64 = 10;

    /// Network timeout for search and download requests
    pub const TIMEOUT_MS: u64 = 10_000;

    /// Directory name appended to the user's picture directory
    pub const OUTPUT_DIR_NAME: &str = "anicii";
}

/// Loop timing constants
pub mod timeouts {
    use std::time::Duration;

    /// Fixed cooldown before restarting the loop after any phase failure.
    /// Separate from the fetcher's internal retry backoff.
    pub const FAILURE_COOLDOWN: Duration = Duration::from_secs(5);

    /// Progress bar tick interval for smooth animation
    pub const PROGRESS_BAR_TICK_MS: u64 = 250;
}

/// External renderer invocation details
pub mod renderer {
    /// The converter binary expected on PATH
    pub const BINARY: &str = "ascii-image-converter";

    /// Always passed: crop to the terminal and ignore aspect ratio
    pub const BASE_ARGS: &[&str] = &["-c", "-b"];

    /// Added when color display is enabled
    pub const COLOR_FLAG: &str = "--colors";

    /// Added when fill display is enabled
    pub const FILL_FLAG: &str = "--fill";

    /// Where to send users who are missing the binary
    pub const INSTALL_URL: &str =
        "https://github.com/TheZoraiz/ascii-image-converter#installation";
}
