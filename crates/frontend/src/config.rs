//! Frontend configuration

/// UI-level constants
pub struct UiConfig;

impl UiConfig {
    /// How long a toast stays on screen before auto-dismissing
    pub const TOAST_AUTO_DISMISS_MS: u32 = 3_000;

    /// Backend base URL when `DING_API_URL` is not set at build time
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:5010/api";
}
