/// Name the manual re-initialization hook is published under, matching the
/// `window.initAnalytics` binding of the upstream snippet.
pub const ENTRY_POINT_NAME: &str = "initAnalytics";

/// Diagnostic line emitted every time initialization runs.
pub const INITIALIZED_MESSAGE: &str = "[Analytics] Vercel Web Analytics initialized";

pub const ANALYTICS_LOGGER_NAME: &str = "@vercel/analytics";
