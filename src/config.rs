//! Application configuration.
//!
//! Centralizes API endpoints, timeouts, and persisted-state keys.
//! Deployment settings (base path, mock mode) are read from the build
//! environment, so the same bundle can be served under different prefixes.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header and page titles.
pub const APP_NAME: &str = "Cumulus";

// =============================================================================
// API Endpoints
// =============================================================================

/// Liveness probe.
pub const API_HEALTH: &str = "/api/health";

/// Current user for session checks (credentialed).
pub const API_USER_INFO: &str = "/api/user/info";

/// Folder listing (credentialed), `?path=`.
pub const API_DIRECTORY: &str = "/api/directory";

/// Resource upload/delete, `?path=`.
pub const API_RESOURCE: &str = "/api/resource";

/// Resource move/rename, `?from=&to=`.
pub const API_RESOURCE_MOVE: &str = "/api/resource/move";

/// Resource search, `?query=`.
pub const API_RESOURCE_SEARCH: &str = "/api/resource/search";

pub const API_SIGN_IN: &str = "/api/auth/sign-in";
pub const API_SIGN_UP: &str = "/api/auth/sign-up";
pub const API_SIGN_OUT: &str = "/api/auth/sign-out";

// =============================================================================
// Network Configuration
// =============================================================================

/// Health probe timeout in milliseconds; the request is aborted past this.
pub const HEALTH_TIMEOUT_MS: u32 = 5_000;

/// Simulated latency for mocked API calls in milliseconds.
pub const MOCK_LATENCY_MS: u32 = 300;

// =============================================================================
// Session Configuration
// =============================================================================

/// Revalidate the server session every N route changes, not on each one.
pub const REVALIDATE_EVERY_N_VISITS: u32 = 3;

/// localStorage key for the persisted authentication flag.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

/// localStorage key for the persisted user JSON.
pub const AUTH_USER_KEY: &str = "user";

/// localStorage key for the revalidation visit counter.
pub const PAGE_VISITS_KEY: &str = "pageVisits";

// =============================================================================
// Notifications
// =============================================================================

/// Toast auto-dismiss delay in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 4_000;

/// Shown when the session check fails after the user was logged in.
pub const SESSION_EXPIRED_MSG: &str = "Session is expired! Please login again";

/// Generic message for folder-load failures without a server detail.
pub const FOLDER_LOAD_ERROR_MSG: &str = "Could not load folder contents. Please try again later";

// =============================================================================
// Build Environment
// =============================================================================

/// Serve canned API responses instead of hitting the network.
/// Set `CUMULUS_MOCK_API=1` at build time to enable.
pub const MOCK_API: bool = option_env!("CUMULUS_MOCK_API").is_some();

/// Base path the app is served under (empty for the site root).
pub fn base_path() -> &'static str {
    option_env!("CUMULUS_BASE").unwrap_or("")
}

/// Prefix an API route with the configured base path.
pub fn api_url(route: &str) -> String {
    format!("{}{}", base_path(), route)
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
