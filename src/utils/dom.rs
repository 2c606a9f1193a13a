//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object. `None` outside the browser, so callers
/// degrade instead of panicking in host tests.
#[inline]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Log an informational message to the browser console.
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Log a warning to the browser console.
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Log an error to the browser console.
pub fn console_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}
