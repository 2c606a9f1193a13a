//! Hash-based routing with auth/health gating.
//!
//! URL format: `#/files/docs/2024/`, `#/login`, etc. Hash routing keeps the
//! app servable from any static prefix without server-side rewrites.

use crate::core::health::BackendHealth;

/// Application routes for hash-based navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Landing page: `#/` or empty hash.
    Index,
    /// Sign-in form: `#/login`.
    Login,
    /// Sign-up form: `#/registration`.
    Registration,
    /// File browser: `#/files` or `#/files/<path>`.
    Files {
        /// Folder path relative to the storage root (empty = root).
        path: String,
    },
    /// Maintenance view: `#/maintenance`.
    Maintenance,
    /// Anything else.
    NotFound(String),
}

impl Route {
    /// The file browser at the storage root.
    pub fn files_root() -> Self {
        Self::Files {
            path: String::new(),
        }
    }

    /// Parse a URL hash into a Route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        if path.is_empty() {
            return Self::Index;
        }

        match path {
            "login" => Self::Login,
            "registration" => Self::Registration,
            "maintenance" => Self::Maintenance,
            "files" => Self::files_root(),
            _ => {
                if let Some(rest) = path.strip_prefix("files/") {
                    Self::Files {
                        path: rest.to_string(),
                    }
                } else {
                    Self::NotFound(path.to_string())
                }
            }
        }
    }

    /// Convert a Route to its URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Index => "#/".to_string(),
            Self::Login => "#/login".to_string(),
            Self::Registration => "#/registration".to_string(),
            Self::Files { path } if path.is_empty() => "#/files".to_string(),
            Self::Files { path } => format!("#/files/{}", path),
            Self::Maintenance => "#/maintenance".to_string(),
            Self::NotFound(path) => format!("#/{}", path),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route (adds a history entry).
    ///
    /// Uses `location.hash` rather than `pushState` so the router's
    /// `hashchange` listener fires for programmatic navigation too.
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }

    /// Rewrite the URL to this route without adding a history entry.
    ///
    /// Does not fire `hashchange`; used when the rendered view has already
    /// been swapped by the gate and only the URL needs to catch up.
    pub fn replace(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&self.to_hash()));
        }
    }
}

// ============================================================================
// Gate
// ============================================================================

/// What the router should render for a route given health and auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Health probe still in flight; render the boot splash, fetch nothing.
    Booting,
    /// Backend marked dead; render the maintenance view regardless of route.
    Maintenance,
    /// Route is allowed as-is.
    Allow,
    /// Protected route while anonymous; send to the login page.
    ToLogin,
    /// Auth-only-when-anonymous route while logged in; send to the files root.
    ToFiles,
}

/// Resolve the gate for a route. Pure; the router applies the result.
pub fn resolve(route: &Route, health: BackendHealth, authenticated: bool) -> Gate {
    match health {
        BackendHealth::Checking => Gate::Booting,
        BackendHealth::Dead => Gate::Maintenance,
        BackendHealth::Alive => match route {
            Route::Files { .. } if !authenticated => Gate::ToLogin,
            Route::Login | Route::Registration if authenticated => Gate::ToFiles,
            _ => Gate::Allow,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Index);
        assert_eq!(Route::from_hash("#"), Route::Index);
        assert_eq!(Route::from_hash("#/"), Route::Index);
        assert_eq!(Route::from_hash("#/login"), Route::Login);
        assert_eq!(Route::from_hash("#/registration"), Route::Registration);
        assert_eq!(Route::from_hash("#/maintenance"), Route::Maintenance);
        assert_eq!(Route::from_hash("#/files"), Route::files_root());
        assert_eq!(
            Route::from_hash("#/files/docs/2024/"),
            Route::Files {
                path: "docs/2024/".to_string(),
            }
        );
        // "filesystem" must not match the files prefix
        assert_eq!(
            Route::from_hash("#/filesystem"),
            Route::NotFound("filesystem".to_string())
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Index.to_hash(), "#/");
        assert_eq!(Route::files_root().to_hash(), "#/files");
        assert_eq!(
            Route::Files {
                path: "docs/2024/".to_string(),
            }
            .to_hash(),
            "#/files/docs/2024/"
        );
        assert_eq!(Route::Login.to_hash(), "#/login");
    }

    #[test]
    fn test_hash_round_trip() {
        for hash in ["#/", "#/login", "#/registration", "#/files", "#/files/a/b/"] {
            assert_eq!(Route::from_hash(hash).to_hash(), hash);
        }
    }

    #[test]
    fn test_gate_checking_and_dead() {
        // While checking, nothing renders but the splash
        assert_eq!(
            resolve(&Route::files_root(), BackendHealth::Checking, true),
            Gate::Booting
        );
        // Dead backend shows maintenance on every route
        for route in [Route::Index, Route::Login, Route::files_root()] {
            assert_eq!(resolve(&route, BackendHealth::Dead, true), Gate::Maintenance);
            assert_eq!(resolve(&route, BackendHealth::Dead, false), Gate::Maintenance);
        }
    }

    #[test]
    fn test_gate_auth_redirects() {
        assert_eq!(
            resolve(&Route::files_root(), BackendHealth::Alive, false),
            Gate::ToLogin
        );
        assert_eq!(
            resolve(&Route::Login, BackendHealth::Alive, true),
            Gate::ToFiles
        );
        assert_eq!(
            resolve(&Route::Registration, BackendHealth::Alive, true),
            Gate::ToFiles
        );
        assert_eq!(
            resolve(&Route::files_root(), BackendHealth::Alive, true),
            Gate::Allow
        );
        assert_eq!(
            resolve(&Route::Index, BackendHealth::Alive, false),
            Gate::Allow
        );
    }
}
