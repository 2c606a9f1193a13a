//! Application router component.
//!
//! Handles URL-based routing with hash history so the app can be served
//! from any static prefix without server-side rewrites. Uses native
//! hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route signal is derived
//!   from `#/path` and updated by the hashchange listener
//! - **The gate decides what renders**: health and auth state can
//!   override the routed view (boot splash, maintenance, auth redirects)
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::browser::Browser;
use crate::components::pages::{
    IndexPage, LoginPage, MaintenancePage, NotFoundPage, RegisterPage,
};
use crate::models::{Gate, Route, resolve};

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Routes:
/// - `#/` → landing page
/// - `#/login`, `#/registration` → auth forms (redirect to files when logged in)
/// - `#/files/<path>` → file browser (redirects to login when anonymous)
/// - `#/maintenance` → maintenance view
///
/// The rendered view is the routed one filtered through the health/auth
/// gate, so a dead backend or a missing session wins over the URL.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
            ctx.record_page_visit();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let gate = Memo::new(move |_| {
        let authenticated = ctx.auth.snapshot.get().is_authenticated;
        resolve(&route.get(), ctx.health.get(), authenticated)
    });

    // Keep the address bar consistent with gate redirects. replace() does
    // not fire hashchange, so this cannot loop back into the route signal.
    Effect::new(move |_| match gate.get() {
        Gate::ToLogin => Route::Login.replace(),
        Gate::ToFiles => Route::files_root().replace(),
        _ => {}
    });

    view! {
        {move || match gate.get() {
            Gate::Booting => view! { <BootSplash /> }.into_any(),
            Gate::Maintenance => view! { <MaintenancePage /> }.into_any(),
            Gate::ToLogin => view! { <LoginPage /> }.into_any(),
            Gate::ToFiles => view! { <Browser path=String::new() /> }.into_any(),
            Gate::Allow => match route.get() {
                Route::Index => view! { <IndexPage /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Registration => view! { <RegisterPage /> }.into_any(),
                Route::Files { path } => view! { <Browser path=path /> }.into_any(),
                Route::Maintenance => view! { <MaintenancePage /> }.into_any(),
                Route::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
            },
        }}
    }
}

// ============================================================================
// Boot Splash
// ============================================================================

/// Blank splash shown while the initial health probe is in flight.
/// Inline-styled so it renders before the stylesheet settles.
#[component]
fn BootSplash() -> impl IntoView {
    view! {
        <div style="display:flex;align-items:center;justify-content:center;height:100vh;color:#888;font-family:system-ui,sans-serif;">
            <span>"Connecting..."</span>
        </div>
    }
}
