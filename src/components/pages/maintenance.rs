//! Maintenance page, shown while the backend is unreachable.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::health::BackendHealth;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn MaintenancePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let probing = RwSignal::new(false);

    let on_retry = move |_: leptos::ev::MouseEvent| {
        if probing.get_untracked() {
            return;
        }
        probing.set(true);
        spawn_local(async move {
            ctx.bootstrap().await;
            probing.set(false);
            if ctx.health.current() != BackendHealth::Alive {
                ctx.toasts.warn("Still unreachable. Please try again later");
            }
        });
    };

    view! {
        <div class=css::page>
            <div class=css::card>
                <span class=css::cardIcon aria-hidden="true"><Icon icon=ic::MAINTENANCE /></span>
                <h1 class=css::title>"503"</h1>
                <p class=css::subtitle>
                    "The server is under maintenance. Please check back soon."
                </p>

                <button
                    class=css::primaryButton
                    on:click=on_retry
                    disabled=move || probing.get()
                >
                    {move || if probing.get() { "Checking..." } else { "Check again" }}
                </button>
            </div>
        </div>
    }
}
