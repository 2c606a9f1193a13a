//! Toast notification host.
//!
//! Renders the toast stack in a fixed corner overlay. Toasts are pushed by
//! [`crate::app::ToastState`] and auto-dismiss; the close button dismisses
//! early.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, ToastLevel};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/notifications.module.css");

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::host aria-live="polite">
            <For
                each=move || ctx.toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let level_class = match toast.level {
                        ToastLevel::Info => css::info,
                        ToastLevel::Warn => css::warn,
                        ToastLevel::Error => css::error,
                    };
                    view! {
                        <div class=format!("{} {}", css::toast, level_class) role="status">
                            <span class=css::message>{toast.message.clone()}</span>
                            <button
                                class=css::close
                                on:click=move |_| ctx.toasts.dismiss(id)
                                title="Dismiss"
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
