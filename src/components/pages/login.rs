//! Sign-in page.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let user = username.get_untracked().trim().to_string();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() {
            ctx.toasts.warn("Username and password are required");
            return;
        }

        pending.set(true);
        spawn_local(async move {
            ctx.sign_in(user, pass).await;
            pending.set(false);
        });
    };

    view! {
        <div class=css::page>
            <form class=css::card on:submit=on_submit>
                <span class=css::cardIcon aria-hidden="true"><Icon icon=ic::BRAND /></span>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::subtitle>"Sign in to continue"</p>

                <input
                    class=css::input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class=css::input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />

                <button
                    class=css::primaryButton
                    type="submit"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class=css::hint>
                    "No account yet? "
                    <a
                        class=css::link
                        href="#/registration"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            Route::Registration.push();
                        }
                    >
                        "Create one"
                    </a>
                </p>
            </form>
        </div>
    }
}
