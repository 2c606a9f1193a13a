//! Landing page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn IndexPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let authenticated =
        Signal::derive(move || ctx.auth.snapshot.get().is_authenticated);

    view! {
        <div class=css::page>
            <div class=css::card>
                <span class=css::cardIcon aria-hidden="true"><Icon icon=ic::BRAND /></span>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::subtitle>"Your files, in one place."</p>

                <div class=css::buttonRow>
                    <Show
                        when=move || authenticated.get()
                        fallback=|| view! {
                            <button
                                class=css::primaryButton
                                on:click=move |_| Route::Login.push()
                            >
                                "Sign in"
                            </button>
                            <button
                                class=css::secondaryButton
                                on:click=move |_| Route::Registration.push()
                            >
                                "Create account"
                            </button>
                        }
                    >
                        <button
                            class=css::primaryButton
                            on:click=move |_| Route::files_root().push()
                        >
                            "Browse files"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
