//! Unknown-route page.

use leptos::prelude::*;

use crate::models::Route;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class=css::page>
            <div class=css::card>
                <h1 class=css::title>"404"</h1>
                <p class=css::subtitle>
                    "No page at \"" {path} "\""
                </p>
                <button
                    class=css::primaryButton
                    on:click=move |_| Route::Index.push()
                >
                    "Go home"
                </button>
            </div>
        </div>
    }
}
