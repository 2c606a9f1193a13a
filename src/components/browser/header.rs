//! Browser header components.
//!
//! [`BrowserHeader`] carries the brand, the search form, and the action
//! buttons (cut, paste, delete, sign out). [`SearchHeader`] replaces it
//! while search results are shown.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Default browser header with search form and action buttons.
#[component]
pub fn BrowserHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let query = RwSignal::new(String::new());

    let has_selection = Signal::derive(move || ctx.selection.with(|sel| sel.has_selection()));
    let cut_pending = Signal::derive(move || ctx.selection.with(|sel| sel.cut_mode));
    let username = Signal::derive(move || {
        ctx.auth
            .snapshot
            .with(|auth| auth.user.as_ref().map(|u| u.username.clone()))
            .unwrap_or_default()
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        spawn_local(async move {
            ctx.run_search(&text).await;
        });
    };

    let on_cut = move |_: leptos::ev::MouseEvent| {
        ctx.start_cut();
    };

    let on_paste = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            ctx.paste().await;
        });
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            ctx.delete_selected().await;
        });
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            ctx.sign_out().await;
        });
    };

    view! {
        <header class=css::header>
            <div class=css::brand>
                <span class=css::brandIcon aria-hidden="true"><Icon icon=ic::BRAND /></span>
                <span class=css::brandLabel>{APP_NAME}</span>
            </div>

            <form class=css::searchForm on:submit=on_search>
                <input
                    class=css::searchInput
                    type="text"
                    placeholder="Search files"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class=css::actionButton type="submit" title="Search">
                    <Icon icon=ic::SEARCH />
                </button>
            </form>

            <div class=css::actionButtons>
                <button
                    class=move || action_button_class(!has_selection.get())
                    on:click=on_cut
                    disabled=move || !has_selection.get()
                    title="Cut selection"
                >
                    <Icon icon=ic::CUT />
                </button>
                <Show when=move || cut_pending.get()>
                    <button class=css::actionButton on:click=on_paste title="Paste here">
                        <Icon icon=ic::PASTE />
                    </button>
                </Show>
                <button
                    class=move || action_button_class(!has_selection.get())
                    on:click=on_delete
                    disabled=move || !has_selection.get()
                    title="Delete selection"
                >
                    <Icon icon=ic::DELETE />
                </button>

                <span class=css::user title="Signed in as">
                    <Icon icon=ic::USER />
                    <span class=css::userLabel>{move || username.get()}</span>
                </span>
                <button class=css::actionButton on:click=on_logout title="Sign out">
                    <Icon icon=ic::LOGOUT />
                </button>
            </div>
        </header>
    }
}

/// Header variant shown over search results.
#[component]
pub fn SearchHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let query = Signal::derive(move || ctx.nav.search_name.get());

    let on_close = move |_: leptos::ev::MouseEvent| {
        ctx.clear_search();
    };

    view! {
        <header class=css::header>
            <div class=css::brand>
                <span class=css::brandIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                <span class=css::brandLabel>
                    "Results for \"" {move || query.get()} "\""
                </span>
            </div>

            <div class=css::actionButtons>
                <button class=css::actionButton on:click=on_close title="Back to folder">
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </header>
    }
}

fn action_button_class(disabled: bool) -> String {
    if disabled {
        format!("{} {}", css::actionButton, css::actionButtonDisabled)
    } else {
        css::actionButton.to_string()
    }
}
