//! Main browser component.
//!
//! The file browser view with header, file list, and path bar, all wrapped
//! in the drag-and-drop upload zone. The header swaps to the search variant
//! while search results are displayed.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{BrowserHeader, FileList, PathBar, SearchHeader, UploadZone};
use crate::app::AppContext;
use crate::core::navigation::FolderPath;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser view component.
///
/// `path` is the folder path from the routed URL. On mount the routed path
/// is reconciled with the loaded one: the first visit and external
/// navigation (back/forward, manual URL edits) trigger a listing fetch,
/// while in-app navigation that already fetched is left alone.
#[component]
pub fn Browser(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let routed = FolderPath::from_url(&path);
    let needs_load = !ctx.nav.initialized.get_untracked()
        || ctx.nav.folder_path.get_untracked() != routed;
    if needs_load {
        let url = routed.url();
        spawn_local(async move {
            ctx.load_folder(&url).await;
        });
    }

    let search_mode = Signal::derive(move || ctx.nav.is_search_mode());
    let loading = ctx.nav.loading;

    view! {
        <UploadZone>
            <div class=css::browser>
                {move || if search_mode.get() {
                    view! { <SearchHeader /> }.into_any()
                } else {
                    view! { <BrowserHeader /> }.into_any()
                }}

                <div class=css::body>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! {
                            <div class=css::loading>
                                <span class=css::spinner aria-hidden="true"></span>
                                <span>"Loading..."</span>
                            </div>
                        }
                    >
                        <FileList />
                    </Show>
                </div>

                <Show when=move || !search_mode.get()>
                    <PathBar />
                </Show>
            </div>
        </UploadZone>
    }
}
