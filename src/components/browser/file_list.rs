//! File list component for the browser view.
//!
//! Displays the current folder's entries, or search results while search
//! mode is active. Single click toggles selection; double click descends
//! into a folder (or, for a search result, jumps to its location).

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::StorageEntry;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

/// Get icon for a file/folder based on type and extension.
fn entry_icon(entry: &StorageEntry) -> IconData {
    if entry.is_dir() {
        return ic::FOLDER;
    }
    let lower = entry.name.to_lowercase();
    let ext = lower.rsplit('.').next().unwrap_or_default();
    match ext {
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" => ic::FILE_IMAGE,
        "txt" | "md" | "log" | "csv" | "json" => ic::FILE_TEXT,
        _ => ic::FILE,
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let search_mode = Signal::derive(move || ctx.nav.is_search_mode());
    let entries = Signal::derive(move || {
        if search_mode.get() {
            ctx.nav.searched_content.get()
        } else {
            ctx.nav.folder_content.get()
        }
    });
    let is_empty = Signal::derive(move || entries.with(|list| list.is_empty()));

    view! {
        <div class=css::list role="grid" aria-label="File list">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerSize>"Size"</span>
                <span class=css::headerChevron></span>
            </div>
            <For
                each=move || entries.get()
                key=|entry| entry.id()
                children=move |entry| {
                    view! { <FileListItem entry=entry /> }
                }
            />
            <Show when=move || is_empty.get()>
                <div class=css::empty>
                    {move || if search_mode.get() { "No matches" } else { "This folder is empty" }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(entry: StorageEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = entry.id();
    let is_dir = entry.is_dir();
    let icon = entry_icon(&entry);
    let size = format_size(entry.size);
    let display_name = entry.name.clone();

    let id_for_select = id.clone();
    let is_selected = Signal::derive(move || {
        ctx.selection.with(|sel| sel.is_selected(&id_for_select))
    });
    let id_for_buffer = id.clone();
    let is_buffered = Signal::derive(move || {
        ctx.selection.with(|sel| sel.is_buffered(&id_for_buffer))
    });

    // Single click: toggle selection (cut-buffered rows stay inert)
    let id_for_click = id.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_buffered.get_untracked() {
            return;
        }
        ctx.selection.update(|sel| sel.toggle(&id_for_click));
    };

    // Double click: descend into a folder; search results jump to their
    // location instead
    let entry_name = entry.name.clone();
    let parent_path = entry.path.clone();
    let handle_dblclick = move |_: leptos::ev::MouseEvent| {
        let in_search = ctx.nav.is_search_mode();
        let name = entry_name.clone();
        let parent = parent_path.clone();
        spawn_local(async move {
            if in_search {
                ctx.clear_search();
                let target = if is_dir {
                    format!("{}{}", parent, name)
                } else {
                    parent
                };
                ctx.load_folder(&target).await;
            } else if is_dir {
                ctx.go_to_folder(&name).await;
            }
        });
    };

    let item_class = move || {
        let mut class = css::listItem.to_string();
        if is_selected.get() {
            class = format!("{} {}", class, css::selected);
        }
        if is_buffered.get() {
            class = format!("{} {}", class, css::buffered);
        }
        class
    };

    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    view! {
        <div
            class=item_class
            on:click=handle_click
            on:dblclick=handle_dblclick
            role="row"
            tabindex="0"
            aria-label=aria_label
            aria-selected=move || is_selected.get()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>

            <span class=if is_dir {
                format!("{} {}", css::name, css::nameDir)
            } else {
                css::name.to_string()
            }>
                {display_name}
            </span>

            <span class=css::size>{size}</span>

            <span class=css::chevron aria-hidden="true">
                {is_dir.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
        </div>
    }
}
