//! Drag-and-drop upload zone.
//!
//! Wraps the browser view; dragging files over it raises an overlay, and
//! dropping uploads them into the current folder. A depth counter tracks
//! dragenter/dragleave pairs so child elements do not flicker the overlay.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/upload.module.css");

fn dropped_files(ev: &leptos::ev::DragEvent) -> Vec<web_sys::File> {
    let Some(transfer) = ev.data_transfer() else {
        return Vec::new();
    };
    let Some(list) = transfer.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn UploadZone(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let drag_depth = RwSignal::new(0i32);
    let drag_active = Signal::derive(move || drag_depth.get() > 0);

    let on_dragenter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_depth.update(|depth| *depth += 1);
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };

    let on_dragleave = move |_: leptos::ev::DragEvent| {
        drag_depth.update(|depth| *depth = (*depth - 1).max(0));
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_depth.set(0);

        let files = dropped_files(&ev);
        if files.is_empty() {
            return;
        }
        spawn_local(async move {
            ctx.upload_files(files).await;
        });
    };

    view! {
        <div
            class=css::zone
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            {children()}

            <Show when=move || drag_active.get()>
                <div class=css::overlay>
                    <span class=css::overlayIcon aria-hidden="true"><Icon icon=ic::UPLOAD /></span>
                    <span class=css::overlayLabel>"Drop files to upload"</span>
                </div>
            </Show>
        </div>
    }
}
