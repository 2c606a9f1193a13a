//! Path bar component.
//!
//! Back button plus clickable breadcrumb segments for the current folder
//! path, displayed at the bottom of the browser.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/browser/pathbar.module.css");

/// Path bar with back navigation and breadcrumbs.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_root = Signal::derive(move || ctx.nav.folder_path.with(|path| path.is_root()));

    let on_back = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            ctx.go_to_prev_folder().await;
        });
    };

    view! {
        <nav class=css::pathbar>
            <button
                class=move || back_button_class(is_root.get())
                on:click=on_back
                disabled=move || is_root.get()
                title="Go to parent folder"
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            {move || {
                let path = ctx.nav.folder_path.get();
                let depth = path.depth();

                path.segments()
                    .iter()
                    .enumerate()
                    .map(|(idx, segment)| {
                        let is_last = idx + 1 == depth;
                        let label = if idx == 0 {
                            "Home".to_string()
                        } else {
                            segment.trim_end_matches('/').to_string()
                        };
                        let icon = if idx == 0 { ic::HOME } else { ic::FOLDER };
                        let target = (!is_last).then(|| path.truncated(idx + 1).url());

                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator aria-hidden="true">
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                {match target {
                                    Some(url) => view! {
                                        <SegmentLink
                                            icon=icon
                                            label=label
                                            on_click=move || {
                                                let url = url.clone();
                                                spawn_local(async move {
                                                    ctx.load_folder(&url).await;
                                                });
                                            }
                                        />
                                    }.into_any(),
                                    None => view! {
                                        <SegmentCurrent icon=icon label=label />
                                    }.into_any(),
                                }}
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

fn back_button_class(disabled: bool) -> String {
    if disabled {
        format!("{} {}", css::backButton, css::backButtonDisabled)
    } else {
        css::backButton.to_string()
    }
}

/// Clickable path segment.
#[component]
fn SegmentLink<F>(icon: icondata::Icon, label: String, on_click: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            class=css::segment
            on:click=move |_| on_click()
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}

/// Current (disabled) path segment.
#[component]
fn SegmentCurrent(icon: icondata::Icon, label: String) -> impl IntoView {
    view! {
        <button class=format!("{} {}", css::segment, css::segmentCurrent) disabled=true>
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
