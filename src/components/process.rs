//! Process trigger and progress indicator.
//!
//! The trigger is visible iff the queue is non-empty and no processing
//! request is in flight; the progress indicator is visible iff one is.
//! On success the browsing context navigates to the server's redirect
//! target and no UI restoration happens.

use leptos::*;

use crate::components::notify::{push_notice, Notice};
use crate::queue::FileQueue;
use crate::services::process_files;
use crate::types::AppError;
use crate::PROCESS_ENDPOINT;

#[component]
pub fn ProcessControls(
    queue: ReadSignal<FileQueue>,
    processing: ReadSignal<bool>,
    set_processing: WriteSignal<bool>,
    set_notices: WriteSignal<Vec<Notice>>,
) -> impl IntoView {
    let on_process = move |_| {
        // Fail fast on an empty queue; no network call.
        if queue.get_untracked().is_empty() {
            push_notice(set_notices, "Select files before processing");
            return;
        }
        if processing.get_untracked() {
            push_notice(set_notices, "Processing is already in progress");
            return;
        }

        let names = queue.get_untracked().names();
        spawn_local(async move {
            set_processing.set(true);

            match process_files(names, PROCESS_ENDPOINT).await {
                Ok(redirect) => {
                    // The page is about to be replaced; nothing to restore.
                    navigate_to(&redirect);
                }
                Err(err) => {
                    set_processing.set(false);
                    match err {
                        AppError::Network(detail) => {
                            log::error!("process transport failure: {}", detail);
                            push_notice(set_notices, "Processing failed");
                        }
                        other => push_notice(set_notices, &other.to_string()),
                    }
                }
            }
        });
    };

    view! {
        <Show
            when=move || !queue.get().is_empty() && !processing.get()
            fallback=|| view! { }
        >
            <button class="process-button" id="process-button" on:click=on_process>
                "Process files"
            </button>
        </Show>
        <Show
            when=move || processing.get()
            fallback=|| view! { }
        >
            <div class="progress" id="progress">"Processing..."</div>
        </Show>
    }
}

fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(url).is_err() {
            log::error!("navigation to {} failed", url);
        }
    }
}
