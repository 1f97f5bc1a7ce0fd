//! Visible projection of the staged file queue.

use leptos::*;

use crate::queue::FileQueue;

/// Stateless list of staged files, one row per queue entry.
///
/// Rebuilt from the queue on every mutation; each row's remove control
/// removes exactly its own entry. The uploading placeholder renders here
/// while a staging request is in flight.
#[component]
pub fn FileList(
    queue: ReadSignal<FileQueue>,
    set_queue: WriteSignal<FileQueue>,
    uploading: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="file-list" id="file-list">
            <For
                each=move || queue.get().entries().to_vec()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class="file-item">
                            <span class="file-name">{entry.name.clone()}</span>
                            <button
                                class="remove-button"
                                on:click=move |_| set_queue.update(|queue| queue.remove_entry(id))
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                }
            />
            <Show
                when=move || uploading.get()
                fallback=|| view! { }
            >
                <div class="uploading">"Uploading..."</div>
            </Show>
        </div>
    }
}
