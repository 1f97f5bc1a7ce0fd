//! CSV drop zone with drag & drop and file-picker support.
//!
//! Turns raw drop or selection input into a filtered candidate batch and
//! hands it to the upload service; merges the server-confirmed names into
//! the queue on success.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::components::notify::{push_notice, Notice};
use crate::queue::FileQueue;
use crate::services::stage_files;
use crate::types::AppError;
use crate::UPLOAD_ENDPOINT;

/// Accepted filename suffix, compared case-insensitively.
const CSV_SUFFIX: &str = ".csv";

fn is_csv_name(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(CSV_SUFFIX)
}

/// Filters a raw file collection down to CSV-named entries, preserving
/// selection order. Non-matching files are silently discarded.
fn csv_files(list: &FileList) -> Vec<File> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter(|file| is_csv_name(&file.name()))
        .collect()
}

#[component]
pub fn DropZone(
    set_queue: WriteSignal<FileQueue>,
    uploading: ReadSignal<bool>,
    set_uploading: WriteSignal<bool>,
    set_notices: WriteSignal<Vec<Notice>>,
) -> impl IntoView {
    let (dragging, set_dragging) = create_signal(false);

    // Shared by the drop and file-picker paths. The empty batch still
    // goes out; the server decides whether it is valid.
    let submit = move |files: Vec<File>| {
        if uploading.get_untracked() {
            push_notice(set_notices, "An upload is already in progress");
            return;
        }

        spawn_local(async move {
            set_uploading.set(true);
            let outcome = stage_files(files, UPLOAD_ENDPOINT).await;
            // The uploading row comes down before any other visible effect.
            set_uploading.set(false);

            match outcome {
                Ok(names) => set_queue.update(|queue| queue.append(names)),
                Err(AppError::Network(detail)) => {
                    log::error!("upload transport failure: {}", detail);
                    push_notice(set_notices, "Upload failed");
                }
                Err(err) => push_notice(set_notices, &err.to_string()),
            }
        });
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        if let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) {
            submit(csv_files(&files));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            submit(csv_files(&files));
        }
    };

    // Clicking anywhere on the zone opens the picker.
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("file-input") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div
            class="drop-zone"
            class:dragover=move || dragging.get()
            id="drop-zone"
            on:click=trigger_file_input
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <div class="drop-zone-text">"Drag CSV files here"</div>
            <div class="drop-zone-hint">"or click to select files"</div>
            <input
                type="file"
                id="file-input"
                accept=".csv"
                multiple=true
                style="display:none"
                on:change=on_file_change
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_suffix_matches_case_insensitively() {
        assert!(is_csv_name("report.csv"));
        assert!(is_csv_name("REPORT.CSV"));
        assert!(is_csv_name("Campaign Data.Csv"));
    }

    #[test]
    fn non_csv_names_are_rejected() {
        assert!(!is_csv_name("notes.txt"));
        assert!(!is_csv_name("csv"));
        assert!(!is_csv_name("archive.csv.bak"));
        assert!(!is_csv_name("table.tsv"));
    }
}
