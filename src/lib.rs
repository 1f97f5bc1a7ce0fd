//! CSV Stager - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for staging batches of CSV files on a server
//! and triggering their processing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── DropZone (drag & drop / file picker → upload)          │
//! │  ├── FileList (staged names, per-entry removal)             │
//! │  ├── ProcessControls (trigger + progress)                   │
//! │  └── NoticeStack (transient errors)                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`queue`] - Staged file queue (the source of truth)
//! - [`types`] - Wire types and error handling
//! - [`components`] - UI components
//! - [`services`] - Backend communication (upload, process)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod queue;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Queue
pub use queue::{FileQueue, StagedEntry};

// Types
pub use types::{AppError, AppResult, ProcessRequest, ProcessResponse, StageResponse};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("CSV Stager - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application. Visibility of the trigger, the
    // progress indicator, and the uploading row is derived from these
    // signals, never stored on its own.
    let (queue, set_queue) = create_signal(FileQueue::new());
    let (uploading, set_uploading) = create_signal(false);
    let (processing, set_processing) = create_signal(false);
    let (notices, set_notices) = create_signal(Vec::<Notice>::new());

    view! {
        <div class="container">
            <div class="hero">
                <h1>"CSV Batch Processing"</h1>
                <p class="subtitle">
                    "Drop CSV files to stage them on the server, then process the batch."
                </p>
            </div>

            <DropZone
                set_queue=set_queue
                uploading=uploading
                set_uploading=set_uploading
                set_notices=set_notices
            />

            <FileList
                queue=queue
                set_queue=set_queue
                uploading=uploading
            />

            <ProcessControls
                queue=queue
                processing=processing
                set_processing=set_processing
                set_notices=set_notices
            />

            <NoticeStack notices=notices/>
        </div>
    }
}
