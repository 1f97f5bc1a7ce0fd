//! UI Components for the CSV Stager application.
//!
//! This module contains all Leptos components organized by function:
//!
//! - [`DropZone`] - drag & drop surface and file picker
//! - [`FileList`] - staged file list with per-entry removal
//! - [`ProcessControls`] - process trigger and progress indicator
//! - [`NoticeStack`] - transient error notices

mod drop_zone;
mod file_list;
mod notify;
mod process;

pub use drop_zone::*;
pub use file_list::*;
pub use notify::*;
pub use process::*;
