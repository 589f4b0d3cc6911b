//! Shared UI crate for ReportDeck. The portable dashboard logic and views
//! live here; platform crates only bootstrap them.

pub mod core;
pub mod views;

pub mod components {
    // Upload form with drag-and-drop staging (components/upload_form.rs)
    pub mod upload_form;
    pub use upload_form::UploadForm;
}
