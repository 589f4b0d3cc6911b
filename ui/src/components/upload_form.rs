use std::sync::Arc;

use dioxus::html::HasFileData;
use dioxus::logger::tracing::warn;
use dioxus::prelude::dioxus_elements::FileEngine;
use dioxus::prelude::*;

use crate::core::client::{ApiClient, UploadPayload, UPLOAD_PATH};

/// File staged for upload, whether it arrived via the picker or a drop.
#[derive(Debug, Clone, PartialEq)]
struct StagedFile {
    name: String,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum UploadStatus {
    #[default]
    Idle,
    Sending,
    Accepted,
    Failed(String),
}

/// Upload form for new input files.
///
/// Submission is intercepted: the fields go out as one multipart request to
/// the form's declared action, with no page reload. A successful submission
/// clears the form back to its defaults; a failed one keeps the staged file
/// and surfaces an inline error so the user can resubmit. The dropzone lets
/// a dragged file stand in for the OS picker.
#[component]
pub fn UploadForm(
    #[props(default = UPLOAD_PATH.to_string())] action: String,
    #[props(default = "post".to_string())] method: String,
) -> Element {
    let mut staged = use_signal(|| Option::<StagedFile>::None);
    let mut save = use_signal(|| false);
    let mut drag_active = use_signal(|| false);
    let mut status = use_signal(UploadStatus::default);
    // Bumped after a successful submit so the file input remounts empty.
    let mut input_generation = use_signal(|| 0u32);

    let submit_action = action.clone();
    let submit_method = method.clone();

    let dropzone_class = if drag_active() {
        "upload-form__dropzone upload-form__dropzone--active"
    } else {
        "upload-form__dropzone"
    };

    rsx! {
        form { class: "upload-form",
            action: "{action}",
            method: "{method}",
            onsubmit: move |evt| {
                evt.prevent_default();

                let Some(file) = staged() else {
                    status.set(UploadStatus::Failed("Pick or drop a file first.".into()));
                    return;
                };

                let client = ApiClient::default();
                let action = submit_action.clone();
                let method = submit_method.clone();
                let payload = UploadPayload {
                    file_name: file.name,
                    bytes: file.bytes,
                    save: save(),
                };

                status.set(UploadStatus::Sending);
                spawn(async move {
                    match client.upload(&action, &method, payload).await {
                        Ok(()) => {
                            staged.set(None);
                            save.set(false);
                            input_generation += 1;
                            status.set(UploadStatus::Accepted);
                        }
                        Err(err) => {
                            status.set(UploadStatus::Failed(format!("Upload failed: {err}")));
                        }
                    }
                });
            },

            h2 { "Upload subscription data" }

            div { class: "{dropzone_class}",
                ondragover: move |evt| {
                    evt.prevent_default();
                    drag_active.set(true);
                },
                ondragleave: move |_| drag_active.set(false),
                ondrop: move |evt| async move {
                    evt.prevent_default();
                    drag_active.set(false);
                    if let Some(file_engine) = evt.files() {
                        stage_first_file(file_engine, staged).await;
                    }
                },

                if let Some(file) = staged() {
                    p { class: "upload-form__file", "{file.name}" }
                } else {
                    p { class: "upload-form__hint", "Drag a CSV export here, or pick one below." }
                }

                input {
                    key: "{input_generation}",
                    r#type: "file",
                    accept: ".csv",
                    onchange: move |evt| async move {
                        if let Some(file_engine) = evt.files() {
                            stage_first_file(file_engine, staged).await;
                        }
                    },
                }
            }

            label { class: "upload-form__save",
                input {
                    r#type: "checkbox",
                    checked: save(),
                    onchange: move |evt| save.set(evt.checked()),
                }
                "Keep the raw input file on the server"
            }

            button {
                r#type: "submit",
                disabled: status() == UploadStatus::Sending,
                "Upload"
            }

            match status() {
                UploadStatus::Idle => rsx! {},
                UploadStatus::Sending => rsx! {
                    p { class: "upload-form__status", "Uploading…" }
                },
                UploadStatus::Accepted => rsx! {
                    p { class: "upload-form__status upload-form__status--ok", "Upload accepted." }
                },
                UploadStatus::Failed(message) => rsx! {
                    p { class: "upload-form__status upload-form__status--error", "{message}" }
                },
            }
        }
    }
}

/// Stages the first file of a picked or dropped set. Only one input file is
/// submitted per run, so any extra entries in the set are ignored.
async fn stage_first_file(file_engine: Arc<dyn FileEngine>, mut staged: Signal<Option<StagedFile>>) {
    let Some(name) = file_engine.files().first().cloned() else {
        return;
    };

    match file_engine.read_file(&name).await {
        Some(bytes) => staged.set(Some(StagedFile { name, bytes })),
        None => warn!("could not read staged file {name}"),
    }
}
