use dioxus::prelude::*;
use shared_ui::components::{Button, Card, CardContent, PageHeader, PageTitle};

use super::home::use_home;

/// A document picked in the upload form.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Progress of the most recent upload.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    Idle,
    Uploading(String),
    Done(String),
    Failed(String),
}

impl UploadStatus {
    /// CSS class and text for the status line; `None` when idle.
    fn message(&self) -> Option<(&'static str, String)> {
        match self {
            UploadStatus::Idle => None,
            UploadStatus::Uploading(name) => Some(("form-status", format!("Uploading {name}…"))),
            UploadStatus::Done(name) => Some(("form-success", format!("{name} uploaded."))),
            UploadStatus::Failed(reason) => Some(("form-error", format!("Upload failed: {reason}"))),
        }
    }

    fn is_uploading(&self) -> bool {
        matches!(self, UploadStatus::Uploading(_))
    }
}

/// `/upload-case`
#[component]
pub fn UploadCase() -> Element {
    let home = use_home();

    rsx! {
        UploadForm {
            status: home.upload_status.read().clone(),
            on_upload: home.upload,
        }
    }
}

/// File picker that hands the chosen document to `on_upload`.
#[component]
pub fn UploadForm(status: UploadStatus, on_upload: Callback<UploadedFile>) -> Element {
    let mut selected = use_signal(|| None::<UploadedFile>);
    let mut read_error = use_signal(|| None::<String>);

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        if let Some(f) = files.first() {
            let name = f.name();
            match f.read_bytes().await {
                Ok(bytes) => {
                    read_error.set(None);
                    selected.set(Some(UploadedFile {
                        name,
                        bytes: bytes.to_vec(),
                    }));
                }
                Err(_) => {
                    read_error.set(Some("Failed to read file.".to_string()));
                }
            }
        }
    };

    let uploading = status.is_uploading();
    let chosen = selected.read().as_ref().map(|f| (f.name.clone(), f.bytes.len()));

    rsx! {
        PageHeader {
            PageTitle { "Upload Case" }
        }
        Card {
            CardContent {
                form {
                    onchange: handle_file,
                    div { class: "form-group",
                        label { r#for: "case-file", "Case document (PDF)" }
                        input {
                            id: "case-file",
                            r#type: "file",
                            accept: ".pdf",
                            disabled: uploading,
                        }
                    }
                }
                if let Some((name, size)) = chosen {
                    p { "{name} ({size} bytes)" }
                }
                if let Some(msg) = read_error() {
                    p { class: "form-error", "{msg}" }
                }
                if let Some((class, text)) = status.message() {
                    p { class, "{text}" }
                }
                Button {
                    disabled: uploading || selected.read().is_none(),
                    onclick: move |_| {
                        if let Some(file) = selected() {
                            on_upload.call(file);
                        }
                    },
                    "Upload"
                }
            }
        }
    }
}
