use client::settle;
use dioxus::prelude::*;
use shared_types::CaseRecord;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, PageActions, PageHeader, PageTitle,
};

use crate::auth::use_api;
use crate::routes::home::use_home;
use crate::routes::Route;

/// `/case/:id/update`: edit a case's name and status.
#[component]
pub fn CaseUpdate(id: String) -> Element {
    let api = use_api();

    let data = use_resource(use_reactive!(|id| async move {
        let client = api()?;
        settle("get case", client.get_case(&id).await)
    }));

    rsx! {
        div { class: "case-update",
            match &*data.read() {
                Some(Some(case)) => rsx! {
                    CaseUpdateForm { key: "{case.id}", case: case.clone() }
                },
                Some(None) => rsx! {
                    Card {
                        CardContent {
                            p { "The case {id} could not be loaded." }
                        }
                    }
                },
                None => rsx! {
                    p { class: "loading", "Loading case…" }
                },
            }
        }
    }
}

/// Apply the edited fields to a copy of the loaded case. A blank status
/// clears it.
fn apply_edits(case: &CaseRecord, name: &str, status: &str) -> CaseRecord {
    let mut updated = case.clone();
    updated.name = name.trim().to_string();
    updated.status = Some(status.trim().to_string()).filter(|s| !s.is_empty());
    updated
}

/// Swap the stored copy of `updated` for the new one. Returns whether a
/// case with that id was present.
fn store_update(cases: &mut [CaseRecord], updated: &CaseRecord) -> bool {
    match cases.iter_mut().find(|c| c.id == updated.id) {
        Some(slot) => {
            *slot = updated.clone();
            true
        }
        None => false,
    }
}

#[component]
fn CaseUpdateForm(case: CaseRecord) -> Element {
    let api = use_api();
    let mut home = use_home();
    let mut name = use_signal(|| case.name.clone());
    let mut status = use_signal(|| case.status.clone().unwrap_or_default());
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| None::<String>);

    let title = case.display_name().to_string();
    let original = case.clone();
    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let updated = apply_edits(&original, &name.read(), &status.read());
        let Some(client) = api.peek().clone() else { return };
        spawn(async move {
            saving.set(true);
            error_msg.set(None);
            match client.update_case(&updated).await {
                Ok(()) => {
                    store_update(&mut home.cases.write(), &updated);
                    store_update(&mut home.bookmarks.write().cases, &updated);
                    navigator().push(Route::CaseOverview { id: updated.id.clone() });
                }
                Err(err) => {
                    tracing::warn!(error = %err, case_id = %updated.id, "Case update failed");
                    error_msg.set(Some(err.message));
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Update {title}" }
            PageActions {
                Link { to: Route::CaseOverview { id: case.id.clone() },
                    Button { variant: ButtonVariant::Secondary, "Cancel" }
                }
            }
        }
        Card {
            CardContent {
                form { onsubmit: handle_submit,
                    div { class: "form-group",
                        label { r#for: "case-name", "Name" }
                        input {
                            id: "case-name",
                            value: "{name}",
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "case-status", "Status" }
                        input {
                            id: "case-status",
                            value: "{status}",
                            oninput: move |evt: FormEvent| status.set(evt.value()),
                        }
                    }
                    if let Some(msg) = error_msg() {
                        p { class: "form-error", "{msg}" }
                    }
                    button {
                        class: "button",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving…" } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
