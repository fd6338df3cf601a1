use client::settle;
use dioxus::prelude::*;
use shared_types::CaseRecord;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, PageActions, PageHeader, PageTitle,
};

use crate::auth::use_api;
use crate::routes::home::use_home;
use crate::routes::Route;

/// `/case/:id`: fetches the case by id and shows everything the backend sent.
#[component]
pub fn CaseOverview(id: String) -> Element {
    let api = use_api();

    let data = use_resource(use_reactive!(|id| async move {
        let client = api()?;
        settle("get case", client.get_case(&id).await)
    }));

    rsx! {
        div { class: "case-overview",
            match &*data.read() {
                Some(Some(case)) => rsx! {
                    CaseOverviewView { case: case.clone() }
                },
                Some(None) => rsx! {
                    PageHeader {
                        PageTitle { "Case Not Found" }
                        PageActions {
                            Link { to: Route::Home {},
                                Button { variant: ButtonVariant::Secondary, "Back to List" }
                            }
                        }
                    }
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

#[component]
fn CaseOverviewView(case: CaseRecord) -> Element {
    let home = use_home();
    let is_saved = home.bookmarks.read().has_case(&case.id);
    let title = case.display_name().to_string();
    let rows = case.detail_rows();
    let status = case.status.clone().unwrap_or_else(|| "—".to_string());
    let case_id = case.id.clone();
    let bookmark_case = case.clone();

    rsx! {
        PageHeader {
            PageTitle { "{title}" }
            PageActions {
                if is_saved {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| home.remove_case.call(case_id.clone()),
                        "Remove Bookmark"
                    }
                } else {
                    Button {
                        onclick: move |_| home.save_case.call(bookmark_case.clone()),
                        "Bookmark"
                    }
                }
                Link { to: Route::CaseUpdate { id: case.id.clone() },
                    Button { variant: ButtonVariant::Secondary, "Update" }
                }
            }
        }
        Card {
            CardContent {
                dl { class: "detail-list",
                    dt { "Case ID" }
                    dd { "{case.id}" }
                    dt { "Judge" }
                    dd {
                        match case.judge_name.clone() {
                            Some(name) => rsx! {
                                Link { to: Route::JudgePage { name: name.clone() }, "{name}" }
                            },
                            None => rsx! { "—" },
                        }
                    }
                    dt { "Status" }
                    dd { "{status}" }
                    for (label, value) in rows {
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}
