use client::settle;
use dioxus::prelude::*;
use shared_types::{CaseRecord, JudgeRecord};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageActions, PageHeader,
    PageTitle,
};

use crate::auth::use_api;
use crate::routes::home::use_home;
use crate::routes::Route;

/// `/judge/:name`: fetches the judge by name with the current session.
#[component]
pub fn JudgePage(name: String) -> Element {
    let api = use_api();

    // Re-fetches when the route moves to another judge without remounting.
    let data = use_resource(use_reactive!(|name| async move {
        let client = api()?;
        settle("get judge", client.get_judge(&name).await)
    }));

    rsx! {
        div { class: "judge-page",
            match &*data.read() {
                Some(Some(judge)) => rsx! {
                    JudgeDetailView { judge: judge.clone() }
                },
                Some(None) => rsx! {
                    PageHeader {
                        PageTitle { "Judge Not Found" }
                        PageActions {
                            Link { to: Route::Home {},
                                Button { variant: ButtonVariant::Secondary, "Back to List" }
                            }
                        }
                    }
                    Card {
                        CardContent {
                            p { "No judge named {name} could be loaded." }
                        }
                    }
                },
                None => rsx! {
                    p { class: "loading", "Loading judge…" }
                },
            }
        }
    }
}

#[component]
fn JudgeDetailView(judge: JudgeRecord) -> Element {
    let home = use_home();
    let is_saved = home.bookmarks.read().has_judge(&judge.name);
    let rows = judge.detail_rows();
    let heard: Vec<CaseRecord> = home
        .cases
        .read()
        .iter()
        .filter(|c| c.judge_name.as_deref() == Some(judge.name.as_str()))
        .cloned()
        .collect();
    let remove_name = judge.name.clone();
    let bookmark_judge = judge.clone();

    rsx! {
        PageHeader {
            PageTitle { "{judge.name}" }
            PageActions {
                if is_saved {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| home.remove_judge.call(remove_name.clone()),
                        "Remove Bookmark"
                    }
                } else {
                    Button {
                        onclick: move |_| home.save_judge.call(bookmark_judge.clone()),
                        "Bookmark"
                    }
                }
            }
        }
        Card {
            CardContent {
                dl { class: "detail-list",
                    for (label, value) in rows {
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
        Card {
            CardHeader { CardTitle { "Cases" } }
            CardContent {
                if heard.is_empty() {
                    p { "No loaded cases reference this judge." }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Case" }
                            DataTableColumn { "Status" }
                        }
                        DataTableBody {
                            for case in heard.iter() {
                                JudgeCaseRow { key: "{case.id}", case: case.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn JudgeCaseRow(case: CaseRecord) -> Element {
    let name = case.display_name().to_string();
    let status = case.status.clone().unwrap_or_else(|| "—".to_string());
    let nav_id = case.id.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::CaseOverview { id: nav_id.clone() });
            },
            DataTableCell { "{name}" }
            DataTableCell { "{status}" }
        }
    }
}
