use dioxus::prelude::*;
use shared_types::CaseRecord;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use crate::routes::home::use_home;
use crate::routes::Route;

/// `/saved-cases`
#[component]
pub fn SavedCases() -> Element {
    let home = use_home();

    rsx! {
        SavedCaseList {
            cases: home.bookmarks.read().cases.clone(),
            on_remove: home.remove_case,
        }
    }
}

/// Bookmarked cases, each with a remove action keyed by case id.
#[component]
pub fn SavedCaseList(cases: Vec<CaseRecord>, on_remove: Callback<String>) -> Element {
    rsx! {
        div { class: "saved-cases",
            PageHeader {
                PageTitle { "Saved Cases" }
            }
            if cases.is_empty() {
                Card {
                    CardContent {
                        p { "You have not bookmarked any cases." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Case" }
                        DataTableColumn { "Judge" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        for case in cases.iter() {
                            SavedCaseRow { key: "{case.id}", case: case.clone(), on_remove }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SavedCaseRow(case: CaseRecord, on_remove: Callback<String>) -> Element {
    let name = case.display_name().to_string();
    let judge = case.judge_name.clone().unwrap_or_else(|| "—".to_string());
    let nav_id = case.id.clone();
    let remove_id = case.id.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::CaseOverview { id: nav_id.clone() });
            },
            DataTableCell { "{name}" }
            DataTableCell { "{judge}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    title: format!("Remove {name} from saved cases"),
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Remove"
                }
            }
        }
    }
}
