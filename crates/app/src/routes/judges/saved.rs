use dioxus::prelude::*;
use shared_types::JudgeRecord;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use super::judge_summary;
use crate::routes::home::use_home;
use crate::routes::Route;

/// `/saved-judges`
#[component]
pub fn SavedJudges() -> Element {
    let home = use_home();

    rsx! {
        SavedJudgeList {
            judges: home.bookmarks.read().judges.clone(),
            on_remove: home.remove_judge,
        }
    }
}

/// Bookmarked judges, each with a remove action keyed by judge name.
#[component]
pub fn SavedJudgeList(judges: Vec<JudgeRecord>, on_remove: Callback<String>) -> Element {
    rsx! {
        div { class: "saved-judges",
            PageHeader {
                PageTitle { "Saved Judges" }
            }
            if judges.is_empty() {
                Card {
                    CardContent {
                        p { "You have not bookmarked any judges." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Details" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        for judge in judges.iter() {
                            SavedJudgeRow { key: "{judge.name}", judge: judge.clone(), on_remove }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SavedJudgeRow(judge: JudgeRecord, on_remove: Callback<String>) -> Element {
    let name = judge.name.clone();
    let summary = judge_summary(&judge);
    let nav_name = name.clone();
    let remove_name = name.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::JudgePage { name: nav_name.clone() });
            },
            DataTableCell { "{name}" }
            DataTableCell { "{summary}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    title: format!("Remove {name} from saved judges"),
                    onclick: move |_| on_remove.call(remove_name.clone()),
                    "Remove"
                }
            }
        }
    }
}
