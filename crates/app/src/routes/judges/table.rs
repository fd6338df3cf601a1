use dioxus::prelude::*;
use shared_types::JudgeRecord;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use super::judge_summary;
use crate::routes::home::TableTabs;
use crate::routes::Route;

/// Judge listing with a save-bookmark action per row.
#[component]
pub fn JudgeTable(
    show_case_table: Signal<bool>,
    judges: Vec<JudgeRecord>,
    /// Names of judges the user already bookmarked.
    saved: Vec<String>,
    on_save: Callback<JudgeRecord>,
) -> Element {
    rsx! {
        div { class: "judge-table",
            TableTabs { show_case_table }
            PageHeader {
                PageTitle { "Judges" }
            }

            if judges.is_empty() {
                Card {
                    CardContent {
                        p { "No judges loaded yet." }
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
                            JudgeRow {
                                key: "{judge.name}",
                                judge: judge.clone(),
                                saved: saved.contains(&judge.name),
                                on_save,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn JudgeRow(judge: JudgeRecord, saved: bool, on_save: Callback<JudgeRecord>) -> Element {
    let name = judge.name.clone();
    let summary = judge_summary(&judge);
    let nav_name = name.clone();
    let label = if saved { "Saved" } else { "Save" };

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::JudgePage { name: nav_name.clone() });
            },
            DataTableCell { "{name}" }
            DataTableCell { "{summary}" }
            DataTableCell {
                Button {
                    variant: if saved { ButtonVariant::Secondary } else { ButtonVariant::Primary },
                    disabled: saved,
                    onclick: move |_| on_save.call(judge.clone()),
                    "{label}"
                }
            }
        }
    }
}
