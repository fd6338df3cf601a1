use client::Selection;
use dioxus::prelude::*;
use shared_types::CaseRecord;
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableCheckbox, DataTableColumn, DataTableHeader, DataTableRow, DataTableSelectAll,
    PageActions, PageHeader, PageTitle,
};

use crate::routes::home::TableTabs;
use crate::routes::Route;

/// Case listing with row selection and a save-bookmark action per row.
#[component]
pub fn CaseTable(
    show_case_table: Signal<bool>,
    cases: Vec<CaseRecord>,
    /// Ids of cases the user already bookmarked.
    saved: Vec<String>,
    selection: Signal<Selection>,
    on_save: Callback<CaseRecord>,
) -> Element {
    let mut selection = selection;
    let ids: Vec<String> = cases.iter().map(|c| c.id.clone()).collect();
    let all_selected = !ids.is_empty() && ids.iter().all(|id| selection.read().is_selected(id));
    let selected_count = selection.read().count();

    rsx! {
        div { class: "case-table",
            TableTabs { show_case_table }
            PageHeader {
                PageTitle { "Cases" }
                PageActions {
                    if selected_count > 0 {
                        span { "{selected_count} selected" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| selection.write().clear(),
                            "Clear selection"
                        }
                    }
                }
            }

            if cases.is_empty() {
                Card {
                    CardContent {
                        p { "No cases loaded yet." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableSelectAll {
                            checked: all_selected,
                            onchange: move |_| {
                                selection.write().toggle_all(ids.iter().map(String::as_str));
                            },
                        }
                        DataTableColumn { "Case" }
                        DataTableColumn { "Judge" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        for case in cases.iter() {
                            CaseRow {
                                key: "{case.id}",
                                case: case.clone(),
                                saved: saved.contains(&case.id),
                                selected: selection.read().is_selected(&case.id),
                                selection,
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
fn CaseRow(
    case: CaseRecord,
    saved: bool,
    selected: bool,
    selection: Signal<Selection>,
    on_save: Callback<CaseRecord>,
) -> Element {
    let mut selection = selection;
    let name = case.display_name().to_string();
    let judge = case.judge_name.clone().unwrap_or_else(|| "—".to_string());
    let status = case.status.clone().unwrap_or_else(|| "—".to_string());
    let nav_id = case.id.clone();
    let toggle_id = case.id.clone();
    let label = if saved { "Saved" } else { "Save" };

    rsx! {
        DataTableRow {
            selected,
            onclick: move |_| {
                navigator().push(Route::CaseOverview { id: nav_id.clone() });
            },
            DataTableCheckbox {
                checked: selected,
                label: format!("Select {name}"),
                onchange: move |_| selection.write().toggle(&toggle_id),
            }
            DataTableCell { "{name}" }
            DataTableCell { "{judge}" }
            DataTableCell { "{status}" }
            DataTableCell {
                Button {
                    variant: if saved { ButtonVariant::Secondary } else { ButtonVariant::Primary },
                    disabled: saved,
                    onclick: move |_| on_save.call(case.clone()),
                    "{label}"
                }
            }
        }
    }
}
