use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section — wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row; clickable when `onclick` is set, highlighted when `selected`.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] selected: bool,
    children: Element,
) -> Element {
    let mut class = String::from("data-table-row");
    if onclick.is_some() {
        class.push_str(" clickable");
    }
    if selected {
        class.push_str(" selected");
    }
    rsx! {
        tr {
            class,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Selection checkbox cell. Clicks do not reach the row's own handler.
#[component]
pub fn DataTableCheckbox(
    checked: bool,
    #[props(default)] label: Option<String>,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        td { class: "data-table-select",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            input {
                r#type: "checkbox",
                checked,
                aria_label: label,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
        }
    }
}

/// Header cell holding a select-all checkbox.
#[component]
pub fn DataTableSelectAll(checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        th { class: "data-table-select",
            input {
                r#type: "checkbox",
                checked,
                aria_label: "Select all rows",
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
        }
    }
}
