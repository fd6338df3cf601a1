use dioxus::prelude::*;

/// Row of mutually exclusive tabs. The owner keeps the active index.
#[component]
pub fn TabBar(labels: Vec<String>, active: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-bar", role: "tablist",
            for (index, label) in labels.iter().enumerate() {
                button {
                    key: "{index}",
                    class: "tab-trigger",
                    role: "tab",
                    "aria-selected": index == active,
                    "data-state": if index == active { "active" } else { "inactive" },
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}
