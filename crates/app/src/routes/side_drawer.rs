use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookmark, LdBriefcase, LdLogOut, LdScale, LdUpload, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{CaseRecord, JudgeRecord};
use shared_ui::components::{Button, ButtonVariant};

use crate::routes::Route;

/// How many bookmarks of each kind the drawer lists before linking out.
const DRAWER_PREVIEW: usize = 5;

/// Navigation, bookmark shortcuts and sign-out.
#[component]
pub fn SideDrawer(
    user_id: Option<String>,
    saved_cases: Vec<CaseRecord>,
    saved_judges: Vec<JudgeRecord>,
    on_remove_case: Callback<String>,
    on_remove_judge: Callback<String>,
    on_logout: Callback<()>,
) -> Element {
    let route: Route = use_route();
    let case_count = saved_cases.len();
    let judge_count = saved_judges.len();

    rsx! {
        nav { class: "side-drawer",
            Link {
                to: Route::Home {},
                class: if matches!(route, Route::Home {}) { "active" } else { "" },
                Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                "Cases & Judges"
            }
            Link {
                to: Route::UploadCase {},
                class: if matches!(route, Route::UploadCase {}) { "active" } else { "" },
                Icon::<LdUpload> { icon: LdUpload, width: 18, height: 18 }
                "Upload Case"
            }

            div { class: "drawer-section-label", "Bookmarks" }
            Link {
                to: Route::SavedCases {},
                class: if matches!(route, Route::SavedCases {}) { "active" } else { "" },
                Icon::<LdBookmark> { icon: LdBookmark, width: 18, height: 18 }
                "Saved Cases ({case_count})"
            }
            for case in saved_cases.iter().take(DRAWER_PREVIEW) {
                DrawerBookmark {
                    key: "case-{case.id}",
                    label: case.display_name().to_string(),
                    to: Route::CaseOverview { id: case.id.clone() },
                    remove_key: case.id.clone(),
                    on_remove: on_remove_case,
                }
            }
            Link {
                to: Route::SavedJudges {},
                class: if matches!(route, Route::SavedJudges {}) { "active" } else { "" },
                Icon::<LdScale> { icon: LdScale, width: 18, height: 18 }
                "Saved Judges ({judge_count})"
            }
            for judge in saved_judges.iter().take(DRAWER_PREVIEW) {
                DrawerBookmark {
                    key: "judge-{judge.name}",
                    label: judge.name.clone(),
                    to: Route::JudgePage { name: judge.name.clone() },
                    remove_key: judge.name.clone(),
                    on_remove: on_remove_judge,
                }
            }

            div { class: "drawer-footer",
                if let Some(user) = user_id {
                    span { class: "drawer-user", "{user}" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_logout.call(()),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Log out"
                }
            }
        }
    }
}

#[component]
fn DrawerBookmark(label: String, to: Route, remove_key: String, on_remove: Callback<String>) -> Element {
    rsx! {
        div { class: "drawer-bookmark",
            Link { to, "{label}" }
            Button {
                variant: ButtonVariant::Ghost,
                title: format!("Remove {label}"),
                onclick: move |_| on_remove.call(remove_key.clone()),
                Icon::<LdX> { icon: LdX, width: 14, height: 14 }
            }
        }
    }
}
