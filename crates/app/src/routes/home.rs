//! Home view: owns the loaded lists and the user's bookmarks, and hands
//! them to whichever page the router selects.

use client::{settle, ApiClient, BookmarkSet, Selection};
use dioxus::prelude::*;
use shared_types::{CaseRecord, JudgeRecord};
use shared_ui::components::{
    use_pending_requests_provider, Card, CardContent, CardHeader, CardTitle, LoadingOverlay,
    TabBar,
};

use super::cases::CaseTable;
use super::judges::JudgeTable;
use super::side_drawer::SideDrawer;
use super::upload::{UploadStatus, UploadedFile};
use crate::auth::{use_api, use_auth};
use crate::routes::Route;

/// State and actions shared with every page under the home view.
#[derive(Clone, Copy, PartialEq)]
pub struct HomeContext {
    pub cases: Signal<Vec<CaseRecord>>,
    pub judges: Signal<Vec<JudgeRecord>>,
    pub bookmarks: Signal<BookmarkSet>,
    pub selection: Signal<Selection>,
    /// `true` shows the case table at `/`, `false` the judge table.
    pub show_case_table: Signal<bool>,
    pub upload_status: Signal<UploadStatus>,
    pub remove_case: Callback<String>,
    pub remove_judge: Callback<String>,
    pub save_case: Callback<CaseRecord>,
    pub save_judge: Callback<JudgeRecord>,
    pub upload: Callback<UploadedFile>,
}

/// Hook to access the home view's state from a page.
pub fn use_home() -> HomeContext {
    use_context::<HomeContext>()
}

/// Layout for every route: shows a sign-in notice while there is no
/// session, otherwise the drawer plus the routed page.
#[component]
pub fn HomeView() -> Element {
    let auth = use_auth();

    if auth.is_authenticated() {
        rsx! { HomeShell {} }
    } else {
        rsx! {
            div { class: "signed-out",
                Card {
                    CardHeader { CardTitle { "Signed out" } }
                    CardContent {
                        p { "Sign in to browse cases and judges." }
                    }
                }
            }
        }
    }
}

/// Bookmark save/remove callbacks. Each issues its request and, only on
/// success, applies the same change to `bookmarks`.
#[derive(Clone, Copy, PartialEq)]
pub struct BookmarkActions {
    pub remove_case: Callback<String>,
    pub remove_judge: Callback<String>,
    pub save_case: Callback<CaseRecord>,
    pub save_judge: Callback<JudgeRecord>,
}

pub fn use_bookmark_actions(
    api: Memo<Option<ApiClient>>,
    mut bookmarks: Signal<BookmarkSet>,
) -> BookmarkActions {
    let remove_case = use_callback(move |case_id: String| {
        let Some(client) = api.peek().clone() else { return };
        spawn(async move {
            if settle("remove case bookmark", client.delete_case_bookmark(&case_id).await).is_some() {
                bookmarks.write().remove_case(&case_id);
            }
        });
    });

    let remove_judge = use_callback(move |name: String| {
        let Some(client) = api.peek().clone() else { return };
        spawn(async move {
            if settle("remove judge bookmark", client.delete_judge_bookmark(&name).await).is_some() {
                bookmarks.write().remove_judge(&name);
            }
        });
    });

    let save_case = use_callback(move |case: CaseRecord| {
        let Some(client) = api.peek().clone() else { return };
        spawn(async move {
            if settle("save case bookmark", client.save_case_bookmark(&case.id).await).is_some() {
                bookmarks.write().add_case(case);
            }
        });
    });

    let save_judge = use_callback(move |judge: JudgeRecord| {
        let Some(client) = api.peek().clone() else { return };
        spawn(async move {
            if settle("save judge bookmark", client.save_judge_bookmark(&judge.name).await).is_some() {
                bookmarks.write().add_judge(judge);
            }
        });
    });

    BookmarkActions {
        remove_case,
        remove_judge,
        save_case,
        save_judge,
    }
}

#[component]
fn HomeShell() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let pending = use_pending_requests_provider();

    let mut cases = use_signal(Vec::<CaseRecord>::new);
    let mut judges = use_signal(Vec::<JudgeRecord>::new);
    let mut bookmarks = use_signal(BookmarkSet::default);
    let selection = use_signal(Selection::default);
    let show_case_table = use_signal(|| true);
    let mut upload_status = use_signal(|| UploadStatus::Idle);

    // Case and judge listings load once per mount.
    use_future(move || async move {
        let Some(client) = api.peek().clone() else { return };
        if let Some(list) = settle("list cases", pending.track(client.list_cases()).await) {
            cases.set(list);
        }
    });
    use_future(move || async move {
        let Some(client) = api.peek().clone() else { return };
        if let Some(list) = settle("list judges", pending.track(client.list_judges()).await) {
            judges.set(list);
        }
    });

    // The profile reloads when the session changes or either bookmark
    // sequence changes length.
    let lengths = use_memo(move || bookmarks.read().lengths());
    let _profile = use_resource(move || async move {
        let _ = lengths();
        let Some(client) = api() else { return };
        if let Some(profile) = settle("get profile", pending.track(client.get_profile()).await) {
            bookmarks.set(BookmarkSet::from(profile));
        }
    });

    let BookmarkActions {
        remove_case,
        remove_judge,
        save_case,
        save_judge,
    } = use_bookmark_actions(api, bookmarks);

    let upload = use_callback(move |file: UploadedFile| {
        let Some(client) = api.peek().clone() else { return };
        spawn(async move {
            upload_status.set(UploadStatus::Uploading(file.name.clone()));
            match client.upload_case(&file.name, file.bytes).await {
                Ok(()) => {
                    upload_status.set(UploadStatus::Done(file.name));
                    if let Some(list) = settle("list cases", client.list_cases().await) {
                        cases.set(list);
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, file = %file.name, "Upload failed");
                    upload_status.set(UploadStatus::Failed(err.message));
                }
            }
        });
    });

    let logout = use_callback(move |_: ()| auth.logout());

    use_context_provider(|| HomeContext {
        cases,
        judges,
        bookmarks,
        selection,
        show_case_table,
        upload_status,
        remove_case,
        remove_judge,
        save_case,
        save_judge,
        upload,
    });

    let saved = bookmarks.read().clone();

    rsx! {
        div { class: "home-view",
            SideDrawer {
                user_id: auth.user_id(),
                saved_cases: saved.cases,
                saved_judges: saved.judges,
                on_remove_case: remove_case,
                on_remove_judge: remove_judge,
                on_logout: logout,
            }
            main { class: "home-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// `/`: the case/judge table toggle.
#[component]
pub fn Home() -> Element {
    let home = use_home();

    rsx! {
        TablePresenter {
            show_case_table: home.show_case_table,
            cases: home.cases.read().clone(),
            judges: home.judges.read().clone(),
            bookmarks: home.bookmarks.read().clone(),
            selection: home.selection,
            on_save_case: home.save_case,
            on_save_judge: home.save_judge,
        }
    }
}

/// Mounts exactly one of the two tables, each with the loading overlay.
/// The active table receives the flag so its tab bar can flip it.
#[component]
pub fn TablePresenter(
    show_case_table: Signal<bool>,
    cases: Vec<CaseRecord>,
    judges: Vec<JudgeRecord>,
    bookmarks: BookmarkSet,
    selection: Signal<Selection>,
    on_save_case: Callback<CaseRecord>,
    on_save_judge: Callback<JudgeRecord>,
) -> Element {
    if show_case_table() {
        rsx! {
            CaseTable {
                show_case_table,
                cases,
                saved: bookmarks.cases.iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
                selection,
                on_save: on_save_case,
            }
            LoadingOverlay {}
        }
    } else {
        rsx! {
            JudgeTable {
                show_case_table,
                judges,
                saved: bookmarks.judges.iter().map(|j| j.name.clone()).collect::<Vec<_>>(),
                on_save: on_save_judge,
            }
            LoadingOverlay {}
        }
    }
}

/// Tab control shared by both tables; flipping it swaps the mounted table.
#[component]
pub fn TableTabs(show_case_table: Signal<bool>) -> Element {
    let mut show_case_table = show_case_table;
    let active = if show_case_table() { 0 } else { 1 };

    rsx! {
        TabBar {
            labels: vec!["Cases".to_string(), "Judges".to_string()],
            active,
            on_select: move |index: usize| show_case_table.set(index == 0),
        }
    }
}
