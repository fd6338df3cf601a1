use crate::common::{spawn_backend, test_client, MockState, TOKEN};
use client::{ApiClient, BookmarkSet, Session};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::AppErrorKind;

#[tokio::test]
async fn profile_splits_into_case_and_judge_bookmarks() {
    let (client, _state) = test_client().await;

    let bookmarks = BookmarkSet::from(client.get_profile().await.expect("profile"));

    let case_ids: Vec<&str> = bookmarks.cases.iter().map(|c| c.id.as_str()).collect();
    let judge_names: Vec<&str> = bookmarks.judges.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(case_ids, vec!["A-101", "A-102"]);
    assert_eq!(judge_names, vec!["John Smith", "O'Brien"]);
    assert_eq!(bookmarks.lengths(), (2, 2));
}

#[tokio::test]
async fn profile_without_bookmark_arrays_is_empty() {
    let state = MockState::default();
    state
        .lock()
        .profiles
        .push(("00u2".to_string(), json!({ "id": "00u2" })));
    let base = spawn_backend(state).await;
    let client = ApiClient::new(&base, Session::new(TOKEN, "00u2")).unwrap();

    let bookmarks = BookmarkSet::from(client.get_profile().await.expect("profile"));
    assert_eq!(bookmarks, BookmarkSet::default());
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let state = MockState::default();
    let base = spawn_backend(state.clone()).await;
    let client = ApiClient::new(&base, Session::new(TOKEN, "nobody")).unwrap();

    let err = client.get_profile().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "profile not found");
    assert_eq!(state.last_request().path, "/profile/nobody");
}
