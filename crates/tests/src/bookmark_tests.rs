use crate::common::{test_client, USER};
use client::{settle, BookmarkSet};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, JudgeRecord};

#[tokio::test]
async fn removing_case_bookmark_deletes_by_id() {
    let (client, state) = test_client().await;

    client.delete_case_bookmark("A-101").await.expect("delete");

    let last = state.last_request();
    assert_eq!(last.method, "DELETE");
    assert_eq!(last.path, format!("/profile/{USER}/case/A-101"));
}

#[tokio::test]
async fn judge_names_are_sent_as_path_segments() {
    let (client, state) = test_client().await;

    client.delete_judge_bookmark("John Smith").await.expect("delete");
    assert_eq!(state.last_request().path, "/profile/00u1/judge/John%20Smith");

    client.delete_judge_bookmark("O'Brien").await.expect("delete");
    assert_eq!(state.last_request().path, "/profile/00u1/judge/O'Brien");
}

#[tokio::test]
async fn remove_then_refetch_agrees_with_local_state() {
    let (client, _state) = test_client().await;
    let mut bookmarks = BookmarkSet::from(client.get_profile().await.unwrap());

    if settle("remove case bookmark", client.delete_case_bookmark("A-101").await).is_some() {
        bookmarks.remove_case("A-101");
    }
    if settle("remove judge bookmark", client.delete_judge_bookmark("O'Brien").await).is_some() {
        bookmarks.remove_judge("O'Brien");
    }

    let ids: Vec<&str> = bookmarks.cases.iter().map(|c| c.id.as_str()).collect();
    let names: Vec<&str> = bookmarks.judges.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(ids, vec!["A-102"]);
    assert_eq!(names, vec!["John Smith"]);

    let refetched = BookmarkSet::from(client.get_profile().await.unwrap());
    assert_eq!(refetched, bookmarks);
}

#[tokio::test]
async fn missing_bookmark_leaves_state_unchanged() {
    let (client, _state) = test_client().await;
    let mut bookmarks = BookmarkSet::from(client.get_profile().await.unwrap());
    let before = bookmarks.clone();

    let result = client.delete_case_bookmark("A-999").await;
    assert_eq!(result.as_ref().unwrap_err().kind, AppErrorKind::NotFound);

    if settle("remove case bookmark", result).is_some() {
        bookmarks.remove_case("A-999");
    }
    assert_eq!(bookmarks, before);

    // Even applied locally, an absent key removes nothing.
    assert!(!bookmarks.remove_case("A-999"));
    assert_eq!(bookmarks, before);
}

#[tokio::test]
async fn saving_bookmarks_appends_them() {
    let (client, state) = test_client().await;
    let mut bookmarks = BookmarkSet::from(client.get_profile().await.unwrap());
    let cases = client.list_cases().await.unwrap();
    let third = cases[2].clone();

    client.save_case_bookmark(&third.id).await.expect("save case");
    assert_eq!(state.last_request().method, "POST");
    assert_eq!(state.last_request().path, "/profile/00u1/case/A-103");
    assert!(bookmarks.add_case(third));

    client.save_judge_bookmark("Jane Doe").await.expect("save judge");
    assert_eq!(state.last_request().path, "/profile/00u1/judge/Jane%20Doe");
    assert!(bookmarks.add_judge(JudgeRecord::new("Jane Doe")));

    let refetched = BookmarkSet::from(client.get_profile().await.unwrap());
    assert_eq!(refetched.lengths(), (3, 3));
    assert_eq!(
        refetched.cases.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        bookmarks.cases.iter().map(|c| c.id.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(
        refetched.judges.iter().map(|j| j.name.as_str()).collect::<Vec<_>>(),
        vec!["John Smith", "O'Brien", "Jane Doe"]
    );
}
