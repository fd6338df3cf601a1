use crate::common::{sample_cases, sample_judges, test_client, TOKEN};
use pretty_assertions::assert_eq;
use serde_json::Value;
use shared_types::{CaseRecord, JudgeRecord};

#[tokio::test]
async fn case_list_is_exactly_the_response_payload() {
    let (client, _state) = test_client().await;

    let cases = client.list_cases().await.expect("case list");

    let expected: Vec<CaseRecord> =
        serde_json::from_value(Value::Array(sample_cases())).unwrap();
    assert_eq!(cases, expected);
    // Opaque fields survive and serialize back to the same payload.
    assert_eq!(serde_json::to_value(&cases).unwrap(), Value::Array(sample_cases()));
}

#[tokio::test]
async fn judge_list_decodes_names() {
    let (client, _state) = test_client().await;

    let judges = client.list_judges().await.expect("judge list");

    let names: Vec<&str> = judges.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, vec!["John Smith", "Jane Doe", "O'Brien"]);
    let expected: Vec<JudgeRecord> =
        serde_json::from_value(Value::Array(sample_judges())).unwrap();
    assert_eq!(judges, expected);
}

#[tokio::test]
async fn every_read_carries_the_bearer_token() {
    let (client, state) = test_client().await;

    client.list_cases().await.expect("case list");
    client.list_judges().await.expect("judge list");
    client.get_profile().await.expect("profile");

    let requests = state.requests();
    assert_eq!(requests.len(), 3);
    let expected = format!("Bearer {TOKEN}");
    for request in &requests {
        assert_eq!(request.method, "GET");
        assert_eq!(request.authorization.as_deref(), Some(expected.as_str()));
    }
    let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/cases", "/judge", "/profile/00u1"]);
}

#[tokio::test]
async fn empty_case_list_is_not_an_error() {
    let (client, state) = test_client().await;
    state.lock().cases.clear();

    let cases = client.list_cases().await.expect("case list");
    assert!(cases.is_empty());
}
