use axum::{
    body::Body,
    extract::{Multipart, Path, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use client::{ApiClient, Session};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex, MutexGuard};

pub const TOKEN: &str = "test-token";
pub const USER: &str = "00u1";

/// One request as the backend saw it, before any path decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

/// A file received by `POST /upload`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedUpload {
    pub field: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct Backend {
    pub cases: Vec<Value>,
    pub judges: Vec<Value>,
    /// `(user id, { case_bookmarks, judge_bookmarks })`
    pub profiles: Vec<(String, Value)>,
    pub requests: Vec<Recorded>,
    pub uploads: Vec<ReceivedUpload>,
    /// When set, every request is answered with this status.
    pub fail_with: Option<StatusCode>,
    /// When set, `GET /cases` answers 200 with a body that is not JSON.
    pub garbage_cases: bool,
}

/// Shared handle to the in-process backend's data.
#[derive(Clone, Default)]
pub struct MockState(Arc<Mutex<Backend>>);

impl MockState {
    pub fn lock(&self) -> MutexGuard<'_, Backend> {
        self.0.lock().expect("mock backend mutex poisoned")
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.lock()
            .requests
            .last()
            .cloned()
            .expect("no request reached the backend")
    }

    fn profile_mut<'a>(backend: &'a mut Backend, user: &str) -> Option<&'a mut Value> {
        backend
            .profiles
            .iter_mut()
            .find(|(id, _)| id == user)
            .map(|(_, profile)| profile)
    }
}

pub fn sample_cases() -> Vec<Value> {
    vec![
        json!({
            "id": "A-101",
            "name": "Matter of R-A-",
            "judge_name": "John Smith",
            "status": "Denied",
            "hearing_location": "Denver",
            "protected_ground": ["political opinion"]
        }),
        json!({
            "id": "A-102",
            "name": "Matter of L-E-A-",
            "judge_name": "Jane Doe",
            "status": "Granted",
            "hearing_location": "Aurora"
        }),
        json!({
            "id": "A-103",
            "name": "Matter of A-B-",
            "judge_name": "O'Brien",
            "status": "Pending"
        }),
    ]
}

pub fn sample_judges() -> Vec<Value> {
    vec![
        json!({ "name": "John Smith", "judge_county": "Denver", "appointed_by": "Attorney General" }),
        json!({ "name": "Jane Doe", "judge_county": "Aurora" }),
        json!({ "name": "O'Brien", "judge_county": "Boulder" }),
    ]
}

/// Backend seeded with the sample lists and a profile for [`USER`] that
/// bookmarks two cases and two judges.
pub fn seeded_state() -> MockState {
    let state = MockState::default();
    {
        let mut backend = state.lock();
        backend.cases = sample_cases();
        backend.judges = sample_judges();
        backend.profiles.push((
            USER.to_string(),
            json!({
                "id": USER,
                "case_bookmarks": [sample_cases()[0].clone(), sample_cases()[1].clone()],
                "judge_bookmarks": [
                    { "judge_name": "John Smith" },
                    { "judge_name": "O'Brien" }
                ]
            }),
        ));
    }
    state
}

/// Serve the mock on an ephemeral port; returns its base url.
pub async fn spawn_backend(state: MockState) -> String {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("mock backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("mock backend stopped");
    });
    format!("http://{addr}")
}

/// Seeded backend plus a client signed in as [`USER`].
pub async fn test_client() -> (ApiClient, MockState) {
    let state = seeded_state();
    let base = spawn_backend(state.clone()).await;
    let client = ApiClient::new(&base, Session::new(TOKEN, USER)).expect("valid base url");
    (client, state)
}

/// Base url of a port nothing listens on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}

fn router(state: MockState) -> Router {
    Router::new()
        .route("/cases", get(list_cases))
        .route("/judge", get(list_judges))
        .route("/judge/{name}", get(get_judge))
        .route("/case/{id}", get(get_case).put(put_case))
        .route("/profile/{user}", get(get_profile))
        .route(
            "/profile/{user}/case/{id}",
            post(save_case_bookmark).delete(delete_case_bookmark),
        )
        .route(
            "/profile/{user}/judge/{name}",
            post(save_judge_bookmark).delete(delete_judge_bookmark),
        )
        .route("/upload", post(upload))
        .fallback(|| async { not_found("route") })
        .layer(middleware::from_fn_with_state(state.clone(), record_and_authorize))
        .with_state(state)
}

/// Record the raw request, then enforce the bearer token and any forced failure.
async fn record_and_authorize(State(state): State<MockState>, req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let fail_with = {
        let mut backend = state.lock();
        backend.requests.push(Recorded {
            method: req.method().to_string(),
            path: req.uri().path().to_string(),
            authorization: authorization.clone(),
        });
        backend.fail_with
    };

    if let Some(status) = fail_with {
        return (status, Json(json!({ "message": "forced failure" }))).into_response();
    }
    if authorization != Some(Session::new(TOKEN, USER).bearer()) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "invalid token" })))
            .into_response();
    }
    next.run(req).await
}

fn not_found(what: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "message": format!("{what} not found") }))).into_response()
}

async fn list_cases(State(state): State<MockState>) -> Response {
    let backend = state.lock();
    if backend.garbage_cases {
        return Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "application/json")
            .body(Body::from("<html>maintenance</html>"))
            .expect("static response");
    }
    Json(Value::Array(backend.cases.clone())).into_response()
}

async fn list_judges(State(state): State<MockState>) -> Response {
    Json(Value::Array(state.lock().judges.clone())).into_response()
}

async fn get_judge(State(state): State<MockState>, Path(name): Path<String>) -> Response {
    let backend = state.lock();
    match backend.judges.iter().find(|j| j["name"] == name.as_str()) {
        Some(judge) => Json(judge.clone()).into_response(),
        None => not_found("judge"),
    }
}

async fn get_case(State(state): State<MockState>, Path(id): Path<String>) -> Response {
    let backend = state.lock();
    match backend.cases.iter().find(|c| c["id"] == id.as_str()) {
        Some(case) => Json(case.clone()).into_response(),
        None => not_found("case"),
    }
}

async fn put_case(
    State(state): State<MockState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock();
    match backend.cases.iter_mut().find(|c| c["id"] == id.as_str()) {
        Some(case) => {
            *case = body;
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found("case"),
    }
}

async fn get_profile(State(state): State<MockState>, Path(user): Path<String>) -> Response {
    let mut backend = state.lock();
    match MockState::profile_mut(&mut backend, &user) {
        Some(profile) => Json(profile.clone()).into_response(),
        None => not_found("profile"),
    }
}

async fn save_case_bookmark(
    State(state): State<MockState>,
    Path((user, id)): Path<(String, String)>,
) -> Response {
    let mut backend = state.lock();
    let Some(case) = backend.cases.iter().find(|c| c["id"] == id.as_str()).cloned() else {
        return not_found("case");
    };
    let Some(profile) = MockState::profile_mut(&mut backend, &user) else {
        return not_found("profile");
    };
    if let Some(list) = profile["case_bookmarks"].as_array_mut() {
        list.push(case);
    }
    StatusCode::CREATED.into_response()
}

async fn delete_case_bookmark(
    State(state): State<MockState>,
    Path((user, id)): Path<(String, String)>,
) -> Response {
    let mut backend = state.lock();
    let Some(profile) = MockState::profile_mut(&mut backend, &user) else {
        return not_found("profile");
    };
    let Some(list) = profile["case_bookmarks"].as_array_mut() else {
        return not_found("bookmark");
    };
    let before = list.len();
    list.retain(|c| c["id"] != id.as_str());
    if list.len() == before {
        return not_found("bookmark");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn save_judge_bookmark(
    State(state): State<MockState>,
    Path((user, name)): Path<(String, String)>,
) -> Response {
    let mut backend = state.lock();
    let Some(profile) = MockState::profile_mut(&mut backend, &user) else {
        return not_found("profile");
    };
    if let Some(list) = profile["judge_bookmarks"].as_array_mut() {
        list.push(json!({ "judge_name": name }));
    }
    StatusCode::CREATED.into_response()
}

async fn delete_judge_bookmark(
    State(state): State<MockState>,
    Path((user, name)): Path<(String, String)>,
) -> Response {
    let mut backend = state.lock();
    let Some(profile) = MockState::profile_mut(&mut backend, &user) else {
        return not_found("profile");
    };
    let Some(list) = profile["judge_bookmarks"].as_array_mut() else {
        return not_found("bookmark");
    };
    let before = list.len();
    list.retain(|j| j["judge_name"] != name.as_str());
    if list.len() == before {
        return not_found("bookmark");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn upload(State(state): State<MockState>, mut multipart: Multipart) -> Response {
    let mut received = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(_) => return StatusCode::BAD_REQUEST.into_response(),
        };
        received.push(ReceivedUpload {
            field: name,
            file_name,
            bytes,
        });
    }
    state.lock().uploads.extend(received);
    StatusCode::CREATED.into_response()
}
