//! Typed access to the case/judge backend.
//!
//! Every call carries the session's bearer token and returns
//! `Result<_, AppError>`; deciding whether a failure is shown, logged or
//! ignored is left to the caller (see [`crate::settle`]).

use reqwest::{header::AUTHORIZATION, multipart, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use shared_types::{AppError, CaseRecord, JudgeRecord, ProfileBookmarks};

use crate::session::Session;

/// HTTP client bound to one backend and one signed-in user.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}

impl ApiClient {
    pub fn new(base_url: &str, session: Session) -> Result<Self, AppError> {
        Self::with_http(reqwest::Client::new(), base_url, session)
    }

    pub fn with_http(
        http: reqwest::Client,
        base_url: &str,
        session: Session,
    ) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::config(format!("invalid API base url {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "API base url {base_url} cannot carry a path"
            )));
        }
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base url, percent-encoding each one as
    /// a path segment (space becomes `%20`, `/` and `?` are escaped,
    /// sub-delimiters such as `'` are left alone).
    pub fn endpoint<I>(&self, segments: I) -> Result<Url, AppError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config(format!("API base url {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn case_bookmark_url(&self, case_id: &str) -> Result<Url, AppError> {
        self.endpoint(["profile", self.session.user_id.as_str(), "case", case_id])
    }

    pub fn judge_bookmark_url(&self, name: &str) -> Result<Url, AppError> {
        self.endpoint(["profile", self.session.user_id.as_str(), "judge", name])
    }

    // ── Reads ──────────────────────────────────────────────────────────

    #[tracing::instrument(skip(self))]
    pub async fn list_cases(&self) -> Result<Vec<CaseRecord>, AppError> {
        self.get_json(self.endpoint(["cases"])?).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_judges(&self) -> Result<Vec<JudgeRecord>, AppError> {
        self.get_json(self.endpoint(["judge"])?).await
    }

    #[tracing::instrument(skip(self), fields(user = %self.session.user_id))]
    pub async fn get_profile(&self) -> Result<ProfileBookmarks, AppError> {
        self.get_json(self.endpoint(["profile", self.session.user_id.as_str()])?)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_case(&self, case_id: &str) -> Result<CaseRecord, AppError> {
        self.get_json(self.endpoint(["case", case_id])?).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_judge(&self, name: &str) -> Result<JudgeRecord, AppError> {
        self.get_json(self.endpoint(["judge", name])?).await
    }

    // ── Bookmarks ──────────────────────────────────────────────────────

    #[tracing::instrument(skip(self), fields(user = %self.session.user_id))]
    pub async fn delete_case_bookmark(&self, case_id: &str) -> Result<(), AppError> {
        let url = self.case_bookmark_url(case_id)?;
        self.send(self.http.delete(url)).await?;
        tracing::info!(case_id, "Case bookmark removed");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(user = %self.session.user_id))]
    pub async fn delete_judge_bookmark(&self, name: &str) -> Result<(), AppError> {
        let url = self.judge_bookmark_url(name)?;
        self.send(self.http.delete(url)).await?;
        tracing::info!(judge = name, "Judge bookmark removed");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(user = %self.session.user_id))]
    pub async fn save_case_bookmark(&self, case_id: &str) -> Result<(), AppError> {
        let url = self.case_bookmark_url(case_id)?;
        self.send(self.http.post(url)).await?;
        tracing::info!(case_id, "Case bookmarked");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(user = %self.session.user_id))]
    pub async fn save_judge_bookmark(&self, name: &str) -> Result<(), AppError> {
        let url = self.judge_bookmark_url(name)?;
        self.send(self.http.post(url)).await?;
        tracing::info!(judge = name, "Judge bookmarked");
        Ok(())
    }

    // ── Case edits ─────────────────────────────────────────────────────

    #[tracing::instrument(skip(self, case), fields(case_id = %case.id))]
    pub async fn update_case(&self, case: &CaseRecord) -> Result<(), AppError> {
        let url = self.endpoint(["case", case.id.as_str()])?;
        self.send(self.http.put(url).json(case)).await?;
        tracing::info!("Case updated");
        Ok(())
    }

    /// Upload a case document as the `file` part of a multipart form.
    #[tracing::instrument(skip(self, contents), fields(bytes = contents.len()))]
    pub async fn upload_case(&self, file_name: &str, contents: Vec<u8>) -> Result<(), AppError> {
        let url = self.endpoint(["upload"])?;
        let part = multipart::Part::bytes(contents).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        self.send(self.http.post(url).multipart(form)).await?;
        tracing::info!(file_name, "Case document uploaded");
        Ok(())
    }

    // ── Plumbing ───────────────────────────────────────────────────────

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let response = self.send(self.http.get(url)).await?;
        response.json::<T>().await.map_err(transport_error)
    }

    /// Attach the bearer token, send, and turn non-2xx statuses into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request
            .header(AUTHORIZATION, self.session.bearer())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "Backend responded");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::from_status(status.as_u16(), &body))
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::decode(err.to_string())
    } else {
        AppError::network(err.to_string())
    }
}
