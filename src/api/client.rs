use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::resume::Resume;
use crate::state::filter::FilterQuery;
use crate::state::upload::SelectedFile;

/// JSON wrapper used by every backend endpoint except PDF retrieval.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct Envelope<T> {
    status: String,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// Typed client for the resume backend.
///
/// The base URL is injected at construction so tests can point it at a
/// mock server. Every operation, delete included, goes through this single
/// base.
#[derive(Debug, Clone)]
pub struct ResumeApi {
    base: String,
    http: reqwest::Client,
}

impl ResumeApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn list_all(&self) -> Result<Vec<Resume>, ApiError> {
        let res = self
            .http
            .get(format!("{}/resumes/", self.base))
            .send()
            .await
            .map_err(transport)?;
        unwrap_data(res).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Resume, ApiError> {
        let res = self
            .http
            .get(format!("{}/resumes/{id}", self.base))
            .send()
            .await
            .map_err(transport)?;
        unwrap_data(res).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Resume, ApiError> {
        let res = self
            .http
            .get(format!(
                "{}/resumes/email/{}",
                self.base,
                urlencoding::encode(email)
            ))
            .send()
            .await
            .map_err(transport)?;
        unwrap_data(res).await
    }

    /// Case-insensitive substring search on the name field (server-side).
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Resume>, ApiError> {
        let res = self
            .http
            .get(format!("{}/resumes/search", self.base))
            .query(&[("name", name)])
            .send()
            .await
            .map_err(transport)?;
        unwrap_data(res).await
    }

    /// Fetch the subset matching `query`. Only defined parameters are sent;
    /// an all-empty query produces a bare path with no query string.
    pub async fn filter(&self, query: &FilterQuery) -> Result<Vec<Resume>, ApiError> {
        let mut req = self.http.get(format!("{}/resumes/filter", self.base));
        let params = query.params();
        if !params.is_empty() {
            req = req.query(&params);
        }
        let res = req.send().await.map_err(transport)?;
        unwrap_data(res).await
    }

    /// Upload a PDF as a multipart form with a single `file` field. The
    /// server parses it and returns the created record.
    pub async fn upload(&self, file: &SelectedFile) -> Result<Resume, ApiError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str("application/pdf")
            .map_err(|err| ApiError::Validation(err.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::debug!("uploading resume file {}", file.name);
        let res = self
            .http
            .post(format!("{}/resumes/upload", self.base))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        unwrap_data(res).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let res = self
            .http
            .delete(format!("{}/resumes/{id}", self.base))
            .send()
            .await
            .map_err(transport)?;
        expect_success(res).await
    }

    /// URL of a stored PDF artifact. Pure, no request is made here.
    pub fn pdf_url(&self, filename: &str) -> String {
        format!(
            "{}/resumes/pdfs/{}",
            self.base,
            urlencoding::encode(filename)
        )
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

fn remote(envelope_message: Option<String>) -> ApiError {
    ApiError::Remote(envelope_message.unwrap_or_else(|| "server reported a failure".to_string()))
}

/// Decode the envelope and return its payload on a success status.
async fn unwrap_data<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ApiError> {
    let envelope: Envelope<T> = res
        .json()
        .await
        .map_err(|err| ApiError::Transport(format!("malformed response body: {err}")))?;
    if envelope.status != "success" {
        return Err(remote(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Transport("success response without data".to_string()))
}

/// Decode the envelope of a payload-less operation.
async fn expect_success(res: reqwest::Response) -> Result<(), ApiError> {
    let envelope: Envelope<serde_json::Value> = res
        .json()
        .await
        .map_err(|err| ApiError::Transport(format!("malformed response body: {err}")))?;
    if envelope.status != "success" {
        return Err(remote(envelope.message));
    }
    Ok(())
}
