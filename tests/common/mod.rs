#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, OriginalUri, Path, Query, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use vitae::models::resume::{Degree, Resume};

/// In-memory stand-in for the resume backend. Only the HTTP contract
/// matters here: envelope responses, route shapes, and conjunctive filter
/// semantics, mirroring what the real service does.
#[derive(Clone)]
pub struct BackendState {
    pub resumes: Arc<Mutex<Vec<Resume>>>,
    pub next_id: Arc<AtomicI64>,
    /// Raw query string of the last /resumes/filter request.
    pub last_filter_query: Arc<Mutex<Option<String>>>,
    /// Raw (still percent-encoded) path of the last /resumes/email request.
    pub last_email_path: Arc<Mutex<Option<String>>>,
}

pub struct MockBackend {
    pub base_url: String,
    pub state: BackendState,
}

impl MockBackend {
    pub fn resumes(&self) -> Vec<Resume> {
        self.state.resumes.lock().expect("state lock").clone()
    }

    pub fn last_filter_query(&self) -> Option<String> {
        self.state
            .last_filter_query
            .lock()
            .expect("state lock")
            .clone()
    }

    pub fn last_email_path(&self) -> Option<String> {
        self.state
            .last_email_path
            .lock()
            .expect("state lock")
            .clone()
    }
}

/// Serve a router on an ephemeral port and return its base URL. The server
/// task lives until the test runtime shuts down.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Spin up the mock backend seeded with `initial` records.
pub async fn spawn(initial: Vec<Resume>) -> MockBackend {
    let state = BackendState {
        resumes: Arc::new(Mutex::new(initial)),
        next_id: Arc::new(AtomicI64::new(1000)),
        last_filter_query: Arc::new(Mutex::new(None)),
        last_email_path: Arc::new(Mutex::new(None)),
    };

    let router = Router::new()
        .route("/resumes/", get(list_all))
        .route("/resumes/{id}", get(get_by_id).delete(delete_by_id))
        .route("/resumes/email/{email}", get(get_by_email))
        .route("/resumes/search", get(search_by_name))
        .route("/resumes/filter", get(filter))
        .route("/resumes/upload", post(upload))
        .with_state(state.clone());

    let base_url = serve(router).await;
    MockBackend { base_url, state }
}

pub fn ok(data: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "success", "data": data })))
}

pub fn fail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "status": "error", "message": message })))
}

async fn list_all(State(state): State<BackendState>) -> (StatusCode, Json<Value>) {
    let resumes = state.resumes.lock().expect("state lock").clone();
    ok(json!(resumes))
}

async fn get_by_id(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    let resumes = state.resumes.lock().expect("state lock");
    match resumes.iter().find(|resume| resume.id == id) {
        Some(resume) => ok(json!(resume)),
        None => fail(StatusCode::NOT_FOUND, "Resume not found"),
    }
}

async fn get_by_email(
    State(state): State<BackendState>,
    OriginalUri(uri): OriginalUri,
    Path(email): Path<String>,
) -> (StatusCode, Json<Value>) {
    *state.last_email_path.lock().expect("state lock") = Some(uri.path().to_string());
    let resumes = state.resumes.lock().expect("state lock");
    match resumes.iter().find(|resume| resume.email == email) {
        Some(resume) => ok(json!(resume)),
        None => fail(StatusCode::NOT_FOUND, "Resume not found"),
    }
}

#[derive(serde::Deserialize)]
struct SearchParams {
    name: String,
}

async fn search_by_name(
    State(state): State<BackendState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<Value>) {
    let needle = params.name.to_lowercase();
    let resumes = state.resumes.lock().expect("state lock");
    let matches: Vec<&Resume> = resumes
        .iter()
        .filter(|resume| resume.name.to_lowercase().contains(&needle))
        .collect();
    ok(json!(matches))
}

#[derive(serde::Deserialize, Default)]
struct FilterParams {
    keyword: Option<String>,
    city: Option<String>,
    degree: Option<String>,
    skill: Option<String>,
    min_exp: Option<u32>,
}

fn matches_filter(resume: &Resume, params: &FilterParams) -> bool {
    if let Some(keyword) = &params.keyword {
        let needle = keyword.to_lowercase();
        let hit = resume.name.to_lowercase().contains(&needle)
            || resume.occupation.to_lowercase().contains(&needle)
            || resume.city.to_lowercase().contains(&needle)
            || resume
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }
    if let Some(city) = &params.city {
        if !resume.city.eq_ignore_ascii_case(city) {
            return false;
        }
    }
    if let Some(degree) = &params.degree {
        let needle = degree.to_lowercase();
        if !resume
            .degrees
            .iter()
            .any(|entry| entry.degree_type.to_lowercase().contains(&needle))
        {
            return false;
        }
    }
    if let Some(skill) = &params.skill {
        let needle = skill.to_lowercase();
        if !resume
            .skills
            .iter()
            .any(|entry| entry.to_lowercase().contains(&needle))
        {
            return false;
        }
    }
    if let Some(min_exp) = params.min_exp {
        if resume.exp_years < min_exp {
            return false;
        }
    }
    true
}

async fn filter(
    State(state): State<BackendState>,
    RawQuery(raw): RawQuery,
    Query(params): Query<FilterParams>,
) -> (StatusCode, Json<Value>) {
    *state.last_filter_query.lock().expect("state lock") = raw;
    let resumes = state.resumes.lock().expect("state lock");
    let matches: Vec<&Resume> = resumes
        .iter()
        .filter(|resume| matches_filter(resume, &params))
        .collect();
    ok(json!(matches))
}

async fn upload(
    State(state): State<BackendState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload.pdf").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        if content_type != "application/pdf" {
            return fail(StatusCode::BAD_REQUEST, "Only PDF uploads are accepted");
        }
        let bytes = field.bytes().await.expect("field bytes");
        if bytes.is_empty() {
            return fail(StatusCode::BAD_REQUEST, "Uploaded file is empty");
        }

        let id = state.next_id.fetch_add(1, Ordering::SeqCst);
        let resume = Resume {
            id,
            name: file_name.trim_end_matches(".pdf").replace('_', " "),
            email: format!("candidate{id}@example.com"),
            phone: "555-0100".to_string(),
            occupation: "Engineer".to_string(),
            city: "Springfield".to_string(),
            exp_years: 3,
            status: "pending".to_string(),
            pdf_path: file_name,
            degrees: vec![Degree {
                degree_type: "Bachelor".to_string(),
                degree_subject: "Computer Science".to_string(),
            }],
            skills: vec!["Rust".to_string()],
        };
        state
            .resumes
            .lock()
            .expect("state lock")
            .insert(0, resume.clone());
        return (
            StatusCode::CREATED,
            Json(json!({ "status": "success", "data": resume })),
        );
    }
    fail(StatusCode::BAD_REQUEST, "Missing file field")
}

async fn delete_by_id(
    State(state): State<BackendState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    let mut resumes = state.resumes.lock().expect("state lock");
    let before = resumes.len();
    resumes.retain(|resume| resume.id != id);
    if resumes.len() == before {
        return fail(StatusCode::NOT_FOUND, "Resume not found");
    }
    ok(json!(null))
}

/// Fixture record with sensible defaults.
pub fn sample(id: i64, name: &str, city: &str, exp_years: u32) -> Resume {
    Resume {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        occupation: "Engineer".to_string(),
        city: city.to_string(),
        exp_years,
        status: "pending".to_string(),
        pdf_path: format!("{id}.pdf"),
        degrees: vec![Degree {
            degree_type: "Bachelor".to_string(),
            degree_subject: "Computer Science".to_string(),
        }],
        skills: vec!["Rust".to_string(), "SQL".to_string()],
    }
}
