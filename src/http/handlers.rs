//! Route handlers.
//!
//! Each fixed-section handler reads one immutable value out of the store and
//! returns it unchanged; the only branching lives in the indexed blog-post
//! lookup, the contact forwarder, and the asset routes.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::assets;
use crate::contact::ContactForm;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::Section;

/// Liveness response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "operational",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn section(state: &AppState, section: Section) -> Result<Json<Value>, ApiError> {
    state
        .store
        .section(section)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Section '{}' not found", section.key())))
}

pub async fn personal(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    section(&state, Section::Personal)
}

pub async fn education(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    section(&state, Section::Education)
}

pub async fn skills(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    section(&state, Section::Skills)
}

pub async fn projects(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    section(&state, Section::Projects)
}

// Optional section: answers 404 when the document does not carry it.
pub async fn basic_projects(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    section(&state, Section::BasicProjects)
}

pub async fn blogs(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    section(&state, Section::Blogs)
}

pub async fn social(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    section(&state, Section::Social)
}

/// Indexed accessor: `/api/blog/{id}` and its `/api/blog-posts/{id}` alias.
pub async fn blog_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state
        .store
        .blog_post(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Blog post not found".to_string()))
}

/// Contact form: validate the four fields, then forward upstream.
pub async fn contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Value>, ApiError> {
    let Some(forwarder) = &state.forwarder else {
        return Err(ApiError::NotFound("Contact endpoint is disabled".to_string()));
    };

    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    forwarder.forward(&form).await.map_err(|e| {
        tracing::error!(error = %e, "Contact forwarding failed");
        ApiError::Upstream("Failed to send message".to_string())
    })?;

    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn cv(State(state): State<AppState>) -> Result<Response, ApiError> {
    assets::serve_cv(&state.assets).await
}

pub async fn image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    assets::serve_image(&state.assets, &filename).await
}
