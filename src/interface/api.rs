//! JSON API over the catalog.
//!
//! Errors are returned as `{"status": <code>, "detail": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::application::error::AppError;
use crate::domain::error::DomainError;
use crate::domain::model::book::{Book, BookFields};
use crate::domain::model::id::BookId;

use super::server::AppState;

// =============================================================================
// Request / response bodies
// =============================================================================

/// Body of create and update. Absent keys read as empty and fail validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookPayload {
    #[serde(alias = "nom")]
    pub name: String,
    #[serde(alias = "auteur")]
    pub author: String,
    #[serde(alias = "editeur")]
    pub publisher: String,
}

impl From<BookPayload> for BookFields {
    fn from(p: BookPayload) -> Self {
        BookFields::new(p.name, p.author, p.publisher)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProblemBody {
    pub status: u16,
    pub detail: String,
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    App(AppError),
    BadRequest(String),
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self::App(e)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self::App(e.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::App(AppError::Domain(DomainError::NotFound(_))) => StatusCode::NOT_FOUND,
            Self::App(AppError::Domain(_)) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::App(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            Self::App(e) if status.is_server_error() => {
                error!(error = %e, "catalog operation failed");
                "internal server error".to_string()
            }
            Self::App(e) => e.to_string(),
            Self::BadRequest(detail) => detail.clone(),
        };
        if status.is_client_error() {
            warn!(status = status.as_u16(), %detail, "request rejected");
        }

        let body = ProblemBody {
            status: status.as_u16(),
            detail,
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.catalog.list()?))
}

pub async fn count_books(State(state): State<AppState>) -> Result<Json<TotalResponse>, ApiError> {
    let total = state.catalog.count()?;
    Ok(Json(TotalResponse { total }))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = BookId::parse(&raw_id)?;
    Ok(Json(state.catalog.get(id)?))
}

pub async fn create_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let id = BookId::parse(&raw_id)?;
    let Json(payload) = payload?;

    let book = state.catalog.create(id, payload.into())?;
    info!(id = %book.id(), "book created");
    Ok(Json(book))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let id = BookId::parse(&raw_id)?;
    let Json(payload) = payload?;

    let book = state.catalog.update(id, payload.into())?;
    info!(id = %book.id(), "book updated");
    Ok(Json(book))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = BookId::parse(&raw_id)?;
    let book = state.catalog.delete(id)?;
    info!(id = %book.id(), "book deleted");
    Ok(Json(book))
}
