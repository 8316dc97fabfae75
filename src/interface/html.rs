//! Browser front end: forms and pages over the catalog.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::application::error::AppError;
use crate::domain::error::{DomainError, FieldError, FieldProblem};
use crate::domain::model::book::BookFields;
use crate::domain::model::id::BookId;

use super::pages;
use super::server::AppState;

// =============================================================================
// Form input
// =============================================================================

/// Submitted book form. Every key is optional so that a missing one can be
/// reported on the validation page instead of as a bare rejection.
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    pub id: Option<String>,
    #[serde(alias = "nom")]
    pub name: Option<String>,
    #[serde(alias = "auteur")]
    pub author: Option<String>,
    #[serde(alias = "editeur")]
    pub publisher: Option<String>,
}

impl BookForm {
    fn id(&self) -> Result<BookId, Vec<FieldError>> {
        let raw = self
            .id
            .as_deref()
            .ok_or_else(|| vec![FieldError::new("id", FieldProblem::Missing)])?;
        BookId::parse(raw).map_err(field_errors)
    }

    fn fields(self) -> Result<BookFields, Vec<FieldError>> {
        let mut missing = Vec::new();
        let mut take = |field: &'static str, value: Option<String>| {
            value.unwrap_or_else(|| {
                missing.push(FieldError::new(field, FieldProblem::Missing));
                String::new()
            })
        };
        let fields = BookFields::new(
            take("name", self.name),
            take("author", self.author),
            take("publisher", self.publisher),
        );
        if missing.is_empty() {
            Ok(fields)
        } else {
            Err(missing)
        }
    }
}

fn field_errors(e: DomainError) -> Vec<FieldError> {
    match e {
        DomainError::InvalidInput(errors) => errors,
        other => {
            let problem = FieldProblem::Malformed(other.to_string());
            vec![FieldError::new("input", problem)]
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failures rendered as pages.
#[derive(Debug)]
pub enum PageError {
    NotFound(String),
    Validation(Vec<FieldError>),
    BadRequest(String),
    Internal,
}

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Domain(DomainError::NotFound(id)) => {
                Self::NotFound(format!("Le livre {id} n'a pas été trouvé."))
            }
            AppError::Domain(DomainError::AlreadyExists(id)) => {
                Self::BadRequest(format!("Un livre existe déjà avec l'ID {id}."))
            }
            AppError::Domain(DomainError::InvalidInput(errors)) => Self::Validation(errors),
            other => {
                error!(error = %other, "catalog operation failed");
                Self::Internal
            }
        }
    }
}

impl From<DomainError> for PageError {
    fn from(e: DomainError) -> Self {
        AppError::from(e).into()
    }
}

impl From<FormRejection> for PageError {
    fn from(rejection: FormRejection) -> Self {
        let problem = FieldProblem::Malformed(rejection.body_text());
        Self::Validation(vec![FieldError::new("body", problem)])
    }
}

impl From<minijinja::Error> for PageError {
    fn from(e: minijinja::Error) -> Self {
        error!(error = %e, "page rendering failed");
        Self::Internal
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, rendered) = match self {
            Self::NotFound(detail) => (StatusCode::NOT_FOUND, pages::not_found(&detail)),
            Self::Validation(errors) => {
                warn!(fields = errors.len(), "rejected form input");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    pages::validation_errors(&errors),
                )
            }
            Self::BadRequest(detail) => {
                warn!(%detail, "rejected request");
                (StatusCode::BAD_REQUEST, pages::error(&detail))
            }
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::error("erreur interne du serveur"),
            ),
        };
        match rendered {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!(error = %e, "error page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "erreur interne du serveur").into_response()
            }
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let books = state.catalog.list()?;
    Ok(Html(pages::book_list(&books, books.len())?))
}

pub async fn add_form() -> Result<Html<String>, PageError> {
    Ok(Html(pages::add_form()?))
}

pub async fn add_book(
    State(state): State<AppState>,
    form: Result<Form<BookForm>, FormRejection>,
) -> Result<Html<String>, PageError> {
    let Form(form) = form?;

    let id = form.id();
    let fields = form.fields();
    let (id, fields) = match (id, fields) {
        (Ok(id), Ok(fields)) => (id, fields),
        (id, fields) => {
            let errors = id.err().into_iter().chain(fields.err()).flatten().collect();
            return Err(PageError::Validation(errors));
        }
    };

    let book = state.catalog.create(id, fields)?;
    info!(id = %book.id(), "book added");
    Ok(Html(pages::message(
        "Livre ajouté",
        &format!("Le livre {} a été ajouté avec succès.", book.id()),
    )?))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = BookId::parse(&raw_id)?;
    let book = state.catalog.get(id)?;
    Ok(Html(pages::edit_form(&book)?))
}

pub async fn edit_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: Result<Form<BookForm>, FormRejection>,
) -> Result<Html<String>, PageError> {
    let id = BookId::parse(&raw_id)?;
    let Form(form) = form?;
    let fields = form.fields().map_err(PageError::Validation)?;

    let book = state.catalog.update(id, fields)?;
    info!(id = %book.id(), "book updated");
    Ok(Html(pages::message(
        "Livre modifié",
        &format!("Le livre {} a été modifié avec succès.", book.id()),
    )?))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = BookId::parse(&raw_id)?;
    let book = state.catalog.delete(id)?;
    info!(id = %book.id(), "book deleted");
    Ok(Html(pages::message(
        "Livre supprimé",
        &format!("Le livre « {} » a été supprimé avec succès.", book.name()),
    )?))
}

/// Router fallback for unknown paths.
pub async fn not_found() -> PageError {
    PageError::NotFound("La page demandée n'existe pas.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: Option<&str>, name: Option<&str>, author: Option<&str>) -> BookForm {
        BookForm {
            id: id.map(String::from),
            name: name.map(String::from),
            author: author.map(String::from),
            publisher: Some("P".into()),
        }
    }

    #[test]
    fn complete_form_parses() {
        let f = form(Some("3"), Some("Roman"), Some("A"));
        assert_eq!(f.id().unwrap().get(), 3);
        assert_eq!(f.fields().unwrap(), BookFields::new("Roman", "A", "P"));
    }

    #[test]
    fn missing_keys_are_reported() {
        let f = form(None, None, Some("A"));
        assert_eq!(f.id().unwrap_err()[0].problem, FieldProblem::Missing);
        let missing = f.fields().unwrap_err();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].field, "name");
    }

    #[test]
    fn non_numeric_id_is_reported() {
        let f = form(Some("abc"), Some("Roman"), Some("A"));
        let errors = f.id().unwrap_err();
        assert_eq!(errors[0].field, "id");
    }

    #[test]
    fn form_keys_accept_french_aliases() {
        let f: BookForm =
            serde_json::from_str(r#"{"id":"1","nom":"Roman","auteur":"A","editeur":"P"}"#)
                .unwrap();
        assert_eq!(f.fields().unwrap(), BookFields::new("Roman", "A", "P"));
    }
}
