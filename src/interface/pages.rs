//! HTML pages for the browser front end.
//!
//! Templates live in `templates/` and are compiled into the binary. Every
//! page is rendered with HTML auto-escaping, so book text and request input
//! are passed to the templates as-is.

use minijinja::{context, AutoEscape, Environment, Error};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::error::{FieldError, FieldProblem};
use crate::domain::model::book::Book;

pub const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");
pub const LIST_TEMPLATE: &str = include_str!("../../templates/liste_livres.html");
pub const ADD_TEMPLATE: &str = include_str!("../../templates/ajouter_livre.html");
pub const EDIT_TEMPLATE: &str = include_str!("../../templates/modifier_livre.html");
pub const MESSAGE_TEMPLATE: &str = include_str!("../../templates/message.html");
pub const NOT_FOUND_TEMPLATE: &str = include_str!("../../templates/erreur_404.html");
pub const VALIDATION_TEMPLATE: &str = include_str!("../../templates/erreur_validation.html");
pub const ERROR_TEMPLATE: &str = include_str!("../../templates/erreur.html");

fn template_source(name: &str) -> Option<&'static str> {
    match name {
        "base.html" => Some(BASE_TEMPLATE),
        "liste_livres.html" => Some(LIST_TEMPLATE),
        "ajouter_livre.html" => Some(ADD_TEMPLATE),
        "modifier_livre.html" => Some(EDIT_TEMPLATE),
        "message.html" => Some(MESSAGE_TEMPLATE),
        "erreur_404.html" => Some(NOT_FOUND_TEMPLATE),
        "erreur_validation.html" => Some(VALIDATION_TEMPLATE),
        "erreur.html" => Some(ERROR_TEMPLATE),
        _ => None,
    }
}

static PAGES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_loader(|name| Ok(template_source(name).map(str::to_owned)));
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env
});

fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, Error> {
    PAGES.get_template(name)?.render(ctx)
}

/// `GET /`: every book plus the total.
pub fn book_list(books: &[Book], total: usize) -> Result<String, Error> {
    render(
        "liste_livres.html",
        context! { title => "Liste des livres", books, total },
    )
}

pub fn add_form() -> Result<String, Error> {
    render("ajouter_livre.html", context! { title => "Ajouter un livre" })
}

/// Form prefilled with the current values of `book`.
pub fn edit_form(book: &Book) -> Result<String, Error> {
    let title = format!("Modifier le livre {}", book.id());
    render("modifier_livre.html", context! { title, book })
}

/// Confirmation shown after a successful add, edit or delete.
pub fn message(title: &str, detail: &str) -> Result<String, Error> {
    render("message.html", context! { title, detail })
}

pub fn not_found(detail: &str) -> Result<String, Error> {
    render(
        "erreur_404.html",
        context! { title => "Page introuvable", detail },
    )
}

/// One line of the validation page, labelled after the form input.
#[derive(Debug, Serialize)]
struct FieldLine {
    field: &'static str,
    message: String,
}

impl From<&FieldError> for FieldLine {
    fn from(error: &FieldError) -> Self {
        Self {
            field: form_label(error.field),
            message: describe(&error.problem),
        }
    }
}

/// Name of the form input a record field is entered through.
fn form_label(field: &'static str) -> &'static str {
    match field {
        "name" => "nom",
        "author" => "auteur",
        "publisher" => "editeur",
        "body" => "formulaire",
        "input" => "saisie",
        other => other,
    }
}

fn describe(problem: &FieldProblem) -> String {
    match problem {
        FieldProblem::Missing => "champ obligatoire".to_string(),
        FieldProblem::Blank => "ne doit pas être vide ni contenir uniquement des espaces".to_string(),
        FieldProblem::NotAnInteger => "doit être un nombre entier".to_string(),
        FieldProblem::BelowMinimum(min) => format!("doit être supérieur ou égal à {min}"),
        FieldProblem::TooLarge(max) => format!("ne doit pas dépasser {max}"),
        FieldProblem::Malformed(detail) => detail.clone(),
    }
}

/// Lists each rejected field with its reason.
pub fn validation_errors(errors: &[FieldError]) -> Result<String, Error> {
    let errors: Vec<FieldLine> = errors.iter().map(FieldLine::from).collect();
    render(
        "erreur_validation.html",
        context! { title => "Erreur de validation", errors },
    )
}

pub fn error(detail: &str) -> Result<String, Error> {
    render("erreur.html", context! { title => "Erreur", detail })
}
