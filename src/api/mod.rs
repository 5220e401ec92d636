//! JSON API and router assembly.
//!
//! JSON resources live under `/v1`; the HTML browser from `crate::browse`
//! is mounted at the root of the same router.

pub mod authors;
pub mod entries;
pub mod health;
pub mod topics;

use crate::db::Repository;
use crate::error::AppError;
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::Path;
use axum::routing::get;
use axum::{Form, Router};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

/// Body of successful DELETE responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raw urlencoded form fields, so missing fields can be reported by name.
pub(crate) type FormFields = HashMap<String, String>;

/// Unwrap submitted form fields.
///
/// A request without an urlencoded body counts as an empty form, so the
/// caller's missing-field checks answer it. Only an urlencoded body that
/// cannot be parsed is a bad request.
pub(crate) fn form_fields(
    form: Result<Form<FormFields>, FormRejection>,
) -> Result<FormFields, AppError> {
    match form {
        Ok(Form(fields)) => Ok(fields),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(FormFields::new()),
        Err(e) => Err(AppError::BadRequest(e.body_text())),
    }
}

/// Numeric id from the path. Anything that is not an integer names no row.
pub(crate) fn path_id(
    path: Result<Path<i64>, PathRejection>,
    not_found: &str,
) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route(
            "/v1/entries",
            get(entries::list_entries).post(entries::create_entry),
        )
        .route(
            "/v1/entries/:entry_id",
            get(entries::get_entry).delete(entries::delete_entry),
        )
        .route(
            "/v1/authors",
            get(authors::list_authors).post(authors::create_author),
        )
        .route(
            "/v1/authors/:author_id",
            get(authors::get_author).delete(authors::delete_author),
        )
        .route(
            "/v1/topics",
            get(topics::list_topics).post(topics::create_topic),
        )
        .route(
            "/v1/topics/:topic_id",
            get(topics::get_topic).delete(topics::delete_topic),
        )
        .merge(crate::browse::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_passes_parsed_fields_through() {
        let mut fields = FormFields::new();
        fields.insert("name".to_string(), "Karen".to_string());

        let parsed = form_fields(Ok(Form(fields.clone()))).unwrap();
        assert_eq!(parsed, fields);
    }
}
