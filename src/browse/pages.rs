//! Page handlers.

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use super::{render, MAX_FIELD_CHARS};
use crate::api::AppState;
use crate::domain::EntryId;
use crate::error::AppError;

/// Outcome message shown above the new-entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MissingField,
    TooLong,
    Added,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::MissingField => "There's a missing parameter",
            Notice::TooLong => "All inputs must be under 100 characters",
            Notice::Added => "Entry added successfully!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Added)
    }
}

#[derive(Debug, Deserialize)]
pub struct NewEntryForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub topic: Option<String>,
}

/// Check submitted values in order and report the first problem.
pub fn check_fields(values: &[&str]) -> Result<(), Notice> {
    for value in values {
        if value.is_empty() {
            return Err(Notice::MissingField);
        }
        if value.chars().count() > MAX_FIELD_CHARS {
            return Err(Notice::TooLong);
        }
    }
    Ok(())
}

pub async fn home() -> Html<String> {
    Html(render::home())
}

pub async fn all_entries(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let entries = state.repo.get_all_entries().await?;
    Ok(Html(render::entry_list(&entries)))
}

pub async fn entry(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let found = match path {
        Ok(Path(entry_id)) => state.repo.get_entry_by_id(EntryId::new(entry_id)).await?,
        Err(_) => None,
    };
    let response = match found {
        Some(entry) => Html(render::entry_page(&entry)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(render::not_found("entry"))).into_response(),
    };
    Ok(response)
}

pub async fn authors(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let authors = state.repo.get_all_authors().await?;
    Ok(Html(render::author_list(&authors)))
}

pub async fn topics(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let topics = state.repo.get_all_topics().await?;
    Ok(Html(render::topic_list(&topics)))
}

pub async fn new_entry_form() -> Html<String> {
    Html(render::new_entry(None, &[]))
}

/// Handle a new-entry submission. Incomplete forms just show the blank form again.
pub async fn submit_new_entry(
    State(state): State<AppState>,
    form: Result<Form<NewEntryForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Ok(Form(form)) = form else {
        return Ok(Html(render::new_entry(None, &[])));
    };
    let (Some(title), Some(content), Some(author), Some(topic)) =
        (form.title, form.content, form.author, form.topic)
    else {
        return Ok(Html(render::new_entry(None, &[])));
    };

    let values = [
        ("title", title.as_str()),
        ("content", content.as_str()),
        ("author", author.as_str()),
        ("topic", topic.as_str()),
    ];

    if let Err(notice) = check_fields(&values.map(|(_, value)| value)) {
        return Ok(Html(render::new_entry(Some(&notice), &values)));
    }

    let entry = state
        .repo
        .insert_entry(&title, &content, &author, &topic)
        .await?;
    tracing::info!("Entry {} added from the browser", entry.entry_id);

    Ok(Html(render::new_entry(Some(&Notice::Added), &[])))
}
