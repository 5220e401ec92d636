use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::{Form, Json};

use super::{form_fields, path_id, AppState, FormFields, MessageResponse};
use crate::domain::{Entry, EntryId};
use crate::error::AppError;

const ENTRY_FIELDS: [&str; 4] = ["title", "content", "author", "topic"];

pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, AppError> {
    Ok(Json(state.repo.get_all_entries().await?))
}

pub async fn get_entry(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Entry>, AppError> {
    let entry_id = path_id(path, "entry not found")?;
    state
        .repo
        .get_entry_by_id(EntryId::new(entry_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("entry not found".into()))
}

/// `POST /v1/entries` with form fields `title`, `content`, `author`, `topic`.
pub async fn create_entry(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> Result<Json<Entry>, AppError> {
    let fields = form_fields(form)?;
    for name in ENTRY_FIELDS {
        if !fields.contains_key(name) {
            return Err(AppError::Unprocessable(format!("parameter {} required", name)));
        }
    }

    let entry = state
        .repo
        .insert_entry(
            &fields["title"],
            &fields["content"],
            &fields["author"],
            &fields["topic"],
        )
        .await?;
    tracing::info!("Created entry {}", entry.entry_id);

    Ok(Json(entry))
}

pub async fn delete_entry(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let entry_id = EntryId::new(path_id(path, "entry not found")?);
    if state.repo.get_entry_by_id(entry_id).await?.is_none() {
        return Err(AppError::NotFound("entry not found".into()));
    }

    state.repo.delete_entry(entry_id).await?;

    Ok(Json(MessageResponse::new("entry deleted successfully")))
}
