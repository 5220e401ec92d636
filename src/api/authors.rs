use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::{Form, Json};

use super::{form_fields, path_id, AppState, FormFields, MessageResponse};
use crate::domain::{Author, AuthorId};
use crate::error::AppError;

pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<Author>>, AppError> {
    Ok(Json(state.repo.get_all_authors().await?))
}

pub async fn get_author(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Author>, AppError> {
    let author_id = path_id(path, "author not found")?;
    state
        .repo
        .get_author_by_id(AuthorId::new(author_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("author not found".into()))
}

/// `POST /v1/authors` with form field `name`. Existing names return the existing author.
pub async fn create_author(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> Result<Json<Author>, AppError> {
    let fields = form_fields(form)?;
    let name = fields
        .get("name")
        .ok_or_else(|| AppError::Unprocessable("author name required".into()))?;

    Ok(Json(state.repo.insert_author(name).await?))
}

pub async fn delete_author(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let author_id = AuthorId::new(path_id(path, "author not found")?);
    if state.repo.get_author_by_id(author_id).await?.is_none() {
        return Err(AppError::NotFound("author not found".into()));
    }

    state.repo.delete_author(author_id).await?;

    Ok(Json(MessageResponse::new("author deleted successfully")))
}
