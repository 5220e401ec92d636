use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::{Form, Json};

use super::{form_fields, path_id, AppState, FormFields, MessageResponse};
use crate::domain::{Topic, TopicId};
use crate::error::AppError;

pub async fn list_topics(State(state): State<AppState>) -> Result<Json<Vec<Topic>>, AppError> {
    Ok(Json(state.repo.get_all_topics().await?))
}

pub async fn get_topic(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Topic>, AppError> {
    let topic_id = path_id(path, "topic not found")?;
    state
        .repo
        .get_topic_by_id(TopicId::new(topic_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("topic not found".into()))
}

/// `POST /v1/topics` with form field `topic`.
pub async fn create_topic(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> Result<Json<Topic>, AppError> {
    let fields = form_fields(form)?;
    let name = fields
        .get("topic")
        .ok_or_else(|| AppError::Unprocessable("topic name required".into()))?;

    Ok(Json(state.repo.insert_topic(name).await?))
}

pub async fn delete_topic(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let topic_id = TopicId::new(path_id(path, "topic not found")?);
    if state.repo.get_topic_by_id(topic_id).await?.is_none() {
        return Err(AppError::NotFound("topic not found".into()));
    }

    state.repo.delete_topic(topic_id).await?;

    Ok(Json(MessageResponse::new("topic deleted successfully")))
}
