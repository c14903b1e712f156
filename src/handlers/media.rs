//! Media CRUD handlers: list, get, create, update, delete.

use crate::error::AppError;
use crate::model::MediaItem;
use crate::service::{MediaService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Ids arrive as a path segment; a non-numeric id is a clean 400 rather
/// than a router rejection.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("media with id {} not found", id))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MediaItem>>, AppError> {
    let items = MediaService::list(&state.pool).await?;
    Ok(Json(items))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<MediaItem>, AppError> {
    let id = parse_id(&id_str)?;
    let item = MediaService::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<MediaItem>), AppError> {
    let input = RequestValidator::media_input(&body)?;
    let item = MediaService::create(&state.pool, &input).await?;
    tracing::info!(id = item.id_media, title = %item.title, "media created");
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<MediaItem>, AppError> {
    let id = parse_id(&id_str)?;
    let input = RequestValidator::media_input(&body)?;
    let item = MediaService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !MediaService::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "media deleted");
    Ok(StatusCode::NO_CONTENT)
}
