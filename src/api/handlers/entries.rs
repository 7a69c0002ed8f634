//! Handlers for entry endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::entry::{EntryItem, EntryListResponse, EntryRequest};
use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::error::AppError;
use crate::state::AppState;

/// Creates an entry after moderation.
///
/// # Endpoint
///
/// `POST /api/entries`
///
/// # Errors
///
/// Returns 400 `invalidEmoji` if the emoji does not fit the blog's polarity.
/// Returns 400 `invalidContent` if the content is empty or mentions a keyword of
/// the opposite polarity.
/// Returns 404 if the blog does not exist.
pub async fn create_entry_handler(
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<(StatusCode, Json<EntryItem>), AppError> {
    payload.validate()?;

    if let Some(id) = payload.id {
        return Err(AppError::bad_request(
            "A new entry cannot already have an ID",
            json!({"id": id}),
        ));
    }

    let entry = state.entry_service.save(payload.into_draft(None)).await?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// Replaces an entry; the new version goes through moderation again.
///
/// # Endpoint
///
/// `PUT /api/entries/{id}`
///
/// # Errors
///
/// Same as [`create_entry_handler`], plus 404 if the entry does not exist.
pub async fn update_entry_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<EntryItem>, AppError> {
    payload.validate()?;

    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(AppError::bad_request(
            "Body id does not match path id",
            json!({"path_id": id, "body_id": payload.id}),
        ));
    }

    let entry = state.entry_service.save(payload.into_draft(Some(id))).await?;

    Ok(Json(entry.into()))
}

/// Lists entries, newest first.
///
/// # Endpoint
///
/// `GET /api/entries`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 20, max: 100)
pub async fn list_entries_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<EntryListResponse>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = state.entry_service.find_all(offset, limit).await?;

    Ok(Json(EntryListResponse {
        pagination: PaginationMeta::new(params.page(), params.page_size(), page.total),
        items: page.items.into_iter().map(EntryItem::from).collect(),
    }))
}

/// # Endpoint
///
/// `GET /api/entries/{id}`
pub async fn get_entry_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<EntryItem>, AppError> {
    let entry = state
        .entry_service
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::not_found("Entry not found", json!({"id": id})))?;

    Ok(Json(entry.into()))
}

/// # Endpoint
///
/// `DELETE /api/entries/{id}`
pub async fn delete_entry_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.entry_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
