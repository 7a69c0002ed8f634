//! Handlers for blog endpoints and keyword purges.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::blog::{BlogItem, BlogListResponse, BlogRequest};
use crate::api::dto::keywords::{DeleteEntriesResponse, KeywordQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all blogs.
///
/// # Endpoint
///
/// `GET /api/blogs`
pub async fn list_blogs_handler(
    State(state): State<AppState>,
) -> Result<Json<BlogListResponse>, AppError> {
    let blogs = state.blog_service.find_all().await?;

    Ok(Json(BlogListResponse {
        items: blogs.into_iter().map(BlogItem::from).collect(),
    }))
}

/// # Endpoint
///
/// `GET /api/blogs/{id}`
///
/// # Errors
///
/// Returns 404 if the blog does not exist.
pub async fn get_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<BlogItem>, AppError> {
    let blog = state
        .blog_service
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::not_found("Blog not found", json!({"id": id})))?;

    Ok(Json(blog.into()))
}

/// Creates a blog.
///
/// # Endpoint
///
/// `POST /api/blogs`
///
/// # Errors
///
/// Returns 400 if the body carries an id or the name is empty or too long.
pub async fn create_blog_handler(
    State(state): State<AppState>,
    Json(payload): Json<BlogRequest>,
) -> Result<(StatusCode, Json<BlogItem>), AppError> {
    payload.validate()?;

    if let Some(id) = payload.id {
        return Err(AppError::bad_request(
            "A new blog cannot already have an ID",
            json!({"id": id}),
        ));
    }

    let blog = state.blog_service.save(payload.into_draft(None)).await?;

    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// Replaces a blog's name and polarity.
///
/// # Endpoint
///
/// `PUT /api/blogs/{id}`
///
/// Existing entries are not re-moderated when the polarity changes.
///
/// # Errors
///
/// Returns 400 if the body id differs from the path id.
/// Returns 404 if the blog does not exist.
pub async fn update_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<BlogRequest>,
) -> Result<Json<BlogItem>, AppError> {
    payload.validate()?;

    if payload.id.is_some_and(|body_id| body_id != id) {
        return Err(AppError::bad_request(
            "Body id does not match path id",
            json!({"path_id": id, "body_id": payload.id}),
        ));
    }

    let blog = state.blog_service.save(payload.into_draft(Some(id))).await?;

    Ok(Json(blog.into()))
}

/// Deletes a blog and its entries.
///
/// # Endpoint
///
/// `DELETE /api/blogs/{id}`
pub async fn delete_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.blog_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes entries of every blog containing one of the keywords.
///
/// # Endpoint
///
/// `DELETE /api/blogs/entries?keywords=lonely,sad`
///
/// Keywords match whole space-separated tokens, case-sensitively.
pub async fn delete_entries_by_keyword_handler(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<DeleteEntriesResponse>, AppError> {
    let keywords = query.into_set()?;
    let deleted = state.blog_service.delete_entries_by_keyword(&keywords).await?;

    Ok(Json(deleted.into()))
}

/// Deletes the entries of one blog containing one of the keywords.
///
/// # Endpoint
///
/// `DELETE /api/blogs/{id}/entries?keywords=sad`
pub async fn delete_blog_entries_by_keyword_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<DeleteEntriesResponse>, AppError> {
    let keywords = query.into_set()?;
    let deleted = state
        .blog_service
        .delete_entries_by_blog_and_keyword(id, &keywords)
        .await?;

    Ok(Json(deleted.into()))
}
