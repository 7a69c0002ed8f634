//! API route configuration.

use crate::api::handlers::{
    create_blog_handler, create_entry_handler, delete_blog_entries_by_keyword_handler,
    delete_blog_handler, delete_entries_by_keyword_handler, delete_entry_handler,
    get_blog_handler, get_entry_handler, list_blogs_handler, list_entries_handler,
    update_blog_handler, update_entry_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /blogs`              - List blogs
/// - `POST   /blogs`              - Create a blog
/// - `GET    /blogs/{id}`         - Fetch a blog
/// - `PUT    /blogs/{id}`         - Replace a blog
/// - `DELETE /blogs/{id}`         - Delete a blog and its entries
/// - `DELETE /blogs/entries`      - Purge entries of all blogs by keyword
/// - `DELETE /blogs/{id}/entries` - Purge entries of one blog by keyword
/// - `GET    /entries`            - List entries (paginated)
/// - `POST   /entries`            - Create a moderated entry
/// - `GET    /entries/{id}`       - Fetch an entry
/// - `PUT    /entries/{id}`       - Replace a moderated entry
/// - `DELETE /entries/{id}`       - Delete an entry
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs_handler).post(create_blog_handler))
        .route("/blogs/entries", delete(delete_entries_by_keyword_handler))
        .route(
            "/blogs/{id}",
            get(get_blog_handler)
                .put(update_blog_handler)
                .delete(delete_blog_handler),
        )
        .route(
            "/blogs/{id}/entries",
            delete(delete_blog_entries_by_keyword_handler),
        )
        .route(
            "/entries",
            get(list_entries_handler).post(create_entry_handler),
        )
        .route(
            "/entries/{id}",
            get(get_entry_handler)
                .put(update_entry_handler)
                .delete(delete_entry_handler),
        )
}
