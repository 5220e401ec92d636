//! Server-rendered HTML pages for browsing the blog.
//!
//! Pages are plain strings built in `render`; every piece of user text is
//! escaped before it reaches the markup.

pub mod pages;
pub mod render;

use crate::api::AppState;
use axum::routing::get;
use axum::Router;

/// Longest accepted title, content, author or topic on the new-entry form, in characters.
pub const MAX_FIELD_CHARS: usize = 100;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/entries", get(pages::all_entries))
        .route("/entries/:entry_id", get(pages::entry))
        .route("/authors", get(pages::authors))
        .route("/topics", get(pages::topics))
        .route("/new", get(pages::new_entry_form).post(pages::submit_new_entry))
}
