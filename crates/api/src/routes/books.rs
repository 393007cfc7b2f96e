//! Route definitions for the book library.
//!
//! All routes are mounted under `/books`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book routes mounted at `/books`.
///
/// ```text
/// GET    /               -> list_books
/// POST   /               -> create_book (multipart)
/// GET    /{id}           -> get_book
/// PUT    /{id}           -> update_book (multipart)
/// DELETE /{id}           -> delete_book
/// PUT    /{id}/progress  -> update_progress
/// PUT    /{id}/complete  -> set_completed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route(
            "/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/{id}/progress", put(books::update_progress))
        .route("/{id}/complete", put(books::set_completed))
}
