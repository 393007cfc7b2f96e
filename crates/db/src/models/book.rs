//! Book entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use readstack_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    /// Relative locator of the uploaded PDF under the upload root, if any.
    pub pdf_url: Option<String>,
    pub completed: bool,
    pub progress: i32,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new book. Assembled by the API layer from multipart
/// form fields; `pdf_url` is set only after the upload has been persisted.
#[derive(Debug, Clone, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub description: Option<String>,
    pub pdf_url: Option<String>,
}

/// DTO for updating a book's metadata. Title, author and description are
/// overwritten unconditionally; a `None` `pdf_url` keeps the existing
/// locator, `Some` replaces it (the old file is not removed).
#[derive(Debug, Clone, Validate)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub description: Option<String>,
    pub pdf_url: Option<String>,
}

/// JSON body for `PUT /books/{id}/progress`.
#[derive(Debug, Deserialize)]
pub struct UpdateProgress {
    pub progress: i32,
}

/// JSON body for `PUT /books/{id}/complete`.
#[derive(Debug, Deserialize)]
pub struct SetCompleted {
    pub completed: bool,
}
