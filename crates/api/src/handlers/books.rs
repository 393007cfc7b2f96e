//! Handlers for the `/books` resource.
//!
//! Create and update accept multipart form data (`title`, `author`,
//! `description`, optional `pdf` file); the reading-state endpoints accept
//! small JSON bodies. Every by-id operation checks that the caller owns the
//! record before touching it.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde_json::json;
use validator::Validate;

use readstack_core::error::CoreError;
use readstack_core::progress::ProgressState;
use readstack_core::types::DbId;
use readstack_db::models::book::{Book, CreateBook, SetCompleted, UpdateBook, UpdateProgress};
use readstack_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::state::AppState;
use crate::uploads::save_pdf;

// ---------------------------------------------------------------------------
// Multipart form intake
// ---------------------------------------------------------------------------

/// Raw fields collected from a book create/update multipart body.
#[derive(Debug, Default)]
struct BookForm {
    title: Option<String>,
    author: Option<String>,
    description: Option<String>,
    /// Uploaded file: original filename, declared content type, bytes.
    pdf: Option<(String, Option<String>, Vec<u8>)>,
}

/// Drain a multipart stream into a [`BookForm`]. Unknown fields are ignored.
async fn read_book_form(mut multipart: Multipart) -> Result<BookForm, AppError> {
    let mut form = BookForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => {
                form.title = Some(text_field(field).await?);
            }
            "author" => {
                form.author = Some(text_field(field).await?);
            }
            "description" => {
                form.description = Some(text_field(field).await?);
            }
            "pdf" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.pdf = Some((filename, content_type, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Run the file intake for an optional uploaded PDF, returning a locator.
///
/// Non-PDF uploads are soft-rejected inside [`save_pdf`] and come back as
/// `None`, as if no file had been sent.
async fn intake_pdf(
    state: &AppState,
    pdf: Option<(String, Option<String>, Vec<u8>)>,
) -> Result<Option<String>, AppError> {
    match pdf {
        Some((filename, content_type, bytes)) => {
            save_pdf(
                &state.config.upload_dir,
                &filename,
                content_type.as_deref(),
                &bytes,
            )
            .await
        }
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Ownership guard
// ---------------------------------------------------------------------------

/// Load a book and verify the session user owns it.
///
/// Absent id maps to 404; an existing book with a different owner maps
/// to 403.
async fn load_owned_book(pool: &sqlx::PgPool, id: DbId, user_id: DbId) -> AppResult<Book> {
    let book = BookRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;

    if book.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Book belongs to another user".into(),
        )));
    }
    Ok(book)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /books
///
/// List the caller's books, newest-created first. No pagination.
pub async fn list_books(
    session: Session,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::list_by_owner(&state.pool, session.user_id).await?;
    Ok(Json(books))
}

/// POST /books
///
/// Create a book from multipart form data. `title` and `author` are
/// required and non-empty; a `pdf` part with any other MIME type is
/// silently ignored. New books start at `progress = 0, completed = false`.
pub async fn create_book(
    session: Session,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<Book>> {
    let form = read_book_form(multipart).await?;

    let mut input = CreateBook {
        title: form.title.unwrap_or_default(),
        author: form.author.unwrap_or_default(),
        description: form.description,
        pdf_url: None,
    };
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    // File intake runs after validation so a rejected request never
    // strands an uploaded file.
    input.pdf_url = intake_pdf(&state, form.pdf).await?;

    let book = BookRepo::create(&state.pool, session.user_id, &input).await?;

    tracing::info!(
        book_id = book.id,
        user_id = session.user_id,
        has_pdf = book.pdf_url.is_some(),
        "Book created",
    );

    Ok(Json(book))
}

/// GET /books/{id}
pub async fn get_book(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Book>> {
    let book = load_owned_book(&state.pool, id, session.user_id).await?;
    Ok(Json(book))
}

/// PUT /books/{id}
///
/// Overwrite a book's metadata from multipart form data. A new `pdf`
/// replaces the stored locator (the old file stays on disk); omitting it
/// keeps the current one. Reading state is untouched.
pub async fn update_book(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Book>> {
    load_owned_book(&state.pool, id, session.user_id).await?;

    let form = read_book_form(multipart).await?;

    let mut input = UpdateBook {
        title: form.title.unwrap_or_default(),
        author: form.author.unwrap_or_default(),
        description: form.description,
        pdf_url: None,
    };
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    input.pdf_url = intake_pdf(&state, form.pdf).await?;

    let book = BookRepo::update_meta(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;

    Ok(Json(book))
}

/// PUT /books/{id}/progress
///
/// Set reading progress. The input is clamped to `[0, 100]` and
/// `completed` is derived from the clamped value; both columns are written
/// in a single UPDATE.
pub async fn update_progress(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateProgress>,
) -> AppResult<Json<Book>> {
    load_owned_book(&state.pool, id, session.user_id).await?;

    let next = ProgressState::from_progress(body.progress);
    let book = BookRepo::set_progress_state(&state.pool, id, next)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;

    Ok(Json(book))
}

/// PUT /books/{id}/complete
///
/// Toggle completion. Completing forces `progress = 100`; un-completing
/// resets `progress = 0`, discarding any prior partial progress.
pub async fn set_completed(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SetCompleted>,
) -> AppResult<Json<Book>> {
    load_owned_book(&state.pool, id, session.user_id).await?;

    let next = ProgressState::from_completed(body.completed);
    let book = BookRepo::set_progress_state(&state.pool, id, next)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;

    Ok(Json(book))
}

/// DELETE /books/{id}
///
/// Remove the record. The uploaded file artifact, if any, is not deleted.
pub async fn delete_book(
    session: Session,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    load_owned_book(&state.pool, id, session.user_id).await?;

    let deleted = BookRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Book", id }));
    }

    tracing::info!(book_id = id, user_id = session.user_id, "Book deleted");
    Ok(Json(json!({ "message": "Book deleted successfully" })))
}
