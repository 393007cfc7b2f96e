//! Repository for the `books` table.

use sqlx::PgPool;
use readstack_core::progress::ProgressState;
use readstack_core::types::DbId;

use crate::models::book::{Book, CreateBook, UpdateBook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, description, pdf_url, completed, \
                       progress, user_id, created_at, updated_at";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book for `user_id`, returning the created row.
    ///
    /// New books always start at `progress = 0, completed = false`
    /// (the table defaults).
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateBook,
    ) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, author, description, pdf_url, user_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.description)
            .bind(&input.pdf_url)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a book by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all books owned by `user_id`, newest-created first.
    pub async fn list_by_owner(pool: &PgPool, user_id: DbId) -> Result<Vec<Book>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM books WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Book>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a book's metadata. Reading state is untouched; the PDF
    /// locator is replaced only when `input.pdf_url` is `Some`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_meta(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET \
                title = $2, \
                author = $3, \
                description = $4, \
                pdf_url = COALESCE($5, pdf_url), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.description)
            .bind(&input.pdf_url)
            .fetch_optional(pool)
            .await
    }

    /// Persist a reconciled progress/completed pair in one UPDATE.
    ///
    /// Both columns travel in a single statement so a concurrent read can
    /// never observe a torn state. Returns `None` if the row is absent.
    pub async fn set_progress_state(
        pool: &PgPool,
        id: DbId,
        state: ProgressState,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET progress = $2, completed = $3, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(state.progress)
            .bind(state.completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book row. The associated file artifact, if any, is left in
    /// place. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
