//! File intake: persist uploaded PDFs under the configured upload root.
//!
//! Stored files are publicly served at `/uploads/{name}`; the returned
//! locator is what the owning book row records. Replacing a book's PDF does
//! not remove the previous file, and deleting a book leaves its file behind.

use std::path::Path;

use readstack_core::uploads::{is_accepted_mime, stored_filename};

use crate::error::AppError;

/// Persist an uploaded file, returning its public locator.
///
/// A missing or non-PDF content type is a soft reject: the upload is
/// treated as "no file provided" and `Ok(None)` is returned, because file
/// attachment is optional on create and update. Any I/O failure is a hard
/// error so the enclosing create/update aborts before a record can
/// reference a file that was never persisted.
pub async fn save_pdf(
    upload_dir: &Path,
    original_filename: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<Option<String>, AppError> {
    match content_type {
        Some(mime) if is_accepted_mime(mime) => {}
        _ => {
            tracing::debug!(
                filename = original_filename,
                content_type = content_type.unwrap_or(""),
                "ignoring non-PDF upload"
            );
            return Ok(None);
        }
    }

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("creating upload dir: {e}")))?;

    let name = stored_filename(chrono::Utc::now().timestamp_millis(), original_filename);
    let path = upload_dir.join(&name);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("writing upload: {e}")))?;

    tracing::info!(path = %path.display(), size = bytes.len(), "stored uploaded PDF");
    Ok(Some(format!("/uploads/{name}")))
}
