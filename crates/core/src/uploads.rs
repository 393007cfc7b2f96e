//! Naming and MIME policy for uploaded book files.
//!
//! Only the policy lives here; the actual disk writes happen in the API
//! crate, which owns the upload root.

use std::path::Path;

/// The only MIME type accepted for book uploads.
pub const PDF_MIME: &str = "application/pdf";

/// Fallback name when the client supplies an empty or unusable filename.
const DEFAULT_FILENAME: &str = "upload.pdf";

/// Whether a declared content type is accepted for upload.
///
/// Anything other than `application/pdf` is soft-rejected: the caller
/// treats the upload as "no file provided" rather than failing the request.
pub fn is_accepted_mime(content_type: &str) -> bool {
    content_type == PDF_MIME
}

/// Generate a stored filename for an upload.
///
/// The original name is prefixed with the given Unix-millisecond timestamp
/// to avoid collisions. Not cryptographically unique: two uploads in the
/// same millisecond with the same name collide, which is tolerated at the
/// expected load. Path components in the client-supplied name are stripped.
pub fn stored_filename(unix_millis: i64, original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_FILENAME);
    format!("{unix_millis}-{base}")
}
