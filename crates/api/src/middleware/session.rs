//! Session extractor for Axum handlers.
//!
//! Identity arrives either as an `x-user-id` header injected by a trusted
//! edge proxy after it has validated the session cookie, or as the raw
//! `userId` cookie itself. The header takes precedence; the cookie is only
//! consulted when the header is absent. Handlers receive the resolved
//! identity as an explicit parameter rather than looking it up ambiently.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use readstack_core::error::CoreError;
use readstack_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the trusted identity header set by the edge.
const USER_ID_HEADER: &str = "x-user-id";
/// Name of the raw session cookie.
const USER_ID_COOKIE: &str = "userId";

/// The authenticated caller, resolved from header or cookie.
///
/// Use as an extractor parameter in any handler that requires a session:
///
/// ```ignore
/// async fn my_handler(session: Session) -> AppResult<Json<()>> {
///     tracing::debug!(user_id = session.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Session {
    /// The caller's internal database id.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = header_user_id(parts).or_else(|| cookie_user_id(parts));

        let raw = raw.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("User not authenticated".into()))
        })?;

        let user_id: DbId = raw.parse().map_err(|_| {
            AppError::Core(CoreError::Unauthorized("User not authenticated".into()))
        })?;

        Ok(Session { user_id })
    }
}

/// The `x-user-id` header value, if present and valid UTF-8.
fn header_user_id(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// The `userId` cookie value, scanned across all `Cookie` headers.
fn cookie_user_id(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == USER_ID_COOKIE).then(|| value.to_string())
        })
        .next()
        .filter(|v| !v.is_empty())
}
