//! Handler for the `/user` profile endpoint.

use axum::extract::State;
use axum::Json;

use readstack_core::error::CoreError;
use readstack_db::models::user::UserProfile;
use readstack_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::state::AppState;

/// GET /user
///
/// Return the session user's public profile: `{id, name, email}`.
pub async fn get_profile(
    session: Session,
    State(state): State<AppState>,
) -> AppResult<Json<UserProfile>> {
    let profile = UserRepo::profile(&state.pool, session.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: session.user_id,
        }))?;

    Ok(Json(profile))
}
