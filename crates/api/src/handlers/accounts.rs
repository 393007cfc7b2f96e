//! Handlers for account signup and login.
//!
//! These endpoints authenticate credentials and return the public profile;
//! issuing the `userId` session cookie is left to the edge proxy, which
//! also injects the trusted `x-user-id` header on later requests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use readstack_core::error::CoreError;
use readstack_db::models::user::{CreateUser, UserProfile};
use readstack_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// JSON body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub name: Option<String>,
}

/// JSON body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/signup
///
/// Create an account. The password is stored only as an argon2id hash.
/// A duplicate email surfaces as 409 via the `uq_users_email` constraint.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserProfile>)> {
    body.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::InternalError(format!("hashing password: {e}")))?;

    let input = CreateUser {
        email: body.email,
        password_hash,
        name: body.name,
    };
    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "Account created");
    Ok((StatusCode::CREATED, Json(user.profile())))
}

/// POST /auth/login
///
/// Verify credentials and return the profile. Unknown email and wrong
/// password produce the same 401 so the response does not reveal which
/// half failed.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<UserProfile>> {
    let user = UserRepo::find_by_email(&state.pool, &body.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let verified = verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("verifying password: {e}")))?;
    if !verified {
        return Err(invalid_credentials());
    }

    Ok(Json(user.profile()))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}
