//! Route definitions for account signup and login.
//!
//! Mounted under `/auth`. Both routes are public; session identity for the
//! rest of the API is carried by the edge-injected `x-user-id` header or
//! the raw `userId` cookie.

use axum::routing::post;
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(accounts::signup))
        .route("/login", post(accounts::login))
}
