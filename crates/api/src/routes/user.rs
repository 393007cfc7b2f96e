//! Route definition for the `/user` profile endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/user", get(user::get_profile))
}
