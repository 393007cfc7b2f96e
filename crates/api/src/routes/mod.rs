//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                      service + database health
//!
//! /auth/signup                 create account (public)
//! /auth/login                  verify credentials (public)
//!
//! /books                       list, create
//! /books/{id}                  get, update, delete
//! /books/{id}/progress         set reading progress (PUT)
//! /books/{id}/complete         toggle completion (PUT)
//!
//! /user                        session user's profile
//!
//! /uploads/*                   static PDF artifacts (ServeDir)
//! ```

pub mod accounts;
pub mod books;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree (everything except `/health` and `/uploads`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", accounts::router())
        .nest("/books", books::router())
        .merge(user::router())
}
