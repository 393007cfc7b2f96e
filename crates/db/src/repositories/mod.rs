//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod book_repo;
pub mod user_repo;

pub use book_repo::BookRepo;
pub use user_repo::UserRepo;
