//! HTTP handlers, grouped by resource.

pub mod accounts;
pub mod books;
pub mod user;
