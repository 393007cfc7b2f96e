//! Row types and DTOs for the persistence layer.

pub mod book;
pub mod user;
