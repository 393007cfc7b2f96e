//! Request-scoped extractors.

pub mod session;
