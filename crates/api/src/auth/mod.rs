//! Account credential helpers.

pub mod password;
