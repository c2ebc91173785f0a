//! HTTP handlers.

pub mod check;
pub mod error;
pub mod health;
pub mod root;

pub use error::ApiError;
