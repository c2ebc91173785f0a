//! # Bakery SDK
//!
//! Client SDK for the Bakery API.

pub mod client;

pub use client::BakeryClient;

/// Prelude module for common imports.
pub mod prelude {
    pub use crate::client::BakeryClient;
    pub use bakery_core::prelude::*;
}
