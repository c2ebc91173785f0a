//! # Bakery Core
//!
//! Core types for the Bakery API.
//!
//! This crate provides:
//! - [`Menu`] - The ordered list of known items and the substring matcher
//! - [`Availability`] - Outcome of an item check, rendered as a customer message
//! - [`HoursTable`] - The weekly opening hours loaded from JSON
//! - [`BakeryError`] - Error types

pub mod error;
pub mod hours;
pub mod menu;
pub mod message;

// Re-exports for convenience
pub use error::{BakeryError, Result};
pub use hours::{DayHours, HoursTable};
pub use menu::{Availability, Menu, KNOWN_ITEMS};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{BakeryError, Result};
    pub use crate::hours::{DayHours, HoursTable};
    pub use crate::menu::{Availability, Menu};
    pub use crate::message::{query_received, RUNNING_MESSAGE};
}
