//! MindBridge Common Library
//!
//! Reference data shared by the booking wizard and the CLI:
//! - Counselor and time slot types
//! - The built-in catalog and mindbridge.toml parsing
//! - Booking reference codes

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod reference;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use model::{Counselor, SessionSettings, TimeSlot};
