//! Catalog validation errors

use thiserror::Error;

/// Reasons a catalog is rejected
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog has no counselors")]
    NoCounselors,

    #[error("duplicate counselor id: {0}")]
    DuplicateCounselor(String),

    #[error("duplicate slot id: {0}")]
    DuplicateSlot(String),

    #[error("slot {id} has an invalid date '{date}' (expected YYYY-MM-DD)")]
    InvalidDate { id: String, date: String },

    #[error("counselor {id} has rating {rating}, expected 0 to 5")]
    InvalidRating { id: String, rating: f32 },

    #[error("reference prefix '{0}' must be non-empty ASCII alphanumeric")]
    InvalidReferencePrefix(String),

    #[error("session duration must be greater than zero")]
    ZeroDuration,
}
