//! Booking Reference Codes
//!
//! A reference is the configured prefix followed by [`REFERENCE_LEN`]
//! upper-case alphanumeric characters, e.g. `CM7K2QX9AB`. Codes are not
//! cryptographically secure and uniqueness is best-effort: bookings are
//! never stored, so nothing checks for collisions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Number of characters after the prefix
pub const REFERENCE_LEN: usize = 8;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of booking references
pub trait ReferenceGenerator: fmt::Debug + Send {
    /// Produce the next reference for `prefix`
    fn next_reference(&mut self, prefix: &str) -> String;
}

/// Pseudo-random references (the default)
#[derive(Debug)]
pub struct RandomReferences {
    rng: StdRng,
}

impl RandomReferences {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Deterministic sequence, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomReferences {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceGenerator for RandomReferences {
    fn next_reference(&mut self, prefix: &str) -> String {
        let suffix: String = (0..REFERENCE_LEN)
            .map(|_| CHARSET[self.rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        format!("{}{}", prefix, suffix)
    }
}

/// Monotonic references: prefix plus a zero-padded counter
///
/// Unique within one process, wraps after 10^8 bookings.
#[derive(Debug, Default)]
pub struct SequentialReferences {
    next: u64,
}

impl SequentialReferences {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl ReferenceGenerator for SequentialReferences {
    fn next_reference(&mut self, prefix: &str) -> String {
        let value = self.next % 100_000_000;
        self.next = self.next.wrapping_add(1);
        format!("{}{:08}", prefix, value)
    }
}

/// Whether `reference` is `prefix` followed by 8 upper-case alphanumerics
pub fn is_well_formed(reference: &str, prefix: &str) -> bool {
    match reference.strip_prefix(prefix) {
        Some(suffix) => {
            suffix.len() == REFERENCE_LEN
                && suffix.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        }
        None => false,
    }
}
