//! Booking State
//!
//! The single piece of mutable state behind a booking wizard. It is owned by
//! [`crate::wizard::BookingWizard`] and only changed through its transitions.

use mindbridge_common::Counselor;
use serde::Serialize;
use std::fmt;

/// Wizard step, ordinal 1..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BookingStep {
    /// Step 1: pick a counselor
    ChooseCounselor,

    /// Step 2: pick a date, then an available time
    ChooseSlot,

    /// Step 3: booking confirmed, reference shown
    Confirmed,
}

impl BookingStep {
    pub const ALL: [BookingStep; 3] = [
        BookingStep::ChooseCounselor,
        BookingStep::ChooseSlot,
        BookingStep::Confirmed,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            BookingStep::ChooseCounselor => 1,
            BookingStep::ChooseSlot => 2,
            BookingStep::Confirmed => 3,
        }
    }
}

impl Default for BookingStep {
    fn default() -> Self {
        BookingStep::ChooseCounselor
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStep::ChooseCounselor => "choose counselor",
            BookingStep::ChooseSlot => "choose date & time",
            BookingStep::Confirmed => "confirmed",
        };
        write!(f, "step {} ({})", self.ordinal(), name)
    }
}

/// Everything the student has chosen so far
///
/// `date` and `time` only carry meaning while `counselor` is set, and
/// `reference` only while `step` is [`BookingStep::Confirmed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingState {
    pub step: BookingStep,
    pub counselor: Option<Counselor>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub reference: Option<String>,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True for a freshly started or reset wizard
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ordering() {
        let ordinals: Vec<u8> = BookingStep::ALL.iter().map(|s| s.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
        assert!(BookingStep::ChooseCounselor < BookingStep::ChooseSlot);
        assert!(BookingStep::ChooseSlot < BookingStep::Confirmed);
    }

    #[test]
    fn test_initial_state() {
        let state = BookingState::new();
        assert_eq!(state.step, BookingStep::ChooseCounselor);
        assert!(state.counselor.is_none());
        assert!(state.date.is_none());
        assert!(state.time.is_none());
        assert!(state.reference.is_none());
        assert!(state.is_initial());
    }

    #[test]
    fn test_step_display() {
        assert_eq!(BookingStep::ChooseSlot.to_string(), "step 2 (choose date & time)");
    }
}
