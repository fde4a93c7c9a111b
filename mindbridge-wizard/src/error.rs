//! Wizard errors
//!
//! A front end that only offers valid choices never sees these. They guard
//! direct library callers; a rejected action leaves the state untouched.

use crate::state::BookingStep;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("no counselor with id '{0}'")]
    UnknownCounselor(String),

    #[error("no time slots on {0}")]
    UnknownDate(String),

    #[error("no time slot with id '{0}'")]
    UnknownSlot(String),

    #[error("slot {slot} is on {slot_date}, not the selected date {selected}")]
    SlotNotOnDate {
        slot: String,
        slot_date: String,
        selected: String,
    },

    #[error("choose a date before picking a time")]
    NoDateSelected,

    #[error("'{action}' is not available at {step}")]
    WrongStep {
        action: &'static str,
        step: BookingStep,
    },
}
