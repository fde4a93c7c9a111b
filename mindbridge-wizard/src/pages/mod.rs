//! Wizard Pages - One view description per booking step
//!
//! Each page is built from the catalog and the relevant part of the state;
//! none of them mutate anything.

mod confirmation;
mod counselors;
mod schedule;

pub use confirmation::{ConfirmationPage, DetailRow};
pub use counselors::{CounselorCard, CounselorsPage};
pub use schedule::{CounselorSummary, DateOption, DatePicker, SchedulePage, SlotButton};
