//! MindBridge Wizard Library
//!
//! The counselor booking flow:
//! - Booking state and its three steps
//! - The wizard state machine
//! - Pure view rendering for each step

pub use mindbridge_common::{catalog, model, reference};

pub mod error;
pub mod pages;
pub mod state;
pub mod view;
pub mod wizard;

pub use error::BookingError;
pub use state::{BookingState, BookingStep};
pub use view::{render, Page, View};
pub use wizard::{Action, BookingWizard, Transition};
