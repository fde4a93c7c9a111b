//! Booking Wizard - Three-step counselor booking flow
//!
//! ChooseCounselor -> ChooseSlot -> Confirmed, and back to the start via
//! "Book Another Session". Every transition mutates the owned
//! [`BookingState`]; the view is rebuilt from scratch with [`BookingWizard::render`].

use crate::error::BookingError;
use crate::state::{BookingState, BookingStep};
use crate::view::{self, View};
use mindbridge_common::reference::{RandomReferences, ReferenceGenerator};
use mindbridge_common::{Catalog, TimeSlot};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A user interaction the wizard understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Counselor card or its "Book with ..." button
    SelectCounselor(String),
    /// "Change Counselor"
    ChangeCounselor,
    /// Date selector change; `None` is the "Choose a date" entry
    SelectDate(Option<String>),
    /// Time slot button
    SelectSlot(String),
    /// "Book Another Session"
    BookAnother,
    /// "Contact Support"
    ContactSupport,
}

/// Outcome of an accepted action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved to another step
    Moved { from: BookingStep, to: BookingStep },

    /// Same step, state updated (date change)
    Stayed,

    /// Nothing changed (unavailable slot)
    Ignored,

    /// Informational message for the user, state unchanged
    Notice(String),
}

/// Drives one booking session
#[derive(Debug)]
pub struct BookingWizard {
    catalog: Arc<Catalog>,
    state: BookingState,
    references: Box<dyn ReferenceGenerator>,
}

impl BookingWizard {
    /// New wizard with random booking references
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_references(catalog, Box::new(RandomReferences::new()))
    }

    /// New wizard with a custom reference source
    pub fn with_references(catalog: Arc<Catalog>, references: Box<dyn ReferenceGenerator>) -> Self {
        Self {
            catalog,
            state: BookingState::new(),
            references,
        }
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn step(&self) -> BookingStep {
        self.state.step
    }

    /// Rebuild the view for the current state
    pub fn render(&self) -> View {
        view::render(&self.state, &self.catalog)
    }

    /// Slots shown for the selected date, empty until a date is chosen
    pub fn visible_slots(&self) -> Vec<&TimeSlot> {
        match self.state.date.as_deref() {
            Some(date) => self.catalog.slots_on(date).collect(),
            None => Vec::new(),
        }
    }

    /// Apply a user interaction
    pub fn dispatch(&mut self, action: &Action) -> Result<Transition, BookingError> {
        match action {
            Action::SelectCounselor(id) => self.select_counselor(id),
            Action::ChangeCounselor => self.change_counselor(),
            Action::SelectDate(date) => self.select_date(date.as_deref()),
            Action::SelectSlot(id) => self.select_slot(id),
            Action::BookAnother => self.book_another(),
            Action::ContactSupport => Ok(Transition::Notice(self.contact_support().to_string())),
        }
    }

    /// Step 1 -> 2: pick a counselor
    pub fn select_counselor(&mut self, id: &str) -> Result<Transition, BookingError> {
        self.require_step(BookingStep::ChooseCounselor, "select counselor")?;

        let counselor = self
            .catalog
            .counselor(id)
            .cloned()
            .ok_or_else(|| BookingError::UnknownCounselor(id.to_string()))?;

        debug!("Counselor selected: {} ({})", counselor.name, counselor.id);
        self.state.counselor = Some(counselor);
        self.state.date = None;
        self.state.time = None;
        self.state.reference = None;

        Ok(self.move_to(BookingStep::ChooseSlot))
    }

    /// Step 2 -> 1: "Change Counselor"
    ///
    /// Drops the date as well; it belongs to the abandoned counselor choice.
    pub fn change_counselor(&mut self) -> Result<Transition, BookingError> {
        self.require_step(BookingStep::ChooseSlot, "change counselor")?;

        self.state.counselor = None;
        self.state.date = None;
        self.state.time = None;

        Ok(self.move_to(BookingStep::ChooseCounselor))
    }

    /// Step 2 self-loop: pick a date, or `None` for "Choose a date"
    ///
    /// Always clears the chosen time so a stale time can never be confirmed
    /// against a different date.
    pub fn select_date(&mut self, date: Option<&str>) -> Result<Transition, BookingError> {
        self.require_step(BookingStep::ChooseSlot, "select date")?;

        if let Some(date) = date {
            if !self.catalog.has_date(date) {
                return Err(BookingError::UnknownDate(date.to_string()));
            }
        }

        debug!("Date selected: {}", date.unwrap_or("<none>"));
        self.state.date = date.map(str::to_string);
        self.state.time = None;

        Ok(Transition::Stayed)
    }

    /// Step 2 -> 3: pick a time slot on the selected date
    ///
    /// Unavailable slots are ignored and leave the state as it was.
    pub fn select_slot(&mut self, slot_id: &str) -> Result<Transition, BookingError> {
        self.require_step(BookingStep::ChooseSlot, "select time")?;

        let selected = self.state.date.as_deref().ok_or(BookingError::NoDateSelected)?;
        let slot = self
            .catalog
            .slot(slot_id)
            .ok_or_else(|| BookingError::UnknownSlot(slot_id.to_string()))?;

        if slot.date != selected {
            return Err(BookingError::SlotNotOnDate {
                slot: slot.id.clone(),
                slot_date: slot.date.clone(),
                selected: selected.to_string(),
            });
        }

        if !slot.available {
            warn!("Ignoring unavailable slot {} ({} {})", slot.id, slot.date, slot.time);
            return Ok(Transition::Ignored);
        }

        let time = slot.time.clone();
        let reference = self
            .references
            .next_reference(&self.catalog.session.reference_prefix);

        info!(
            "Booking confirmed: {} on {} at {} ({})",
            self.state.counselor.as_ref().map(|c| c.name.as_str()).unwrap_or_default(),
            selected,
            time,
            reference
        );
        self.state.time = Some(time);
        self.state.reference = Some(reference);

        Ok(self.move_to(BookingStep::Confirmed))
    }

    /// Step 3 -> 1: "Book Another Session"
    pub fn book_another(&mut self) -> Result<Transition, BookingError> {
        self.require_step(BookingStep::Confirmed, "book another session")?;

        let from = self.state.step;
        self.reset();
        Ok(Transition::Moved { from, to: BookingStep::ChooseCounselor })
    }

    /// Clear every choice and return to step 1, from any step
    pub fn reset(&mut self) {
        debug!("Wizard reset from {}", self.state.step);
        self.state = BookingState::new();
    }

    /// Support contact line for the "Contact Support" button
    pub fn contact_support(&self) -> &str {
        &self.catalog.session.support_contact
    }

    fn require_step(&self, expected: BookingStep, action: &'static str) -> Result<(), BookingError> {
        if self.state.step == expected {
            Ok(())
        } else {
            Err(BookingError::WrongStep { action, step: self.state.step })
        }
    }

    fn move_to(&mut self, to: BookingStep) -> Transition {
        let from = self.state.step;
        self.state.step = to;
        debug!("Wizard {} -> {}", from, to);
        Transition::Moved { from, to }
    }
}
