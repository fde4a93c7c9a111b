//! View Description
//!
//! `render` turns a [`BookingState`] into plain data describing what the
//! current step shows. It has no side effects; front ends decide how to draw
//! the result (the CLI prints it as text or JSON).

use crate::pages::{ConfirmationPage, CounselorsPage, SchedulePage};
use crate::state::{BookingState, BookingStep};
use crate::wizard::Action;
use mindbridge_common::Catalog;
use serde::Serialize;

/// Everything needed to draw one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub step: BookingStep,

    /// Progress markers; absent on the confirmation page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<StepIndicator>,

    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Counselors(CounselorsPage),
    Schedule(SchedulePage),
    Confirmation(ConfirmationPage),
}

/// Marker state in the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
    Done,
    Current,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepMarker {
    pub ordinal: u8,
    pub status: MarkerStatus,
}

impl StepMarker {
    /// "✔" for finished steps, the step number otherwise
    pub fn label(&self) -> String {
        match self.status {
            MarkerStatus::Done => "✔".to_string(),
            _ => self.ordinal.to_string(),
        }
    }

    /// Current and finished steps are highlighted
    pub fn is_highlighted(&self) -> bool {
        self.status != MarkerStatus::Pending
    }
}

/// Three markers joined by two connectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub markers: Vec<StepMarker>,

    /// `connectors[i]` joins marker i and i+1, active once step i+1 is done
    pub connectors: Vec<bool>,
}

impl StepIndicator {
    pub fn for_step(step: BookingStep) -> Self {
        let markers = BookingStep::ALL
            .iter()
            .map(|&marker| StepMarker {
                ordinal: marker.ordinal(),
                status: if step > marker {
                    MarkerStatus::Done
                } else if step == marker {
                    MarkerStatus::Current
                } else {
                    MarkerStatus::Pending
                },
            })
            .collect();

        let connectors = BookingStep::ALL[..BookingStep::ALL.len() - 1]
            .iter()
            .map(|&marker| step > marker)
            .collect();

        Self { markers, connectors }
    }
}

/// Build the view for `state`
pub fn render(state: &BookingState, catalog: &Catalog) -> View {
    let counselor = state.counselor.as_ref();

    let (indicator, page) = match state.step {
        BookingStep::ChooseCounselor => (
            Some(StepIndicator::for_step(state.step)),
            Page::Counselors(CounselorsPage::build(catalog)),
        ),
        BookingStep::ChooseSlot => (
            Some(StepIndicator::for_step(state.step)),
            Page::Schedule(SchedulePage::build(counselor, state.date.as_deref(), catalog)),
        ),
        BookingStep::Confirmed => (None, Page::Confirmation(ConfirmationPage::build(state, catalog))),
    };

    View { step: state.step, indicator, page }
}

impl View {
    /// Actions the user can take from this view, in display order
    ///
    /// Disabled slot buttons are not included.
    pub fn actions(&self) -> Vec<Action> {
        match &self.page {
            Page::Counselors(page) => page
                .cards
                .iter()
                .map(|card| Action::SelectCounselor(card.id.clone()))
                .collect(),
            Page::Schedule(page) => {
                let mut actions: Vec<Action> = page
                    .slots
                    .iter()
                    .flatten()
                    .filter(|slot| slot.enabled)
                    .map(|slot| Action::SelectSlot(slot.id.clone()))
                    .collect();
                actions.extend(
                    page.date_picker
                        .options
                        .iter()
                        .map(|option| Action::SelectDate(option.value.clone())),
                );
                actions.push(Action::ChangeCounselor);
                actions
            }
            Page::Confirmation(_) => vec![Action::BookAnother, Action::ContactSupport],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::BookingWizard;
    use std::sync::Arc;

    #[test]
    fn test_indicator_per_step() {
        let first = StepIndicator::for_step(BookingStep::ChooseCounselor);
        let labels: Vec<String> = first.markers.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
        assert_eq!(first.connectors, vec![false, false]);
        assert!(first.markers[0].is_highlighted());
        assert!(!first.markers[1].is_highlighted());

        let second = StepIndicator::for_step(BookingStep::ChooseSlot);
        let labels: Vec<String> = second.markers.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["✔", "2", "3"]);
        assert_eq!(second.connectors, vec![true, false]);
        assert_eq!(second.markers[1].status, MarkerStatus::Current);
    }

    #[test]
    fn test_render_follows_state() {
        let mut wizard = BookingWizard::new(Arc::new(Catalog::builtin()));

        let view = wizard.render();
        assert!(matches!(view.page, Page::Counselors(_)));
        assert_eq!(view.actions().len(), 4);

        wizard.select_counselor("1").unwrap();
        let view = wizard.render();
        assert!(view.indicator.is_some());
        match &view.page {
            Page::Schedule(page) => assert!(page.slots.is_none()),
            other => panic!("Expected schedule page, got {:?}", other),
        }
        // 5 date options + change counselor, no slots yet
        assert_eq!(view.actions().len(), 6);

        wizard.select_date(Some("2025-09-24")).unwrap();
        let actions = wizard.render().actions();
        assert_eq!(actions[0], Action::SelectSlot("1".to_string()));
        assert!(!actions.contains(&Action::SelectSlot("3".to_string())));
        assert!(!actions.contains(&Action::SelectSlot("6".to_string())));

        wizard.select_slot("5").unwrap();
        let view = wizard.render();
        assert!(view.indicator.is_none());
        assert_eq!(view.actions(), vec![Action::BookAnother, Action::ContactSupport]);
    }

    #[test]
    fn test_render_is_pure() {
        let catalog = Catalog::builtin();
        let state = BookingState::new();
        assert_eq!(render(&state, &catalog), render(&state, &catalog));
        assert!(state.is_initial());
    }

    #[test]
    fn test_view_serializes() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(render(&BookingState::new(), &catalog)).unwrap();
        assert_eq!(json["step"], "ChooseCounselor");
        assert_eq!(json["page"]["kind"], "counselors");
        assert_eq!(json["page"]["cards"][1]["book_label"], "Book with Rajesh");
    }
}
