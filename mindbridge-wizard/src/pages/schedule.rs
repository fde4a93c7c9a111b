//! Schedule Page - Step 2, date selector and time slots
//!
//! Slot buttons only appear once a date is chosen. They are listed in
//! catalog order and disabled when the slot is unavailable.

use mindbridge_common::catalog::date_label;
use mindbridge_common::{Catalog, Counselor, TimeSlot};
use serde::Serialize;

/// Label of the "no date chosen" selector entry
pub const DATE_PLACEHOLDER: &str = "Choose a date";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulePage {
    pub title: String,
    pub description: String,
    pub counselor: CounselorSummary,
    pub session_details: Vec<String>,
    pub change_label: String,
    pub date_picker: DatePicker,

    /// `None` until a date is selected
    pub slots: Option<Vec<SlotButton>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounselorSummary {
    pub avatar: String,
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePicker {
    pub options: Vec<DateOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateOption {
    /// ISO date, `None` for the placeholder
    pub value: Option<String>,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotButton {
    pub id: String,
    pub time: String,
    pub enabled: bool,
}

impl From<&TimeSlot> for SlotButton {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            id: slot.id.clone(),
            time: slot.time.clone(),
            enabled: slot.available,
        }
    }
}

impl DatePicker {
    /// Placeholder first, then every catalog date in first-appearance order
    pub fn build(selected: Option<&str>, catalog: &Catalog) -> Self {
        let placeholder = DateOption {
            value: None,
            label: DATE_PLACEHOLDER.to_string(),
            selected: selected.is_none(),
        };

        let dates = catalog.dates().into_iter().map(|date| DateOption {
            value: Some(date.to_string()),
            label: date_label(date),
            selected: selected == Some(date),
        });

        Self {
            options: std::iter::once(placeholder).chain(dates).collect(),
        }
    }
}

impl SchedulePage {
    pub fn build(counselor: Option<&Counselor>, date: Option<&str>, catalog: &Catalog) -> Self {
        let name = counselor.map(|c| c.name.clone()).unwrap_or_default();
        let session = &catalog.session;

        Self {
            title: "Select Date & Time".to_string(),
            description: format!(
                "Choose a convenient time slot for your anonymous session with {}",
                name
            ),
            counselor: CounselorSummary {
                avatar: counselor.map(|c| c.avatar.clone()).unwrap_or_default(),
                name,
                title: counselor.map(|c| c.title.clone()).unwrap_or_default(),
            },
            session_details: vec![
                format!("Duration: {} minutes", session.duration_minutes),
                format!("Format: {}", session.format),
                "Anonymous reference ID will be provided".to_string(),
                "No personal information required".to_string(),
            ],
            change_label: "Change Counselor".to_string(),
            date_picker: DatePicker::build(date, catalog),
            slots: date.map(|d| catalog.slots_on(d).map(SlotButton::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_slots_before_date() {
        let catalog = Catalog::builtin();
        let page = SchedulePage::build(catalog.counselor("2"), None, &catalog);

        assert!(page.slots.is_none());
        assert_eq!(
            page.description,
            "Choose a convenient time slot for your anonymous session with Dr. Rajesh Kumar"
        );
        assert_eq!(page.session_details[0], "Duration: 50 minutes");
        assert!(page.date_picker.options[0].selected);
    }

    #[test]
    fn test_date_picker_options() {
        let catalog = Catalog::builtin();
        let picker = DatePicker::build(Some("2025-09-26"), &catalog);

        let labels: Vec<&str> = picker.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Choose a date", "Wed Sep 24 2025", "Thu Sep 25 2025", "Fri Sep 26 2025", "Sat Sep 27 2025"]
        );
        let selected: Vec<bool> = picker.options.iter().map(|o| o.selected).collect();
        assert_eq!(selected, vec![false, false, false, true, false]);
    }

    #[test]
    fn test_slots_for_selected_date() {
        let catalog = Catalog::builtin();
        let page = SchedulePage::build(catalog.counselor("2"), Some("2025-09-25"), &catalog);
        let slots = page.slots.unwrap();

        let ids: Vec<&str> = slots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "8", "9", "10", "11", "12"]);

        let disabled: Vec<&str> = slots.iter().filter(|s| !s.enabled).map(|s| s.time.as_str()).collect();
        assert_eq!(disabled, vec!["2:00 PM"]);
    }
}
