//! Confirmation Page - Step 3, booking summary and reference

use crate::state::BookingState;
use mindbridge_common::Catalog;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationPage {
    pub title: String,
    pub message: String,
    pub details: Vec<DetailRow>,
    pub reference: String,
    pub important: Vec<String>,
    pub book_another_label: String,
    pub contact_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

impl ConfirmationPage {
    pub fn build(state: &BookingState, catalog: &Catalog) -> Self {
        let reference = state.reference.clone().unwrap_or_default();
        let counselor = state
            .counselor
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default();

        Self {
            title: "Booking Confirmed! 🎉".to_string(),
            message: "Your anonymous counseling session has been successfully scheduled.".to_string(),
            details: vec![
                DetailRow::new("Counselor", counselor),
                DetailRow::new("Date", state.date.clone().unwrap_or_default()),
                DetailRow::new("Time", state.time.clone().unwrap_or_default()),
                DetailRow::new("Reference ID", reference.clone()),
                DetailRow::new(
                    "Duration",
                    format!("{} minutes", catalog.session.duration_minutes),
                ),
            ],
            important: vec![
                format!("Save your Reference ID: {}", reference),
                "No personal information is stored or required".to_string(),
                "Arrive 10 minutes early for in-person sessions".to_string(),
                "Session confirmation will be sent to the provided contact method".to_string(),
            ],
            reference,
            book_another_label: "Book Another Session".to_string(),
            contact_label: "Contact Support".to_string(),
        }
    }
}
