//! Booking Catalog
//!
//! The reference data a wizard is built from: counselors, time slots and
//! session settings. Ships with the campus defaults; a `mindbridge.toml`
//! can replace any part of it (see [`crate::config`]).

use crate::error::CatalogError;
use crate::model::{Counselor, SessionSettings, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Counselors, slots and session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default = "builtin_counselors")]
    pub counselors: Vec<Counselor>,

    #[serde(default = "builtin_slots")]
    pub slots: Vec<TimeSlot>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in campus catalog: 4 counselors, 24 slots over 4 days
    pub fn builtin() -> Self {
        Self {
            session: SessionSettings::default(),
            counselors: builtin_counselors(),
            slots: builtin_slots(),
        }
    }

    /// Look up a counselor by id
    pub fn counselor(&self, id: &str) -> Option<&Counselor> {
        self.counselors.iter().find(|c| c.id == id)
    }

    /// Look up a slot by id
    pub fn slot(&self, id: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Slots on the given date, in catalog order
    pub fn slots_on<'a>(&'a self, date: &'a str) -> impl Iterator<Item = &'a TimeSlot> + 'a {
        self.slots.iter().filter(move |s| s.date == date)
    }

    /// Distinct slot dates in first-appearance order
    pub fn dates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.slots
            .iter()
            .map(|s| s.date.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }

    /// Whether any slot falls on this date
    pub fn has_date(&self, date: &str) -> bool {
        self.slots.iter().any(|s| s.date == date)
    }

    /// Check the catalog for data the wizard cannot work with
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.counselors.is_empty() {
            return Err(CatalogError::NoCounselors);
        }

        let mut ids = HashSet::new();
        for counselor in &self.counselors {
            if !ids.insert(counselor.id.as_str()) {
                return Err(CatalogError::DuplicateCounselor(counselor.id.clone()));
            }
            if !(0.0..=5.0).contains(&counselor.rating) {
                return Err(CatalogError::InvalidRating {
                    id: counselor.id.clone(),
                    rating: counselor.rating,
                });
            }
        }

        let mut ids = HashSet::new();
        for slot in &self.slots {
            if !ids.insert(slot.id.as_str()) {
                return Err(CatalogError::DuplicateSlot(slot.id.clone()));
            }
            if parse_iso_date(&slot.date).is_none() {
                return Err(CatalogError::InvalidDate {
                    id: slot.id.clone(),
                    date: slot.date.clone(),
                });
            }
        }

        let prefix = &self.session.reference_prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CatalogError::InvalidReferencePrefix(prefix.clone()));
        }

        if self.session.duration_minutes == 0 {
            return Err(CatalogError::ZeroDuration);
        }

        Ok(())
    }
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Label for the date selector, e.g. "Thu Sep 25 2025"
///
/// Falls back to the raw string for dates that do not parse.
pub fn date_label(date: &str) -> String {
    match parse_iso_date(date) {
        Some(day) => day.format("%a %b %d %Y").to_string(),
        None => date.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn counselor(
    id: &str,
    name: &str,
    title: &str,
    specialization: &[&str],
    institution: &str,
    experience: &str,
    rating: f32,
    total_sessions: u32,
    languages: &[&str],
    available_days: &[&str],
    avatar: &str,
) -> Counselor {
    Counselor {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        specialization: owned(specialization),
        institution: institution.to_string(),
        experience: experience.to_string(),
        rating,
        total_sessions,
        languages: owned(languages),
        available_days: owned(available_days),
        avatar: avatar.to_string(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_counselors() -> Vec<Counselor> {
    vec![
        counselor(
            "1",
            "Dr. Priya Sharma",
            "Licensed Clinical Psychologist",
            &["Academic Stress", "Anxiety Disorders", "Depression", "Cultural Counseling"],
            "University of Kashmir",
            "8+ years",
            4.9,
            1247,
            &["English", "Hindi", "Kashmiri"],
            &["Monday", "Wednesday", "Friday"],
            "👩‍⚕️",
        ),
        counselor(
            "2",
            "Dr. Rajesh Kumar",
            "Counseling Psychologist",
            &["Student Counseling", "Career Guidance", "Social Anxiety", "Relationship Issues"],
            "University of Jammu",
            "12+ years",
            4.8,
            2156,
            &["English", "Hindi", "Urdu", "Dogri"],
            &["Tuesday", "Thursday", "Saturday"],
            "👨‍⚕️",
        ),
        counselor(
            "3",
            "Dr. Meera Devi",
            "Psychiatric Social Worker",
            &["Trauma Counseling", "Family Therapy", "Addiction Counseling", "Crisis Intervention"],
            "NIT Srinagar",
            "6+ years",
            4.7,
            892,
            &["English", "Hindi", "Kashmiri"],
            &["Monday", "Tuesday", "Thursday"],
            "👩‍⚕️",
        ),
        counselor(
            "4",
            "Dr. Arjun Singh",
            "Clinical Psychologist",
            &["Men's Mental Health", "Sports Psychology", "Performance Anxiety", "Behavioral Therapy"],
            "SMVD University",
            "10+ years",
            4.8,
            1678,
            &["English", "Hindi", "Punjabi"],
            &["Wednesday", "Friday", "Saturday"],
            "👨‍⚕️",
        ),
    ]
}

fn builtin_slots() -> Vec<TimeSlot> {
    const TIMES: [&str; 6] = ["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"];
    // Unavailable times per day
    const DAYS: [(&str, &[&str]); 4] = [
        ("2025-09-24", &["11:00 AM", "4:00 PM"]),
        ("2025-09-25", &["2:00 PM"]),
        ("2025-09-26", &["10:00 AM"]),
        ("2025-09-27", &["4:00 PM"]),
    ];

    DAYS.iter()
        .flat_map(|(date, taken)| {
            TIMES.iter().map(move |time| (*date, *time, !taken.contains(time)))
        })
        .enumerate()
        .map(|(index, (date, time, available))| TimeSlot {
            id: (index + 1).to_string(),
            time: time.to_string(),
            date: date.to_string(),
            available,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.counselors.len(), 4);
        assert_eq!(catalog.slots.len(), 24);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_builtin_slot_layout() {
        let catalog = Catalog::builtin();

        let ten = catalog.slot("10").unwrap();
        assert_eq!(ten.date, "2025-09-25");
        assert_eq!(ten.time, "2:00 PM");
        assert!(!ten.available);

        let eleven = catalog.slot("11").unwrap();
        assert_eq!(eleven.time, "3:00 PM");
        assert!(eleven.available);

        let unavailable: Vec<&str> = catalog
            .slots
            .iter()
            .filter(|s| !s.available)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(unavailable, vec!["3", "6", "10", "14", "24"]);
    }

    #[test]
    fn test_slots_on_preserves_order() {
        let catalog = Catalog::builtin();
        for date in catalog.dates() {
            let filtered: Vec<&TimeSlot> = catalog.slots_on(date).collect();
            let expected: Vec<&TimeSlot> = catalog.slots.iter().filter(|s| s.date == date).collect();
            assert_eq!(filtered, expected);
            assert!(filtered.iter().all(|s| s.date == date));
        }

        let ids: Vec<&str> = catalog.slots_on("2025-09-25").map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "8", "9", "10", "11", "12"]);
    }

    #[test]
    fn test_dates_first_appearance() {
        let mut catalog = Catalog::builtin();
        catalog.slots.swap(0, 23);
        assert_eq!(
            catalog.dates(),
            vec!["2025-09-27", "2025-09-24", "2025-09-25", "2025-09-26"]
        );
        assert!(catalog.has_date("2025-09-26"));
        assert!(!catalog.has_date("2025-10-01"));
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label("2025-09-24"), "Wed Sep 24 2025");
        assert_eq!(date_label("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_validate_rejects_bad_data() {
        let mut catalog = Catalog::builtin();
        catalog.slots[3].id = "1".to_string();
        assert_eq!(catalog.validate(), Err(CatalogError::DuplicateSlot("1".to_string())));

        let mut catalog = Catalog::builtin();
        catalog.slots[0].date = "24/09/2025".to_string();
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidDate { .. })));

        let mut catalog = Catalog::builtin();
        catalog.counselors[1].rating = 7.5;
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidRating { .. })));

        let mut catalog = Catalog::builtin();
        catalog.session.reference_prefix = "C-M".to_string();
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidReferencePrefix(_))));

        let mut catalog = Catalog::builtin();
        catalog.counselors.clear();
        assert_eq!(catalog.validate(), Err(CatalogError::NoCounselors));
    }
}
