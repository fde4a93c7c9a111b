//! Booking Reference Data
//!
//! Counselors, time slots and the session settings shown alongside them.
//! All of it is immutable once a catalog has been loaded.

use serde::{Deserialize, Serialize};

/// A counselor students can book a session with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counselor {
    /// Unique identifier (e.g., "2")
    pub id: String,

    /// Display name (e.g., "Dr. Rajesh Kumar")
    pub name: String,

    /// Professional title
    pub title: String,

    /// Specialization tags
    #[serde(default)]
    pub specialization: Vec<String>,

    /// Home institution, shown as "<institution> Campus"
    pub institution: String,

    /// Free-text experience (e.g., "12+ years")
    pub experience: String,

    /// Average rating out of 5
    pub rating: f32,

    /// Total sessions held
    #[serde(default)]
    pub total_sessions: u32,

    /// Spoken languages
    #[serde(default)]
    pub languages: Vec<String>,

    /// Weekday names of general availability
    #[serde(default)]
    pub available_days: Vec<String>,

    /// Avatar glyph
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

impl Counselor {
    /// Short name used on the book button: the second word of the display name
    ///
    /// "Dr. Priya Sharma" becomes "Priya". Single-word names are used as-is.
    pub fn short_name(&self) -> &str {
        let mut words = self.name.split_whitespace();
        let first = words.next().unwrap_or(self.name.as_str());
        words.next().unwrap_or(first)
    }
}

/// A bookable (date, time) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique identifier
    pub id: String,

    /// Human-readable time (e.g., "3:00 PM")
    pub time: String,

    /// ISO calendar date (YYYY-MM-DD)
    pub date: String,

    /// Whether the slot can still be booked
    pub available: bool,
}

/// Session details shown during booking and on the confirmation page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Session length in minutes
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,

    /// Where the session takes place
    #[serde(default = "default_format")]
    pub format: String,

    /// Prefix of generated booking references
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,

    /// Line shown when the student asks for support
    #[serde(default = "default_support_contact")]
    pub support_contact: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration(),
            format: default_format(),
            reference_prefix: default_reference_prefix(),
            support_contact: default_support_contact(),
        }
    }
}

fn default_avatar() -> String {
    "🧑‍⚕️".to_string()
}

fn default_duration() -> u32 {
    50
}

fn default_format() -> String {
    "In-person or Video call".to_string()
}

fn default_reference_prefix() -> String {
    "CM".to_string()
}

fn default_support_contact() -> String {
    "Support: Contact support@example.com or call 123-456-7890".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counselor(name: &str) -> Counselor {
        Counselor {
            id: "1".to_string(),
            name: name.to_string(),
            title: "Counselor".to_string(),
            specialization: vec![],
            institution: "Test".to_string(),
            experience: "1+ years".to_string(),
            rating: 4.0,
            total_sessions: 0,
            languages: vec![],
            available_days: vec![],
            avatar: default_avatar(),
        }
    }

    #[test]
    fn test_short_name() {
        assert_eq!(counselor("Dr. Priya Sharma").short_name(), "Priya");
        assert_eq!(counselor("Sam").short_name(), "Sam");
    }

    #[test]
    fn test_session_defaults() {
        let settings: SessionSettings = toml::from_str("").unwrap();
        assert_eq!(settings, SessionSettings::default());
        assert_eq!(settings.duration_minutes, 50);
        assert_eq!(settings.reference_prefix, "CM");
    }
}
