//! Counselors Page - Step 1, one card per counselor

use mindbridge_common::{Catalog, Counselor};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounselorsPage {
    pub title: String,
    pub description: String,
    pub cards: Vec<CounselorCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounselorCard {
    pub id: String,
    pub avatar: String,
    pub name: String,
    pub title: String,
    pub location: String,
    pub rating: f32,
    pub sessions: String,
    pub experience: String,
    pub specializations: Vec<String>,
    pub languages: Vec<String>,
    pub available_days: String,
    pub book_label: String,
}

impl CounselorsPage {
    pub fn build(catalog: &Catalog) -> Self {
        Self {
            title: "Choose Your Counselor".to_string(),
            description: "All sessions are completely anonymous. \
                          Select a counselor based on your needs and preferences."
                .to_string(),
            cards: catalog.counselors.iter().map(CounselorCard::from).collect(),
        }
    }
}

impl From<&Counselor> for CounselorCard {
    fn from(c: &Counselor) -> Self {
        Self {
            id: c.id.clone(),
            avatar: c.avatar.clone(),
            name: c.name.clone(),
            title: c.title.clone(),
            location: format!("📍 {} Campus", c.institution),
            rating: c.rating,
            sessions: format!("{} sessions", c.total_sessions),
            experience: c.experience.clone(),
            specializations: c.specialization.clone(),
            languages: c.languages.clone(),
            available_days: c.available_days.join(", "),
            book_label: format!("Book with {}", c.short_name()),
        }
    }
}
