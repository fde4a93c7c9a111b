//! Plain-text drawing of wizard views

use mindbridge_wizard::pages::{ConfirmationPage, CounselorsPage, SchedulePage};
use mindbridge_wizard::view::{Page, StepIndicator, View};
use std::fmt::Write;

/// Draw a whole view
pub fn render_view(view: &View) -> String {
    let mut out = String::new();

    if let Some(ref indicator) = view.indicator {
        out.push_str(&render_indicator(indicator));
        out.push_str("\n\n");
    }

    match &view.page {
        Page::Counselors(page) => render_counselors(&mut out, page),
        Page::Schedule(page) => render_schedule(&mut out, page),
        Page::Confirmation(page) => render_confirmation(&mut out, page),
    }

    out
}

/// `(1)──(2)──(3)` style progress line; finished steps show ✔
pub fn render_indicator(indicator: &StepIndicator) -> String {
    let mut line = String::new();
    for (i, marker) in indicator.markers.iter().enumerate() {
        if marker.is_highlighted() {
            let _ = write!(line, "[{}]", marker.label());
        } else {
            let _ = write!(line, " {} ", marker.label());
        }
        if let Some(&active) = indicator.connectors.get(i) {
            line.push_str(if active { "━━━" } else { "───" });
        }
    }
    line
}

fn render_counselors(out: &mut String, page: &CounselorsPage) {
    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{}\n", page.description);

    for card in &page.cards {
        let _ = writeln!(out, "{} {} ({})", card.avatar, card.name, card.title);
        let _ = writeln!(out, "   {}", card.location);
        let _ = writeln!(
            out,
            "   ⭐ {}  {}  {}",
            card.rating, card.sessions, card.experience
        );
        let _ = writeln!(out, "   Specializations: {}", card.specializations.join(", "));
        let _ = writeln!(out, "   Languages: {}", card.languages.join(", "));
        let _ = writeln!(out, "   Available Days: {}\n", card.available_days);
    }
}

fn render_schedule(out: &mut String, page: &SchedulePage) {
    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{}\n", page.description);

    let _ = writeln!(out, "Your Selected Counselor");
    let _ = writeln!(
        out,
        "   {} {} - {}",
        page.counselor.avatar, page.counselor.name, page.counselor.title
    );
    let _ = writeln!(out, "Session Details:");
    for detail in &page.session_details {
        let _ = writeln!(out, "   • {}", detail);
    }

    let selected = page
        .date_picker
        .options
        .iter()
        .find(|o| o.selected)
        .map(|o| o.label.as_str())
        .unwrap_or_default();
    let _ = writeln!(out, "\nSelect Date: {}", selected);

    if let Some(ref slots) = page.slots {
        let _ = writeln!(out, "Available Times:");
        for slot in slots {
            if slot.enabled {
                let _ = writeln!(out, "   {}", slot.time);
            } else {
                let _ = writeln!(out, "   {} (unavailable)", slot.time);
            }
        }
    }
}

fn render_confirmation(out: &mut String, page: &ConfirmationPage) {
    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{}\n", page.message);

    let _ = writeln!(out, "📋 Session Details");
    for row in &page.details {
        let _ = writeln!(out, "   {}: {}", row.label, row.value);
    }

    let _ = writeln!(out, "\n📱 Important Information:");
    for item in &page.important {
        let _ = writeln!(out, "   • {}", item);
    }
}
