//! Interactive booking session
//!
//! Draws the current view, offers the actions it allows as a menu and feeds
//! the choice back into the wizard until the user quits.

use crate::text;
use crate::Console;
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use mindbridge_wizard::view::{Page, View};
use mindbridge_wizard::{Action, BookingWizard, Transition};

/// A menu entry: what the user sees and what it does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Act(Action),
    Quit,
}

/// Menu entries for a view, labelled the way the page labels its controls
pub fn choices(view: &View) -> Vec<(String, Choice)> {
    let mut entries: Vec<(String, Choice)> = view
        .actions()
        .into_iter()
        .map(|action| (action_label(view, &action), Choice::Act(action)))
        .collect();
    entries.push(("Quit".to_string(), Choice::Quit));
    entries
}

fn action_label(view: &View, action: &Action) -> String {
    match (&view.page, action) {
        (Page::Counselors(page), Action::SelectCounselor(id)) => page
            .cards
            .iter()
            .find(|card| &card.id == id)
            .map(|card| format!("{} - {}", card.book_label, card.name))
            .unwrap_or_else(|| id.clone()),
        (Page::Schedule(page), Action::SelectSlot(id)) => page
            .slots
            .iter()
            .flatten()
            .find(|slot| &slot.id == id)
            .map(|slot| format!("Book {}", slot.time))
            .unwrap_or_else(|| id.clone()),
        (Page::Schedule(page), Action::SelectDate(value)) => page
            .date_picker
            .options
            .iter()
            .find(|option| &option.value == value)
            .map(|option| format!("Date: {}", option.label))
            .unwrap_or_default(),
        (Page::Schedule(page), Action::ChangeCounselor) => page.change_label.clone(),
        (Page::Confirmation(page), Action::BookAnother) => page.book_another_label.clone(),
        (Page::Confirmation(page), Action::ContactSupport) => page.contact_label.clone(),
        (_, other) => format!("{:?}", other),
    }
}

/// Run the booking loop until the user picks "Quit"
pub fn run(mut wizard: BookingWizard, console: &Console) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        let view = wizard.render();
        console.log(format!("\n{}", text::render_view(&view)));

        let entries = choices(&view);
        let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();
        let index = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = match &entries[index].1 {
            Choice::Quit => {
                console.log("Take care! 💙");
                return Ok(());
            }
            Choice::Act(action) => action,
        };

        match wizard.dispatch(action) {
            Ok(Transition::Notice(message)) => console.log(message),
            Ok(Transition::Ignored) => console.warn("That time slot is no longer available"),
            Ok(Transition::Moved { to, .. }) => console.verbose(format!("Now at {}", to)),
            Ok(Transition::Stayed) => {}
            Err(e) => console.error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindbridge_common::Catalog;
    use std::sync::Arc;

    #[test]
    fn test_counselor_choices() {
        let wizard = BookingWizard::new(Arc::new(Catalog::builtin()));
        let entries = choices(&wizard.render());

        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].0, "Book with Priya - Dr. Priya Sharma");
        assert_eq!(entries[4], ("Quit".to_string(), Choice::Quit));
    }

    #[test]
    fn test_schedule_choices() {
        let mut wizard = BookingWizard::new(Arc::new(Catalog::builtin()));
        wizard.select_counselor("2").unwrap();
        wizard.select_date(Some("2025-09-25")).unwrap();

        let labels: Vec<String> = choices(&wizard.render())
            .into_iter()
            .map(|(label, _)| label)
            .collect();

        assert_eq!(labels[0], "Book 9:00 AM");
        assert!(!labels.contains(&"Book 2:00 PM".to_string()));
        assert!(labels.contains(&"Date: Choose a date".to_string()));
        assert!(labels.contains(&"Date: Sat Sep 27 2025".to_string()));
        assert!(labels.contains(&"Change Counselor".to_string()));
    }

    #[test]
    fn test_confirmation_choices() {
        let mut wizard = BookingWizard::new(Arc::new(Catalog::builtin()));
        wizard.select_counselor("1").unwrap();
        wizard.select_date(Some("2025-09-24")).unwrap();
        wizard.select_slot("1").unwrap();

        let labels: Vec<String> = choices(&wizard.render())
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["Book Another Session", "Contact Support", "Quit"]);
    }
}
