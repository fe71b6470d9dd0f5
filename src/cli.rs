pub mod command;
pub mod run;
pub mod shell;

pub use run::run_app;

use crate::domain::Command;
use crate::prelude::{AddReport, AppError, Contact, FieldChange, UpdateReport};

pub const MENU: &str = "
Contact Management System
=========================
1. Add Contact
2. Search Contacts
3. Update Contact
4. Exit
";

pub fn parse_command(action: &str) -> Result<Command, AppError> {
    match action {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::SearchContacts),
        "3" => Ok(Command::UpdateContact),
        "4" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

pub fn display_contact(name: &str, contact: &Contact) -> String {
    format!(
        "- {name}\n  \
        Phone: {}\n  \
        Email: {}",
        contact.phone_or_na(),
        contact.email_or_na()
    )
}

/// Current value shown before asking for a replacement.
pub fn current_or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

pub fn load_warning(err: &AppError) -> &'static str {
    match err {
        AppError::InvalidFormat(_) => "Warning: Invalid contacts file format. Starting fresh.",
        _ => "Warning: Could not read contacts file or file is corrupted. Starting fresh.",
    }
}

const SAVE_FAILED: &str = "Error: Unable to save contacts to file.";

pub fn search_lines(results: &[(&str, &Contact)]) -> Vec<String> {
    if results.is_empty() {
        return vec!["No contacts found matching that name.".to_string()];
    }

    let mut lines = vec![format!("\nFound {} contact(s):", results.len())];
    lines.extend(
        results
            .iter()
            .map(|(name, contact)| display_contact(name, contact)),
    );
    lines
}

pub fn add_lines(name: &str, report: &AddReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.email_discarded {
        lines.push("Invalid email format. Email will be skipped.".to_string());
    }
    if report.save_error.is_some() {
        lines.push(SAVE_FAILED.to_string());
    }
    lines.push(format!("Contact '{name}' added successfully."));
    lines
}

pub fn update_lines(name: &str, report: &UpdateReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.email == FieldChange::Rejected {
        lines.push("Invalid email format. Email not updated.".to_string());
    }
    if report.save_error.is_some() {
        lines.push(SAVE_FAILED.to_string());
    }
    lines.push(format!("Contact '{name}' updated successfully."));
    lines
}
