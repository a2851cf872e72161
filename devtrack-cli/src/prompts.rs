use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use inquire::{CustomType, InquireError, Password, PasswordDisplayMode, Text};

use devtrack_core::{
    parse_status_or_default, validate_positive_integer, validate_priority, Priority, Project,
};

use crate::render;

/// True when the error came from the user pressing Ctrl-C or Esc at a prompt
pub fn is_interrupt(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationInterrupted) | Some(InquireError::OperationCanceled)
    )
}

/// Prompts for a single line of text, trimmed
pub fn prompt_text(message: &str) -> Result<String> {
    let answer = Text::new(message).prompt()?;
    Ok(answer.trim().to_string())
}

/// Prompts for a username and password, both trimmed
pub fn prompt_credentials() -> Result<(String, String)> {
    let username = prompt_text("Username:")?;
    let password = Password::new("Password:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;

    Ok((username, password.trim().to_string()))
}

/// Asks for a whole number greater than zero, repeating until one is given
pub fn prompt_positive_integer(message: &str) -> Result<u32> {
    validate_positive_integer(
        || Ok(Text::new(message).prompt()?),
        |e| println!("{}", format!("Please enter a valid number: {}.", e).red()),
    )
}

/// Prompts for the remaining fields of a new project with the given id.
///
/// Unknown status or priority input falls back to Pending / Medium with a
/// warning instead of aborting.
pub fn prompt_new_project(id: u32) -> Result<Project> {
    let name = prompt_text("Project name:")?;
    let client = prompt_text("Client:")?;
    let mut project = Project::new(id, name, client);

    println!("\nAvailable statuses: {}", render::status_choices());
    let status_input = prompt_text("Status:")?;
    let (status, fell_back) = parse_status_or_default(&status_input);
    if fell_back {
        render::print_warning(&format!(
            "Invalid status '{}'. Using '{}' by default.",
            status_input, status
        ));
    }
    project.status = status;

    project.estimated_hours = prompt_positive_integer("Estimated hours:")?;
    project.completed_tasks = CustomType::<u32>::new("Completed tasks:")
        .with_error_message("Please enter a whole number (0 or more).")
        .prompt()?;

    println!("\nPriorities: {}", render::priority_choices());
    let priority_input = prompt_text("Priority (High/Medium/Low):")?;
    let priority = validate_priority(&priority_input);
    if Priority::from_label(&priority_input).is_none() {
        render::print_warning(&format!(
            "Unknown priority '{}'. Using '{}' by default.",
            priority_input, priority
        ));
    }
    project.priority = priority;
    project.updated_on = Some(Local::now().date_naive());

    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_interrupt() {
        let interrupted = anyhow::Error::from(InquireError::OperationInterrupted);
        let cancelled = anyhow::Error::from(InquireError::OperationCanceled);
        let other = anyhow::anyhow!("disk full");

        assert!(is_interrupt(&interrupted));
        assert!(is_interrupt(&cancelled));
        assert!(!is_interrupt(&other));
    }

    #[test]
    fn test_is_interrupt_through_context() {
        let err = anyhow::Error::from(InquireError::OperationInterrupted)
            .context("while adding a project");
        assert!(is_interrupt(&err));
    }
}
