//! Console output: banners, tables and reports
//!
//! The `format_*` functions build the text so it can be checked in tests;
//! the `print_*` functions write it to stdout.

use colored::{ColoredString, Colorize};
use std::path::Path;

use devtrack_core::{
    Priority, ProductivityReport, Project, ProjectStatus, Snapshot, MAX_LOGIN_ATTEMPTS,
};

const WIDE: usize = 100;
const MEDIUM: usize = 70;
const NARROW: usize = 60;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

fn status_colored(status: ProjectStatus) -> ColoredString {
    let text = status.to_string();
    match status {
        ProjectStatus::Pending => text.yellow(),
        ProjectStatus::InProgress => text.blue(),
        ProjectStatus::Finished => text.green(),
    }
}

fn priority_colored(priority: Priority) -> ColoredString {
    let text = priority.to_string();
    match priority {
        Priority::High => text.red(),
        Priority::Medium => text.yellow(),
        Priority::Low => text.green(),
    }
}

/// Comma separated list of the accepted status names
pub fn status_choices() -> String {
    ProjectStatus::ALL
        .iter()
        .map(|s| format!("{} ({})", s, s.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma separated list of priorities with their rank
pub fn priority_choices() -> String {
    Priority::ALL
        .iter()
        .map(|p| format!("{} / {} ({})", p, p.label(), p.rank()))
        .collect::<Vec<_>>()
        .join(", ")
}

// =========================================================================
// Login
// =========================================================================

pub fn print_login_banner() {
    println!("\n{}", rule('=', NARROW));
    println!("{:^60}", "AUTHENTICATION".bold());
    println!("{:^60}", "Web Development Agency");
    println!("{}\n", rule('=', NARROW));
}

pub fn print_attempt_header(attempt: u8) {
    println!("Attempt {} of {}", attempt, MAX_LOGIN_ATTEMPTS);
    println!("{}", rule('-', NARROW));
}

pub fn print_welcome(username: &str) {
    println!("\n{}", rule('=', NARROW));
    println!("{}", format!("Welcome, {}!", username).green().bold());
    println!("{}\n", rule('=', NARROW));
}

pub fn print_retry(attempts_left: u8) {
    println!(
        "\n{}\n",
        format!("Invalid credentials. {} attempt(s) left.", attempts_left).red()
    );
}

pub fn print_access_denied() {
    println!("\n{}", rule('=', NARROW));
    println!("{}", "Access denied. All login attempts used.".red().bold());
    println!("{}\n", rule('=', NARROW));
}

pub fn print_login_failed() {
    println!("{}", "Could not authenticate. The system will now close.\n".red());
}

// =========================================================================
// Menu
// =========================================================================

pub fn print_main_banner() {
    println!("\n{}", rule('=', MEDIUM));
    println!("{:^70}", "PROJECT TRACKER".bold());
    println!("{:^70}", "Web Development Agency");
    println!("{}\n", rule('=', MEDIUM));
}

pub fn format_menu() -> String {
    let mut out = String::new();
    out.push_str(&rule('-', MEDIUM));
    out.push('\n');
    out.push_str(&format!("{:^70}\n", "MAIN MENU"));
    out.push_str(&rule('-', MEDIUM));
    out.push('\n');
    out.push_str("1. View projects\n");
    out.push_str("2. Add project\n");
    out.push_str("3. Filter by status\n");
    out.push_str("4. Productivity report\n");
    out.push_str("5. Exit\n");
    out.push_str(&rule('-', MEDIUM));
    out
}

pub fn print_menu() {
    println!("{}", format_menu());
}

pub fn print_section(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", rule('-', MEDIUM));
}

pub fn print_invalid_option() {
    println!(
        "\n{}\n",
        "Invalid option. Please choose an option from 1 to 5.".red()
    );
}

pub fn print_goodbye() {
    println!("\n{}", rule('=', MEDIUM));
    println!("{:^70}", "Goodbye!");
    println!("{}\n", rule('=', MEDIUM));
}

pub fn print_cancelled() {
    println!("\n\n{}\n", "Operation cancelled. Goodbye!".yellow());
}

pub fn print_interrupted() {
    println!("\n\n{}\n", "Program interrupted by the user. Goodbye!".yellow());
}

pub fn print_unexpected_error() {
    println!("\n{}\n", "Unexpected error.".red());
    println!("Please contact the system administrator.\n");
}

// =========================================================================
// Feedback
// =========================================================================

pub fn print_error(message: &str) {
    println!("\n{}\n", message.red());
}

pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

pub fn print_success(message: &str) {
    println!("\n{}\n", message.green());
}

// =========================================================================
// Projects
// =========================================================================

/// Project table with a progress column; `None` when there is nothing to show
pub fn format_table(projects: &[Project]) -> Option<String> {
    if projects.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(&rule('=', WIDE));
    out.push('\n');
    out.push_str(&format!(
        "{:<5} | {:<25} | {:<30} | {:<15} | {:<10}\n",
        "ID", "Client", "Project", "Status", "Progress %"
    ));
    out.push_str(&rule('=', WIDE));
    out.push('\n');

    for project in projects {
        out.push_str(&format!(
            "{:<5} | {:<25} | {:<30} | {:<15} | {:>6.1}%\n",
            project.id,
            project.client,
            project.name,
            status_colored(project.status),
            project.progress_percent()
        ));
    }

    out.push_str(&rule('=', WIDE));
    Some(out)
}

pub fn print_table(projects: &[Project]) {
    match format_table(projects) {
        Some(table) => println!("\n{}\n", table),
        None => print_error("There are no projects to show."),
    }
}

pub fn format_project_detail(project: &Project) -> String {
    let mut lines = vec![
        rule('=', NARROW),
        format!("{:^60}", "PROJECT DETAIL"),
        rule('=', NARROW),
        format!("{:<25} {}", "ID:", project.id),
        format!("{:<25} {}", "Name:", project.name),
        format!("{:<25} {}", "Client:", project.client),
        format!("{:<25} {}", "Status:", status_colored(project.status)),
        format!("{:<25} {}", "Estimated hours:", project.estimated_hours),
        format!("{:<25} {}", "Completed tasks:", project.completed_tasks),
        format!("{:<25} {:.1}%", "Progress:", project.progress_percent()),
        format!(
            "{:<25} {} (level {})",
            "Priority:",
            priority_colored(project.priority),
            project.priority.rank()
        ),
    ];

    if let Some(date) = project.started_on {
        lines.push(format!("{:<25} {}", "Started:", date));
    }
    if let Some(date) = project.finished_on {
        lines.push(format!("{:<25} {}", "Finished:", date));
    }
    if let Some(date) = project.updated_on {
        lines.push(format!("{:<25} {}", "Last updated:", date));
    }

    lines.push(rule('=', NARROW));
    lines.join("\n")
}

pub fn print_project_detail(project: &Project) {
    println!("\n{}\n", format_project_detail(project));
}

pub fn format_productivity_report(report: &ProductivityReport) -> String {
    [
        rule('=', NARROW),
        format!("{:^60}", "PRODUCTIVITY REPORT"),
        rule('=', NARROW),
        String::new(),
        format!("{:<30} {:>5}", "Total projects:", report.total_projects),
        format!("{:<30} {:>5}", "Finished projects:", report.finished),
        format!("{:<30} {:>5}", "Projects in progress:", report.in_progress),
        format!("{:<30} {:>5}", "Pending projects:", report.pending),
        format!("{:<30} {:>5}", "Total completed tasks:", report.completed_tasks),
        String::new(),
        rule('=', NARROW),
    ]
    .join("\n")
}

pub fn print_productivity_report(report: &ProductivityReport) {
    println!("\n{}\n", format_productivity_report(report));
}

// =========================================================================
// Restore
// =========================================================================

pub fn print_restore_summary(snapshot: &Snapshot, path: &Path) {
    println!("{}", rule('=', MEDIUM));
    println!("{:^70}", "DATABASE RESTORED".green().bold());
    println!("{}", rule('=', MEDIUM));
    println!("\nFile written: {}", path.display());
    println!("\nSummary of restored data:");
    println!("   • Users: {}", snapshot.users.len());
    println!("   • Projects: {}", snapshot.projects.len());

    println!("\nRestored users:");
    for username in snapshot.users.keys() {
        println!("   - {}", username);
    }

    println!("\nRestored projects:");
    for project in &snapshot.projects {
        println!(
            "   - ID {}: {} ({})",
            project.id, project.name, project.client
        );
        println!(
            "     Status: {} | Priority: {}",
            project.status, project.priority
        );
    }

    println!("\n{}", rule('=', MEDIUM));
    println!("{}\n", "Restore completed successfully.".green());
}
