use anyhow::Result;

use devtrack_core::{ProductivityReport, ProjectRepository, ProjectStatus};

use crate::prompts;
use crate::render;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ListProjects,
    AddProject,
    FilterByStatus,
    ProductivityReport,
    Exit,
}

impl MenuOption {
    /// Parses the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuOption::ListProjects),
            "2" => Some(MenuOption::AddProject),
            "3" => Some(MenuOption::FilterByStatus),
            "4" => Some(MenuOption::ProductivityReport),
            "5" => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the user exits.
///
/// Ctrl-C or Esc at any prompt ends the session with a farewell message.
pub fn run(repo: &mut dyn ProjectRepository) -> Result<()> {
    render::print_main_banner();

    match menu_loop(repo) {
        Err(e) if prompts::is_interrupt(&e) => {
            render::print_cancelled();
            Ok(())
        }
        other => other,
    }
}

fn menu_loop(repo: &mut dyn ProjectRepository) -> Result<()> {
    loop {
        render::print_menu();
        let choice = prompts::prompt_text("Select an option (1-5):")?;

        match MenuOption::parse(&choice) {
            Some(MenuOption::ListProjects) => list_projects(repo),
            Some(MenuOption::AddProject) => add_project(repo)?,
            Some(MenuOption::FilterByStatus) => filter_by_status(repo)?,
            Some(MenuOption::ProductivityReport) => productivity_report(repo),
            Some(MenuOption::Exit) => {
                render::print_goodbye();
                return Ok(());
            }
            None => render::print_invalid_option(),
        }
    }
}

fn list_projects(repo: &dyn ProjectRepository) {
    render::print_section("PROJECTS");
    render::print_table(&repo.list());
}

fn add_project(repo: &mut dyn ProjectRepository) -> Result<()> {
    render::print_section("ADD PROJECT");

    let id = prompts::prompt_positive_integer("Project ID:")?;
    if repo.contains_id(id) {
        render::print_error(&format!(
            "Project ID {} already exists. Please use another ID.",
            id
        ));
        return Ok(());
    }

    let project = prompts::prompt_new_project(id)?;
    let name = project.name.clone();

    if !repo.add(project) {
        render::print_error("Could not add the project. The ID already exists.");
        return Ok(());
    }

    render::print_success(&format!("Project '{}' added successfully.", name));
    if let Some(added) = repo.find_by_id(id) {
        render::print_project_detail(added);
    }

    Ok(())
}

fn filter_by_status(repo: &dyn ProjectRepository) -> Result<()> {
    render::print_section("FILTER BY STATUS");
    println!("Available statuses: {}", render::status_choices());

    let input = prompts::prompt_text("Status to filter by:")?;
    let Some(status) = ProjectStatus::from_label(&input) else {
        render::print_error("Invalid status. Please enter one of the listed statuses.");
        return Ok(());
    };

    let projects = repo.filter_by_status(status);
    if projects.is_empty() {
        render::print_error(&format!("No projects found with status '{}'.", status));
    } else {
        println!("\nProjects with status '{}':", status);
        render::print_table(&projects);
    }

    Ok(())
}

fn productivity_report(repo: &dyn ProjectRepository) {
    render::print_section("PRODUCTIVITY REPORT");
    let report = ProductivityReport::from_projects(&repo.list());
    render::print_productivity_report(&report);
}
