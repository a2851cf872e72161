mod cli;
mod menu;
mod prompts;
mod render;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};

use devtrack_core::{
    default_restore_path, resolve_database_path, AuthEvent, Authenticator, CredentialStore,
    ProjectRegistry, Snapshot,
};

use crate::cli::{Cli, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        if prompts::is_interrupt(&err) {
            render::print_interrupted();
            return;
        }

        log::error!("{:?}", err);
        render::print_unexpected_error();
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Restore { output }) => restore_database(output),
        None => run_session(cli.db.as_deref()),
    }
}

fn run_session(db_option: Option<&Path>) -> Result<()> {
    let seed_path = resolve_database_path(db_option);
    let (mut registry, credentials) = load_seed_data(seed_path.as_deref());

    let Some(username) = login(credentials)? else {
        render::print_login_failed();
        return Ok(());
    };

    log::info!("Starting menu session for '{}'", username);
    menu::run(&mut registry)
}

/// Loads the snapshot at `path`, falling back to the built-in data when none
/// is configured or it cannot be read
fn load_seed_data(path: Option<&Path>) -> (ProjectRegistry, CredentialStore) {
    let Some(path) = path else {
        return (
            ProjectRegistry::with_default_projects(),
            CredentialStore::default(),
        );
    };

    match Snapshot::load(path) {
        Ok(snapshot) => snapshot.into_parts(),
        Err(e) => {
            log::warn!("{:?}", e);
            render::print_warning(&format!(
                "Could not load {}. Using the built-in project list.",
                path.display()
            ));
            (
                ProjectRegistry::with_default_projects(),
                CredentialStore::default(),
            )
        }
    }
}

/// Runs the login gate; returns the username on success
fn login(credentials: CredentialStore) -> Result<Option<String>> {
    render::print_login_banner();
    let mut authenticator = Authenticator::new(credentials);

    loop {
        render::print_attempt_header(authenticator.attempt_number());
        let (username, password) = prompts::prompt_credentials()?;

        match authenticator.submit(&username, &password)? {
            AuthEvent::Granted { username } => {
                render::print_welcome(&username);
                return Ok(Some(username));
            }
            AuthEvent::Retry { attempts_left } => render::print_retry(attempts_left),
            AuthEvent::Denied => {
                render::print_access_denied();
                return Ok(None);
            }
        }
    }
}

fn restore_database(output: Option<PathBuf>) -> Result<()> {
    let path = match output {
        Some(path) => path,
        None => default_restore_path()?,
    };

    let snapshot = Snapshot::restore_default(Local::now().date_naive());
    if let Err(e) = snapshot.save(&path) {
        log::error!("{:?}", e);
        render::print_error(&format!("Error creating the JSON file: {:#}", e));
        return Ok(());
    }

    render::print_restore_summary(&snapshot, &path);
    Ok(())
}
