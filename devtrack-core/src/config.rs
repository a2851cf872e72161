use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the snapshot file to use
pub const DB_PATH_ENV: &str = "DEVTRACK_DB_PATH";

/// File name looked for in the current directory
pub const LOCAL_SNAPSHOT_NAME: &str = "database.json";

/// Decides which snapshot file, if any, seeds the session
///
/// Priority order:
/// 1. the path given on the command line
/// 2. the `DEVTRACK_DB_PATH` environment variable
/// 3. `database.json` in the current directory, if it exists
///
/// `None` means the built-in project list is used.
pub fn resolve_database_path(cli_option: Option<&Path>) -> Option<PathBuf> {
    resolve_database_path_in(cli_option, env::var(DB_PATH_ENV).ok(), Path::new(""))
}

/// Same order as [`resolve_database_path`], with the environment value and
/// the directory searched for `database.json` passed in
fn resolve_database_path_in(
    cli_option: Option<&Path>,
    env_value: Option<String>,
    base_dir: &Path,
) -> Option<PathBuf> {
    if let Some(path) = cli_option {
        return Some(path.to_path_buf());
    }

    if let Some(path) = non_blank(env_value) {
        return Some(path);
    }

    let local = base_dir.join(LOCAL_SNAPSHOT_NAME);
    if local.exists() {
        return Some(local);
    }

    None
}

/// Where `devtrack restore` writes when no output path is given
pub fn default_restore_path() -> Result<PathBuf> {
    restore_path_from(env::var(DB_PATH_ENV).ok(), env::current_dir().ok())
}

fn restore_path_from(env_value: Option<String>, current_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = non_blank(env_value) {
        return Ok(path);
    }

    match current_dir {
        Some(dir) => Ok(dir.join(LOCAL_SNAPSHOT_NAME)),
        None => {
            let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
            Ok(home_dir.join(".devtrack").join(LOCAL_SNAPSHOT_NAME))
        }
    }
}

// A blank variable counts as unset
fn non_blank(value: Option<String>) -> Option<PathBuf> {
    value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}
