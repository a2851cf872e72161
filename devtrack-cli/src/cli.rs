use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Project tracker for a small web-development agency")]
pub struct Cli {
    /// JSON snapshot used to seed users and projects
    /// (defaults to DEVTRACK_DB_PATH, then ./database.json, then built-in data)
    #[clap(long)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Regenerate the seed snapshot file with the default users and projects
    Restore {
        /// Output file path (defaults to DEVTRACK_DB_PATH or ./database.json)
        #[clap(long, short = 'o')]
        output: Option<PathBuf>,
    },
}
