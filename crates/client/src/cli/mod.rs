//! CLI command definitions.

pub mod contacts;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the contactbook API.
#[derive(Debug, Parser)]
#[command(name = "contactbook-client")]
#[command(about = "CLI client for the contactbook API", long_about = None)]
pub struct Cli {
    /// URL prefix the endpoint name is appended to.
    #[arg(long, env = "CONTACTBOOK_URL", default_value = "http://localhost:3000/")]
    pub url_base: String,

    /// Suffix appended to the endpoint name (e.g. ".php").
    #[arg(long, env = "CONTACTBOOK_EXTENSION", default_value = "")]
    pub extension: String,

    /// ID of the signed-in user. Required by create, list and search.
    #[arg(long, env = "CONTACTBOOK_USER_ID")]
    pub user_id: Option<i64>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Contact management.
    Contacts(contacts::ContactsCommand),
}
