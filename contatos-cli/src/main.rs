//! Contatos CLI - manage contacts from the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, demo, edit, list, logs, purge, remove};

/// Contatos - contact manager for the contacts REST backend
#[derive(Parser)]
#[command(name = "contatos", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List contacts
    List {
        /// Only show contacts matching this phone, name or initials
        #[arg(long, short)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search contacts by phone, name or initials
    Search {
        /// Search term (case-insensitive)
        term: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a contact
    Add {
        /// Phone number
        telefone: String,
        /// Full name
        #[arg(required = true, num_args = 1..)]
        nome: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rename the contact with a phone number
    Edit {
        /// Phone number of the contact
        telefone: String,
        /// New full name
        #[arg(required = true, num_args = 1..)]
        nome: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove contacts by phone number
    Remove {
        /// Phone numbers (read from stdin when omitted)
        telefones: Vec<String>,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Delete every contact matching a search term
    Purge {
        /// Search term (case-insensitive)
        term: String,
        /// Allow deleting when the term matches every contact
        #[arg(long)]
        all: bool,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List { search, json } => list::run(search.as_deref(), json).await,
        Commands::Search { term, json } => list::run(Some(&term), json).await,
        Commands::Add { telefone, nome, json } => add::run(&telefone, &nome.join(" "), json).await,
        Commands::Edit { telefone, nome, json } => edit::run(&telefone, &nome.join(" "), json).await,
        Commands::Remove { telefones, force } => remove::run(telefones, force).await,
        Commands::Purge { term, all, force, json } => purge::run(&term, all, force, json).await,
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
