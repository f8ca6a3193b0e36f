//! Campus Admin CLI
//!
//! Command-line front end for the school-management backend. Every entity
//! screen is the same three descriptor-driven engines; the per-entity
//! modules under `entities/` contribute nothing but configuration.
//!
//! # Usage
//!
//! ```bash
//! campus staff list
//! campus staff create
//! campus leave show 12
//! campus vendors delete 3
//! campus visitors list --format json
//! campus config set api_url https://school.example/api
//! ```

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod console;
mod entities;
mod error;
mod output;

use campus_api::{HttpApi, Session};
use error::CliError;

#[derive(Parser)]
#[command(name = "campus")]
#[command(version = "0.1.0")]
#[command(about = "Campus school-management admin console", long_about = None)]
struct Cli {
    /// API endpoint URL
    #[arg(long, env = "CAMPUS_API_URL")]
    api_url: Option<String>,

    /// Bearer token for authentication
    #[arg(long, env = "CAMPUS_API_TOKEN")]
    token: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    format: output::OutputFormat,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage staff members
    Staff {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Manage leave requests
    Leave {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Manage vendors
    Vendors {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Manage vendor contracts
    Contracts {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Manage job postings
    Jobs {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Manage planner entries
    Planner {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Manage visitor logs
    Visitors {
        #[command(subcommand)]
        action: RecordCommands,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// The five transitions every record screen owns.
#[derive(Subcommand)]
enum RecordCommands {
    /// List all records
    List,
    /// Show one record with formatted values
    Show { id: String },
    /// Quick raw view of one record from the list
    View { id: String },
    /// Create a record interactively
    Create,
    /// Edit a record interactively
    Edit { id: String },
    /// Delete a record (asks for confirmation)
    Delete { id: String },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_default();
    let api_url = cli
        .api_url
        .or(config.api_url)
        .unwrap_or_else(|| "http://localhost:8000/api".to_string());
    let token = cli.token.or(config.token);

    let session = match token {
        Some(t) => Session::with_token(t),
        None => Session::anonymous(),
    };
    let api = Arc::new(HttpApi::new(&api_url, session));
    let notifier = Arc::new(console::ConsoleNotifier::new());

    let result: Result<(), CliError> = match cli.command {
        Commands::Staff { action } => {
            commands::run(action, entities::staff(), api, notifier, cli.format).await
        }
        Commands::Leave { action } => {
            commands::run(action, entities::leave_requests(), api, notifier, cli.format).await
        }
        Commands::Vendors { action } => {
            commands::run(action, entities::vendors(), api, notifier, cli.format).await
        }
        Commands::Contracts { action } => {
            commands::run(action, entities::contracts(), api, notifier, cli.format).await
        }
        Commands::Jobs { action } => {
            commands::run(action, entities::job_postings(), api, notifier, cli.format).await
        }
        Commands::Planner { action } => {
            commands::run(action, entities::planner_entries(), api, notifier, cli.format).await
        }
        Commands::Visitors { action } => {
            commands::run(action, entities::visitor_logs(), api, notifier, cli.format).await
        }
        Commands::Config { action } => commands::run_config(action),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
