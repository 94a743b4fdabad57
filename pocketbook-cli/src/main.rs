//! Pocketbook CLI - your wallet cache in the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

use commands::{cards, onboarding, reset, setup, status, sync, transactions, transfer};

/// Pocketbook - offline-first wallet cache
#[derive(Parser)]
#[command(name = "pb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a summary of the cached state
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch the remote snapshot and reconcile it into the cache
    Sync {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List cached transactions, newest first
    Transactions {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the cards in the wallet (seeds from remote on first run)
    Cards {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record an outgoing transfer
    Transfer {
        /// Card id to transfer from
        #[arg(long)]
        card: i64,
        /// Amount to transfer (positive; stored as a debit)
        #[arg(long)]
        amount: Decimal,
        /// Destination (becomes the description)
        #[arg(long)]
        to: String,
    },

    /// Configure the remote snapshot endpoint
    Setup {
        /// Snapshot endpoint URL
        #[arg(long)]
        url: Option<String>,
        /// Access master key sent with every fetch
        #[arg(long)]
        key: Option<String>,
    },

    /// Manage the onboarding-seen flag
    Onboarding {
        #[command(subcommand)]
        command: onboarding::OnboardingCommands,
    },

    /// Clear every cached value
    Reset {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status { json } => status::run(json).await,
        Commands::Sync { json } => sync::run(json).await,
        Commands::Transactions { limit, json } => transactions::run(limit, json).await,
        Commands::Cards { json } => cards::run(json).await,
        Commands::Transfer { card, amount, to } => transfer::run(card, amount, &to).await,
        Commands::Setup { url, key } => setup::run(url, key),
        Commands::Onboarding { command } => onboarding::run(command).await,
        Commands::Reset { force } => reset::run(force).await,
    }
}
