//! Carrier Portal CSV Entry Point
//!
//! Reads newline-delimited JSON event records from stdin and writes either a
//! public download or relational event rows to the given CSV file.

use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use carrier_portal_downloadables::{
    write_downloadable, write_relational_events, DownloadableError, EventKind,
};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "carrier-portal-csv")]
#[command(about = "Convert vessel event records into CSV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Public download of carrier encounters
    Encounter {
        /// Output CSV file
        csv_file: PathBuf,
    },
    /// Public download of carrier loitering events
    Loitering {
        /// Output CSV file
        csv_file: PathBuf,
    },
    /// Public download of carrier port visits
    Port {
        /// Output CSV file
        csv_file: PathBuf,
    },
    /// Event rows for the relational database, with the mean position as WKT
    Events {
        /// Output CSV file
        csv_file: PathBuf,
    },
}

/// Initialize tracing/logging on stderr.
fn init_tracing() -> Result<(), DownloadableError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("carrier_portal_downloadables=info"));

    let json_logs = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()
            .map_err(|e| DownloadableError::config(format!("Failed to initialize tracing: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init()
            .map_err(|e| DownloadableError::config(format!("Failed to initialize tracing: {}", e)))?;
    }

    Ok(())
}

fn run(command: Commands) -> Result<usize, DownloadableError> {
    let stdin = io::stdin().lock();

    match command {
        Commands::Encounter { csv_file } => {
            write_downloadable(EventKind::Encounter, stdin, File::create(csv_file)?)
        }
        Commands::Loitering { csv_file } => {
            write_downloadable(EventKind::Loitering, stdin, File::create(csv_file)?)
        }
        Commands::Port { csv_file } => {
            write_downloadable(EventKind::Port, stdin, File::create(csv_file)?)
        }
        Commands::Events { csv_file } => write_relational_events(stdin, File::create(csv_file)?),
    }
}

fn main() -> Result<(), DownloadableError> {
    dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(rows) => {
            info!(rows = rows, "CSV export completed");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "CSV export failed");
            Err(e)
        }
    }
}
