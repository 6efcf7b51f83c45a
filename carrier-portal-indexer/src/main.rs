//! Vessel Index Loader Entry Point
//!
//! Reads newline-delimited JSON vessel documents from stdin, loads them into a
//! fresh index and swaps the alias over to it.

use std::env;
use std::io;

use carrier_portal_indexer::{Dependencies, IndexingError, LoaderArgs};
use clap::Parser;
use dotenv::dotenv;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging on stderr.
fn init_tracing() -> Result<(), IndexingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("carrier_portal_indexer=info,carrier_portal_repository=info")
    });

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
            .map_err(|e| IndexingError::config(format!("Failed to initialize tracing: {}", e)))?;

        info!(
            service_name = "vessel-index-loader",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr)
                    .pretty(),
            )
            .try_init()
            .map_err(|e| IndexingError::config(format!("Failed to initialize tracing: {}", e)))?;

        info!(
            service_name = "vessel-index-loader",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), IndexingError> {
    // Load environment variables from .env file before clap reads them
    dotenv().ok();

    init_tracing()?;

    let args = LoaderArgs::parse();

    info!(alias = %args.alias, "Starting vessel index loader");

    let deps = match Dependencies::new(&args) {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let input = BufReader::new(tokio::io::stdin());

    match deps.loader.run(input).await {
        Ok(report) => {
            info!(
                index = %report.index_name,
                documents = report.documents_loaded,
                retired = ?report.retired_indices,
                "Vessel index loaded"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Vessel index load failed");
            Err(e.into())
        }
    }
}
