//! GenieFlow - turn analysed emails into calendar events
//!
//! Command-line entry point. Inputs are `AnalyzedEmail` JSON documents;
//! results are printed to stdout as JSON and logs go to stderr.

#![allow(clippy::print_stdout)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use genieflow_domain::AnalyzedEmail;
use genieflow_infra::config;
use genieflow_lib::{reconcile_email, run_batch_calendar, update_event_from_email, AppContext};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "genieflow", version, about = "Create or update calendar events from analysed emails")]
struct Cli {
    /// Config file (TOML or JSON); probed from the working directory when omitted
    #[arg(long, global = true, env = "GENIEFLOW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reconcile one analysed email (create, or update the case's event)
    Reconcile {
        /// JSON file holding one analysed email
        file: PathBuf,
    },
    /// Replace a known event with details from an analysed email
    Update {
        event_id: String,
        /// JSON file holding one analysed email
        file: PathBuf,
    },
    /// Sweep a JSON array of analysed emails
    Batch {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before logging so RUST_LOG / GENIEFLOW_LOG_JSON from it apply
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let cli = Cli::parse();
    let config = config::load_with(cli.config.as_deref()).context("failed to load configuration")?;
    let ctx = AppContext::new(config).context("failed to initialise application context")?;

    let failed = match cli.command {
        Command::Reconcile { file } => {
            let email: AnalyzedEmail = read_json(&file)?;
            let outcome = reconcile_email(&ctx, &email).await;
            print_json(&outcome)?;
            outcome.is_error()
        }
        Command::Update { event_id, file } => {
            let email: AnalyzedEmail = read_json(&file)?;
            let outcome = update_event_from_email(&ctx, &event_id, &email).await;
            print_json(&outcome)?;
            outcome.is_error()
        }
        Command::Batch { file } => {
            let emails: Vec<AnalyzedEmail> = read_json(&file)?;
            let report = run_batch_calendar(&ctx, &emails).await;
            print_json(&report)?;
            report.errors > 0
        }
    };

    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// `RUST_LOG` filter (default `info`); JSON lines when `GENIEFLOW_LOG_JSON` is set.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("GENIEFLOW_LOG_JSON")
        .is_ok_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
