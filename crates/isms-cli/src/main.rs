//! # isms CLI entry point
//!
//! Parses command-line arguments, wires the scan service (live HTTP or
//! offline mock) into a `ScanSession`, and dispatches to the subcommand
//! handlers.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use isms_cli::report;
use isms_core::ScanResult;
use isms_scan_client::{
    HttpScanService, MockScanService, ScanService, ScanSession, DEFAULT_ACCOUNT_ID,
    DEFAULT_BASE_URL, DEFAULT_REGION, DEFAULT_SETTLE_DELAY,
};

/// ISMS compliance scan toolkit.
///
/// Triggers AWS account scans against the external scan service and
/// renders the per-section compliance posture. When the service is
/// unreachable the report degrades to the built-in sample data.
#[derive(Parser, Debug)]
#[command(name = "isms", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL of the scan service API.
    #[arg(long, global = true, env = "ISMS_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// AWS account id to scan and query.
    #[arg(long, global = true, default_value = DEFAULT_ACCOUNT_ID)]
    account_id: String,

    /// Skip the network entirely and serve the built-in sample data.
    #[arg(long, global = true)]
    offline: bool,

    /// Dump the resolved scan document as pretty JSON instead of the
    /// rendered report.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Trigger a scan, wait for the results to persist, then report.
    Scan {
        /// Region to scan.
        #[arg(long, default_value = DEFAULT_REGION)]
        region: String,

        /// Seconds to wait between the scan trigger and the results
        /// fetch. The service has no completion signal.
        #[arg(long, default_value_t = DEFAULT_SETTLE_DELAY.as_secs())]
        settle_secs: u64,
    },

    /// Fetch the latest scan results and report.
    Results,

    /// Print the ISMS section catalog.
    Sections,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = if cli.offline {
        run(MockScanService, &cli).await
    } else {
        match HttpScanService::new(&cli.base_url) {
            Ok(service) => run(service, &cli).await,
            Err(e) => Err(e.into()),
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run<S: ScanService>(service: S, cli: &Cli) -> anyhow::Result<()> {
    let mut session = ScanSession::new(service, cli.account_id.clone());

    let scan = match &cli.command {
        Commands::Scan {
            region,
            settle_secs,
        } => {
            session = session.with_settle_delay(Duration::from_secs(*settle_secs));
            session
                .scan_and_refresh(region.clone())
                .await
                .context("scan trigger failed")?
        }
        Commands::Results => session.refresh().await,
        Commands::Sections => {
            print!("{}", report::render_catalog());
            return Ok(());
        }
    };

    emit(cli, scan)
}

fn emit(cli: &Cli, scan: &ScanResult) -> anyhow::Result<()> {
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(scan).context("serializing scan document")?
        );
    } else {
        print!("{}", report::render_report(scan));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_settle_default_matches_the_session_constant() {
        let cli = Cli::try_parse_from(["isms", "scan"]).expect("parse");
        match cli.command {
            Commands::Scan { settle_secs, .. } => {
                assert_eq!(settle_secs, DEFAULT_SETTLE_DELAY.as_secs());
            }
            other => panic!("expected scan subcommand, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_the_shipped_service() {
        let cli = Cli::try_parse_from(["isms", "results"]).expect("parse");
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.account_id, DEFAULT_ACCOUNT_ID);
        assert!(!cli.offline);
    }
}
