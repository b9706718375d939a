//! fems-poll - Periodic FEMS channel sampler
//!
//! Polls a configurable set of telemetry channels from a FEMS REST
//! interface at a fixed interval and logs each sample to the console.

mod config;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use fems_client::{ConsoleLogger, Endpoint, FemsClient};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "fems-poll")]
#[command(author, version, about = "Polls FEMS telemetry channels at a fixed interval")]
struct Cli {
    /// FEMS host address
    #[arg(long, env = "FEMS_HOST")]
    host: Option<String>,

    /// FEMS REST port
    #[arg(long, env = "FEMS_PORT")]
    port: Option<u16>,

    /// Basic-auth username
    #[arg(long, env = "FEMS_USER")]
    user: Option<String>,

    /// Basic-auth password
    #[arg(long, env = "FEMS_PASSWORD")]
    password: Option<String>,

    /// Seconds between polling sweeps
    #[arg(long, env = "FEMS_INTERVAL")]
    interval: Option<u64>,

    /// Comma-separated metric names to sample (e.g. "grid_power,battery_power")
    #[arg(long, env = "FEMS_METRICS")]
    metrics: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "FEMS_CONFIG")]
    config: Option<PathBuf>,

    /// Sample every metric once and exit
    #[arg(long)]
    once: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up diagnostics
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(
        cli.host.as_deref(),
        cli.port,
        cli.user.as_deref(),
        cli.password.as_deref(),
        cli.interval,
        cli.metrics.as_deref(),
    );

    tracing::debug!(
        host = %merged.host,
        port = merged.port,
        interval = merged.interval,
        "resolved configuration"
    );

    let log = ConsoleLogger::global();
    log.set_debug(cli.verbose);

    let endpoints = resolve_metrics(&merged.metrics, log);
    anyhow::ensure!(!endpoints.is_empty(), "no valid metrics selected");

    let client = FemsClient::new(&merged.host, merged.port, &merged.user, &merged.password)
        .context("Failed to create FEMS client")?;

    log.info(&format!(
        "polling {} metric(s) from {} every {}s",
        endpoints.len(),
        client.base_url(),
        merged.interval
    ));

    loop {
        for endpoint in &endpoints {
            match client.fetch_int(*endpoint) {
                Ok(value) => log.info(&format!("{endpoint}: {value}")),
                Err(e) => log.error(&format!("{endpoint}: {e}")),
            }
        }

        if cli.once {
            break;
        }
        thread::sleep(Duration::from_secs(merged.interval));
    }

    Ok(())
}

/// Resolve a comma-separated metric list against the endpoint catalog.
/// Unknown names are dropped with a warning; the sweep runs with whatever
/// remains.
fn resolve_metrics(metrics: &str, log: &ConsoleLogger) -> Vec<Endpoint> {
    metrics
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| match name.parse::<Endpoint>() {
            Ok(endpoint) => Some(endpoint),
            Err(_) => {
                log.warning(&format!("Metric {name} is not defined!"));
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_known_metrics_in_order() {
        let endpoints = resolve_metrics(
            "grid_power,production_power,battery_power",
            ConsoleLogger::global(),
        );
        assert_eq!(
            endpoints,
            vec![
                Endpoint::GridPower,
                Endpoint::ProductionPower,
                Endpoint::BatteryPower
            ]
        );
    }

    #[test]
    fn drops_unknown_metrics() {
        let endpoints =
            resolve_metrics("grid_power,not_a_metric,battery_power", ConsoleLogger::global());
        assert_eq!(endpoints, vec![Endpoint::GridPower, Endpoint::BatteryPower]);
    }

    #[test]
    fn tolerates_whitespace_and_empty_entries() {
        let endpoints = resolve_metrics(" grid_power , ,battery_power,", ConsoleLogger::global());
        assert_eq!(endpoints, vec![Endpoint::GridPower, Endpoint::BatteryPower]);
    }
}
