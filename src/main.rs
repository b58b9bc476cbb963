//! catalog-sync binary
//!
//! Runs the pipeline once and prints the validation report. An optional
//! first argument names a JSON config file; the `CATALOG_ENV` environment
//! variable ("stage" or "production") overrides the configured environment.

use catalog_sync::{CatalogSync, Config, Result, RunSummary};
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<Config> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path))?,
        None => Config::default(),
    };

    if let Ok(env) = std::env::var("CATALOG_ENV") {
        config.environment = env.parse()?;
    }

    config.validate()?;
    Ok(config)
}

async fn run() -> Result<RunSummary> {
    let config = load_config()?;
    CatalogSync::new(config)?.run().await
}

fn print_report(summary: &RunSummary) {
    if let Some(count) = summary.record_count {
        println!("records in file: {count}");
    }
    for record in &summary.report.over_length {
        println!("{}", record.report_line());
    }
    println!(
        "over-length records: {}",
        summary.report.over_length_count()
    );
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let started = Instant::now();
    let result = run().await;
    let elapsed_ms = started.elapsed().as_millis();

    match result {
        Ok(summary) => {
            print_report(&summary);
            info!(elapsed_ms, "run complete");
        }
        Err(e) => {
            error!(error = %e, "run failed");
            info!(elapsed_ms, "run aborted");
            std::process::exit(1);
        }
    }
}
