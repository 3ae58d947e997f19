//! `sentiment-relay` — forward inference events to a hosted sentiment model
//! and translate its raw labels into simplified categories.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load endpoint config ([`config::load_config`]); `--endpoint` wins over
//!    files and environment.
//! 3. Read the trigger event from a file, stdin, or `--text` flags.
//! 4. Run the adapter ([`adapter::InferenceAdapter::handle`]): normalize the
//!    input, invoke the endpoint, map raw labels to sentiments.
//! 5. Render the requested report ([`report`]).

mod adapter;
mod cli;
mod config;
mod endpoint;
mod error;
mod event;
mod models;
mod normalize;
mod report;

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use adapter::InferenceAdapter;
use cli::{Cli, ReportFormat};
use config::load_config;
use event::TextPayload;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(url) = cli.endpoint.clone() {
        config.endpoint.url = url;
    }

    let event = read_event(&cli)?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.endpoint.timeout_secs))
        .build()?;

    let adapter = InferenceAdapter::new(&config.endpoint, &client, cli.verbose);

    // Spinner while the one blocking call is in flight. Suppressed for quiet
    // runs, JSON output, and verbose diagnostics (it would overwrite them).
    let spinner = if !cli.quiet && !cli.verbose && matches!(cli.report, ReportFormat::Terminal) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!("Invoking {}", config.endpoint.url));
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let result = adapter.handle(&event).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let labels = result?;

    match cli.report {
        ReportFormat::Terminal => {
            // Pair labels with the original input texts for the table.
            let instances = TextPayload::from_event(&event)
                .map(TextPayload::into_instances)
                .unwrap_or_default();
            report::terminal::render(&instances, &labels, &config.endpoint.url, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&labels)?);
        }
    }

    Ok(())
}

/// Build the trigger event from `--text` flags, an event file, or stdin.
fn read_event(cli: &Cli) -> Result<Value> {
    if !cli.text.is_empty() {
        return Ok(serde_json::json!({ "data": cli.text }));
    }

    let raw = if cli.event.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read event from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cli.event)
            .with_context(|| format!("failed to read event file {}", cli.event.display()))?
    };

    serde_json::from_str(&raw).context("event is not valid JSON")
}
