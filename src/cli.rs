use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sentiment-relay",
    about = "Forward inference events to a hosted sentiment model endpoint",
    version
)]
pub struct Cli {
    /// Event document to classify; "-" reads from stdin
    #[arg(default_value = "-", conflicts_with = "text")]
    pub event: PathBuf,

    /// Classify this text directly instead of reading an event (repeatable)
    #[arg(long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Endpoint config file [default: ./.sentiment-relay/config.toml, fallback ~/.config/sentiment-relay/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Endpoint URL, overriding config file and environment
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Log the received event, extracted instances, and raw endpoint response
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
