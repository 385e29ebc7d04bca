//! CLI entry point for the shape fetcher.
//!
//! Runs the full pipeline once: fetch stop times, dedup trip ids, fetch the
//! shape for every unique trip over a bounded worker pool, write the result
//! to a JSON file.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use shape_fetcher::config::{self, ApiConfig};
use shape_fetcher::fetch::{BasicClient, auth::AgencyHeaders};
use shape_fetcher::pipeline;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "shape_fetcher")]
#[command(about = "Fetches route shapes for every trip in an agency's stop_times feed", long_about = None)]
struct Cli {
    /// File to write the collected shapes to
    #[arg(short, long, default_value = "shapes.json")]
    output: String,

    /// Number of concurrent shape fetches
    #[arg(short, long, default_value_t = 2)]
    workers: usize,

    /// Pause before each shape request, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Base URL of the opendata API
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/shape_fetcher.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("shape_fetcher.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::from_env();
    config.base_url = cli.base_url;
    config.workers = cli.workers;
    config.shape_fetch_delay = Duration::from_millis(cli.delay_ms);

    let client = Arc::new(AgencyHeaders::new(
        BasicClient::new(),
        config.agency_id.clone(),
        config.api_key.clone(),
    ));

    pipeline::run(client, &config, Path::new(&cli.output)).await
}
