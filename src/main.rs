//! CLI entry point for the disruption-to-GTFS-RT service.
//!
//! Serves the translated feed over HTTP, or converts a single document from a
//! file or URL.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use disruptions_gtfs_rt::{
    config::Config,
    feed::convert_bytes,
    fetch::{BasicClient, fetch_bytes},
    output::{Encoding, encode},
    parser::parse_feed,
    server,
};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "disruptions_gtfs_rt")]
#[command(about = "Translates the disruption XML feed into GTFS Realtime", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the translated feed over HTTP
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Translate one disruption document from a file or URL
    Convert {
        /// Path to file or URL to fetch; defaults to the configured feed URL
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// File to write to; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// Write the human-readable rendering instead of protobuf
        #[arg(short, long, default_value_t = false)]
        debug: bool,
    },
    /// Print the human-readable rendering of a binary GTFS-RT file
    Inspect {
        #[arg(value_name = "FILE")]
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/disruptions_gtfs_rt.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("disruptions_gtfs_rt.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            server::serve(BasicClient::new()?, config).await?;
        }
        Commands::Convert {
            source,
            output,
            debug,
        } => {
            let source = source.unwrap_or_else(|| config.source_url.clone());
            let bytes = fetcher(&source).await?;
            let feed = convert_bytes(&bytes, &config.agency_id)?;
            let encoded = encode(&feed, Encoding::from_debug_flag(debug))?;
            write_output(output.as_deref(), &encoded)?;
            info!(entities = feed.entity.len(), "Feed converted");
        }
        Commands::Inspect { file } => {
            let bytes = std::fs::read(&file).with_context(|| format!("reading {file}"))?;
            let feed = parse_feed(&bytes)?;
            write_output(None, &encode(&feed, Encoding::Debug)?)?;
        }
    }

    Ok(())
}

/// Loads the source document from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %url))]
async fn fetcher(url: &str) -> Result<Vec<u8>> {
    let bytes = if url.starts_with("http") {
        let client = BasicClient::new()?;
        fetch_bytes(&client, url).await?
    } else {
        std::fs::read(url).with_context(|| format!("reading {url}"))?
    };
    Ok(bytes)
}

fn write_output(path: Option<&str>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, bytes).with_context(|| format!("writing {path}"))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
