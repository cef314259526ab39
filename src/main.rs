use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use histload_core::config::ImportConfig;
use histload_core::{pipeline, ImportReport, MemorySink, SinkError};
use histload_mongo::MongoSink;

#[derive(Parser)]
#[command(name = "histload", about = "Load historical events into MongoDB")]
struct Cli {
    /// Config file to use instead of ~/.config/histload/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event file to read (overrides `source.path`).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Load into an in-memory store instead of MongoDB.
    #[arg(long)]
    dry_run: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("import failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ImportConfig::load(cli.config.as_deref())?;
    if let Some(input) = cli.input {
        config.source.path = input;
    }

    let report = if cli.dry_run {
        tracing::info!("dry run: loading into memory");
        pipeline::run(&config, || async { Ok::<_, SinkError>(MemorySink::new()) }).await?
    } else {
        pipeline::run(&config, || MongoSink::connect(&config.mongo)).await?
    };

    if let Some(report) = report {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ImportReport) {
    println!("\n{report}");
    println!("\nRandom sample of imported events:");
    println!("{}", report.samples_pretty());
}
