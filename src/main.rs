//! Lemmata - Main Entry Point
//!
//! Builds the lemma/POS frequency table of a Latin corpus, prepares chart
//! input from an exported table, or serves per-document analysis over HTTP.

mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lemmata::annotation;
use lemmata::api::{self, AppState};
use lemmata::chart::{self, ChartRequest};
use lemmata::pipeline::FrequencyPipeline;
use lemmata::types::LemmataConfig;

use crate::cli::{ChartArgs, Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = LemmataConfig::from_env();
    cli.apply(&mut config);

    match cli.command {
        Some(Command::Chart(args)) => run_chart(args),
        Some(Command::Serve { port }) => serve(config, port).await,
        None => run_pipeline(config).await,
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lemmata=info"));
    let json = std::env::var("LOG_FORMAT").map_or(false, |f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_pipeline(config: LemmataConfig) -> Result<()> {
    info!("Starting lemmata v{}", env!("CARGO_PKG_VERSION"));
    info!(
        input = %config.input_path.display(),
        min_frequency = config.min_frequency,
        remove_stopwords = config.remove_stopwords,
        "Pipeline configured"
    );

    let outcome = match FrequencyPipeline::from_config(config) {
        Ok(pipeline) => pipeline.run().await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => {
            info!(
                path = %report.output_path.display(),
                rows = report.analysis.rows.len(),
                "Table generated"
            );
            println!("{}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Pipeline aborted");
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run_chart(args: ChartArgs) -> Result<()> {
    let request = ChartRequest::new(&args.csv, args.tipo, args.grafico)
        .with_limit(args.limite)
        .with_format(args.formato);

    let spec = chart::prepare(&request)
        .with_context(|| format!("cannot prepare chart from {}", args.csv.display()))?;
    let path = chart::write_spec(&spec, &args.output_dir)?;

    println!("{}", path.display());
    Ok(())
}

async fn serve(config: LemmataConfig, port: Option<u16>) -> Result<()> {
    config.validate()?;
    let port = port.unwrap_or(config.port);

    // Initialize components
    let stopwords = config.load_stopwords()?;
    let annotator = annotation::from_config(&config.annotator)?;
    info!(annotator = annotator.name(), stopwords = stopwords.len(), "Serve mode ready");

    let state = Arc::new(AppState {
        config,
        stopwords,
        annotator,
    });
    let app = api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
