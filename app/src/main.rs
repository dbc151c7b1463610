#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InfoInput, InfoStrategy, InitStrategy,
    VersionStrategy,
};
use ordersift_providers::AnnotationFormat;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "ordersift")]
#[command(about = "Extract structured food orders from parsed transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract orders from transcripts and write them as JSON
    Extract {
        /// Config file (defaults to ~/ordersift/config.json when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Annotation file with the parser output
        #[arg(short, long)]
        annotations: Option<PathBuf>,

        /// Annotation format: auto, conllu or spacy_json
        #[arg(short, long)]
        format: Option<AnnotationFormat>,

        /// Transcript to process (repeatable); replaces the configured list
        #[arg(short = 't', long = "transcript")]
        transcripts: Vec<String>,

        /// Output JSON path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not echo results to stdout
        #[arg(short, long)]
        quiet: bool,

        /// Continue past transcripts the parser cannot handle
        #[arg(long)]
        skip_failures: bool,
    },
    /// Show the resolved configuration
    Info {
        /// Config file (defaults to ~/ordersift/config.json when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            config,
            annotations,
            format,
            transcripts,
            output,
            quiet,
            skip_failures,
        } => {
            ExtractStrategy
                .execute(ExtractInput {
                    config,
                    annotations,
                    format,
                    transcripts,
                    output,
                    quiet,
                    skip_failures,
                })
                .await
        }
        Commands::Info { config } => InfoStrategy.execute(InfoInput { config }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
