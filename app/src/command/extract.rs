use std::path::PathBuf;
use std::sync::Arc;

use ordersift_config::Config;
use ordersift_core::{FailurePolicy, OrderExtractor, process_transcripts};
use ordersift_providers::{AnnotationFormat, PrecomputedParser};
use tracing::{info, warn};

use crate::output;

/// Input parameters for the Extract command strategy.
///
/// Every `Some`/non-empty field overrides the matching config value.
#[derive(Debug, Clone, Default)]
pub struct ExtractInput {
    pub config: Option<PathBuf>,
    pub annotations: Option<PathBuf>,
    pub format: Option<AnnotationFormat>,
    pub transcripts: Vec<String>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
    pub skip_failures: bool,
}

impl ExtractInput {
    fn apply_to(self, config: &mut Config) {
        if let Some(annotations) = self.annotations {
            config.input.annotations = annotations;
        }
        if let Some(format) = self.format {
            config.input.format = format;
        }
        if !self.transcripts.is_empty() {
            config.transcripts = self.transcripts;
        }
        if let Some(output) = self.output {
            config.output.path = output;
        }
        if self.quiet {
            config.output.print = false;
        }
        if self.skip_failures {
            config.extraction.on_parser_failure = FailurePolicy::Skip;
        }
    }
}

/// Configured transcripts, or every annotated transcript in file order when
/// none are configured.
fn select_transcripts(configured: &[String], parser: &PrecomputedParser) -> Vec<String> {
    if configured.is_empty() {
        info!("No transcripts configured, processing every annotated transcript");
        parser.transcripts().map(str::to_string).collect()
    } else {
        configured.to_vec()
    }
}

/// Strategy for the Extract command.
///
/// - Resolves configuration and applies CLI overrides
/// - Loads the annotation file as the parser
/// - Extracts every transcript and writes the JSON document
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = Config::resolve(input.config.as_deref())?;
        input.apply_to(&mut config);

        let parser = Arc::new(super::load_parser(&config).await?);

        let transcripts = select_transcripts(&config.transcripts, &parser);

        let extractor = OrderExtractor::new(config.extraction.rules.clone());
        let policy = config.extraction.on_parser_failure;

        let outcome = tokio::task::spawn_blocking(move || {
            process_transcripts(parser.as_ref(), &extractor, &transcripts, policy)
        })
        .await??;

        for failure in &outcome.failures {
            warn!(
                "Transcript #{} was not extracted: {}",
                failure.index, failure.error
            );
        }

        let rendered = output::render(&outcome.results)?;
        output::write(&config.output.path, &rendered).await?;
        info!(
            "Wrote {} transcript results to {}",
            outcome.results.len(),
            config.output.path.display()
        );

        if config.output.print {
            println!("{rendered}");
        }

        Ok(())
    }
}
