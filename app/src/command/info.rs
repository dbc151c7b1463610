use std::path::PathBuf;

use ordersift_config::Config;
use tracing::info;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone, Default)]
pub struct InfoInput {
    pub config: Option<PathBuf>,
}

/// Strategy for displaying configuration information.
///
/// Prints the resolved configuration and checks that the annotation
/// file loads:
/// - Input annotations and format
/// - Transcripts to process
/// - Output target
/// - Extraction rules
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::resolve(input.config.as_deref())?;

        println!("=== ordersift Configuration ===\n");

        println!("Input:");
        println!("  Annotations: {}", config.input.annotations.display());
        println!("  Format: {}", config.input.format.as_str());

        info!("Loading annotation file");
        match super::load_parser(&config).await {
            Ok(parser) => {
                println!("  Status: Loaded");
                println!("  Annotated Transcripts: {}", parser.len());
            }
            Err(e) => {
                println!("  Status: Load failed");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Transcripts:");
        if config.transcripts.is_empty() {
            println!("  (empty - every annotated transcript)");
        } else {
            for transcript in &config.transcripts {
                println!("  - {}", truncate(transcript, 60));
            }
        }
        println!();

        println!("Output:");
        println!("  Path: {}", config.output.path.display());
        println!("  Print: {}", config.output.print);
        println!();

        println!("Extraction:");
        println!(
            "  Item Entity Labels: {}",
            config.extraction.rules.item_entity_labels.join(", ")
        );
        println!(
            "  On Parser Failure: {}",
            config.extraction.on_parser_failure.as_str()
        );

        Ok(())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("two tacos", 60), "two tacos");
        assert_eq!(truncate("two pasta dishes—one Alfredo", 10), "two pas...");
    }
}
