//! Multi-transcript pipeline: parse, extract, keep input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{BatchError, ParseError};
use crate::extractor::OrderExtractor;
use crate::order::TranscriptResult;
use crate::parser::SentenceParser;

/// What to do when the parser rejects a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop and return the first failure.
    #[default]
    Abort,
    /// Log, record, and continue with the remaining transcripts.
    Skip,
}

impl FailurePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("unknown failure policy: {s}")),
        }
    }
}

/// A transcript the parser could not handle.
#[derive(Debug)]
pub struct SkippedTranscript {
    pub index: usize,
    pub transcript: String,
    pub error: ParseError,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Results in input order, failed transcripts omitted.
    pub results: Vec<TranscriptResult>,
    pub failures: Vec<SkippedTranscript>,
}

/// Parse and extract every transcript.
///
/// Transcripts run in parallel; results keep input order.
///
/// # Errors
/// Under [`FailurePolicy::Abort`], the first parser failure in input order.
pub fn process_transcripts<P, S>(
    parser: &P,
    extractor: &OrderExtractor,
    transcripts: &[S],
    policy: FailurePolicy,
) -> Result<BatchOutcome, BatchError>
where
    P: SentenceParser + ?Sized,
    S: AsRef<str> + Sync,
{
    let attempts: Vec<Result<TranscriptResult, ParseError>> = transcripts
        .par_iter()
        .map(|transcript| {
            parser
                .parse(transcript.as_ref())
                .map(|sentence| extractor.extract(&sentence))
        })
        .collect();

    let mut outcome = BatchOutcome::default();

    for (index, (attempt, transcript)) in attempts.into_iter().zip(transcripts).enumerate() {
        match attempt {
            Ok(result) => outcome.results.push(result),
            Err(source) => match policy {
                FailurePolicy::Abort => {
                    return Err(BatchError::Parser {
                        index,
                        transcript: transcript.as_ref().to_string(),
                        source,
                    });
                }
                FailurePolicy::Skip => {
                    warn!("Skipping transcript #{index}: {source}");
                    outcome.failures.push(SkippedTranscript {
                        index,
                        transcript: transcript.as_ref().to_string(),
                        error: source,
                    });
                }
            },
        }
    }

    info!(
        "Processed {} transcripts: {} extracted, {} skipped",
        transcripts.len(),
        outcome.results.len(),
        outcome.failures.len()
    );

    Ok(outcome)
}
