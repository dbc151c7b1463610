use thiserror::Error;

/// Failure reported by a parser collaborator.
///
/// The extractor never produces these itself; they travel from
/// [`SentenceParser::parse`](crate::SentenceParser::parse) to the caller
/// unchanged.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no parse available for transcript: {0:?}")]
    UnknownTranscript(String),

    #[error("unsupported annotation format: {0}")]
    UnsupportedFormat(String),

    #[error("malformed annotation at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("invalid dependency tree at token {index}: {reason}")]
    InvalidTree { index: usize, reason: String },

    #[error("invalid annotated document #{doc}: {reason}")]
    InvalidDocument { doc: usize, reason: String },

    #[error("invalid annotation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Failure of a whole batch run under [`FailurePolicy::Abort`](crate::FailurePolicy::Abort).
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("parser failed on transcript #{index} ({transcript:?}): {source}")]
    Parser {
        index: usize,
        transcript: String,
        #[source]
        source: ParseError,
    },
}
