use crate::error::ParseError;
use crate::token::ParsedSentence;

/// External linguistic parser.
///
/// Implementations are constructed once by the caller and shared read-only;
/// `parse` must not depend on mutable state between calls.
pub trait SentenceParser: Send + Sync {
    /// Parse one transcript.
    ///
    /// # Errors
    /// Any failure to tokenize or parse `text`. Callers receive it unchanged.
    fn parse(&self, text: &str) -> Result<ParsedSentence, ParseError>;
}

/// Collapse whitespace runs to one space and trim, for transcript lookups.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
