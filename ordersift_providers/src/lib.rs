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

//! Parser collaborators backed by parses produced offline.
//!
//! A real dependency parser runs ahead of time and exports its output as
//! CoNLL-U or as spaCy `Doc.to_json()` documents. [`PrecomputedParser`] loads
//! such a file and answers [`SentenceParser::parse`] by transcript lookup.

pub mod conllu;
pub mod spacy;

use std::collections::HashMap;
use std::path::Path;

use ordersift_core::{ParseError, ParsedSentence, SentenceParser, normalize_text};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use conllu::read_conllu;
pub use spacy::read_spacy_json;

/// On-disk annotation format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationFormat {
    /// Pick by file extension.
    #[default]
    Auto,
    Conllu,
    SpacyJson,
}

impl AnnotationFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Conllu => "conllu",
            Self::SpacyJson => "spacy_json",
        }
    }

    /// Replace [`Self::Auto`] with the format implied by `path`'s extension.
    ///
    /// # Errors
    /// Returns [`ParseError::UnsupportedFormat`] when the extension is not recognized.
    pub fn resolve(self, path: &Path) -> Result<Self, ParseError> {
        if self != Self::Auto {
            return Ok(self);
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("conllu" | "conll") => Ok(Self::Conllu),
            Some("json") => Ok(Self::SpacyJson),
            _ => Err(ParseError::UnsupportedFormat(format!(
                "cannot infer the format of {}; set it explicitly",
                path.display()
            ))),
        }
    }
}

impl std::str::FromStr for AnnotationFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "conllu" | "conll" => Ok(Self::Conllu),
            "spacy_json" | "spacy" | "json" => Ok(Self::SpacyJson),
            _ => Err(format!("unknown annotation format: {s}")),
        }
    }
}

/// Parses looked up by normalized transcript text.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedParser {
    /// Normalized keys in file order.
    order: Vec<String>,
    sentences: HashMap<String, ParsedSentence>,
}

impl PrecomputedParser {
    /// Index parsed transcripts. A repeated transcript keeps its first parse.
    #[must_use]
    pub fn from_sentences(sentences: impl IntoIterator<Item = ParsedSentence>) -> Self {
        let mut parser = Self::default();

        for sentence in sentences {
            let key = normalize_text(sentence.text());
            if parser.sentences.contains_key(&key) {
                warn!("Duplicate annotation for transcript {key:?}, keeping the first");
                continue;
            }
            parser.order.push(key.clone());
            parser.sentences.insert(key, sentence);
        }

        parser
    }

    pub fn from_conllu(input: &str) -> Result<Self, ParseError> {
        Ok(Self::from_sentences(read_conllu(input)?))
    }

    pub fn from_spacy_json(input: &str) -> Result<Self, ParseError> {
        Ok(Self::from_sentences(read_spacy_json(input)?))
    }

    /// Load an annotation file.
    ///
    /// # Errors
    /// IO failures, an unrecognized format, or malformed annotations.
    pub fn load(path: &Path, format: AnnotationFormat) -> Result<Self, ParseError> {
        let format = format.resolve(path)?;
        let content = std::fs::read_to_string(path)?;

        let parser = match format {
            AnnotationFormat::Conllu => Self::from_conllu(&content)?,
            AnnotationFormat::SpacyJson => Self::from_spacy_json(&content)?,
            AnnotationFormat::Auto => {
                return Err(ParseError::UnsupportedFormat(
                    "format left unresolved".to_string(),
                ));
            }
        };

        info!(
            "Loaded {} annotated transcripts from {} ({})",
            parser.len(),
            path.display(),
            format.as_str()
        );
        Ok(parser)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Transcript texts in file order.
    pub fn transcripts(&self) -> impl Iterator<Item = &str> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.sentences.get(key))
            .map(ParsedSentence::text)
    }
}

impl SentenceParser for PrecomputedParser {
    fn parse(&self, text: &str) -> Result<ParsedSentence, ParseError> {
        self.sentences
            .get(&normalize_text(text))
            .cloned()
            .ok_or_else(|| ParseError::UnknownTranscript(text.to_string()))
    }
}
