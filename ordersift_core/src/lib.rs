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
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

pub mod batch;
pub mod error;
pub mod extractor;
pub mod lexical;
pub mod modifiers;
pub mod order;
pub mod parser;
pub mod token;

pub use batch::{BatchOutcome, FailurePolicy, SkippedTranscript, process_transcripts};
pub use error::{BatchError, ParseError};
pub use extractor::{ExtractionRules, OrderExtractor, extract};
pub use lexical::like_num;
pub use modifiers::{collect_modifiers, modifier_fragments};
pub use order::{OrderEntry, TranscriptResult};
pub use parser::{SentenceParser, normalize_text};
pub use token::{DepRole, ParsedSentence, PartOfSpeech, Token, TokenAnnotation, TokenRef};
