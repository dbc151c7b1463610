//! Reader for spaCy `Doc.to_json()` exports.
//!
//! Accepts either one document object or an array of them. Offsets are
//! character (not byte) offsets into `text`; a token whose `head` is itself
//! is a root.

use ordersift_core::{DepRole, ParseError, ParsedSentence, PartOfSpeech, TokenAnnotation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Input {
    Many(Vec<SpacyDoc>),
    One(SpacyDoc),
}

#[derive(Debug, Deserialize)]
struct SpacyDoc {
    text: String,
    #[serde(default)]
    ents: Vec<SpacyEntity>,
    tokens: Vec<SpacyToken>,
}

#[derive(Debug, Deserialize)]
struct SpacyEntity {
    start: usize,
    end: usize,
    label: String,
}

#[derive(Debug, Deserialize)]
struct SpacyToken {
    id: usize,
    start: usize,
    end: usize,
    #[serde(default)]
    pos: String,
    #[serde(default)]
    dep: String,
    head: usize,
    #[serde(default)]
    like_num: Option<bool>,
}

/// Byte offset of every char boundary, plus the end of the string.
fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect()
}

fn convert(doc_index: usize, doc: SpacyDoc) -> Result<ParsedSentence, ParseError> {
    let invalid = |reason: String| ParseError::InvalidDocument {
        doc: doc_index,
        reason,
    };
    let boundaries = char_boundaries(&doc.text);

    let mut tokens = Vec::with_capacity(doc.tokens.len());
    for (position, token) in doc.tokens.iter().enumerate() {
        if token.id != position {
            return Err(invalid(format!(
                "token id {} at position {position}",
                token.id
            )));
        }

        let (Some(&start), Some(&end)) = (boundaries.get(token.start), boundaries.get(token.end))
        else {
            return Err(invalid(format!(
                "token {} offsets {}..{} outside the text",
                token.id, token.start, token.end
            )));
        };
        if start > end {
            return Err(invalid(format!(
                "token {} offsets {}..{} are reversed",
                token.id, token.start, token.end
            )));
        }

        let mut annotation = TokenAnnotation::new(
            &doc.text[start..end],
            PartOfSpeech::from_label(&token.pos),
            DepRole::from_label(&token.dep),
        );
        annotation.head = (token.head != token.id).then_some(token.head);
        if let Some(like_num) = token.like_num {
            annotation.like_num = like_num;
        }
        if let Some(entity) = doc
            .ents
            .iter()
            .find(|ent| ent.start <= token.start && token.end <= ent.end)
        {
            annotation = annotation.with_entity(entity.label.clone());
        }

        tokens.push(annotation);
    }

    ParsedSentence::new(doc.text, tokens)
}

/// Read spaCy JSON documents.
///
/// # Errors
/// [`ParseError::Json`] for invalid JSON, [`ParseError::InvalidDocument`] for
/// inconsistent token offsets or ids, [`ParseError::InvalidTree`] for bad heads.
pub fn read_spacy_json(input: &str) -> Result<Vec<ParsedSentence>, ParseError> {
    let docs = match serde_json::from_str::<Input>(input)? {
        Input::Many(docs) => docs,
        Input::One(doc) => vec![doc],
    };

    docs.into_iter()
        .enumerate()
        .map(|(index, doc)| convert(index, doc))
        .collect()
}
