//! CoNLL-U reader.
//!
//! Ten tab-separated columns per token line:
//! `ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC`.
//! Sentences end at a blank line and need a `# text = ...` comment. A
//! `# newdoc` comment starts a transcript that spans the following sentences;
//! without one every sentence is its own transcript.
//!
//! MISC may carry `Ent=<LABEL>` (or `NER=<LABEL>`) and `LikeNum=Yes|No`.

use ordersift_core::{DepRole, ParseError, ParsedSentence, PartOfSpeech, TokenAnnotation};

const COLUMNS: usize = 10;

#[derive(Debug, Default)]
struct SentenceBuf {
    text: Option<String>,
    tokens: Vec<TokenAnnotation>,
    first_line: usize,
}

impl SentenceBuf {
    fn is_empty(&self) -> bool {
        self.text.is_none() && self.tokens.is_empty()
    }
}

#[derive(Debug, Default)]
struct DocumentBuf {
    texts: Vec<String>,
    tokens: Vec<TokenAnnotation>,
}

impl DocumentBuf {
    /// Append a sentence, rebasing its heads onto the document's token arena.
    fn push(&mut self, text: String, tokens: Vec<TokenAnnotation>) {
        let offset = self.tokens.len();
        self.texts.push(text);
        self.tokens.extend(tokens.into_iter().map(|mut token| {
            token.head = token.head.map(|head| head + offset);
            token
        }));
    }

    fn finish(self) -> Result<Option<ParsedSentence>, ParseError> {
        if self.texts.is_empty() {
            return Ok(None);
        }
        ParsedSentence::new(self.texts.join(" "), self.tokens).map(Some)
    }
}

#[derive(Debug, Default)]
struct Reader {
    documents: Vec<ParsedSentence>,
    open_document: Option<DocumentBuf>,
    sentence: SentenceBuf,
}

impl Reader {
    fn comment(&mut self, line_no: usize, body: &str) -> Result<(), ParseError> {
        let body = body.trim();

        if body.starts_with("newdoc") {
            self.end_sentence()?;
            self.end_document()?;
            self.open_document = Some(DocumentBuf::default());
            return Ok(());
        }

        if let Some((key, value)) = body.split_once('=') {
            if key.trim() == "text" {
                self.mark_start(line_no);
                self.sentence.text = Some(value.trim().to_string());
            }
        }
        Ok(())
    }

    fn mark_start(&mut self, line_no: usize) {
        if self.sentence.is_empty() {
            self.sentence.first_line = line_no;
        }
    }

    fn token(&mut self, line_no: usize, line: &str) -> Result<(), ParseError> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() != COLUMNS {
            return Err(ParseError::malformed(
                line_no,
                format!("expected {COLUMNS} columns, found {}", columns.len()),
            ));
        }

        let id = columns[0];
        // multiword tokens and empty nodes carry no tree position of their own
        if id.contains('-') || id.contains('.') {
            return Ok(());
        }

        let id: usize = id
            .parse()
            .map_err(|_| ParseError::malformed(line_no, format!("invalid token id {id:?}")))?;
        let expected = self.sentence.tokens.len() + 1;
        if id != expected {
            return Err(ParseError::malformed(
                line_no,
                format!("token id {id} out of sequence, expected {expected}"),
            ));
        }

        let head = match columns[6] {
            "_" => None,
            raw => {
                let head: usize = raw.parse().map_err(|_| {
                    ParseError::malformed(line_no, format!("invalid head {raw:?}"))
                })?;
                head.checked_sub(1)
            }
        };

        self.mark_start(line_no);

        let mut annotation = TokenAnnotation::new(
            columns[1],
            PartOfSpeech::from_label(columns[3]),
            DepRole::from_label(columns[7]),
        );
        annotation.head = head;
        apply_misc(&mut annotation, columns[9]);

        self.sentence.tokens.push(annotation);
        Ok(())
    }

    fn end_sentence(&mut self) -> Result<(), ParseError> {
        let sentence = std::mem::take(&mut self.sentence);
        if sentence.is_empty() {
            return Ok(());
        }

        let Some(text) = sentence.text else {
            return Err(ParseError::malformed(
                sentence.first_line,
                "sentence has no `# text = ...` comment",
            ));
        };

        let len = sentence.tokens.len();
        if let Some(bad) = sentence
            .tokens
            .iter()
            .filter_map(|token| token.head)
            .find(|&head| head >= len)
        {
            return Err(ParseError::malformed(
                sentence.first_line,
                format!("head {} outside the {len}-token sentence", bad + 1),
            ));
        }

        match self.open_document.as_mut() {
            Some(document) => document.push(text, sentence.tokens),
            None => {
                let mut document = DocumentBuf::default();
                document.push(text, sentence.tokens);
                if let Some(parsed) = document.finish()? {
                    self.documents.push(parsed);
                }
            }
        }
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), ParseError> {
        if let Some(document) = self.open_document.take() {
            if let Some(parsed) = document.finish()? {
                self.documents.push(parsed);
            }
        }
        Ok(())
    }
}

fn apply_misc(annotation: &mut TokenAnnotation, misc: &str) {
    if misc == "_" {
        return;
    }

    for field in misc.split('|') {
        let Some((key, value)) = field.split_once('=') else {
            continue;
        };
        match key {
            "Ent" | "NER" if !value.is_empty() && value != "O" => {
                annotation.entity = Some(value.to_string());
            }
            "LikeNum" => match value {
                "Yes" | "yes" | "True" | "true" => annotation.like_num = true,
                "No" | "no" | "False" | "false" => annotation.like_num = false,
                _ => {}
            },
            _ => {}
        }
    }
}

/// Read every transcript in a CoNLL-U document.
///
/// # Errors
/// [`ParseError::Malformed`] with the offending line number, or
/// [`ParseError::InvalidTree`] for a token that heads itself.
pub fn read_conllu(input: &str) -> Result<Vec<ParsedSentence>, ParseError> {
    let mut reader = Reader::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            reader.end_sentence()?;
        } else if let Some(body) = line.strip_prefix('#') {
            reader.comment(line_no, body)?;
        } else {
            reader.token(line_no, line)?;
        }
    }

    reader.end_sentence()?;
    reader.end_document()?;
    Ok(reader.documents)
}
