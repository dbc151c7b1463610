//! Parsed-sentence token model.
//!
//! A [`ParsedSentence`] owns its tokens in surface order. Dependency links are
//! stored as indices into that arena: every token knows its head and its
//! ordered children. [`TokenRef`] is the borrowed view used to walk the tree.

use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::ParseError;
use crate::lexical::like_num;

/// Coarse part-of-speech tag (Universal POS tag set, plus spaCy's `SPACE`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    /// Common noun.
    Noun,
    Num,
    Part,
    Pron,
    /// Proper noun.
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    #[default]
    X,
    Space,
    /// A tag outside the known set, kept verbatim.
    Other(String),
}

impl PartOfSpeech {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
            Self::Space => "SPACE",
            Self::Other(tag) => tag,
        }
    }

    /// Parse a tag label, case-insensitively. Unknown tags become [`Self::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "ADJ" => Self::Adj,
            "ADP" => Self::Adp,
            "ADV" => Self::Adv,
            "AUX" => Self::Aux,
            "CCONJ" | "CONJ" => Self::Cconj,
            "DET" => Self::Det,
            "INTJ" => Self::Intj,
            "NOUN" => Self::Noun,
            "NUM" => Self::Num,
            "PART" => Self::Part,
            "PRON" => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM" => Self::Sym,
            "VERB" => Self::Verb,
            "X" | "_" | "" => Self::X,
            "SPACE" => Self::Space,
            _ => Self::Other(label.to_string()),
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency role of a token relative to its syntactic head.
///
/// Only the roles the modifier collector inspects get their own variant;
/// everything else is carried as [`Self::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepRole {
    /// `amod`
    AdjectivalModifier,
    /// `prep`
    PrepositionalComplement,
    /// `pobj`
    PrepositionalObject,
    /// `advmod`
    AdverbialModifier,
    /// `conj`
    Conjunct,
    /// `ROOT`
    Root,
    Other(String),
}

impl DepRole {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AdjectivalModifier => "amod",
            Self::PrepositionalComplement => "prep",
            Self::PrepositionalObject => "pobj",
            Self::AdverbialModifier => "advmod",
            Self::Conjunct => "conj",
            Self::Root => "ROOT",
            Self::Other(label) => label,
        }
    }

    /// Parse a dependency label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "amod" => Self::AdjectivalModifier,
            "prep" => Self::PrepositionalComplement,
            "pobj" => Self::PrepositionalObject,
            "advmod" => Self::AdverbialModifier,
            "conj" => Self::Conjunct,
            "root" => Self::Root,
            _ => Self::Other(label.to_string()),
        }
    }

    /// Whether a child with this role contributes its text to a special request.
    #[must_use]
    pub const fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::AdjectivalModifier
                | Self::PrepositionalComplement
                | Self::PrepositionalObject
                | Self::AdverbialModifier
                | Self::Conjunct
        )
    }

    /// Whether a grandchild under a preposition with this role is harvested.
    #[must_use]
    pub const fn is_prepositional_payload(&self) -> bool {
        matches!(self, Self::PrepositionalObject | Self::AdjectivalModifier)
    }
}

impl FromStr for DepRole {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for DepRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parser output for one token, before it is linked into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAnnotation {
    pub text: String,
    pub pos: PartOfSpeech,
    /// Named-entity label; `None` when the token is outside any entity.
    pub entity: Option<String>,
    pub like_num: bool,
    pub dep: DepRole,
    /// Index of the head token; `None` for a root.
    pub head: Option<usize>,
}

impl TokenAnnotation {
    /// Create a root annotation with lexically derived numeric-likeness.
    pub fn new(text: impl Into<String>, pos: PartOfSpeech, dep: DepRole) -> Self {
        let text = text.into();
        let like_num = like_num(&text);
        Self {
            text,
            pos,
            entity: None,
            like_num,
            dep,
            head: None,
        }
    }

    #[must_use]
    pub const fn with_head(mut self, head: usize) -> Self {
        self.head = Some(head);
        self
    }

    /// Attach an entity label. Empty labels are treated as no label.
    #[must_use]
    pub fn with_entity(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.entity = (!label.is_empty()).then_some(label);
        self
    }

    #[must_use]
    pub const fn with_like_num(mut self, like_num: bool) -> Self {
        self.like_num = like_num;
        self
    }
}

/// One token of a [`ParsedSentence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    pos: PartOfSpeech,
    entity: Option<String>,
    like_num: bool,
    dep: DepRole,
    head: Option<usize>,
    children: Vec<usize>,
}

impl Token {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn pos(&self) -> &PartOfSpeech {
        &self.pos
    }

    #[must_use]
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    #[must_use]
    pub const fn like_num(&self) -> bool {
        self.like_num
    }

    #[must_use]
    pub const fn dep(&self) -> &DepRole {
        &self.dep
    }

    #[must_use]
    pub const fn head_index(&self) -> Option<usize> {
        self.head
    }

    /// Indices of the direct dependents, in surface order.
    #[must_use]
    pub fn child_indices(&self) -> &[usize] {
        &self.children
    }
}

/// An annotated transcript: tokens in surface order, linked into one or more
/// dependency trees (one per sentence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSentence {
    text: String,
    tokens: Vec<Token>,
}

impl ParsedSentence {
    /// Link annotations into a tree.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidTree`] if a head index is out of range or a
    /// token names itself as its head.
    pub fn new(
        text: impl Into<String>,
        annotations: Vec<TokenAnnotation>,
    ) -> Result<Self, ParseError> {
        let len = annotations.len();
        let mut children = vec![Vec::new(); len];

        for (index, annotation) in annotations.iter().enumerate() {
            match annotation.head {
                Some(head) if head >= len => {
                    return Err(ParseError::InvalidTree {
                        index,
                        reason: format!("head {head} out of range for {len} tokens"),
                    });
                }
                Some(head) if head == index => {
                    return Err(ParseError::InvalidTree {
                        index,
                        reason: "token is its own head".to_string(),
                    });
                }
                Some(head) => children[head].push(index),
                None => {}
            }
        }

        let tokens = annotations
            .into_iter()
            .zip(children)
            .map(|(annotation, children)| Token {
                text: annotation.text,
                pos: annotation.pos,
                entity: annotation.entity.filter(|label| !label.is_empty()),
                like_num: annotation.like_num,
                dep: annotation.dep,
                head: annotation.head,
                children,
            })
            .collect();

        Ok(Self {
            text: text.into(),
            tokens,
        })
    }

    /// The transcript text this parse was produced from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<TokenRef<'_>> {
        (index < self.tokens.len()).then_some(TokenRef {
            sentence: self,
            index,
        })
    }

    /// Tokens in surface order.
    pub fn tokens(&self) -> impl Iterator<Item = TokenRef<'_>> + '_ {
        (0..self.tokens.len()).map(move |index| TokenRef {
            sentence: self,
            index,
        })
    }

    /// Tokens without a head, in surface order.
    pub fn roots(&self) -> impl Iterator<Item = TokenRef<'_>> + '_ {
        self.tokens().filter(|token| token.head_index().is_none())
    }
}

/// Borrowed handle to one token inside its sentence.
#[derive(Debug, Clone, Copy)]
pub struct TokenRef<'a> {
    sentence: &'a ParsedSentence,
    index: usize,
}

impl<'a> TokenRef<'a> {
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn head(&self) -> Option<TokenRef<'a>> {
        self.head_index().and_then(|head| self.sentence.get(head))
    }

    /// Direct dependents, in surface order.
    pub fn children(&self) -> impl Iterator<Item = TokenRef<'a>> + use<'a> {
        let sentence = self.sentence;
        sentence.tokens[self.index]
            .children
            .iter()
            .map(move |&index| TokenRef { sentence, index })
    }
}

impl Deref for TokenRef<'_> {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        &self.sentence.tokens[self.index]
    }
}
