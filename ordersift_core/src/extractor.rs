//! Quantity/item pairing over a parsed transcript.
//!
//! A single left-to-right pass keeps one pending quantity. Numeric-like
//! tokens overwrite it; each item token takes it (if any), gets its special
//! request from [`collect_modifiers`], and clears it. A quantity with no
//! following item is dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::modifiers::collect_modifiers;
use crate::order::{OrderEntry, TranscriptResult};
use crate::token::{ParsedSentence, PartOfSpeech, TokenRef};

/// Which tokens count as ordered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRules {
    /// Entity labels that mark an item, compared case-insensitively.
    #[serde(default = "ExtractionRules::default_item_entity_labels")]
    pub item_entity_labels: Vec<String>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self {
            item_entity_labels: Self::default_item_entity_labels(),
        }
    }
}

impl ExtractionRules {
    fn default_item_entity_labels() -> Vec<String> {
        vec!["FOOD".to_string(), "PRODUCT".to_string()]
    }

    /// Entity-typed as food/product, or a common noun.
    #[must_use]
    pub fn is_item(&self, token: &TokenRef<'_>) -> bool {
        let entity_match = token.entity().is_some_and(|label| {
            self.item_entity_labels
                .iter()
                .any(|known| known.eq_ignore_ascii_case(label))
        });

        entity_match || *token.pos() == PartOfSpeech::Noun
    }
}

/// Stateless extractor; every call owns its own pending-quantity slot.
#[derive(Debug, Clone, Default)]
pub struct OrderExtractor {
    rules: ExtractionRules,
}

impl OrderExtractor {
    #[must_use]
    pub const fn new(rules: ExtractionRules) -> Self {
        Self { rules }
    }

    /// Extract the order entries of one parsed transcript.
    #[must_use]
    pub fn extract(&self, sentence: &ParsedSentence) -> TranscriptResult {
        let mut result = TranscriptResult::new(sentence.text());
        let mut pending: Option<String> = None;

        for token in sentence.tokens() {
            if token.like_num() {
                pending = Some(token.text().to_string());
            } else if self.rules.is_item(&token) {
                let mut entry = OrderEntry::new(token.text())
                    .with_special_request(collect_modifiers(token));
                entry.quantity = pending.take();

                debug!(
                    "Order entry: item={} quantity={:?} special_request={:?}",
                    entry.item, entry.quantity, entry.special_request
                );
                result.order.push(entry);
            }
        }

        if let Some(quantity) = pending {
            debug!("Dropping quantity {quantity:?} with no following item");
        }

        result
    }
}

/// Extract with the default rules.
#[must_use]
pub fn extract(sentence: &ParsedSentence) -> TranscriptResult {
    OrderExtractor::default().extract(sentence)
}
