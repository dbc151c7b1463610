//! Special-request harvesting from an item token's dependents.
//!
//! Direct dependents in a modifier role contribute their own text. A
//! preposition additionally contributes `"<preposition> <payload>"` for each
//! of its own object/adjective dependents, since in "with extra cheese" the
//! descriptive words hang one level below "with".

use crate::token::{DepRole, TokenRef};

/// Collect modifier fragments of `token` in collection order.
#[must_use]
pub fn modifier_fragments(token: TokenRef<'_>) -> Vec<String> {
    let mut fragments = Vec::new();

    for child in token.children() {
        if child.dep().is_modifier() {
            fragments.push(child.text().to_string());
        }

        if *child.dep() == DepRole::PrepositionalComplement {
            for grandchild in child.children() {
                if grandchild.dep().is_prepositional_payload() {
                    fragments.push(format!("{} {}", child.text(), grandchild.text()));
                }
            }
        }
    }

    fragments
}

/// Space-joined special request for `token`; empty when nothing qualifies.
#[must_use]
pub fn collect_modifiers(token: TokenRef<'_>) -> String {
    modifier_fragments(token).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{ParsedSentence, PartOfSpeech, TokenAnnotation};

    fn tok(text: &str, pos: PartOfSpeech, dep: &str, head: Option<usize>) -> TokenAnnotation {
        let annotation = TokenAnnotation::new(text, pos, DepRole::from_label(dep));
        match head {
            Some(head) => annotation.with_head(head),
            None => annotation,
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_leaf_token_yields_empty_request() {
        let sentence = ParsedSentence::new("fries", vec![tok("fries", PartOfSpeech::Noun, "ROOT", None)])
            .expect("valid tree");
        let fries = sentence.get(0).expect("token");

        assert!(modifier_fragments(fries).is_empty());
        assert_eq!(collect_modifiers(fries), "");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_direct_modifiers_in_order() {
        // "very" attached to the noun rather than to "large"
        let sentence = ParsedSentence::new(
            "very large fries",
            vec![
                tok("very", PartOfSpeech::Adv, "advmod", Some(2)),
                tok("large", PartOfSpeech::Adj, "amod", Some(2)),
                tok("fries", PartOfSpeech::Noun, "ROOT", None),
            ],
        )
        .expect("valid tree");

        assert_eq!(collect_modifiers(sentence.get(2).expect("token")), "very large");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_preposition_descends_one_level() {
        // "pizza with extra olives"
        let sentence = ParsedSentence::new(
            "pizza with extra olives",
            vec![
                tok("pizza", PartOfSpeech::Noun, "ROOT", None),
                tok("with", PartOfSpeech::Adp, "prep", Some(0)),
                tok("extra", PartOfSpeech::Adj, "amod", Some(3)),
                tok("olives", PartOfSpeech::Noun, "pobj", Some(1)),
            ],
        )
        .expect("valid tree");
        let pizza = sentence.get(0).expect("token");

        assert_eq!(modifier_fragments(pizza), vec!["with", "with olives"]);
        // "extra" sits two levels below the preposition and is not reached
        assert_eq!(collect_modifiers(pizza), "with with olives");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_adjective_directly_under_preposition() {
        let sentence = ParsedSentence::new(
            "fries with large",
            vec![
                tok("fries", PartOfSpeech::Noun, "ROOT", None),
                tok("with", PartOfSpeech::Adp, "prep", Some(0)),
                tok("large", PartOfSpeech::Adj, "amod", Some(1)),
            ],
        )
        .expect("valid tree");

        assert_eq!(
            collect_modifiers(sentence.get(0).expect("token")),
            "with with large"
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_unrecognized_roles_are_skipped() {
        // "two cheeseburgers and fries"
        let sentence = ParsedSentence::new(
            "two cheeseburgers and fries",
            vec![
                tok("two", PartOfSpeech::Num, "nummod", Some(1)),
                tok("cheeseburgers", PartOfSpeech::Noun, "ROOT", None),
                tok("and", PartOfSpeech::Cconj, "cc", Some(1)),
                tok("fries", PartOfSpeech::Noun, "conj", Some(1)),
            ],
        )
        .expect("valid tree");

        assert_eq!(
            modifier_fragments(sentence.get(1).expect("token")),
            vec!["fries"]
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_non_payload_grandchildren_are_skipped() {
        // only pobj/amod under the preposition are paired with it
        let sentence = ParsedSentence::new(
            "sandwich without the onions really",
            vec![
                tok("sandwich", PartOfSpeech::Noun, "ROOT", None),
                tok("without", PartOfSpeech::Adp, "prep", Some(0)),
                tok("the", PartOfSpeech::Det, "det", Some(3)),
                tok("onions", PartOfSpeech::Noun, "pobj", Some(1)),
                tok("really", PartOfSpeech::Adv, "advmod", Some(1)),
            ],
        )
        .expect("valid tree");

        assert_eq!(
            modifier_fragments(sentence.get(0).expect("token")),
            vec!["without", "without onions"]
        );
    }
}
