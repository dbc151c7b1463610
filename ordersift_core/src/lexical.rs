//! Lexical numeric-likeness, for annotations that do not carry the flag.
//!
//! Follows the English `like_num` lexical attribute: digits, simple
//! fractions, cardinal and ordinal number words, and digit ordinals.

use once_cell::sync::Lazy;
use regex::Regex;

const CARDINAL_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "quadrillion", "gajillion",
    "bazillion",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth",
    "seventeenth", "eighteenth", "nineteenth", "twentieth", "thirtieth", "fortieth", "fiftieth",
    "sixtieth", "seventieth", "eightieth", "ninetieth", "hundredth", "thousandth", "millionth",
    "billionth", "trillionth", "quadrillionth", "gajillionth", "bazillionth",
];

static DIGIT_ORDINAL: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:st|nd|rd|th)$").ok());

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Whether `text` reads as a number, in digit or word form.
#[must_use]
pub fn like_num(text: &str) -> bool {
    let text = text
        .strip_prefix(['+', '-', '±', '~'])
        .unwrap_or(text)
        .replace([',', '.'], "");

    if is_digits(&text) {
        return true;
    }

    if let Some((numerator, denominator)) = text.split_once('/') {
        if is_digits(numerator) && is_digits(denominator) {
            return true;
        }
    }

    let lower = text.to_lowercase();
    if CARDINAL_WORDS.contains(&lower.as_str()) || ORDINAL_WORDS.contains(&lower.as_str()) {
        return true;
    }

    DIGIT_ORDINAL
        .as_ref()
        .is_some_and(|re| re.is_match(&lower))
}
