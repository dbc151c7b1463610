//! Integration tests for file-backed parsers feeding the extractor.

use std::io::Write;

use ordersift_core::{
    FailurePolicy, OrderEntry, OrderExtractor, ParseError, SentenceParser, extract,
    process_transcripts,
};
use ordersift_providers::{AnnotationFormat, PrecomputedParser};

const ORDER_CONLLU: &str = "\
# newdoc id = order-1
# text = I'd like to order two cheeseburgers and one large fries.
1\tI\tI\tPRON\tPRP\t_\t3\tnsubj\t_\t_
2\t'd\twould\tAUX\tMD\t_\t3\taux\t_\t_
3\tlike\tlike\tVERB\tVB\t_\t0\tROOT\t_\t_
4\tto\tto\tPART\tTO\t_\t5\taux\t_\t_
5\torder\torder\tVERB\tVB\t_\t3\txcomp\t_\t_
6\ttwo\ttwo\tNUM\tCD\t_\t7\tnummod\t_\t_
7\tcheeseburgers\tcheeseburger\tNOUN\tNNS\t_\t5\tdobj\t_\t_
8\tand\tand\tCCONJ\tCC\t_\t7\tcc\t_\t_
9\tone\tone\tNUM\tCD\t_\t11\tnummod\t_\t_
10\tlarge\tlarge\tADJ\tJJ\t_\t11\tamod\t_\t_
11\tfries\tfry\tNOUN\tNNS\t_\t7\tconj\t_\tSpaceAfter=No
12\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\t_

# text = Can you also add a Coke?
1\tCan\tcan\tAUX\tMD\t_\t4\taux\t_\t_
2\tyou\tyou\tPRON\tPRP\t_\t4\tnsubj\t_\t_
3\talso\talso\tADV\tRB\t_\t4\tadvmod\t_\t_
4\tadd\tadd\tVERB\tVB\t_\t0\tROOT\t_\t_
5\ta\ta\tDET\tDT\t_\t6\tdet\t_\t_
6\tCoke\tCoke\tPROPN\tNNP\t_\t4\tdobj\t_\tEnt=PRODUCT|SpaceAfter=No
7\t?\t?\tPUNCT\t.\t_\t4\tpunct\t_\t_

# newdoc id = order-2
# text = I'd like five samosas.
1\tI\tI\tPRON\tPRP\t_\t3\tnsubj\t_\t_
2\t'd\twould\tAUX\tMD\t_\t3\taux\t_\t_
3\tlike\tlike\tVERB\tVB\t_\t0\tROOT\t_\t_
4\tfive\tfive\tNUM\tCD\t_\t5\tnummod\t_\t_
5\tsamosas\tsamosa\tNOUN\tNNS\t_\t3\tdobj\t_\tSpaceAfter=No
6\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\t_
";

const FIRST: &str =
    "I'd like to order two cheeseburgers and one large fries. Can you also add a Coke?";

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_conllu_file_end_to_end() {
    let file = write_temp(".conllu", ORDER_CONLLU);
    let parser = PrecomputedParser::load(file.path(), AnnotationFormat::Auto).expect("load");

    assert_eq!(parser.len(), 2);
    let transcripts: Vec<_> = parser.transcripts().collect();
    assert_eq!(transcripts, vec![FIRST, "I'd like five samosas."]);

    let result = extract(&parser.parse(FIRST).expect("known transcript"));
    assert_eq!(
        result.order,
        vec![
            OrderEntry::new("cheeseburgers")
                .with_quantity("two")
                .with_special_request("fries"),
            OrderEntry::new("fries")
                .with_quantity("one")
                .with_special_request("large"),
            OrderEntry::new("Coke"),
        ]
    );
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_lookup_ignores_whitespace_differences() {
    let parser = PrecomputedParser::from_conllu(ORDER_CONLLU).expect("valid CoNLL-U");
    let sentence = parser
        .parse("  I'd like   five\nsamosas. ")
        .expect("normalized lookup");

    assert_eq!(sentence.text(), "I'd like five samosas.");
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_unknown_transcript_is_a_parser_failure() {
    let parser = PrecomputedParser::from_conllu(ORDER_CONLLU).expect("valid CoNLL-U");
    assert!(matches!(
        parser.parse("Give me a garlic bread."),
        Err(ParseError::UnknownTranscript(_))
    ));
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_batch_skip_policy_over_file_parser() {
    let parser = PrecomputedParser::from_conllu(ORDER_CONLLU).expect("valid CoNLL-U");
    let transcripts = [FIRST, "Give me a garlic bread.", "I'd like five samosas."];

    let outcome = process_transcripts(
        &parser,
        &OrderExtractor::default(),
        &transcripts,
        FailurePolicy::Skip,
    )
    .expect("skip policy");

    assert_eq!(outcome.results.len(), 2);
    assert_eq!(
        outcome.results[1].order,
        vec![OrderEntry::new("samosas").with_quantity("five")]
    );
    assert_eq!(outcome.failures[0].transcript, "Give me a garlic bread.");
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_spacy_json_matches_conllu() {
    let json = r#"[{
        "text": "I'd like five samosas.",
        "ents": [{"start": 9, "end": 13, "label": "CARDINAL"}],
        "tokens": [
            {"id": 0, "start": 0, "end": 1, "pos": "PRON", "dep": "nsubj", "head": 2},
            {"id": 1, "start": 1, "end": 3, "pos": "AUX", "dep": "aux", "head": 2},
            {"id": 2, "start": 4, "end": 8, "pos": "VERB", "dep": "ROOT", "head": 2},
            {"id": 3, "start": 9, "end": 13, "pos": "NUM", "dep": "nummod", "head": 4},
            {"id": 4, "start": 14, "end": 21, "pos": "NOUN", "dep": "dobj", "head": 2},
            {"id": 5, "start": 21, "end": 22, "pos": "PUNCT", "dep": "punct", "head": 2}
        ]
    }]"#;
    let file = write_temp(".json", json);

    let from_json = PrecomputedParser::load(file.path(), AnnotationFormat::Auto).expect("load");
    let from_conllu = PrecomputedParser::from_conllu(ORDER_CONLLU).expect("valid CoNLL-U");

    let text = "I'd like five samosas.";
    assert_eq!(
        extract(&from_json.parse(text).expect("json parse")),
        extract(&from_conllu.parse(text).expect("conllu parse"))
    );
}

#[test]
fn test_unknown_extension_needs_explicit_format() {
    let file = write_temp(".txt", ORDER_CONLLU);
    assert!(matches!(
        PrecomputedParser::load(file.path(), AnnotationFormat::Auto),
        Err(ParseError::UnsupportedFormat(_))
    ));
    assert!(PrecomputedParser::load(file.path(), AnnotationFormat::Conllu).is_ok());
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        PrecomputedParser::load(
            std::path::Path::new("/nonexistent/annotations.conllu"),
            AnnotationFormat::Auto
        ),
        Err(ParseError::Io(_))
    ));
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_duplicate_transcript_keeps_first_parse() {
    let input = "\
# text = two fries
1\ttwo\ttwo\tNUM\tCD\t_\t2\tnummod\t_\t_
2\tfries\tfry\tNOUN\tNNS\t_\t0\tROOT\t_\t_

# text = two  fries
1\ttwo\ttwo\tNOUN\tNN\t_\t0\tROOT\t_\tLikeNum=No
2\tfries\tfry\tNOUN\tNNS\t_\t1\tdobj\t_\t_
";
    let parser = PrecomputedParser::from_conllu(input).expect("valid CoNLL-U");

    assert_eq!(parser.len(), 1);
    assert_eq!(parser.transcripts().collect::<Vec<_>>(), vec!["two fries"]);

    let result = extract(&parser.parse("two  fries").expect("known transcript"));
    assert_eq!(
        result.order,
        vec![OrderEntry::new("fries").with_quantity("two")]
    );
}

#[test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn test_misc_flags_drive_extraction() {
    let input = "\
# text = one Coke
1\tone\tone\tNUM\tCD\t_\t2\tnummod\t_\tLikeNum=No
2\tCoke\tCoke\tPROPN\tNNP\t_\t0\tROOT\t_\tNER=PRODUCT
";
    let parser = PrecomputedParser::from_conllu(input).expect("valid CoNLL-U");
    let result = extract(&parser.parse("one Coke").expect("known transcript"));

    assert_eq!(result.order, vec![OrderEntry::new("Coke")]);
}
