//! Property-based tests for the formatting pipeline
//!
//! Documents are generated from the term grammar itself, so every input is
//! valid; the properties are the contract of the pipeline: formatting
//! succeeds, is idempotent, and never touches anything but whitespace.

use erlterm::erlterm::lexer::tokenize;
use erlterm::erlterm::pipeline::format_str;
use proptest::prelude::*;

/// Generate leaf terms: atoms, numbers, strings, the ellipsis placeholder
fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Unquoted atoms
        "[a-z][a-z0-9_@]{0,8}",
        // Integers, floats, scientific notation
        "-?[0-9]{1,6}",
        "[0-9]{1,4}\\.[0-9]{1,4}",
        "[0-9]{1,3}\\.[0-9]{1,3}e[+-]?[0-9]{1,2}",
        // Strings without escapes
        "\"[a-z0-9 ]{0,10}\"",
        // Truncation marker
        Just("...".to_string()),
    ]
}

/// Generate arbitrarily nested terms
fn term_strategy() -> impl Strategy<Value = String> {
    leaf_strategy().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            // Lists
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|terms| format!("[{}]", terms.join(", "))),
            // Tuples
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|terms| format!("{{{}}}", terms.join(", "))),
            // Binaries hold numbers and strings
            prop::collection::vec(prop_oneof!["[0-9]{1,3}", "\"[a-z]{0,6}\""], 0..4)
                .prop_map(|segments| format!("<<{}>>", segments.join(", "))),
            // Maps with atom keys
            prop::collection::vec(("[a-z][a-z0-9_]{0,6}", inner), 0..3)
                .prop_map(|entries| {
                    let entries: Vec<String> = entries
                        .into_iter()
                        .map(|(key, value)| format!("{} => {}", key, value))
                        .collect();
                    format!("#{{{}}}", entries.join(", "))
                }),
        ]
    })
}

/// Generate whole documents: dotted terms, some with a trailing comment
fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((term_strategy(), prop::option::of("% [a-z ]{0,12}")), 1..5).prop_map(
        |terms| {
            terms
                .into_iter()
                .map(|(term, comment)| match comment {
                    Some(comment) => format!("{}. {}", term, comment),
                    None => format!("{}.", term),
                })
                .collect::<Vec<_>>()
                .join("\n")
        },
    )
}

proptest! {
    #[test]
    fn formatting_succeeds_on_valid_documents(doc in document_strategy()) {
        prop_assert!(format_str(&doc).is_ok());
    }

    #[test]
    fn formatting_is_idempotent(doc in document_strategy()) {
        let once = format_str(&doc).unwrap();
        let twice = format_str(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn token_sequence_survives_formatting(doc in document_strategy()) {
        // The formatter only re-derives whitespace; every literal, in order,
        // must come through untouched.
        let formatted = format_str(&doc).unwrap();
        prop_assert_eq!(tokenize(&doc), tokenize(&formatted));
    }

    #[test]
    fn formatting_never_panics(input in "\\PC{0,64}") {
        // Arbitrary junk may fail to lex, but must fail cleanly.
        let _ = format_str(&input);
    }
}
