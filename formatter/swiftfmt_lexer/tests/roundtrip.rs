//! Property tests for the tokenizer.
//!
//! The core contract: concatenating token payloads reproduces the input
//! byte-for-byte, for well-formed and malformed input alike, and the trivia
//! invariants (whitespace never spans lines, no adjacent whitespace runs)
//! hold on every lex.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "tests can panic")]

use proptest::prelude::*;
use swiftfmt_lexer::{tokenize, untokenize};

/// Code-shaped fragments joined by arbitrary separators stress the token
/// boundaries harder than fully random text.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,8}").expect("valid regex"),
        prop::string::string_regex("[0-9]{1,6}").expect("valid regex"),
        Just("// comment".to_string()),
        Just("/* nested /* block */ comment */".to_string()),
        Just("\"string \\\" literal\"".to_string()),
        Just("\"unterminated".to_string()),
        Just("'".to_string()),
        prop::sample::select(vec![
            "(", ")", "[", "]", "{", "}", "<", ">", ",", ";", ":", ".", "...", "..<", "->",
            "==", "??", "?", "!", "+", "-", "*", "/", "&&", "@escaping", "#if", "#endif",
            "func", "switch", "case", "default", "let",
        ])
        .prop_map(str::to_string),
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop::sample::select(vec![" ", "", "\t", "\n", "\r\n", "\r", "  "]).prop_map(str::to_string)
}

fn source() -> impl Strategy<Value = String> {
    prop::collection::vec((fragment(), separator()), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .flat_map(|(frag, sep)| [frag, sep])
            .collect()
    })
}

proptest! {
    #[test]
    fn untokenize_reproduces_code_shaped_input(source in source()) {
        prop_assert_eq!(untokenize(&tokenize(&source)), source.clone());
    }

    #[test]
    fn untokenize_reproduces_arbitrary_text(source in "\\PC{0,80}") {
        prop_assert_eq!(untokenize(&tokenize(&source)), source.clone());
    }

    #[test]
    fn trivia_invariants_hold(source in source()) {
        let tokens = tokenize(&source);
        let mut prev_is_whitespace = false;
        for token in &tokens {
            if token.is_whitespace() {
                prop_assert!(!token.text().contains(['\n', '\r']), "{:?}", token);
                prop_assert!(!prev_is_whitespace, "adjacent whitespace in {:?}", source);
            }
            if token.is_linebreak() {
                prop_assert!(matches!(token.text(), "\n" | "\r\n" | "\r"), "{:?}", token);
            }
            prev_is_whitespace = token.is_whitespace();
        }
    }

    #[test]
    fn no_token_has_an_empty_payload(source in source()) {
        for token in tokenize(&source) {
            prop_assert!(!token.text().is_empty(), "empty payload in {:?}", source);
        }
    }
}
