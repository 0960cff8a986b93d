//! Whitespace-preserving Swift tokenizer.
//!
//! Produces the flat token stream the formatter rewrites: whitespace runs,
//! line breaks, comment text, and string bodies are all first-class tokens,
//! so concatenating payloads reproduces the input byte-for-byte.
//!
//! # Architecture
//!
//! ```text
//! source → raw scanner (logos) → cook (split/classify) → scopes (context) → Vec<Token>
//! ```
//!
//! - [`raw`]: logos-derived scanner; nothing is skipped, `<`/`>` always scan
//!   as single characters
//! - [`cook`]: keyword resolution, comment and string splitting, error
//!   coalescing
//! - [`scopes`]: generic angle-bracket disambiguation, switch-case
//!   pseudo-scopes, operator-run merging
//!
//! # Error Handling
//!
//! Unlexable input becomes [`Token::Error`] and lexing continues. The lexer
//! never panics and never drops bytes; [`untokenize`] of any lex result is
//! the original source.

mod cook;
mod keywords;
mod raw;
mod scopes;

pub use swiftfmt_tokens::Token;

/// Tokenize Swift source into the formatter's token stream.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = cook::cook(source);
    scopes::classify(&mut tokens);
    tokens
}

/// Serialize a token stream back to source text.
///
/// Plain payload concatenation: `untokenize(&tokenize(s)) == s` for every
/// input `s`.
pub fn untokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

#[cfg(test)]
mod tests {
    use super::{tokenize, untokenize};

    #[test]
    fn round_trips_mixed_source() {
        let samples = [
            "",
            "func foo() {\n    return 1\n}\n",
            "let x = [1, 2,   3]\t// trailing\r\n",
            "/* block\n   comment */ let y = \"str \\(x)\"\n",
            "switch x {\ncase .a: break\ndefault: break\n}\n",
            "if a < b && c > d {}\n",
            "let m: [String: Array<Int>] = [:]\n",
            "#if DEBUG\nprint(1)\n#endif\n",
            "broken ''' input \"unterminated\nnext line",
        ];
        for sample in samples {
            assert_eq!(untokenize(&tokenize(sample)), sample, "{sample:?}");
        }
    }

    #[test]
    fn whitespace_never_contains_linebreaks() {
        let tokens = tokenize("a \t b\r\n  c\rd\ne");
        for token in &tokens {
            if token.is_whitespace() {
                assert!(!token.text().contains(['\n', '\r']), "{token:?}");
            }
            if token.is_linebreak() {
                assert!(matches!(token.text(), "\n" | "\r\n" | "\r"), "{token:?}");
            }
        }
    }

    #[test]
    fn adjacent_trivia_is_coalesced() {
        let tokens = tokenize("a   b\t\tc");
        let mut prev_ws = false;
        for token in &tokens {
            assert!(!(prev_ws && token.is_whitespace()), "adjacent whitespace");
            prev_ws = token.is_whitespace();
        }
    }
}
