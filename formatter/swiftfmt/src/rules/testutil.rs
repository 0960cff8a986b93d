//! Shared helpers for rule unit tests: lex a source string, run one rule
//! (or a few), and compare the serialized result.

use crate::options::FormatOptions;
use crate::state::Formatter;
use swiftfmt_lexer::{tokenize, untokenize};

pub(crate) fn apply_with(
    rules: &[fn(&mut Formatter)],
    source: &str,
    options: FormatOptions,
) -> String {
    let mut f = Formatter::new(tokenize(source), options);
    for rule in rules {
        rule(&mut f);
    }
    untokenize(&f.into_tokens())
}

pub(crate) fn apply(rule: fn(&mut Formatter), source: &str) -> String {
    apply_with(&[rule], source, FormatOptions::default())
}
