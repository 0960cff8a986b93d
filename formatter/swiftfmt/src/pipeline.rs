//! Rule registry and pipeline.
//!
//! Rules run in a fixed order: normalization first, then structural edits,
//! then spacing, then indentation, then vertical whitespace, then header
//! stripping. Consumers may select a subset by name; every rule is
//! self-contained, so `indent` alone works without its predecessors.

use std::fmt;

use crate::rules;
use crate::state::Formatter;
use rustc_hash::FxHashSet;
use tracing::trace;

/// A named formatting rule.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&mut Formatter),
}

/// Every rule, in application order.
pub const RULES: &[Rule] = &[
    Rule { name: "linebreaks", apply: rules::normalize::linebreaks },
    Rule { name: "semicolons", apply: rules::normalize::semicolons },
    Rule { name: "specifiers", apply: rules::normalize::specifiers },
    Rule { name: "redundant_parens", apply: rules::normalize::redundant_parens },
    Rule { name: "void", apply: rules::normalize::void },
    Rule { name: "braces", apply: rules::braces::braces },
    Rule { name: "ranges", apply: rules::normalize::ranges },
    Rule { name: "trailing_commas", apply: rules::normalize::trailing_commas },
    Rule { name: "else_on_same_line", apply: rules::braces::else_on_same_line },
    Rule { name: "space_around_parens", apply: rules::spacing::space_around_parens },
    Rule { name: "space_inside_parens", apply: rules::spacing::space_inside_parens },
    Rule { name: "space_around_brackets", apply: rules::spacing::space_around_brackets },
    Rule { name: "space_inside_brackets", apply: rules::spacing::space_inside_brackets },
    Rule { name: "space_around_braces", apply: rules::spacing::space_around_braces },
    Rule { name: "space_inside_braces", apply: rules::spacing::space_inside_braces },
    Rule { name: "space_around_generics", apply: rules::spacing::space_around_generics },
    Rule { name: "space_inside_generics", apply: rules::spacing::space_inside_generics },
    Rule { name: "space_around_operators", apply: rules::operators::space_around_operators },
    Rule { name: "space_around_comments", apply: rules::operators::space_around_comments },
    Rule { name: "space_inside_comments", apply: rules::operators::space_inside_comments },
    Rule { name: "consecutive_spaces", apply: rules::spacing::consecutive_spaces },
    Rule { name: "todos", apply: rules::normalize::todos },
    Rule { name: "indent", apply: rules::indent::indent },
    Rule { name: "blank_lines_at_end_of_scope", apply: rules::vertical::blank_lines_at_end_of_scope },
    Rule { name: "blank_lines_between_scopes", apply: rules::vertical::blank_lines_between_scopes },
    Rule { name: "consecutive_blank_lines", apply: rules::vertical::consecutive_blank_lines },
    Rule { name: "trailing_whitespace", apply: rules::vertical::trailing_whitespace },
    Rule { name: "linebreak_at_end_of_file", apply: rules::vertical::linebreak_at_end_of_file },
    Rule { name: "strip_header", apply: rules::vertical::strip_header },
];

/// Pipeline failure: the only way the core itself reports an error. Lexer
/// problems travel inside the stream as error tokens instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    UnknownRule(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::UnknownRule(name) => write!(f, "unknown rule '{name}'"),
        }
    }
}

impl std::error::Error for PipelineError {}

/// Apply the full pipeline.
pub fn apply_all(formatter: &mut Formatter) {
    for rule in RULES {
        trace!(rule = rule.name, "applying");
        (rule.apply)(formatter);
    }
}

/// Apply a subset of rules, keeping pipeline order regardless of the order
/// the names were given in.
pub fn apply_named(formatter: &mut Formatter, names: &[&str]) -> Result<(), PipelineError> {
    let wanted: FxHashSet<&str> = names.iter().copied().collect();
    for name in &wanted {
        if !RULES.iter().any(|r| r.name == *name) {
            return Err(PipelineError::UnknownRule((*name).to_string()));
        }
    }
    for rule in RULES {
        if wanted.contains(rule.name) {
            trace!(rule = rule.name, "applying");
            (rule.apply)(formatter);
        }
    }
    Ok(())
}
