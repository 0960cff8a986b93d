//! swiftfmt core
//!
//! Whitespace-level formatting engine for Swift source. The crate consumes
//! the token stream produced by `swiftfmt_lexer` (or any tokenizer honoring
//! the same contract) and rewrites it in place through a fixed pipeline of
//! rules.
//!
//! # Quick Start
//!
//! ```ignore
//! use swiftfmt::{apply_all, FormatOptions, Formatter};
//!
//! let mut formatter = Formatter::new(tokens, FormatOptions::default());
//! apply_all(&mut formatter);
//! let tokens = formatter.into_tokens();
//! ```
//!
//! # Architecture
//!
//! - [`state::Formatter`]: the mutable token buffer with positional
//!   queries, scope queries, and index-anchored edits
//! - [`options::FormatOptions`]: the immutable style record
//! - [`rules`]: ~29 independent rule functions
//! - [`pipeline`]: fixed-order application and subset selection
//!
//! # Guarantees
//!
//! The pipeline never changes program meaning: only whitespace, line
//! breaks, and a small set of enumerated normalizations (specifier order,
//! redundant condition parens, dead semicolons, `Void` / `()`, trailing
//! commas, comment tags, header comments) are rewritten. Formatting is
//! idempotent, and lexer error tokens pass through untouched — a rule never
//! panics on malformed input.

pub mod options;
pub mod pipeline;
pub mod rules;
pub mod state;

pub use options::FormatOptions;
pub use pipeline::{apply_all, apply_named, PipelineError, Rule, RULES};
pub use state::Formatter;
pub use swiftfmt_tokens::Token;

/// Format a token stream with the full pipeline.
pub fn format_tokens(tokens: Vec<Token>, options: FormatOptions) -> Vec<Token> {
    let mut formatter = Formatter::new(tokens, options);
    apply_all(&mut formatter);
    formatter.into_tokens()
}
