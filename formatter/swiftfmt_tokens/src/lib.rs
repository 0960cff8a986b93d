//! Token vocabulary for the swiftfmt pipeline.
//!
//! The formatter operates on a flat sequence of [`Token`] values in which
//! whitespace, line breaks, and comment text are first-class tokens. This is
//! what makes whitespace-level rewriting possible without an AST: every rule
//! is a local edit on the sequence, and serializing the sequence back to text
//! is plain concatenation of payloads.
//!
//! # Token Kinds
//!
//! - **Literals and names**: [`Token::Number`], [`Token::Identifier`],
//!   [`Token::Keyword`]
//! - **Operators and punctuation**: [`Token::Symbol`]
//! - **Scopes**: [`Token::StartOfScope`] / [`Token::EndOfScope`] for `(`,
//!   `[`, `{`, `<`, `/*`, `//`, `"`, `#if`, plus the switch-body
//!   pseudo-scopes `case` / `default`
//! - **Trivia**: [`Token::Whitespace`] (never spans a line break),
//!   [`Token::Linebreak`] (exactly one newline sequence),
//!   [`Token::CommentBody`]
//! - **Recovery**: [`Token::Error`] for unlexable or unbalanced input; rules
//!   treat these as opaque non-whitespace tokens
//!
//! # Invariants
//!
//! After any formatting pass:
//!
//! - no two adjacent tokens are both whitespace, and no two are both line
//!   breaks
//! - a whitespace payload never contains `\n` or `\r`
//! - scope tokens appear in balanced pairs, `Error` tokens excepted

/// A classified lexeme with its source payload.
///
/// Equality compares both the kind and the payload, so `Symbol("+")` and
/// `Symbol("-")` are distinct values. Concatenating the payloads of a token
/// sequence reproduces source text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Numeric literal, including prefix and separators (`0xFF_FF`, `4.5e3`).
    Number(String),
    /// Identifier, including backticked names and anonymous closure
    /// arguments (`` `default` ``, `$0`).
    Identifier(String),
    /// Reserved word, attribute (`@escaping`), or compiler directive
    /// keyword (`#else`).
    Keyword(String),
    /// The text of a comment, excluding its delimiters.
    CommentBody(String),
    /// The text of a string literal, excluding the quotes. Opaque to every
    /// rule; kept distinct from [`Token::CommentBody`] so comment rewrites
    /// can never touch string contents.
    StringBody(String),
    /// Operator or punctuation that does not open or close a scope.
    Symbol(String),
    /// Scope opener: one of `(`, `[`, `{`, `<`, `/*`, `//`, `"`, `#if`.
    StartOfScope(String),
    /// Scope closer: one of `)`, `]`, `}`, `>`, `*/`, `"`, `#endif`, or the
    /// pseudo-scope markers `case` / `default`, which close the previous
    /// switch-case body region and open their own.
    EndOfScope(String),
    /// A run of spaces and/or tabs. Never contains a line break.
    Whitespace(String),
    /// A single `\n`, `\r\n`, or `\r`.
    Linebreak(String),
    /// Unlexable or unbalanced input, preserved verbatim.
    Error(String),
}

impl Token {
    /// The source text carried by this token.
    pub fn text(&self) -> &str {
        match self {
            Token::Number(s)
            | Token::Identifier(s)
            | Token::Keyword(s)
            | Token::CommentBody(s)
            | Token::StringBody(s)
            | Token::Symbol(s)
            | Token::StartOfScope(s)
            | Token::EndOfScope(s)
            | Token::Whitespace(s)
            | Token::Linebreak(s)
            | Token::Error(s) => s,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    pub fn is_linebreak(&self) -> bool {
        matches!(self, Token::Linebreak(_))
    }

    pub fn is_whitespace_or_linebreak(&self) -> bool {
        matches!(self, Token::Whitespace(_) | Token::Linebreak(_))
    }

    /// Comment delimiters and comment text, but not the line break that
    /// terminates a `//` comment.
    pub fn is_comment(&self) -> bool {
        match self {
            Token::CommentBody(_) => true,
            Token::StartOfScope(s) => s == "//" || s == "/*",
            Token::EndOfScope(s) => s == "*/",
            _ => false,
        }
    }

    pub fn is_whitespace_or_comment(&self) -> bool {
        self.is_whitespace() || self.is_comment()
    }

    pub fn is_whitespace_or_comment_or_linebreak(&self) -> bool {
        self.is_whitespace_or_comment() || self.is_linebreak()
    }

    pub fn is_identifier_or_keyword(&self) -> bool {
        matches!(self, Token::Identifier(_) | Token::Keyword(_))
    }

    pub fn is_start_of_scope(&self) -> bool {
        matches!(self, Token::StartOfScope(_))
    }

    pub fn is_end_of_scope(&self) -> bool {
        matches!(self, Token::EndOfScope(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Token::Error(_))
    }

    /// Whether this token may legally close the scope opened by `open`.
    ///
    /// The map is deliberately permissive about malformed input: a `//`
    /// comment or an unterminated string is closed by the next line break,
    /// and a `{` accepts `case` / `default` as closers so that the first
    /// label of a `switch` body replaces the brace scope with its own
    /// pseudo-scope. Each closer consumes exactly one scope level.
    pub fn closes_scope(&self, open: &Token) -> bool {
        match open {
            Token::StartOfScope(s) => match s.as_str() {
                "(" => *self == Token::EndOfScope(")".to_string()),
                "[" => *self == Token::EndOfScope("]".to_string()),
                "{" => matches!(
                    self,
                    Token::EndOfScope(c) if c == "}" || c == "case" || c == "default"
                ),
                "<" => *self == Token::EndOfScope(">".to_string()),
                "/*" => *self == Token::EndOfScope("*/".to_string()),
                "//" => self.is_linebreak(),
                "\"" => *self == Token::EndOfScope("\"".to_string()) || self.is_linebreak(),
                "#if" => *self == Token::EndOfScope("#endif".to_string()),
                _ => false,
            },
            // A case body region runs to the next label or the closing brace.
            Token::EndOfScope(s) if s == "case" || s == "default" => matches!(
                self,
                Token::EndOfScope(c) if c == "case" || c == "default" || c == "}"
            ),
            _ => false,
        }
    }
}
