//! Mutable formatter state.
//!
//! [`Formatter`] owns the token buffer and the immutable options for one
//! file. Rules communicate exclusively through this buffer: positional
//! reads, directional searches, scope queries, and index-anchored edits.
//! Nothing here suspends or blocks; a driver that wants parallelism holds
//! one `Formatter` per file.

use crate::options::FormatOptions;
use std::ops::Range;
use swiftfmt_tokens::Token;

/// The token buffer a formatting rule reads and rewrites.
pub struct Formatter {
    tokens: Vec<Token>,
    options: FormatOptions,
}

impl Formatter {
    pub fn new(tokens: Vec<Token>, options: FormatOptions) -> Self {
        Formatter { tokens, options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token_at(&self, i: usize) -> Option<&Token> {
        self.tokens.get(i)
    }

    // -- directional search --

    /// Index of the first token after `i` matching the predicate.
    pub fn index_of_next(&self, i: usize, matching: impl Fn(&Token) -> bool) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(i + 1)
            .find(|(_, t)| matching(t))
            .map(|(j, _)| j)
    }

    /// Index of the last token before `i` matching the predicate.
    pub fn index_of_previous(&self, i: usize, matching: impl Fn(&Token) -> bool) -> Option<usize> {
        self.tokens[..i.min(self.tokens.len())]
            .iter()
            .rposition(matching)
    }

    /// Next token after `i` that is not whitespace (line breaks count).
    pub fn next_non_whitespace(&self, i: usize) -> Option<&Token> {
        self.index_of_next(i, |t| !t.is_whitespace())
            .map(|j| &self.tokens[j])
    }

    /// Previous token before `i` that is not whitespace (line breaks count).
    pub fn previous_non_whitespace(&self, i: usize) -> Option<&Token> {
        self.index_of_previous(i, |t| !t.is_whitespace())
            .map(|j| &self.tokens[j])
    }

    /// Index of the next token that is not whitespace, comment, or linebreak.
    pub fn index_of_next_significant(&self, i: usize) -> Option<usize> {
        self.index_of_next(i, |t| !t.is_whitespace_or_comment_or_linebreak())
    }

    pub fn next_significant(&self, i: usize) -> Option<&Token> {
        self.index_of_next_significant(i).map(|j| &self.tokens[j])
    }

    /// Index of the previous token that is not whitespace, comment, or
    /// linebreak.
    pub fn index_of_previous_significant(&self, i: usize) -> Option<usize> {
        self.index_of_previous(i, |t| !t.is_whitespace_or_comment_or_linebreak())
    }

    pub fn previous_significant(&self, i: usize) -> Option<&Token> {
        self.index_of_previous_significant(i)
            .map(|j| &self.tokens[j])
    }

    // -- scope queries --

    /// Index of the innermost scope opener enclosing position `i`.
    ///
    /// Walks backward keeping a stack of unmatched closers. Line-bounded
    /// scopes (`//`, an unterminated string) count as closed once a line
    /// break has been crossed, and `case` / `default` pseudo-scopes close at
    /// the next label or brace, so the walk is total even on malformed
    /// input.
    pub fn index_of_scope_at(&self, i: usize) -> Option<usize> {
        let mut closers: Vec<&Token> = Vec::new();
        let mut crossed_linebreak = false;
        let mut j = i.min(self.tokens.len());
        while j > 0 {
            j -= 1;
            let token = &self.tokens[j];
            match token {
                Token::StartOfScope(s) => {
                    if closers
                        .last()
                        .is_some_and(|closer| closer.closes_scope(token))
                    {
                        closers.pop();
                    } else if (s == "//" || s == "\"") && crossed_linebreak {
                        // already closed by the line break
                    } else if closers.is_empty() {
                        return Some(j);
                    }
                    // mismatched opener on malformed input: skip it
                }
                Token::EndOfScope(s) if s == "case" || s == "default" => {
                    // a later label or the closing brace ended this region;
                    // the brace still owes its `{` so the stack stays put
                    if closers.is_empty() {
                        return Some(j);
                    }
                }
                Token::EndOfScope(_) => closers.push(token),
                Token::Linebreak(_) => crossed_linebreak = true,
                _ => {}
            }
        }
        None
    }

    /// The innermost scope opener enclosing position `i`.
    pub fn scope_at(&self, i: usize) -> Option<&Token> {
        self.index_of_scope_at(i).map(|j| &self.tokens[j])
    }

    /// Forward-matching close bracket for the opener at `open`.
    pub fn index_of_matching_close(&self, open: usize) -> Option<usize> {
        let (open_text, close_text) = match self.tokens.get(open)? {
            Token::StartOfScope(s) => match s.as_str() {
                "(" => ("(", ")"),
                "[" => ("[", "]"),
                "{" => ("{", "}"),
                "<" => ("<", ">"),
                _ => return None,
            },
            _ => return None,
        };
        let mut depth = 0usize;
        for (j, t) in self.tokens.iter().enumerate().skip(open) {
            match t {
                Token::StartOfScope(s) if s == open_text => depth += 1,
                Token::EndOfScope(s) if s == close_text => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(j);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Backward-matching open bracket for the closer at `close`.
    pub fn index_of_matching_open(&self, close: usize) -> Option<usize> {
        let (open_text, close_text) = match self.tokens.get(close)? {
            Token::EndOfScope(s) => match s.as_str() {
                ")" => ("(", ")"),
                "]" => ("[", "]"),
                "}" => ("{", "}"),
                ">" => ("<", ">"),
                _ => return None,
            },
            _ => return None,
        };
        let mut depth = 0usize;
        let mut j = close + 1;
        while j > 0 {
            j -= 1;
            match &self.tokens[j] {
                Token::EndOfScope(s) if s == close_text => depth += 1,
                Token::StartOfScope(s) if s == open_text => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(j);
                    }
                }
                _ => {}
            }
        }
        None
    }

    // -- line helpers --

    /// Index of the first token on the line containing `i`.
    pub fn start_of_line(&self, i: usize) -> usize {
        self.tokens[..i.min(self.tokens.len())]
            .iter()
            .rposition(|t| t.is_linebreak())
            .map_or(0, |j| j + 1)
    }

    /// The whitespace that begins the line containing `i`, if any.
    pub fn indent_for_line(&self, i: usize) -> Option<String> {
        match self.tokens.get(self.start_of_line(i)) {
            Some(Token::Whitespace(s)) => Some(s.clone()),
            _ => None,
        }
    }

    // -- edits --

    pub fn insert(&mut self, i: usize, token: Token) {
        self.tokens.insert(i, token);
    }

    pub fn remove(&mut self, i: usize) -> Token {
        self.tokens.remove(i)
    }

    pub fn remove_last(&mut self) {
        self.tokens.pop();
    }

    pub fn replace(&mut self, i: usize, token: Token) {
        self.tokens[i] = token;
    }

    pub fn remove_range(&mut self, range: Range<usize>) {
        self.tokens.drain(range);
    }

    pub fn replace_range(&mut self, range: Range<usize>, with: Vec<Token>) {
        self.tokens.splice(range, with);
    }

    // -- iteration --

    /// Visit every token matching the predicate, allowing the body to edit
    /// the buffer. After each visit the walk resumes at the next index,
    /// clamped to the current length, so removals never skip past the end
    /// and a rule's own insertions ahead of the cursor are not revisited.
    pub fn for_each(
        &mut self,
        matching: impl Fn(&Token) -> bool,
        mut body: impl FnMut(&mut Formatter, usize, &Token),
    ) {
        let mut i = 0;
        while i < self.tokens.len() {
            if matching(&self.tokens[i]) {
                let token = self.tokens[i].clone();
                body(self, i, &token);
            }
            i = (i + 1).min(self.tokens.len());
        }
    }

    /// Visit every token equal to `token`.
    pub fn for_each_token(
        &mut self,
        token: Token,
        body: impl FnMut(&mut Formatter, usize, &Token),
    ) {
        self.for_each(move |t| *t == token, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> Token {
        Token::Identifier(s.to_string())
    }

    fn ws(s: &str) -> Token {
        Token::Whitespace(s.to_string())
    }

    fn lb() -> Token {
        Token::Linebreak("\n".to_string())
    }

    fn start(s: &str) -> Token {
        Token::StartOfScope(s.to_string())
    }

    fn end(s: &str) -> Token {
        Token::EndOfScope(s.to_string())
    }

    fn formatter(tokens: Vec<Token>) -> Formatter {
        Formatter::new(tokens, FormatOptions::default())
    }

    #[test]
    fn directional_search_skips_trivia() {
        let f = formatter(vec![ident("a"), ws(" "), lb(), ws("  "), ident("b")]);
        assert_eq!(f.index_of_next_significant(0), Some(4));
        assert_eq!(f.index_of_previous_significant(4), Some(0));
        assert_eq!(f.next_non_whitespace(0), Some(&lb()));
    }

    #[test]
    fn scope_at_finds_innermost_opener() {
        let f = formatter(vec![
            start("("),
            start("["),
            ident("x"),
            end("]"),
            ident("y"),
            end(")"),
        ]);
        assert_eq!(f.index_of_scope_at(2), Some(1));
        assert_eq!(f.index_of_scope_at(4), Some(0));
        assert_eq!(f.index_of_scope_at(0), None);
    }

    #[test]
    fn scope_at_closes_line_comments_at_linebreak() {
        let f = formatter(vec![
            start("//"),
            Token::CommentBody("c".into()),
            lb(),
            ident("x"),
        ]);
        assert_eq!(f.index_of_scope_at(1), Some(0));
        assert_eq!(f.index_of_scope_at(3), None);
    }

    #[test]
    fn scope_at_treats_case_as_scope() {
        let f = formatter(vec![
            start("{"),
            end("case"),
            ident("x"),
            Token::Symbol(":".into()),
            ident("y"),
            end("}"),
        ]);
        assert_eq!(f.index_of_scope_at(4), Some(1));
    }

    #[test]
    fn matching_brackets() {
        let f = formatter(vec![
            start("("),
            start("("),
            end(")"),
            end(")"),
            ident("x"),
        ]);
        assert_eq!(f.index_of_matching_close(0), Some(3));
        assert_eq!(f.index_of_matching_close(1), Some(2));
        assert_eq!(f.index_of_matching_open(3), Some(0));
    }

    #[test]
    fn line_helpers() {
        let f = formatter(vec![ident("a"), lb(), ws("  "), ident("b")]);
        assert_eq!(f.start_of_line(3), 2);
        assert_eq!(f.indent_for_line(3), Some("  ".to_string()));
        assert_eq!(f.indent_for_line(0), None);
    }

    #[test]
    fn for_each_survives_removal_at_cursor() {
        let mut f = formatter(vec![ws(" "), ws(" "), ws(" ")]);
        f.for_each(
            |t| t.is_whitespace(),
            |f, i, _| {
                f.remove(i);
            },
        );
        // every other token is removed; the cursor never runs off the end
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn for_each_sees_tokens_inserted_behind_but_not_ahead() {
        let mut f = formatter(vec![ident("a"), ident("b")]);
        let mut visits = 0;
        f.for_each(
            |t| matches!(t, Token::Identifier(_)),
            |f, i, _| {
                visits += 1;
                if visits > 4 {
                    return; // safety for the test itself
                }
                f.insert(i + 1, ws(" "));
            },
        );
        assert_eq!(visits, 2);
    }
}
