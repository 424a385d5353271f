//! Token classification for syntax highlighting.
//!
//! Works from tokenizer output alone, so highlighting is available while the
//! query is still syntactically or semantically invalid.

use crate::ast::{Span, TokenKind, TokenStream};
use crate::lexer::Lexer;

/// Display category of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `NOT`, `AND`, `OR`
    Operator,
    /// `KEY=`
    Key,
    /// Quoted phrase
    String,
    /// Bare word
    Word,
    /// `(` or `)`
    Paren,
    /// Whitespace, or text that could not be tokenized
    Plain,
}

impl Category {
    pub fn from_token(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Not | TokenKind::And | TokenKind::Or => Category::Operator,
            TokenKind::Key => Category::Key,
            TokenKind::Quoted => Category::String,
            TokenKind::Word => Category::Word,
            TokenKind::LParen | TokenKind::RParen => Category::Paren,
            TokenKind::Whitespace => Category::Plain,
        }
    }

    /// Category name as used by renderers (`"none"` for plain text)
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Operator => "operator",
            Category::Key => "key",
            Category::String => "string",
            Category::Word => "word",
            Category::Paren => "paren",
            Category::Plain => "none",
        }
    }
}

/// A piece of the source text paired with its display category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub category: Category,
    pub text: String,
    pub span: Span,
}

/// Classify every token of `stream`, whitespace included, in source order
pub fn highlight(stream: &TokenStream) -> Vec<HighlightSpan> {
    // Both groups are ordered already, but the merge does not rely on it
    stream
        .merged()
        .into_iter()
        .map(|token| HighlightSpan {
            category: Category::from_token(token.kind),
            text: token.text.clone(),
            span: token.span,
        })
        .collect()
}

/// Best-effort highlighting of raw input; never fails.
///
/// Text the lexer rejects comes back as one unclassified span.
pub fn highlight_source(lexer: &Lexer, input: &str) -> Vec<HighlightSpan> {
    match lexer.tokenize(input) {
        Ok(stream) => highlight(&stream),
        Err(_) => unclassified(input),
    }
}

pub(crate) fn unclassified(input: &str) -> Vec<HighlightSpan> {
    if input.is_empty() {
        return vec![];
    }
    vec![HighlightSpan {
        category: Category::Plain,
        text: input.to_string(),
        span: Span::new(0, input.len()),
    }]
}

/// Concatenated span text; equals the highlighted source
pub fn reconstruct(spans: &[HighlightSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
