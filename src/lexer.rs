use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Span, Token, TokenKind, TokenStream};

/// Process-wide lexer, compiled on first use and never mutated afterwards
static LEXER: Lazy<Lexer> = Lazy::new(Lexer::new);

/// Token rules in priority order: the first rule that matches wins.
const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Whitespace, r"^\s+"),
    (TokenKind::Not, r"^NOT"),
    (TokenKind::And, r"^AND"),
    (TokenKind::Or, r"^OR"),
    (TokenKind::LParen, r"^\("),
    (TokenKind::RParen, r"^\)"),
    (TokenKind::Key, r"^[A-Z]+="),
    (TokenKind::Quoted, r#"(?s)^"(?:[^"\\]|\\.)*""#),
    (TokenKind::Quoted, r"(?s)^'(?:[^'\\]|\\.)*'"),
    (TokenKind::Word, r"^[\p{Alphabetic}\p{N}_*\-]+"),
];

/// Errors raised while splitting input into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No token rule matches at this byte offset
    UnexpectedChar { ch: char, position: usize },

    /// Quote opened at this byte offset is never closed
    UnterminatedString { quote: char, position: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedChar { position, .. }
            | LexError::UnterminatedString { position, .. } => *position,
        }
    }

    /// Offending source range
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { ch, position } => {
                Span::new(*position, position + ch.len_utf8())
            }
            LexError::UnterminatedString { quote, position } => {
                Span::new(*position, position + quote.len_utf8())
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedChar { ch, position } => {
                write!(f, "Unexpected character '{}' at position {}", ch, position)
            }
            LexError::UnterminatedString { quote, position } => write!(
                f,
                "Unterminated string: missing closing {} for quote at position {}",
                quote, position
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Characters that may continue a word; reserved words must not be followed by one
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '*' | '-')
}

fn is_reserved(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Not | TokenKind::And | TokenKind::Or)
}

/// Compiled token rules.
///
/// Build once (or use [`Lexer::global`]) and share by reference; tokenizing
/// never mutates the lexer.
pub struct Lexer {
    rules: Vec<(TokenKind, Regex)>,
}

impl Lexer {
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|(kind, pattern)| {
                let regex = Regex::new(pattern).expect("token patterns are valid regexes");
                (*kind, regex)
            })
            .collect();
        Lexer { rules }
    }

    /// Shared lexer instance
    pub fn global() -> &'static Lexer {
        &LEXER
    }

    /// Split `input` into significant and whitespace tokens.
    ///
    /// Fails at the first byte offset no rule matches.
    pub fn tokenize(&self, input: &str) -> Result<TokenStream, LexError> {
        let mut stream = TokenStream {
            source_len: input.len(),
            ..TokenStream::default()
        };
        let mut position = 0;

        while position < input.len() {
            let rest = &input[position..];
            let Some((kind, len)) = self.match_rule(rest) else {
                return Err(Self::error_at(rest, position));
            };

            let token = Token::new(kind, &rest[..len], Span::new(position, position + len));
            if kind.is_whitespace() {
                stream.whitespace.push(token);
            } else {
                stream.tokens.push(token);
            }
            position += len;
        }

        Ok(stream)
    }

    fn match_rule(&self, rest: &str) -> Option<(TokenKind, usize)> {
        self.rules.iter().find_map(|(kind, regex)| {
            let found = regex.find(rest)?;
            if found.is_empty() {
                return None;
            }
            // Whole words only: "ORDER" is a word, not OR + DER
            if is_reserved(*kind) && rest[found.end()..].chars().next().is_some_and(is_word_char) {
                return None;
            }
            Some((*kind, found.end()))
        })
    }

    fn error_at(rest: &str, position: usize) -> LexError {
        match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => LexError::UnterminatedString { quote, position },
            Some(ch) => LexError::UnexpectedChar { ch, position },
            // Unreachable while position < input.len()
            None => LexError::UnexpectedChar {
                ch: '\0',
                position,
            },
        }
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

/// Tokenize with the shared lexer
pub fn tokenize(input: &str) -> Result<TokenStream, LexError> {
    Lexer::global().tokenize(input)
}

#[test]
fn test_keywords() {
    let stream = tokenize("NOT AND OR").unwrap();
    let kinds: Vec<_> = stream.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Not, TokenKind::And, TokenKind::Or]);
    assert_eq!(stream.whitespace.len(), 2);
}

#[test]
fn test_keyword_prefix_is_word() {
    let stream = tokenize("ORDER NOTE ANDROID").unwrap();
    assert!(stream.tokens.iter().all(|t| t.kind == TokenKind::Word));
}

#[test]
fn test_unterminated_quote() {
    assert_eq!(
        tokenize("a \"open").unwrap_err(),
        LexError::UnterminatedString {
            quote: '"',
            position: 2
        }
    );
}
