use std::fmt;

/// Byte range of a token or node in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`, used for end-of-input positions
    pub fn point(offset: usize) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of whitespace between significant tokens
    Whitespace,

    /// Negation prefix
    ///
    /// # Examples
    /// ```text
    /// NOT draft
    /// NOT (a OR b)
    /// ```
    Not,

    /// Conjunction (word, not symbol)
    ///
    /// # Examples
    /// ```text
    /// rust AND async
    /// ```
    And,

    /// Disjunction (word, not symbol)
    ///
    /// # Examples
    /// ```text
    /// "error" OR "warning"
    /// ```
    Or,

    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// Field name of a key=value assertion, including the `=`
    ///
    /// Only uppercase ASCII letters are allowed before the `=`.
    ///
    /// # Examples
    /// ```text
    /// STATUS=
    /// AUTHOR=
    /// ```
    Key,

    /// Quoted phrase, single or double quotes, kept verbatim
    ///
    /// # Examples
    /// ```text
    /// "exact phrase"
    /// 'it\'s quoted'
    /// ```
    Quoted,

    /// Bare search term
    ///
    /// Letters, digits, `_`, `*` and `-`.
    ///
    /// # Examples
    /// ```text
    /// kernel
    /// log4*
    /// x86_64-linux
    /// ```
    Word,
}

impl TokenKind {
    /// Short lowercase name, used in JSON output and error messages
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::Key => "key",
            TokenKind::Quoted => "quoted",
            TokenKind::Word => "word",
        }
    }

    pub fn is_whitespace(self) -> bool {
        self == TokenKind::Whitespace
    }
}

/// A classified slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact matched substring
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::Quoted => write!(f, "string {}", self.text),
            TokenKind::Key => write!(f, "key '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Tokenizer output: significant tokens and whitespace kept in separate groups.
///
/// Both groups are ordered by offset; together they cover the source exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
    pub whitespace: Vec<Token>,
    /// Byte length of the source, the offset reported for end of input
    pub source_len: usize,
}

impl TokenStream {
    /// All tokens, whitespace included, ordered by start offset
    pub fn merged(&self) -> Vec<&Token> {
        let mut all: Vec<&Token> = self.tokens.iter().chain(self.whitespace.iter()).collect();
        all.sort_by_key(|t| t.span.start);
        all
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
