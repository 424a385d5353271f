//! End-to-end query analysis: tokenize, parse, validate, build, highlight.
//!
//! The first failing stage stops the chain. Highlighting only depends on the
//! tokenizer and is returned either way.

use std::fmt;

use tracing::{debug, trace};

use crate::ast::{Expr, Span, TokenStream};
use crate::builder;
use crate::highlight::{self, HighlightSpan};
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};
use crate::validator::{self, ValidationError};

/// Pipeline stage that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Syntax,
    Validation,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Lexical => "lexical",
            Stage::Syntax => "syntax",
            Stage::Validation => "validation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any error the pipeline can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
    Validation(ValidationError),
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::Lex(_) => Stage::Lexical,
            Error::Parse(_) => Stage::Syntax,
            Error::Validation(_) => Stage::Validation,
        }
    }

    /// Offending source range
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span()),
            Error::Parse(e) => Some(e.span),
            Error::Validation(e) => Some(e.span()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "{}", e),
            Error::Parse(e) => write!(f, "{}", e),
            Error::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Validation(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

/// Result of analyzing one query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub result: Result<Expr, Error>,
    pub spans: Vec<HighlightSpan>,
}

impl Analysis {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn ast(&self) -> Option<&Expr> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// Analyze `input` with the shared lexer
pub fn analyze(input: &str) -> Analysis {
    analyze_with(Lexer::global(), input)
}

/// Analyze `input` with an explicit lexer
pub fn analyze_with(lexer: &Lexer, input: &str) -> Analysis {
    let tokens = lexer.tokenize(input);

    let spans = match &tokens {
        Ok(stream) => highlight::highlight(stream),
        Err(_) => highlight::unclassified(input),
    };

    let result = tokens.map_err(Error::from).and_then(|stream| compile(&stream));

    match &result {
        Ok(ast) => debug!(
            leaves = ast.leaf_count(),
            block_type = %ast.block_type(),
            "query accepted"
        ),
        Err(e) => debug!(stage = %e.stage(), error = %e, "query rejected"),
    }

    Analysis { result, spans }
}

/// Parse, validate and build an AST from an existing token stream
pub fn compile(stream: &TokenStream) -> Result<Expr, Error> {
    trace!(
        tokens = stream.tokens.len(),
        whitespace = stream.whitespace.len(),
        "parsing token stream"
    );
    let cst = Parser::new(stream).parse()?;
    let tree = validator::validate(cst)?;
    Ok(builder::build(&tree))
}

/// Tokenize, parse, validate and build, discarding highlighting
pub fn parse_query(input: &str) -> Result<Expr, Error> {
    let stream = Lexer::global().tokenize(input)?;
    compile(&stream)
}
