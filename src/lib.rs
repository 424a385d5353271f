pub mod ast;
pub mod builder;
pub mod cli;
pub mod highlight;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod validator;

pub use ast::{BinOp, BlockType, Expr, PrefixOp, Span, Token, TokenKind, TokenStream};
pub use highlight::{Category, HighlightSpan, highlight, highlight_source};
pub use lexer::{LexError, Lexer, tokenize};
pub use parser::{Expected, ParseError, Parser, Rule};
pub use pipeline::{Analysis, Error, Stage, analyze, analyze_with, parse_query};
pub use validator::{ValidatedTree, ValidationError, validate};
