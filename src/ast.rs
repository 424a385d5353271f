//! # Boolex Query Language - Syntax Trees
//!
//! This module defines the tokens, concrete syntax tree (CST) and abstract
//! syntax tree (AST) for boolex, a small boolean language for search
//! expressions.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens and spans produced by the lexer
//! - **[cst]** - Concrete syntax tree, one type per grammar rule
//! - **[expressions]** - AST nodes handed to downstream consumers
//! - **[operators]** - Binary and prefix operators
//! - **[block_type]** - Classification of leaf terms
//!
//! ## Quick Start
//!
//! ```text
//! (kernel OR driver) AND NOT "out of memory"
//! STATUS="open" OR STATUS="blocked"
//! ```
//!
//! ## Grammar
//!
//! ```text
//! expression := binary
//! binary     := primary ( (AND | OR) primary )*
//! primary    := prefix | group | block
//! prefix     := NOT primary
//! group      := '(' expression ')'
//! block      := QUOTED | WORD | KEY QUOTED
//! ```
//!
//! ### Operator Precedence
//!
//! `AND` and `OR` have the same precedence and fold left to right:
//!
//! ```text
//! a OR b AND c      // (a OR b) AND c
//! NOT a AND b       // (NOT a) AND b
//! ```
//!
//! ### Block Types
//!
//! Leaves are either bare (`word`, `"phrase"`) or key/value (`KEY="value"`).
//! One query uses exactly one kind; mixing them is rejected by the
//! [validator](crate::validator).
pub mod block_type;
pub mod cst;
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use block_type::BlockType;
pub use expressions::Expr;
pub use operators::{BinOp, PrefixOp};
pub use tokens::{Span, Token, TokenKind, TokenStream};
