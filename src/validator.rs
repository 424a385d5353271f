//! Block-type validation.
//!
//! A query is either a free-text search (`kernel AND "page fault"`) or a set
//! of field assertions (`STATUS="open" OR OWNER="me"`), never both. The rule
//! is checked across the whole document, not per subtree.

use std::fmt;

use crate::ast::{BlockType, Span, cst::Expression};

/// A CST whose blocks all share one [`BlockType`].
///
/// Only obtainable through [`validate`]; the AST builder accepts nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTree {
    cst: Expression,
    block_type: BlockType,
}

impl ValidatedTree {
    pub fn cst(&self) -> &Expression {
        &self.cst
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn into_cst(self) -> Expression {
        self.cst
    }
}

/// Errors raised by domain validation of a parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Bare terms and key=value pairs in the same query
    MixedBlockTypes {
        /// Kind of the first block in the query
        first: BlockType,
        /// Kind of the first block that disagrees with it
        conflicting: BlockType,
        /// Location of the disagreeing block
        span: Span,
    },
}

impl ValidationError {
    pub fn span(&self) -> Span {
        match self {
            ValidationError::MixedBlockTypes { span, .. } => *span,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MixedBlockTypes {
                first,
                conflicting,
                span,
            } => write!(
                f,
                "Cannot mix {} and {} in one query (first conflict at position {})",
                first.describe(),
                conflicting.describe(),
                span.start
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that every block in `cst` has the same type
pub fn validate(cst: Expression) -> Result<ValidatedTree, ValidationError> {
    let mut found: Option<BlockType> = None;

    for block in cst.blocks() {
        let block_type = block.block_type();
        match found {
            None => found = Some(block_type),
            Some(first) if first != block_type => {
                return Err(ValidationError::MixedBlockTypes {
                    first,
                    conflicting: block_type,
                    span: block.span(),
                });
            }
            Some(_) => {}
        }
    }

    // The grammar requires at least one block, so `found` is always set here
    let block_type = found.unwrap_or(BlockType::Bare);
    Ok(ValidatedTree { cst, block_type })
}
