use std::{fmt, mem};

use crate::ast::{BinOp, BlockType, PrefixOp};

/// Abstract Syntax Tree node representing a validated query.
///
/// Every node carries the [`BlockType`] of its subtree. Validation guarantees
/// the whole tree has a single type, so inner nodes simply inherit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Binary operation
    ///
    /// # Example
    /// ```text
    /// rust AND async
    /// ```
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        block_type: BlockType,
    },

    /// Prefix operation
    ///
    /// # Example
    /// ```text
    /// NOT draft
    /// ```
    Prefix {
        op: PrefixOp,
        child: Box<Expr>,
        block_type: BlockType,
    },

    /// Parenthesized sub-expression
    ///
    /// Kept in the tree so the query can be rendered back with its grouping.
    Group {
        child: Box<Expr>,
        block_type: BlockType,
    },

    /// Search term, verbatim
    ///
    /// # Examples
    /// ```text
    /// kernel            // Bare
    /// "exact phrase"    // Bare, quotes kept
    /// STATUS="open"     // KeyValue, key and value concatenated
    /// ```
    Leaf { text: String, block_type: BlockType },
}

impl Expr {
    pub fn leaf(text: impl Into<String>, block_type: BlockType) -> Self {
        Expr::Leaf {
            text: text.into(),
            block_type,
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        let block_type = left.block_type();
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            block_type,
        }
    }

    pub fn prefix(op: PrefixOp, child: Expr) -> Self {
        let block_type = child.block_type();
        Expr::Prefix {
            op,
            child: Box::new(child),
            block_type,
        }
    }

    pub fn group(child: Expr) -> Self {
        let block_type = child.block_type();
        Expr::Group {
            child: Box::new(child),
            block_type,
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            Expr::Binary { block_type, .. }
            | Expr::Prefix { block_type, .. }
            | Expr::Group { block_type, .. }
            | Expr::Leaf { block_type, .. } => *block_type,
        }
    }

    /// Binary chain rooted here, flattened along its left spine.
    ///
    /// Returns the leftmost non-binary operand and the `(op, right)` pairs
    /// above it in source order. A non-binary node is a chain of length one.
    pub fn chain(&self) -> (&Expr, Vec<(BinOp, &Expr)>) {
        let mut rest = vec![];
        let mut node = self;
        while let Expr::Binary {
            op, left, right, ..
        } = node
        {
            rest.push((*op, &**right));
            node = left;
        }
        rest.reverse();
        (node, rest)
    }

    /// Number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Expr::Binary { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
                Expr::Prefix { child, .. } | Expr::Group { child, .. } => stack.push(child),
                Expr::Leaf { .. } => count += 1,
            }
        }
        count
    }

    /// Move boxed children out, leaving empty leaves behind
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        let empty = || Expr::leaf(String::new(), BlockType::Bare);
        match self {
            Expr::Binary { left, right, .. } => {
                out.push(mem::replace(&mut **left, empty()));
                out.push(mem::replace(&mut **right, empty()));
            }
            Expr::Prefix { child, .. } | Expr::Group { child, .. } => {
                out.push(mem::replace(&mut **child, empty()));
            }
            Expr::Leaf { .. } => {}
        }
    }
}

/// Long `a AND b AND ...` chains nest as deep as they are long; drop them
/// with a work list instead of recursion.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = vec![];
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

/// Canonical query text: single spaces around operators, leaves verbatim.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { .. } => {
                let (first, rest) = self.chain();
                write!(f, "{}", first)?;
                for (op, right) in rest {
                    write!(f, " {} {}", op, right)?;
                }
                Ok(())
            }
            Expr::Prefix { op, child, .. } => write!(f, "{} {}", op, child),
            Expr::Group { child, .. } => write!(f, "({})", child),
            Expr::Leaf { text, .. } => f.write_str(text),
        }
    }
}
