//! CST to AST lowering.
//!
//! Infallible: a [`ValidatedTree`] always maps to exactly one [`Expr`].

use crate::ast::{
    BlockType, Expr, PrefixOp,
    cst::{Binary, Block, Expression, Group, Prefix, Primary},
};
use crate::validator::ValidatedTree;

/// Build the AST for a validated query
pub fn build(tree: &ValidatedTree) -> Expr {
    build_expression(tree.cst())
}

fn build_expression(expression: &Expression) -> Expr {
    build_binary(&expression.binary)
}

/// Fold `left op right op right ...` into a left-leaning chain
fn build_binary(binary: &Binary) -> Expr {
    let mut expr = build_primary(&binary.left);

    for (op, _, right) in &binary.rest {
        expr = Expr::binary(*op, expr, build_primary(right));
    }
    expr
}

fn build_primary(primary: &Primary) -> Expr {
    match primary {
        Primary::Prefix(prefix) => build_prefix(prefix),
        Primary::Group(group) => build_group(group),
        Primary::Block(block) => build_block(block),
    }
}

fn build_prefix(prefix: &Prefix) -> Expr {
    Expr::prefix(PrefixOp::Not, build_primary(&prefix.child))
}

fn build_group(group: &Group) -> Expr {
    Expr::group(build_expression(&group.expression))
}

fn build_block(block: &Block) -> Expr {
    match block {
        Block::Quoted(token) | Block::Word(token) => {
            Expr::leaf(token.text.clone(), BlockType::Bare)
        }
        Block::KeyValue { key, value } => {
            Expr::leaf(format!("{}{}", key.text, value.text), BlockType::KeyValue)
        }
    }
}
