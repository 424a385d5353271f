//! Concrete syntax tree.
//!
//! One type per grammar rule, keeping every token the parser consumed
//! (operators, parentheses, keys) so spans can be recovered for any node.

use crate::ast::{BinOp, BlockType, Span, Token};

/// `expression := binary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub binary: Binary,
}

/// `binary := primary ( (AND | OR) primary )*`
///
/// Operators are kept in source order as `(op, operator token, right)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    pub left: Primary,
    pub rest: Vec<(BinOp, Token, Primary)>,
}

/// `primary := prefix | group | block`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primary {
    Prefix(Prefix),
    Group(Group),
    Block(Block),
}

/// `prefix := NOT primary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub not: Token,
    pub child: Box<Primary>,
}

/// `group := '(' expression ')'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub lparen: Token,
    pub expression: Box<Expression>,
    pub rparen: Token,
}

/// `block := QUOTED | WORD | KEY QUOTED`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Quoted(Token),
    Word(Token),
    KeyValue { key: Token, value: Token },
}

impl Expression {
    pub fn span(&self) -> Span {
        self.binary.span()
    }

    /// Every block in the tree, in source order
    pub fn blocks(&self) -> Vec<&Block> {
        let mut out = Vec::new();
        self.binary.collect_blocks(&mut out);
        out
    }
}

impl Binary {
    pub fn span(&self) -> Span {
        match self.rest.last() {
            Some((_, _, right)) => self.left.span().to(right.span()),
            None => self.left.span(),
        }
    }

    fn collect_blocks<'a>(&'a self, out: &mut Vec<&'a Block>) {
        self.left.collect_blocks(out);
        for (_, _, right) in &self.rest {
            right.collect_blocks(out);
        }
    }
}

impl Primary {
    pub fn span(&self) -> Span {
        match self {
            Primary::Prefix(prefix) => prefix.not.span.to(prefix.child.span()),
            Primary::Group(group) => group.lparen.span.to(group.rparen.span),
            Primary::Block(block) => block.span(),
        }
    }

    fn collect_blocks<'a>(&'a self, out: &mut Vec<&'a Block>) {
        match self {
            Primary::Prefix(prefix) => prefix.child.collect_blocks(out),
            Primary::Group(group) => group.expression.binary.collect_blocks(out),
            Primary::Block(block) => out.push(block),
        }
    }
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Quoted(_) | Block::Word(_) => BlockType::Bare,
            Block::KeyValue { .. } => BlockType::KeyValue,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Block::Quoted(token) | Block::Word(token) => token.span,
            Block::KeyValue { key, value } => key.span.to(value.span),
        }
    }
}
