use std::fmt;

use crate::ast::{
    BinOp, Span, Token, TokenKind, TokenStream,
    cst::{Binary, Block, Expression, Group, Prefix, Primary},
};

/// Deepest NOT/group nesting the parser accepts
pub const MAX_NESTING: usize = 128;

/// Grammar rule active when a syntax error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Expression,
    Binary,
    Primary,
    Prefix,
    Group,
    Block,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Expression => "expression",
            Rule::Binary => "binary",
            Rule::Primary => "primary",
            Rule::Prefix => "prefix",
            Rule::Group => "group",
            Rule::Block => "block",
        }
    }
}

/// What the parser was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A term, a quoted phrase, `KEY=`, `NOT` or `(`
    Operand,
    /// The `)` closing a group
    RParen,
    /// The quoted value after `KEY=`
    QuotedValue,
    /// `AND`, `OR` or the end of input
    OperatorOrEnd,
    /// Fewer than [`MAX_NESTING`] enclosing NOTs and groups
    ShallowerNesting,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Operand => write!(f, "a term, quoted phrase, KEY=, NOT or '('"),
            Expected::RParen => write!(f, "')'"),
            Expected::QuotedValue => write!(f, "a quoted value"),
            Expected::OperatorOrEnd => write!(f, "AND, OR or end of input"),
            Expected::ShallowerNesting => {
                write!(f, "at most {} nested NOTs and groups", MAX_NESTING)
            }
        }
    }
}

/// Syntax error: the first place the token stream breaks the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub rule: Rule,
    pub expected: Expected,
    /// Offending token, `None` at end of input
    pub found: Option<Token>,
    /// Offending token span, or a zero-width span at the end of input
    pub span: Span,
}

impl ParseError {
    pub fn is_eof(&self) -> bool {
        self.found.is_none()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(token) => write!(
                f,
                "Expected {} in {}, got {} at position {}",
                self.expected,
                self.rule.as_str(),
                token,
                token.span.start
            ),
            None => write!(
                f,
                "Expected {} in {}, got end of input",
                self.expected,
                self.rule.as_str()
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over the significant tokens of a [`TokenStream`].
///
/// Every decision needs one token of lookahead. NOT and group nesting is
/// capped at [`MAX_NESTING`], which bounds the recursion of every later pass.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    source_len: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(stream: &'a TokenStream) -> Self {
        Parser {
            tokens: &stream.tokens,
            position: 0,
            source_len: stream.source_len,
            depth: 0,
        }
    }

    fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token().is_some_and(|t| t.kind == kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.current_token().cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn error(&self, rule: Rule, expected: Expected) -> ParseError {
        let found = self.current_token().cloned();
        let span = match &found {
            Some(token) => token.span,
            None => Span::point(self.source_len),
        };
        ParseError {
            rule,
            expected,
            found,
            span,
        }
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        rule: Rule,
        expected: Expected,
    ) -> Result<Token, ParseError> {
        if !self.check(kind) {
            return Err(self.error(rule, expected));
        }
        self.advance().ok_or_else(|| self.error(rule, expected))
    }

    fn enter(&mut self, rule: Rule) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(rule, Expected::ShallowerNesting));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse the whole stream; tokens left after the expression are an error
    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        let expression = self.parse_expression()?;
        if self.current_token().is_some() {
            return Err(self.error(Rule::Expression, Expected::OperatorOrEnd));
        }
        Ok(expression)
    }

    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let binary = self.parse_binary()?;
        Ok(Expression { binary })
    }

    fn parse_binary(&mut self) -> Result<Binary, ParseError> {
        let left = self.parse_primary()?;
        let mut rest = vec![];

        while let Some(op) = self.current_token().and_then(|t| BinOp::from_token(t.kind)) {
            let Some(operator) = self.advance() else {
                break;
            };
            let right = self.parse_primary()?;
            rest.push((op, operator, right));
        }

        Ok(Binary { left, rest })
    }

    fn parse_primary(&mut self) -> Result<Primary, ParseError> {
        match self.current_token().map(|t| t.kind) {
            Some(TokenKind::Not) => self.parse_prefix().map(Primary::Prefix),
            Some(TokenKind::LParen) => self.parse_group().map(Primary::Group),
            Some(TokenKind::Quoted | TokenKind::Word | TokenKind::Key) => {
                self.parse_block().map(Primary::Block)
            }
            _ => Err(self.error(Rule::Primary, Expected::Operand)),
        }
    }

    fn parse_prefix(&mut self) -> Result<Prefix, ParseError> {
        self.enter(Rule::Prefix)?;
        let not = self.expect(TokenKind::Not, Rule::Prefix, Expected::Operand)?;
        // NOT binds to the nearest primary only
        let child = self.parse_primary()?;
        self.leave();
        Ok(Prefix {
            not,
            child: Box::new(child),
        })
    }

    fn parse_group(&mut self) -> Result<Group, ParseError> {
        self.enter(Rule::Group)?;
        let lparen = self.expect(TokenKind::LParen, Rule::Group, Expected::Operand)?;
        let expression = self.parse_expression()?;
        let rparen = self.expect(TokenKind::RParen, Rule::Group, Expected::RParen)?;
        self.leave();
        Ok(Group {
            lparen,
            expression: Box::new(expression),
            rparen,
        })
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        match self.current_token().map(|t| t.kind) {
            Some(TokenKind::Quoted) => {
                let token = self.expect(TokenKind::Quoted, Rule::Block, Expected::Operand)?;
                Ok(Block::Quoted(token))
            }
            Some(TokenKind::Word) => {
                let token = self.expect(TokenKind::Word, Rule::Block, Expected::Operand)?;
                Ok(Block::Word(token))
            }
            Some(TokenKind::Key) => {
                let key = self.expect(TokenKind::Key, Rule::Block, Expected::Operand)?;
                let value = self.expect(TokenKind::Quoted, Rule::Block, Expected::QuotedValue)?;
                Ok(Block::KeyValue { key, value })
            }
            _ => Err(self.error(Rule::Block, Expected::Operand)),
        }
    }
}

/// Parse an already tokenized query
pub fn parse(stream: &TokenStream) -> Result<Expression, ParseError> {
    Parser::new(stream).parse()
}
