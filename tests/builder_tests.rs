// tests/builder_tests.rs
//
// Validation and AST construction.

use boolex_lang::ast::{BinOp, BlockType, Expr, PrefixOp, Span};
use boolex_lang::builder::build;
use boolex_lang::lexer::tokenize;
use boolex_lang::parser::Parser;
use boolex_lang::validator::{ValidatedTree, ValidationError, validate};

fn validated(input: &str) -> Result<ValidatedTree, ValidationError> {
    let stream = tokenize(input).unwrap();
    let cst = Parser::new(&stream).parse().unwrap();
    validate(cst)
}

fn ast(input: &str) -> Expr {
    build(&validated(input).unwrap())
}

fn bare(text: &str) -> Expr {
    Expr::leaf(text, BlockType::Bare)
}

fn kv(text: &str) -> Expr {
    Expr::leaf(text, BlockType::KeyValue)
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_bare_only_is_valid() {
    let tree = validated("a AND \"b c\" OR NOT d").unwrap();
    assert_eq!(tree.block_type(), BlockType::Bare);
}

#[test]
fn test_key_value_only_is_valid() {
    let tree = validated("A=\"1\" OR (B='2' AND NOT C=\"3\")").unwrap();
    assert_eq!(tree.block_type(), BlockType::KeyValue);
}

#[test]
fn test_mixed_is_rejected() {
    let err = validated("A AND KEY=\"value\"").unwrap_err();
    assert_eq!(
        err,
        ValidationError::MixedBlockTypes {
            first: BlockType::Bare,
            conflicting: BlockType::KeyValue,
            span: Span::new(6, 17),
        }
    );
}

#[test]
fn test_mixed_across_groups_is_rejected() {
    // The rule holds for the whole query, not per group
    let err = validated("(KEY=\"v\" OR K=\"w\") AND (\"free text\")").unwrap_err();
    match err {
        ValidationError::MixedBlockTypes {
            first, conflicting, ..
        } => {
            assert_eq!(first, BlockType::KeyValue);
            assert_eq!(conflicting, BlockType::Bare);
        }
    }
}

#[test]
fn test_mixed_under_not_is_rejected() {
    assert!(validated("a AND NOT KEY=\"v\"").is_err());
}

#[test]
fn test_validation_message_names_both_kinds() {
    let err = validated("a OR KEY=\"v\"").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bare terms"), "{}", message);
    assert!(message.contains("key=value pairs"), "{}", message);
}

// ============================================================================
// AST construction
// ============================================================================

#[test]
fn test_single_leaf() {
    assert_eq!(ast("kernel"), bare("kernel"));
}

#[test]
fn test_quoted_leaf_keeps_quotes() {
    assert_eq!(ast("'a b'"), bare("'a b'"));
    assert_eq!(ast(r#""say \"hi\"""#), bare(r#""say \"hi\"""#));
}

#[test]
fn test_key_value_leaf_concatenates() {
    assert_eq!(ast("KEY=\"value\""), kv("KEY=\"value\""));
    assert_eq!(ast("K='v'"), kv("K='v'"));
}

#[test]
fn test_binary() {
    assert_eq!(ast("A AND B"), Expr::binary(BinOp::And, bare("A"), bare("B")));
}

#[test]
fn test_left_fold() {
    let expected = Expr::binary(
        BinOp::And,
        Expr::binary(BinOp::Or, bare("a"), bare("b")),
        bare("c"),
    );
    assert_eq!(ast("a OR b AND c"), expected);

    let expected = Expr::binary(
        BinOp::Or,
        Expr::binary(BinOp::And, bare("a"), bare("b")),
        bare("c"),
    );
    assert_eq!(ast("a AND b OR c"), expected);
}

#[test]
fn test_prefix() {
    assert_eq!(ast("NOT A"), Expr::prefix(PrefixOp::Not, bare("A")));
}

#[test]
fn test_prefix_then_binary() {
    let expected = Expr::binary(
        BinOp::And,
        Expr::prefix(PrefixOp::Not, bare("A")),
        bare("B"),
    );
    assert_eq!(ast("NOT A AND B"), expected);
}

#[test]
fn test_group_preserved() {
    let expected = Expr::binary(
        BinOp::And,
        Expr::group(Expr::binary(BinOp::Or, bare("A"), bare("B"))),
        bare("C"),
    );
    assert_eq!(ast("(A OR B) AND C"), expected);
    assert_eq!(ast("((A))"), Expr::group(Expr::group(bare("A"))));
}

#[test]
fn test_block_type_propagates() {
    let expr = ast("NOT (A='1' OR B='2')");
    assert_eq!(expr.block_type(), BlockType::KeyValue);
    match &expr {
        Expr::Prefix { child, block_type, .. } => {
            assert_eq!(*block_type, BlockType::KeyValue);
            assert_eq!(child.block_type(), BlockType::KeyValue);
        }
        other => panic!("Expected prefix, got {:?}", other),
    }
}

#[test]
fn test_leaf_count() {
    assert_eq!(ast("(a OR b) AND NOT c").leaf_count(), 3);
}

// ============================================================================
// Canonical text
// ============================================================================

#[test]
fn test_display_normalizes_whitespace() {
    assert_eq!(
        ast("  (a   OR\tb)\nAND NOT   \"c d\"").to_string(),
        "(a OR b) AND NOT \"c d\""
    );
}

#[test]
fn test_display_reparses_to_same_ast() {
    for input in [
        "a",
        "NOT NOT a",
        "(a OR b) AND c",
        "a OR (b AND (NOT c))",
        "KEY=\"v\" OR (OTHER='w' AND NOT KEY=\"x\")",
    ] {
        let first = ast(input);
        let second = ast(&first.to_string());
        assert_eq!(first, second, "Failed for input: {}", input);
    }
}
