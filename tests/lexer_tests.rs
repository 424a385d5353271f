// tests/lexer_tests.rs

use boolex_lang::ast::{Span, TokenKind};
use boolex_lang::lexer::{LexError, Lexer, tokenize};
use rstest::rstest;

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap()
        .tokens
        .iter()
        .map(|t| t.kind)
        .collect()
}

fn texts(input: &str) -> Vec<String> {
    tokenize(input)
        .unwrap()
        .tokens
        .into_iter()
        .map(|t| t.text)
        .collect()
}

// ============================================================================
// Single Tokens
// ============================================================================

#[rstest]
#[case("NOT", TokenKind::Not)]
#[case("AND", TokenKind::And)]
#[case("OR", TokenKind::Or)]
#[case("(", TokenKind::LParen)]
#[case(")", TokenKind::RParen)]
#[case("KEY=", TokenKind::Key)]
#[case("\"phrase\"", TokenKind::Quoted)]
#[case("'phrase'", TokenKind::Quoted)]
#[case("word", TokenKind::Word)]
#[case("log4*", TokenKind::Word)]
#[case("x86_64-linux", TokenKind::Word)]
#[case("ядро", TokenKind::Word)]
fn test_single_token(#[case] input: &str, #[case] expected: TokenKind) {
    let stream = tokenize(input).unwrap();
    assert_eq!(stream.tokens.len(), 1, "Failed for input: {}", input);
    assert_eq!(stream.tokens[0].kind, expected, "Failed for input: {}", input);
    assert_eq!(stream.tokens[0].text, input);
    assert_eq!(stream.tokens[0].span, Span::new(0, input.len()));
}

// ============================================================================
// Reserved Words
// ============================================================================

#[rstest]
#[case("ORDER")]
#[case("NOTE")]
#[case("ANDROID")]
#[case("OR_ELSE")]
#[case("NOT-NULL")]
#[case("AND*")]
#[case("OR2")]
#[case("and")]
#[case("or")]
#[case("not")]
fn test_reserved_word_inside_identifier_is_word(#[case] input: &str) {
    assert_eq!(kinds(input), vec![TokenKind::Word], "Failed for input: {}", input);
}

#[test]
fn test_reserved_word_before_paren() {
    assert_eq!(
        kinds("NOT(a)"),
        vec![
            TokenKind::Not,
            TokenKind::LParen,
            TokenKind::Word,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_reserved_word_takes_priority_over_key() {
    // "OR=" is the operator followed by a stray '='
    assert_eq!(
        tokenize("OR=").unwrap_err(),
        LexError::UnexpectedChar {
            ch: '=',
            position: 2
        }
    );
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_includes_equals() {
    let stream = tokenize("STATUS=\"open\"").unwrap();
    assert_eq!(stream.tokens.len(), 2);
    assert_eq!(stream.tokens[0].kind, TokenKind::Key);
    assert_eq!(stream.tokens[0].text, "STATUS=");
    assert_eq!(stream.tokens[1].kind, TokenKind::Quoted);
    assert_eq!(stream.tokens[1].span, Span::new(7, 13));
}

#[test]
fn test_lowercase_key_is_not_key() {
    assert_eq!(
        tokenize("status=\"open\"").unwrap_err(),
        LexError::UnexpectedChar {
            ch: '=',
            position: 6
        }
    );
}

#[test]
fn test_uppercase_word_without_equals() {
    assert_eq!(kinds("STATUS"), vec![TokenKind::Word]);
}

// ============================================================================
// Quoted Strings
// ============================================================================

#[test]
fn test_escaped_quote_inside_string() {
    assert_eq!(texts(r#""say \"hi\"" x"#), vec![r#""say \"hi\"""#, "x"]);
    assert_eq!(texts(r"'it\'s'"), vec![r"'it\'s'"]);
}

#[test]
fn test_other_quote_inside_string() {
    assert_eq!(texts(r#""it's" 'a "b"'"#), vec![r#""it's""#, r#"'a "b"'"#]);
}

#[test]
fn test_string_keeps_operators_and_spaces() {
    let stream = tokenize("\"a AND (b)\"").unwrap();
    assert_eq!(stream.tokens.len(), 1);
    assert_eq!(stream.tokens[0].kind, TokenKind::Quoted);
}

#[test]
fn test_multiline_string() {
    assert_eq!(kinds("\"line one\nline two\""), vec![TokenKind::Quoted]);
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        tokenize("a AND 'open").unwrap_err(),
        LexError::UnterminatedString {
            quote: '\'',
            position: 6
        }
    );
    // The escaped quote does not close the string
    assert!(matches!(
        tokenize(r#""abc\""#),
        Err(LexError::UnterminatedString { position: 0, .. })
    ));
}

// ============================================================================
// Whitespace and Offsets
// ============================================================================

#[test]
fn test_whitespace_kept_separately() {
    let input = "  a \t AND\nb ";
    let stream = tokenize(input).unwrap();
    let ws: Vec<_> = stream.whitespace.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(ws, vec!["  ", " \t ", "\n", " "]);
    assert_eq!(
        kinds(input),
        vec![TokenKind::Word, TokenKind::And, TokenKind::Word]
    );
}

#[test]
fn test_tokens_cover_input_without_gaps() {
    let input = "(a OR \"b c\") AND NOT d*";
    let stream = tokenize(input).unwrap();

    let mut position = 0;
    for token in stream.merged() {
        assert_eq!(token.span.start, position);
        assert_eq!(&input[token.span.start..token.span.end], token.text);
        position = token.span.end;
    }
    assert_eq!(position, input.len());
    assert_eq!(stream.source_len, input.len());
}

#[test]
fn test_offsets_are_bytes() {
    let stream = tokenize("ключ OR b").unwrap();
    assert_eq!(stream.tokens[0].span, Span::new(0, 8));
    assert_eq!(stream.tokens[1].span, Span::new(9, 11));
}

#[test]
fn test_empty_input() {
    let stream = tokenize("").unwrap();
    assert!(stream.tokens.is_empty());
    assert!(stream.whitespace.is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[rstest]
#[case("a & b", '&', 2)]
#[case("a | b", '|', 2)]
#[case("a=b", '=', 1)]
#[case("[x]", '[', 0)]
#[case("a ! ", '!', 2)]
fn test_unexpected_character(#[case] input: &str, #[case] ch: char, #[case] position: usize) {
    assert_eq!(
        tokenize(input).unwrap_err(),
        LexError::UnexpectedChar { ch, position }
    );
}

#[test]
fn test_error_span_covers_multibyte_char() {
    let err = tokenize("a §").unwrap_err();
    assert_eq!(err.position(), 2);
    assert_eq!(err.span(), Span::new(2, 4));
}

#[test]
fn test_error_message() {
    let err = tokenize("a & b").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected character '&' at position 2");
}

// ============================================================================
// Shared Lexer
// ============================================================================

#[test]
fn test_own_lexer_matches_global() {
    let lexer = Lexer::new();
    let input = "NOT (a OR KEY=\"v\")";
    assert_eq!(lexer.tokenize(input), Lexer::global().tokenize(input));
}

#[test]
fn test_global_lexer_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("term{} AND other", i);
                Lexer::global().tokenize(&input).unwrap().tokens.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}
