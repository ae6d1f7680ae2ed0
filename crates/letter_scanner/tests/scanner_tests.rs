//! Scanner integration tests.
//!
//! Verifies token classification, rule priority, trivia skipping and the
//! scanner's failure modes.

use letter_ast::syntax_kind::SyntaxKind;
use letter_core::text::TextSpan;
use letter_diagnostics::ScanError;
use letter_scanner::{tokenize, Scanner, Token};

/// Helper: scan all tokens from source and return as (kind, text) pairs.
fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    tokenize(source)
        .unwrap_or_else(|e| panic!("scan failed for {:?}: {}", source, e))
        .into_iter()
        .map(|t| (t.kind, t.text.to_string()))
        .collect()
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

fn scan_error(source: &str) -> ScanError {
    match tokenize(source) {
        Ok(tokens) => panic!("expected scan error for {:?}, got {:?}", source, tokens),
        Err(e) => e,
    }
}

// ============================================================================
// Trivia
// ============================================================================

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
}

#[test]
fn test_whitespace_only() {
    assert!(scan_all("   \n\t  ").is_empty());
}

#[test]
fn test_comments_only() {
    assert!(scan_all("// line\n/* block\n spanning */  // tail").is_empty());
}

#[test]
fn test_trivia_around_number() {
    assert_eq!(scan_all("  42  "), vec![(SyntaxKind::NumberToken, "42".to_string())]);
    assert_eq!(
        scan_all("/* c */ 42 // c"),
        vec![(SyntaxKind::NumberToken, "42".to_string())]
    );
}

#[test]
fn test_line_comment_ends_at_newline() {
    assert_eq!(
        scan_kinds("// first\nx"),
        vec![SyntaxKind::Identifier]
    );
}

// ============================================================================
// Literals and identifiers
// ============================================================================

#[test]
fn test_number_literal() {
    assert_eq!(scan_all("1234"), vec![(SyntaxKind::NumberToken, "1234".to_string())]);
}

#[test]
fn test_string_literals_keep_quotes() {
    assert_eq!(
        scan_all(r#""hello""#),
        vec![(SyntaxKind::StringToken, r#""hello""#.to_string())]
    );
    assert_eq!(
        scan_all("'world'"),
        vec![(SyntaxKind::StringToken, "'world'".to_string())]
    );
}

#[test]
fn test_string_may_contain_other_quote_and_trivia_markers() {
    assert_eq!(
        scan_all(r#"'say "hi" // not a comment'"#),
        vec![(
            SyntaxKind::StringToken,
            r#"'say "hi" // not a comment'"#.to_string()
        )]
    );
}

#[test]
fn test_empty_string() {
    assert_eq!(scan_all(r#""""#), vec![(SyntaxKind::StringToken, r#""""#.to_string())]);
}

#[test]
fn test_identifier() {
    assert_eq!(scan_all("foo_bar1"), vec![(SyntaxKind::Identifier, "foo_bar1".to_string())]);
}

#[test]
fn test_number_is_tried_before_identifier() {
    assert_eq!(
        scan_all("42abc"),
        vec![
            (SyntaxKind::NumberToken, "42".to_string()),
            (SyntaxKind::Identifier, "abc".to_string()),
        ]
    );
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn test_all_keywords() {
    let source = "let if else true false null while do for def return class extends super new this";
    assert_eq!(scan_kinds(source), SyntaxKind::KEYWORDS.to_vec());
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        scan_all("letter iffy classy done"),
        vec![
            (SyntaxKind::Identifier, "letter".to_string()),
            (SyntaxKind::Identifier, "iffy".to_string()),
            (SyntaxKind::Identifier, "classy".to_string()),
            (SyntaxKind::Identifier, "done".to_string()),
        ]
    );
}

#[test]
fn test_keyword_followed_by_delimiter() {
    assert_eq!(
        scan_kinds("if(x)"),
        vec![
            SyntaxKind::IfKeyword,
            SyntaxKind::OpenParenToken,
            SyntaxKind::Identifier,
            SyntaxKind::CloseParenToken,
        ]
    );
}

// ============================================================================
// Delimiters and operators
// ============================================================================

#[test]
fn test_delimiters() {
    assert_eq!(
        scan_kinds(";{}(),.[]"),
        vec![
            SyntaxKind::SemicolonToken,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::OpenParenToken,
            SyntaxKind::CloseParenToken,
            SyntaxKind::CommaToken,
            SyntaxKind::DotToken,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
        ]
    );
}

#[test]
fn test_equality_before_assignment() {
    assert_eq!(
        scan_all("a == b != c = d"),
        vec![
            (SyntaxKind::Identifier, "a".to_string()),
            (SyntaxKind::EqualityOperator, "==".to_string()),
            (SyntaxKind::Identifier, "b".to_string()),
            (SyntaxKind::EqualityOperator, "!=".to_string()),
            (SyntaxKind::Identifier, "c".to_string()),
            (SyntaxKind::SimpleAssign, "=".to_string()),
            (SyntaxKind::Identifier, "d".to_string()),
        ]
    );
}

#[test]
fn test_compound_assignment_before_arithmetic() {
    let tokens = scan_all("+= -= *= /= + - * /");
    let kinds: Vec<SyntaxKind> = tokens.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ComplexAssign,
            SyntaxKind::ComplexAssign,
            SyntaxKind::ComplexAssign,
            SyntaxKind::ComplexAssign,
            SyntaxKind::AdditiveOperator,
            SyntaxKind::AdditiveOperator,
            SyntaxKind::MultiplicativeOperator,
            SyntaxKind::MultiplicativeOperator,
        ]
    );
    assert_eq!(tokens[3].1, "/=");
}

#[test]
fn test_relational_operators() {
    let tokens = scan_all("> >= < <=");
    assert!(tokens.iter().all(|(k, _)| *k == SyntaxKind::RelationalOperator));
    let texts: Vec<&str> = tokens.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(texts, vec![">", ">=", "<", "<="]);
}

#[test]
fn test_logical_operators() {
    assert_eq!(
        scan_kinds("a && b || !c"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::LogicalAnd,
            SyntaxKind::Identifier,
            SyntaxKind::LogicalOr,
            SyntaxKind::LogicalNot,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_division_is_not_a_comment() {
    assert_eq!(
        scan_kinds("a / b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::MultiplicativeOperator,
            SyntaxKind::Identifier,
        ]
    );
}

// ============================================================================
// Scanner state
// ============================================================================

#[test]
fn test_token_spans() {
    let tokens = tokenize("let x = 10;").unwrap();
    let spans: Vec<TextSpan> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            TextSpan::new(0, 3),
            TextSpan::new(4, 1),
            TextSpan::new(6, 1),
            TextSpan::new(8, 2),
            TextSpan::new(10, 1),
        ]
    );
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut scanner = Scanner::new("x  ");
    assert_eq!(scanner.next_token().unwrap().kind, SyntaxKind::Identifier);
    assert!(scanner.has_more_input());
    let eof = scanner.next_token().unwrap();
    assert!(eof.is_eof());
    assert_eq!(eof.span, TextSpan::empty(3));
    assert_eq!(scanner.next_token().unwrap(), Token::eof(3));
    assert_eq!(scanner.next_token().unwrap(), Token::eof(3));
    assert!(!scanner.has_more_input());
}

#[test]
fn test_init_resets_cursor() {
    let mut scanner = Scanner::new("a b");
    scanner.next_token().unwrap();
    assert_eq!(scanner.position(), 1);

    scanner.init("42");
    assert_eq!(scanner.position(), 0);
    let token = scanner.next_token().unwrap();
    assert_eq!(token.kind, SyntaxKind::NumberToken);
    assert_eq!(token.text, "42");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unexpected_character() {
    assert_eq!(
        scan_error("x = #;"),
        ScanError::UnexpectedCharacter { ch: '#', offset: 4 }
    );
}

#[test]
fn test_non_ascii_identifier_is_rejected() {
    assert_eq!(
        scan_error("café"),
        ScanError::UnexpectedCharacter { ch: 'é', offset: 3 }
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        scan_error(r#"let s = "abc;"#),
        ScanError::UnterminatedString { quote: '"', offset: 8 }
    );
    assert_eq!(
        scan_error("'abc"),
        ScanError::UnterminatedString { quote: '\'', offset: 0 }
    );
}

#[test]
fn test_unterminated_block_comment() {
    assert_eq!(
        scan_error("1 /* open"),
        ScanError::UnterminatedComment { offset: 2 }
    );
}

#[test]
fn test_error_after_valid_tokens() {
    let mut scanner = Scanner::new("a @");
    assert_eq!(scanner.next_token().unwrap().text, "a");
    assert_eq!(
        scanner.next_token(),
        Err(ScanError::UnexpectedCharacter { ch: '@', offset: 2 })
    );
}
