//! Scan and syntax errors.

use crate::Diagnostic;
use letter_core::text::{TextPos, TextSpan};
use thiserror::Error;

/// The scanner could not produce a token at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Unexpected character '{ch}' at offset {offset}.")]
    UnexpectedCharacter { ch: char, offset: TextPos },

    #[error("Unterminated string literal starting at offset {offset}; closing {quote} expected.")]
    UnterminatedString { quote: char, offset: TextPos },

    #[error("Unterminated comment starting at offset {offset}; '*/' expected.")]
    UnterminatedComment { offset: TextPos },
}

impl ScanError {
    pub fn code(&self) -> u32 {
        match self {
            ScanError::UnexpectedCharacter { .. } => 1127,
            ScanError::UnterminatedString { .. } => 1002,
            ScanError::UnterminatedComment { .. } => 1010,
        }
    }

    pub fn span(&self) -> TextSpan {
        match *self {
            ScanError::UnexpectedCharacter { ch, offset } => {
                TextSpan::new(offset, ch.len_utf8() as TextPos)
            }
            ScanError::UnterminatedString { offset, .. } => TextSpan::new(offset, 1),
            ScanError::UnterminatedComment { offset } => TextSpan::new(offset, 2),
        }
    }
}

/// The token stream does not fit the grammar, or a well-formedness check failed.
///
/// `expected` names a token kind by its display name (`";"`, `"IDENTIFIER"`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Unexpected token: \"{found}\", expected: \"{expected}\".")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: TextSpan,
    },

    #[error("Unexpected end of input, expected: \"{expected}\".")]
    UnexpectedEndOfInput {
        expected: &'static str,
        offset: TextPos,
    },

    #[error("Invalid left-hand side in assignment expression: {found} is not assignable.")]
    InvalidAssignmentTarget { found: &'static str, span: TextSpan },

    #[error("Unexpected token: \"{found}\", expected an expression.")]
    ExpressionExpected { found: String, span: TextSpan },

    #[error("Unexpected literal production: \"{found}\".")]
    UnexpectedLiteral { found: String, span: TextSpan },

    #[error("Maximum nesting depth of {limit} exceeded.")]
    NestingTooDeep { limit: u32, span: TextSpan },
}

impl SyntaxError {
    pub fn code(&self) -> u32 {
        match self {
            SyntaxError::UnexpectedToken { .. } => 1005,
            SyntaxError::UnexpectedEndOfInput { .. } => 1126,
            SyntaxError::InvalidAssignmentTarget { .. } => 2364,
            SyntaxError::ExpressionExpected { .. } => 1109,
            SyntaxError::UnexpectedLiteral { .. } => 1110,
            SyntaxError::NestingTooDeep { .. } => 1200,
        }
    }

    pub fn span(&self) -> TextSpan {
        match *self {
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::InvalidAssignmentTarget { span, .. }
            | SyntaxError::ExpressionExpected { span, .. }
            | SyntaxError::UnexpectedLiteral { span, .. }
            | SyntaxError::NestingTooDeep { span, .. } => span,
            SyntaxError::UnexpectedEndOfInput { offset, .. } => TextSpan::empty(offset),
        }
    }
}

/// The single failure a parse can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn code(&self) -> u32 {
        match self {
            ParseError::Scan(e) => e.code(),
            ParseError::Syntax(e) => e.code(),
        }
    }

    pub fn span(&self) -> TextSpan {
        match self {
            ParseError::Scan(e) => e.span(),
            ParseError::Syntax(e) => e.span(),
        }
    }

    pub fn to_diagnostic(&self, file: Option<&str>) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string()).with_span(self.span());
        match file {
            Some(file) => diag.with_file(file),
            None => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_message() {
        let err = SyntaxError::UnexpectedToken {
            found: "}".to_string(),
            expected: ";",
            span: TextSpan::new(4, 1),
        };
        assert_eq!(err.to_string(), "Unexpected token: \"}\", expected: \";\".");
        assert_eq!(err.code(), 1005);
    }

    #[test]
    fn test_end_of_input_span_is_empty() {
        let err = SyntaxError::UnexpectedEndOfInput {
            expected: ")",
            offset: 12,
        };
        assert_eq!(err.span(), TextSpan::empty(12));
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn test_scan_error_span_covers_multibyte_char() {
        let err = ScanError::UnexpectedCharacter { ch: 'λ', offset: 3 };
        assert_eq!(err.span(), TextSpan::new(3, 2));
        assert_eq!(err.to_string(), "Unexpected character 'λ' at offset 3.");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: ParseError = ScanError::UnterminatedString {
            quote: '"',
            offset: 0,
        }
        .into();
        assert!(matches!(err, ParseError::Scan(_)));
        assert_eq!(err.code(), 1002);
        assert!(err.to_string().starts_with("Unterminated string literal"));
    }

    #[test]
    fn test_to_diagnostic() {
        let err: ParseError = SyntaxError::InvalidAssignmentTarget {
            found: "BinaryExpression",
            span: TextSpan::new(6, 1),
        }
        .into();
        let diag = err.to_diagnostic(Some("a.lt"));
        assert_eq!(diag.code, 2364);
        assert_eq!(diag.file.as_deref(), Some("a.lt"));
        assert_eq!(diag.span, Some(TextSpan::new(6, 1)));
        assert!(diag.message_text.contains("BinaryExpression"));
    }
}
