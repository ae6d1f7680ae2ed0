//! Tokens produced by the scanner.

use letter_ast::syntax_kind::SyntaxKind;
use letter_core::text::{TextPos, TextSpan};
use std::fmt;

/// A scanned token. `text` borrows the exact matched source text, so string
/// tokens keep their quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub span: TextSpan,
}

impl<'a> Token<'a> {
    pub fn new(kind: SyntaxKind, text: &'a str, start: TextPos) -> Self {
        Self {
            kind,
            text,
            span: TextSpan::new(start, text.len() as TextPos),
        }
    }

    /// The end-of-input marker, positioned at `offset`.
    pub fn eof(offset: TextPos) -> Self {
        Self {
            kind: SyntaxKind::EndOfFileToken,
            text: "",
            span: TextSpan::empty(offset),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == SyntaxKind::EndOfFileToken
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{:?}", self.kind, self.text, self.span)
    }
}
