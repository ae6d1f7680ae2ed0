//! letter_diagnostics: Error types and diagnostic reporting for the Letter front end.
//!
//! Scanning and parsing are fail-fast: a parse either yields a complete tree
//! or exactly one [`ParseError`]. Errors carry a stable numeric code and the
//! span of the offending text, and convert into [`Diagnostic`]s for display.

mod errors;

pub use errors::{ParseError, ScanError, SyntaxError};

use letter_core::text::{LineMap, TextSpan};
use std::fmt;

/// A realized error diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// The source text span where this diagnostic occurred, if any.
    pub span: Option<TextSpan>,
    pub message_text: String,
    /// The diagnostic code, rendered as `L<code>`.
    pub code: u32,
}

impl Diagnostic {
    /// Create an error diagnostic without location info.
    pub fn error(code: u32, message_text: impl Into<String>) -> Self {
        Self {
            file: None,
            span: None,
            message_text: message_text.into(),
            code,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Render as `file(line:col): error L<code>: message`, resolving the span
    /// start through `line_map`.
    pub fn render_with_lines(&self, line_map: &LineMap) -> String {
        let mut out = String::new();
        if let Some(ref file) = self.file {
            out.push_str(file);
            if let Some(span) = self.span {
                out.push_str(&format!("({})", line_map.line_and_column_of(span.start)));
            }
            out.push_str(": ");
        }
        out.push_str(&format!("error L{}: {}", self.code, self.message_text));
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(span) = self.span {
                write!(f, "({})", span.start)?;
            }
            write!(f, ": ")?;
        }
        write!(f, "error L{}: {}", self.code, self.message_text)
    }
}

/// A collection of diagnostics accumulated across several parses.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}
