//! The Letter scanner.
//!
//! Holds a borrowed source buffer and a cursor. Each call to
//! [`Scanner::next_token`] skips trivia and returns the next token, or the
//! end-of-input token once the source is exhausted.

use crate::rules::RULES;
use crate::token::Token;
use letter_core::text::TextPos;
use letter_diagnostics::ScanError;
use log::trace;

/// Lazily pulls tokens from a source string.
pub struct Scanner<'a> {
    /// The source text being scanned.
    source: &'a str,
    /// Byte offset of the first unconsumed character.
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Reset the scanner to the start of `source`.
    pub fn init(&mut self, source: &'a str) {
        self.source = source;
        self.pos = 0;
    }

    /// Whether unconsumed input remains. The remainder may still be trivia
    /// only, in which case the next token is end of input.
    #[inline]
    pub fn has_more_input(&self) -> bool {
        self.pos < self.source.len()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Scan the next token.
    ///
    /// Once the input is exhausted every call returns the end-of-input token.
    pub fn next_token(&mut self) -> Result<Token<'a>, ScanError> {
        'scan: loop {
            if self.is_eof() {
                return Ok(Token::eof(self.source.len() as TextPos));
            }

            let start = self.pos;
            let rest = &self.source[start..];

            if rest.starts_with("/*") && !rest[2..].contains("*/") {
                return Err(ScanError::UnterminatedComment {
                    offset: start as TextPos,
                });
            }

            for rule in RULES.iter() {
                let Some(len) = rule.matcher.match_len(rest) else {
                    continue;
                };
                self.pos += len;
                match rule.kind {
                    None => continue 'scan,
                    Some(kind) => {
                        let token = Token::new(kind, &rest[..len], start as TextPos);
                        trace!("token {}", token);
                        return Ok(token);
                    }
                }
            }

            return Err(unmatched(rest, start));
        }
    }
}

/// Classify input that no rule accepts.
fn unmatched(rest: &str, start: usize) -> ScanError {
    let offset = start as TextPos;
    match rest.chars().next() {
        Some(quote @ ('"' | '\'')) => ScanError::UnterminatedString { quote, offset },
        Some(ch) => ScanError::UnexpectedCharacter { ch, offset },
        // Callers only classify non-empty input.
        None => ScanError::UnexpectedCharacter { ch: '\0', offset },
    }
}

/// Scan all of `source`, excluding the end-of-input token.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ScanError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        if token.is_eof() {
            break;
        }
        tokens.push(token);
    }
    Ok(tokens)
}
