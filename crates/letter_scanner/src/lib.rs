//! letter_scanner: Lexical scanner for Letter source text.
//!
//! Produces tokens lazily, one per call, from an ordered table of matching
//! rules. Whitespace and comments are consumed without producing tokens.

mod rules;
mod scanner;
mod token;

pub use scanner::{tokenize, Scanner};
pub use token::Token;
