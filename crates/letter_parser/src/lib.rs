//! letter_parser: Recursive descent parser for Letter.
//!
//! Parses the scanner's token stream into an arena-allocated AST.

mod parser;
mod precedence;

pub use letter_options::{ParserOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;

use bumpalo::Bump;
use letter_ast::node::Program;
use letter_diagnostics::ParseError;

/// Parse `source` with default options.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<Program<'a>, ParseError> {
    Parser::new(arena, source).parse()
}
