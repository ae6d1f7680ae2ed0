//! letter_ast: Abstract syntax tree definitions for the Letter language.
//!
//! Defines the `SyntaxKind` enum shared by tokens and nodes, and the
//! arena-allocated node types produced by the parser.

pub mod node;
pub mod syntax_kind;

pub use node::*;
pub use syntax_kind::SyntaxKind;
