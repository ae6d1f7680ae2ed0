//! letter_core: Source positions shared by every stage of the Letter front end.
//!
//! Offsets are byte offsets into the UTF-8 source buffer.

pub mod text;

pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
