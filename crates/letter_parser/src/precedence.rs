//! Binary operator precedence levels.

use letter_ast::syntax_kind::SyntaxKind;

/// The left-associative binary levels, from loosest to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub(crate) enum BinaryLevel {
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl BinaryLevel {
    /// The loosest level; where an assignment's left side starts.
    pub(crate) const LOWEST: BinaryLevel = BinaryLevel::LogicalOr;

    /// The level whose operators have token kind `kind`, if any.
    pub(crate) fn of(kind: SyntaxKind) -> Option<BinaryLevel> {
        match kind {
            SyntaxKind::LogicalOr => Some(BinaryLevel::LogicalOr),
            SyntaxKind::LogicalAnd => Some(BinaryLevel::LogicalAnd),
            SyntaxKind::EqualityOperator => Some(BinaryLevel::Equality),
            SyntaxKind::RelationalOperator => Some(BinaryLevel::Relational),
            SyntaxKind::AdditiveOperator => Some(BinaryLevel::Additive),
            SyntaxKind::MultiplicativeOperator => Some(BinaryLevel::Multiplicative),
            _ => None,
        }
    }

    /// The next tighter level, or `None` when operands are unary expressions.
    pub(crate) fn tighter(self) -> Option<BinaryLevel> {
        match self {
            BinaryLevel::LogicalOr => Some(BinaryLevel::LogicalAnd),
            BinaryLevel::LogicalAnd => Some(BinaryLevel::Equality),
            BinaryLevel::Equality => Some(BinaryLevel::Relational),
            BinaryLevel::Relational => Some(BinaryLevel::Additive),
            BinaryLevel::Additive => Some(BinaryLevel::Multiplicative),
            BinaryLevel::Multiplicative => None,
        }
    }

    /// `||` and `&&` build logical expressions; every other level builds
    /// binary expressions.
    pub(crate) fn is_logical(self) -> bool {
        matches!(self, BinaryLevel::LogicalOr | BinaryLevel::LogicalAnd)
    }
}
