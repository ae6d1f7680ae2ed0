//! AST node definitions for Letter.
//!
//! Nodes live in a `bumpalo` arena and reference their children through
//! `&'a` references and slices; every child has exactly one parent.
//! Every node serializes as a JSON object whose `"type"` field is the node
//! name, so a tree can be compared against an expected JSON document.

use crate::syntax_kind::SyntaxKind;
use serde::{Serialize, Serializer};

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Program
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct Program<'a> {
    pub body: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Statement<'a> {
    Expression(ExpressionStatement<'a>),
    Empty(EmptyStatement),
    Block(BlockStatement<'a>),
    Variable(VariableStatement<'a>),
    If(IfStatement<'a>),
    While(WhileStatement<'a>),
    DoWhile(DoWhileStatement<'a>),
    For(ForStatement<'a>),
    Function(FunctionDeclaration<'a>),
    Return(ReturnStatement<'a>),
    Class(ClassDeclaration<'a>),
}

impl Statement<'_> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Statement::Expression(_) => SyntaxKind::ExpressionStatement,
            Statement::Empty(_) => SyntaxKind::EmptyStatement,
            Statement::Block(_) => SyntaxKind::BlockStatement,
            Statement::Variable(_) => SyntaxKind::VariableStatement,
            Statement::If(_) => SyntaxKind::IfStatement,
            Statement::While(_) => SyntaxKind::WhileStatement,
            Statement::DoWhile(_) => SyntaxKind::DoWhileStatement,
            Statement::For(_) => SyntaxKind::ForStatement,
            Statement::Function(_) => SyntaxKind::FunctionDeclaration,
            Statement::Return(_) => SyntaxKind::ReturnStatement,
            Statement::Class(_) => SyntaxKind::ClassDeclaration,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement<'a> {
    pub expression: &'a Expression<'a>,
}

#[derive(Debug, Default, Serialize)]
#[serde(tag = "type")]
pub struct EmptyStatement {}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct BlockStatement<'a> {
    pub body: NodeList<'a, Statement<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct VariableStatement<'a> {
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration<'a> {
    pub id: Identifier<'a>,
    pub init: Option<&'a Expression<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct IfStatement<'a> {
    pub test: &'a Expression<'a>,
    pub consequent: &'a Statement<'a>,
    pub alternate: Option<&'a Statement<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct WhileStatement<'a> {
    pub test: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct DoWhileStatement<'a> {
    pub body: &'a Statement<'a>,
    pub test: &'a Expression<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct ForStatement<'a> {
    pub init: Option<ForInit<'a>>,
    pub test: Option<&'a Expression<'a>>,
    pub update: Option<&'a Expression<'a>>,
    pub body: &'a Statement<'a>,
}

/// The first clause of a `for` header.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ForInit<'a> {
    /// `let` declarations, without the trailing `;`.
    Variable(VariableStatement<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct FunctionDeclaration<'a> {
    pub name: Identifier<'a>,
    pub params: NodeList<'a, Identifier<'a>>,
    pub body: BlockStatement<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement<'a> {
    pub argument: Option<&'a Expression<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ClassDeclaration<'a> {
    pub id: Identifier<'a>,
    pub super_class: Option<Identifier<'a>>,
    pub body: BlockStatement<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral<'a>),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
    Assignment(AssignmentExpression<'a>),
    Logical(LogicalExpression<'a>),
    Binary(BinaryExpression<'a>),
    Unary(UnaryExpression<'a>),
    Member(MemberExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    This(ThisExpression),
    Super(Super),
}

impl Expression<'_> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Expression::Identifier(_) => SyntaxKind::Identifier,
            Expression::NumericLiteral(_) => SyntaxKind::NumericLiteral,
            Expression::StringLiteral(_) => SyntaxKind::StringLiteral,
            Expression::BooleanLiteral(_) => SyntaxKind::BooleanLiteral,
            Expression::NullLiteral(_) => SyntaxKind::NullLiteral,
            Expression::Assignment(_) => SyntaxKind::AssignmentExpression,
            Expression::Logical(_) => SyntaxKind::LogicalExpression,
            Expression::Binary(_) => SyntaxKind::BinaryExpression,
            Expression::Unary(_) => SyntaxKind::UnaryExpression,
            Expression::Member(_) => SyntaxKind::MemberExpression,
            Expression::Call(_) => SyntaxKind::CallExpression,
            Expression::New(_) => SyntaxKind::NewExpression,
            Expression::This(_) => SyntaxKind::ThisExpression,
            Expression::Super(_) => SyntaxKind::Super,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NumericLiteral {
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,
}

/// Integral values that fit a `u64` are written as JSON integers (`42`, not
/// `42.0`). `u64::MAX as f64` rounds up to 2^64, which no longer fits.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && *value >= 0.0 && *value < u64::MAX as f64 {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral<'a> {
    /// The literal's contents, without the surrounding quotes.
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct NullLiteral {}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentExpression<'a> {
    pub operator: AssignmentOperator,
    pub left: &'a AssignmentTarget<'a>,
    pub right: &'a Expression<'a>,
}

/// The only node kinds an assignment may write to.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AssignmentTarget<'a> {
    Identifier(Identifier<'a>),
    Member(MemberExpression<'a>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct LogicalExpression<'a> {
    pub operator: LogicalOperator,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression<'a> {
    pub operator: BinaryOperator,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression<'a> {
    pub operator: UnaryOperator,
    pub argument: &'a Expression<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct MemberExpression<'a> {
    pub object: &'a Expression<'a>,
    /// An `Identifier` when `computed` is false, any expression otherwise.
    pub property: &'a Expression<'a>,
    pub computed: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct CallExpression<'a> {
    pub callee: &'a Expression<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct NewExpression<'a> {
    pub callee: &'a Expression<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct ThisExpression {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Super {}

// ============================================================================
// Operators
// ============================================================================

macro_rules! operator_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:tt),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Map the text of an operator token to the operator.
            pub fn from_text(text: &str) -> Option<Self> {
                match text {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operator_enum!(
    /// `=` and the compound assignments.
    AssignmentOperator {
        Assign => "=",
        AddAssign => "+=",
        SubtractAssign => "-=",
        MultiplyAssign => "*=",
        DivideAssign => "/=",
    }
);

operator_enum!(LogicalOperator {
    And => "&&",
    Or => "||",
});

operator_enum!(BinaryOperator {
    Equal => "==",
    NotEqual => "!=",
    GreaterThan => ">",
    GreaterThanEqual => ">=",
    LessThan => "<",
    LessThanEqual => "<=",
    Add => "+",
    Subtract => "-",
    Multiply => "*",
    Divide => "/",
});

operator_enum!(UnaryOperator {
    Plus => "+",
    Minus => "-",
    Not => "!",
});
