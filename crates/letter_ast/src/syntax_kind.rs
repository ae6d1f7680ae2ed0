//! SyntaxKind enum - all token and node kinds in the Letter AST.

/// The kind of a token or node.
///
/// Token kinds are declared in scanner priority order; node kinds follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    EndOfFileToken = 0,

    // Literals
    NumberToken,
    StringToken,

    // Delimiters
    SemicolonToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    CommaToken,
    DotToken,
    OpenBracketToken,
    CloseBracketToken,

    // Keywords
    LetKeyword,
    IfKeyword,
    ElseKeyword,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    WhileKeyword,
    DoKeyword,
    ForKeyword,
    DefKeyword,
    ReturnKeyword,
    ClassKeyword,
    ExtendsKeyword,
    SuperKeyword,
    NewKeyword,
    ThisKeyword,

    // Identifiers (also the node kind)
    Identifier,

    // Operators
    EqualityOperator,
    SimpleAssign,
    ComplexAssign,
    AdditiveOperator,
    MultiplicativeOperator,
    RelationalOperator,
    LogicalAnd,
    LogicalOr,
    LogicalNot,

    // ========================================================================
    // Nodes
    // ========================================================================
    Program,

    // Statements
    ExpressionStatement,
    EmptyStatement,
    BlockStatement,
    VariableStatement,
    VariableDeclaration,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    FunctionDeclaration,
    ReturnStatement,
    ClassDeclaration,

    // Expressions
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    AssignmentExpression,
    LogicalExpression,
    BinaryExpression,
    UnaryExpression,
    MemberExpression,
    CallExpression,
    NewExpression,
    ThisExpression,
    Super,
}

impl SyntaxKind {
    /// Reserved words, in the order the scanner tries them.
    pub const KEYWORDS: [SyntaxKind; 16] = [
        SyntaxKind::LetKeyword,
        SyntaxKind::IfKeyword,
        SyntaxKind::ElseKeyword,
        SyntaxKind::TrueKeyword,
        SyntaxKind::FalseKeyword,
        SyntaxKind::NullKeyword,
        SyntaxKind::WhileKeyword,
        SyntaxKind::DoKeyword,
        SyntaxKind::ForKeyword,
        SyntaxKind::DefKeyword,
        SyntaxKind::ReturnKeyword,
        SyntaxKind::ClassKeyword,
        SyntaxKind::ExtendsKeyword,
        SyntaxKind::SuperKeyword,
        SyntaxKind::NewKeyword,
        SyntaxKind::ThisKeyword,
    ];

    /// Whether this token kind introduces an assignment (`=`, `+=`, ...).
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        matches!(self, SyntaxKind::SimpleAssign | SyntaxKind::ComplexAssign)
    }

    /// Whether this token kind starts a `Literal` production.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::NumberToken
                | SyntaxKind::StringToken
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
        )
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::DefKeyword => Some("def"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::ThisKeyword => Some("this"),
            _ => None,
        }
    }

    /// Get the text of a single-character delimiter.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            _ => None,
        }
    }

    /// The name used for this kind in diagnostics and token dumps.
    ///
    /// Delimiters and keywords are named by their text, other tokens by an
    /// upper-case class name, and nodes by their AST type name.
    pub fn as_str(self) -> &'static str {
        if let Some(text) = self.punctuation_text().or_else(|| self.keyword_text()) {
            return text;
        }
        match self {
            SyntaxKind::EndOfFileToken => "EOF",
            SyntaxKind::NumberToken => "NUMBER",
            SyntaxKind::StringToken => "STRING",
            SyntaxKind::Identifier => "IDENTIFIER",
            SyntaxKind::EqualityOperator => "EQUALITY_OPERATOR",
            SyntaxKind::SimpleAssign => "SIMPLE_ASSIGN",
            SyntaxKind::ComplexAssign => "COMPLEX_ASSIGN",
            SyntaxKind::AdditiveOperator => "ADDITIVE_OPERATOR",
            SyntaxKind::MultiplicativeOperator => "MULTIPLICATIVE_OPERATOR",
            SyntaxKind::RelationalOperator => "RELATIONAL_OPERATOR",
            SyntaxKind::LogicalAnd => "LOGICAL_AND",
            SyntaxKind::LogicalOr => "LOGICAL_OR",
            SyntaxKind::LogicalNot => "LOGICAL_NOT",
            SyntaxKind::Program => "Program",
            SyntaxKind::ExpressionStatement => "ExpressionStatement",
            SyntaxKind::EmptyStatement => "EmptyStatement",
            SyntaxKind::BlockStatement => "BlockStatement",
            SyntaxKind::VariableStatement => "VariableStatement",
            SyntaxKind::VariableDeclaration => "VariableDeclaration",
            SyntaxKind::IfStatement => "IfStatement",
            SyntaxKind::WhileStatement => "WhileStatement",
            SyntaxKind::DoWhileStatement => "DoWhileStatement",
            SyntaxKind::ForStatement => "ForStatement",
            SyntaxKind::FunctionDeclaration => "FunctionDeclaration",
            SyntaxKind::ReturnStatement => "ReturnStatement",
            SyntaxKind::ClassDeclaration => "ClassDeclaration",
            SyntaxKind::NumericLiteral => "NumericLiteral",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::BooleanLiteral => "BooleanLiteral",
            SyntaxKind::NullLiteral => "NullLiteral",
            SyntaxKind::AssignmentExpression => "AssignmentExpression",
            SyntaxKind::LogicalExpression => "LogicalExpression",
            SyntaxKind::BinaryExpression => "BinaryExpression",
            SyntaxKind::UnaryExpression => "UnaryExpression",
            SyntaxKind::MemberExpression => "MemberExpression",
            SyntaxKind::CallExpression => "CallExpression",
            SyntaxKind::NewExpression => "NewExpression",
            SyntaxKind::ThisExpression => "ThisExpression",
            SyntaxKind::Super => "Super",
            // Delimiters and keywords returned above.
            _ => "<unknown>",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
