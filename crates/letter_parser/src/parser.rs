//! The Letter parser implementation.
//!
//! A recursive descent parser with one token of lookahead. It pulls tokens
//! from the scanner on demand and builds an arena-allocated AST. The first
//! error aborts the parse; there is no recovery.

use bumpalo::Bump;
use letter_ast::node::*;
use letter_ast::syntax_kind::SyntaxKind;
use letter_diagnostics::{ParseError, SyntaxError};
use letter_options::ParserOptions;
use letter_scanner::{Scanner, Token};
use log::debug;

use crate::precedence::BinaryLevel;

type ParseResult<T> = Result<T, ParseError>;

/// Move a Vec into the arena as a slice.
fn alloc_vec_in<T>(arena: &Bump, vec: Vec<T>) -> &[T] {
    if vec.is_empty() {
        return &[];
    }
    bumpalo::collections::Vec::from_iter_in(vec, arena).into_bump_slice()
}

/// The parser produces a `Program` AST from Letter source text.
pub struct Parser<'a> {
    arena: &'a Bump,
    scanner: Scanner<'a>,
    /// The next unconsumed token.
    lookahead: Token<'a>,
    options: ParserOptions,
    /// Current nesting depth, bounded by `options.max_depth`.
    depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, source: &'a str) -> Self {
        Self::with_options(arena, source, ParserOptions::default())
    }

    pub fn with_options(arena: &'a Bump, source: &'a str, options: ParserOptions) -> Self {
        Self {
            arena,
            scanner: Scanner::new(source),
            lookahead: Token::eof(0),
            options,
            depth: 0,
        }
    }

    /// Parse the whole source into a program.
    pub fn parse(mut self) -> ParseResult<Program<'a>> {
        let result = self.parse_program();
        match &result {
            Ok(program) => debug!("parsed {} top-level statement(s)", program.body.len()),
            Err(err) => debug!("parse failed: {}", err),
        }
        result
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn current_token(&self) -> SyntaxKind {
        self.lookahead.kind
    }

    /// Consume the lookahead if it has kind `expected` and pull the next token.
    fn eat(&mut self, expected: SyntaxKind) -> ParseResult<Token<'a>> {
        let token = self.lookahead;
        if token.kind != expected {
            return Err(self.unexpected(expected.as_str()).into());
        }
        self.lookahead = self.scanner.next_token()?;
        Ok(token)
    }

    /// The error for a lookahead that does not fit; `expected` names what would.
    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        let token = self.lookahead;
        if token.is_eof() {
            SyntaxError::UnexpectedEndOfInput {
                expected,
                offset: token.span.start,
            }
        } else {
            SyntaxError::UnexpectedToken {
                found: token.text.to_string(),
                expected,
                span: token.span,
            }
        }
    }

    /// Step one nesting level deeper; the caller steps back out with
    /// `self.depth -= 1` once the nested production returns.
    fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= self.options.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.options.max_depth,
                span: self.lookahead.span,
            }
            .into());
        }
        self.depth += 1;
        Ok(())
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.enter()?;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_program(&mut self) -> ParseResult<Program<'a>> {
        self.lookahead = self.scanner.next_token()?;
        let body = self.parse_statement_list(SyntaxKind::EndOfFileToken)?;
        Ok(Program { body })
    }

    /// Statements up to (not including) `stop` or end of input.
    fn parse_statement_list(
        &mut self,
        stop: SyntaxKind,
    ) -> ParseResult<NodeList<'a, Statement<'a>>> {
        let mut statements = Vec::new();
        while self.current_token() != stop && !self.lookahead.is_eof() {
            statements.push(self.parse_statement()?);
        }
        Ok(alloc_vec_in(self.arena, statements))
    }

    fn parse_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.nested(|p| match p.current_token() {
            SyntaxKind::SemicolonToken => p.parse_empty_statement(),
            SyntaxKind::OpenBraceToken => Ok(Statement::Block(p.parse_block_statement()?)),
            SyntaxKind::LetKeyword => p.parse_variable_statement(),
            SyntaxKind::IfKeyword => p.parse_if_statement(),
            SyntaxKind::WhileKeyword | SyntaxKind::DoKeyword | SyntaxKind::ForKeyword => {
                p.parse_iteration_statement()
            }
            SyntaxKind::DefKeyword => p.parse_function_declaration(),
            SyntaxKind::ClassKeyword => p.parse_class_declaration(),
            SyntaxKind::ReturnKeyword => p.parse_return_statement(),
            _ => p.parse_expression_statement(),
        })
    }

    fn parse_statement_and_alloc(&mut self) -> ParseResult<&'a Statement<'a>> {
        let statement = self.parse_statement()?;
        Ok(self.arena.alloc(statement))
    }

    fn parse_empty_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.eat(SyntaxKind::SemicolonToken)?;
        Ok(Statement::Empty(EmptyStatement {}))
    }

    fn parse_block_statement(&mut self) -> ParseResult<BlockStatement<'a>> {
        self.eat(SyntaxKind::OpenBraceToken)?;
        let body = self.parse_statement_list(SyntaxKind::CloseBraceToken)?;
        self.eat(SyntaxKind::CloseBraceToken)?;
        Ok(BlockStatement { body })
    }

    fn parse_variable_statement(&mut self) -> ParseResult<Statement<'a>> {
        let statement = self.parse_variable_statement_init()?;
        self.eat(SyntaxKind::SemicolonToken)?;
        Ok(Statement::Variable(statement))
    }

    /// `let` and its declarations, without the terminating `;`.
    fn parse_variable_statement_init(&mut self) -> ParseResult<VariableStatement<'a>> {
        self.eat(SyntaxKind::LetKeyword)?;
        let mut declarations = vec![self.parse_variable_declaration()?];
        while self.current_token() == SyntaxKind::CommaToken {
            self.eat(SyntaxKind::CommaToken)?;
            declarations.push(self.parse_variable_declaration()?);
        }
        Ok(VariableStatement {
            declarations: alloc_vec_in(self.arena, declarations),
        })
    }

    fn parse_variable_declaration(&mut self) -> ParseResult<VariableDeclaration<'a>> {
        let id = self.parse_identifier()?;
        let init = match self.current_token() {
            SyntaxKind::SemicolonToken | SyntaxKind::CommaToken => None,
            _ => Some(self.parse_variable_initializer()?),
        };
        Ok(VariableDeclaration { id, init })
    }

    fn parse_variable_initializer(&mut self) -> ParseResult<&'a Expression<'a>> {
        self.eat(SyntaxKind::SimpleAssign)?;
        self.parse_assignment_expression_and_alloc()
    }

    fn parse_if_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.eat(SyntaxKind::IfKeyword)?;
        let test = self.parse_parenthesized_test()?;
        let consequent = self.parse_statement_and_alloc()?;
        // Greedy: an `else` belongs to the nearest unmatched `if`.
        let alternate = if self.current_token() == SyntaxKind::ElseKeyword {
            self.eat(SyntaxKind::ElseKeyword)?;
            Some(self.parse_statement_and_alloc()?)
        } else {
            None
        };
        Ok(Statement::If(IfStatement {
            test,
            consequent,
            alternate,
        }))
    }

    /// `'(' Expression ')'` heading `if` and `while`.
    fn parse_parenthesized_test(&mut self) -> ParseResult<&'a Expression<'a>> {
        self.eat(SyntaxKind::OpenParenToken)?;
        let test = self.parse_expression_and_alloc()?;
        self.eat(SyntaxKind::CloseParenToken)?;
        Ok(test)
    }

    fn parse_iteration_statement(&mut self) -> ParseResult<Statement<'a>> {
        match self.current_token() {
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::DoKeyword => self.parse_do_while_statement(),
            _ => self.parse_for_statement(),
        }
    }

    fn parse_while_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.eat(SyntaxKind::WhileKeyword)?;
        let test = self.parse_parenthesized_test()?;
        let body = self.parse_statement_and_alloc()?;
        Ok(Statement::While(WhileStatement { test, body }))
    }

    fn parse_do_while_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.eat(SyntaxKind::DoKeyword)?;
        let body = self.parse_statement_and_alloc()?;
        self.eat(SyntaxKind::WhileKeyword)?;
        let test = self.parse_parenthesized_test()?;
        self.eat(SyntaxKind::SemicolonToken)?;
        Ok(Statement::DoWhile(DoWhileStatement { body, test }))
    }

    fn parse_for_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.eat(SyntaxKind::ForKeyword)?;
        self.eat(SyntaxKind::OpenParenToken)?;

        let init = match self.current_token() {
            SyntaxKind::SemicolonToken => None,
            SyntaxKind::LetKeyword => {
                Some(ForInit::Variable(self.parse_variable_statement_init()?))
            }
            _ => Some(ForInit::Expression(self.parse_expression_and_alloc()?)),
        };
        self.eat(SyntaxKind::SemicolonToken)?;

        let test = self.parse_optional_expression(SyntaxKind::SemicolonToken)?;
        self.eat(SyntaxKind::SemicolonToken)?;

        let update = self.parse_optional_expression(SyntaxKind::CloseParenToken)?;
        self.eat(SyntaxKind::CloseParenToken)?;

        let body = self.parse_statement_and_alloc()?;
        Ok(Statement::For(ForStatement {
            init,
            test,
            update,
            body,
        }))
    }

    /// An expression, unless the lookahead is already `terminator`.
    fn parse_optional_expression(
        &mut self,
        terminator: SyntaxKind,
    ) -> ParseResult<Option<&'a Expression<'a>>> {
        if self.current_token() == terminator {
            return Ok(None);
        }
        self.parse_expression_and_alloc().map(Some)
    }

    fn parse_function_declaration(&mut self) -> ParseResult<Statement<'a>> {
        self.eat(SyntaxKind::DefKeyword)?;
        let name = self.parse_identifier()?;

        self.eat(SyntaxKind::OpenParenToken)?;
        let mut params = Vec::new();
        if self.current_token() != SyntaxKind::CloseParenToken {
            params.push(self.parse_identifier()?);
            while self.current_token() == SyntaxKind::CommaToken {
                self.eat(SyntaxKind::CommaToken)?;
                params.push(self.parse_identifier()?);
            }
        }
        self.eat(SyntaxKind::CloseParenToken)?;

        let body = self.parse_block_statement()?;
        Ok(Statement::Function(FunctionDeclaration {
            name,
            params: alloc_vec_in(self.arena, params),
            body,
        }))
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement<'a>> {
        self.eat(SyntaxKind::ReturnKeyword)?;
        let argument = self.parse_optional_expression(SyntaxKind::SemicolonToken)?;
        self.eat(SyntaxKind::SemicolonToken)?;
        Ok(Statement::Return(ReturnStatement { argument }))
    }

    fn parse_class_declaration(&mut self) -> ParseResult<Statement<'a>> {
        self.eat(SyntaxKind::ClassKeyword)?;
        let id = self.parse_identifier()?;
        let super_class = if self.current_token() == SyntaxKind::ExtendsKeyword {
            self.eat(SyntaxKind::ExtendsKeyword)?;
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let body = self.parse_block_statement()?;
        Ok(Statement::Class(ClassDeclaration {
            id,
            super_class,
            body,
        }))
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement<'a>> {
        let expression = self.parse_expression_and_alloc()?;
        self.eat(SyntaxKind::SemicolonToken)?;
        Ok(Statement::Expression(ExpressionStatement { expression }))
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self) -> ParseResult<Expression<'a>> {
        self.parse_assignment_expression()
    }

    fn parse_expression_and_alloc(&mut self) -> ParseResult<&'a Expression<'a>> {
        let expr = self.parse_expression()?;
        Ok(self.arena.alloc(expr))
    }

    fn parse_assignment_expression_and_alloc(&mut self) -> ParseResult<&'a Expression<'a>> {
        let expr = self.parse_assignment_expression()?;
        Ok(self.arena.alloc(expr))
    }

    /// Every nested expression passes through here, so this is where
    /// expression depth is counted.
    fn parse_assignment_expression(&mut self) -> ParseResult<Expression<'a>> {
        self.enter()?;
        let result = self.parse_assignment_expression_unguarded();
        self.depth -= 1;
        result
    }

    /// Right-associative: `a = b = c` is `a = (b = c)`.
    fn parse_assignment_expression_unguarded(&mut self) -> ParseResult<Expression<'a>> {
        let left = self.parse_binary_expression(BinaryLevel::LOWEST)?;
        let kind = self.current_token();
        if !kind.is_assignment_operator() {
            return Ok(left);
        }

        let operator_token = self.eat(kind)?;
        let operator = AssignmentOperator::from_text(operator_token.text)
            .ok_or_else(|| unknown_operator(&operator_token, "assignment operator"))?;
        let left = check_assignment_target(left, &operator_token)?;
        let right = self.parse_assignment_expression_and_alloc()?;

        Ok(Expression::Assignment(AssignmentExpression {
            operator,
            left: self.arena.alloc(left),
            right,
        }))
    }

    /// Binary operators binding at least as tightly as `min`.
    ///
    /// Operators of one level fold left in the loop; the right operand only
    /// takes operators of strictly tighter levels, so `a - b - c` is
    /// `(a - b) - c` and `a + b * c` is `a + (b * c)`. Recursion is bounded
    /// by the number of levels, not the number of operands.
    fn parse_binary_expression(&mut self, min: BinaryLevel) -> ParseResult<Expression<'a>> {
        let mut left = self.parse_unary_expression()?;
        while let Some(level) = BinaryLevel::of(self.current_token()) {
            if level < min {
                break;
            }
            let kind = self.current_token();
            let operator_token = self.eat(kind)?;
            let right = match level.tighter() {
                Some(next) => self.parse_binary_expression(next)?,
                None => self.parse_unary_expression()?,
            };
            left = self.make_binary_expression(level, &operator_token, left, right)?;
        }
        Ok(left)
    }

    fn make_binary_expression(
        &self,
        level: BinaryLevel,
        operator_token: &Token<'a>,
        left: Expression<'a>,
        right: Expression<'a>,
    ) -> ParseResult<Expression<'a>> {
        let left = self.arena.alloc(left);
        let right = self.arena.alloc(right);
        if level.is_logical() {
            let operator = LogicalOperator::from_text(operator_token.text)
                .ok_or_else(|| unknown_operator(operator_token, "logical operator"))?;
            Ok(Expression::Logical(LogicalExpression {
                operator,
                left,
                right,
            }))
        } else {
            let operator = BinaryOperator::from_text(operator_token.text)
                .ok_or_else(|| unknown_operator(operator_token, "binary operator"))?;
            Ok(Expression::Binary(BinaryExpression {
                operator,
                left,
                right,
            }))
        }
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Expression<'a>> {
        let kind = self.current_token();
        if !matches!(kind, SyntaxKind::AdditiveOperator | SyntaxKind::LogicalNot) {
            return self.parse_call_member_expression();
        }

        let operator_token = self.eat(kind)?;
        let operator = UnaryOperator::from_text(operator_token.text)
            .ok_or_else(|| unknown_operator(&operator_token, "unary operator"))?;
        let argument = self.nested(|p| p.parse_unary_expression())?;
        Ok(Expression::Unary(UnaryExpression {
            operator,
            argument: self.arena.alloc(argument),
        }))
    }

    /// The left-hand-side production: member chains, optionally called.
    fn parse_call_member_expression(&mut self) -> ParseResult<Expression<'a>> {
        if self.current_token() == SyntaxKind::SuperKeyword {
            self.eat(SyntaxKind::SuperKeyword)?;
            return self.parse_call_expression(Expression::Super(Super {}));
        }

        let member = self.parse_member_expression()?;
        if self.current_token() == SyntaxKind::OpenParenToken {
            return self.parse_call_expression(member);
        }
        Ok(member)
    }

    /// One or more argument lists applied to `callee`: `f()()`.
    fn parse_call_expression(&mut self, callee: Expression<'a>) -> ParseResult<Expression<'a>> {
        let mut callee = callee;
        loop {
            let arguments = self.parse_arguments()?;
            callee = Expression::Call(CallExpression {
                callee: self.arena.alloc(callee),
                arguments,
            });
            if self.current_token() != SyntaxKind::OpenParenToken {
                return Ok(callee);
            }
        }
    }

    fn parse_member_expression(&mut self) -> ParseResult<Expression<'a>> {
        let mut object = self.parse_primary_expression()?;
        loop {
            let (property, computed) = match self.current_token() {
                SyntaxKind::DotToken => {
                    self.eat(SyntaxKind::DotToken)?;
                    (Expression::Identifier(self.parse_identifier()?), false)
                }
                SyntaxKind::OpenBracketToken => {
                    self.eat(SyntaxKind::OpenBracketToken)?;
                    let property = self.parse_assignment_expression()?;
                    self.eat(SyntaxKind::CloseBracketToken)?;
                    (property, true)
                }
                _ => return Ok(object),
            };
            object = Expression::Member(MemberExpression {
                object: self.arena.alloc(object),
                property: self.arena.alloc(property),
                computed,
            });
        }
    }

    fn parse_arguments(&mut self) -> ParseResult<NodeList<'a, Expression<'a>>> {
        self.eat(SyntaxKind::OpenParenToken)?;
        let mut arguments = Vec::new();
        if self.current_token() != SyntaxKind::CloseParenToken {
            arguments.push(self.parse_assignment_expression()?);
            while self.current_token() == SyntaxKind::CommaToken {
                self.eat(SyntaxKind::CommaToken)?;
                arguments.push(self.parse_assignment_expression()?);
            }
        }
        self.eat(SyntaxKind::CloseParenToken)?;
        Ok(alloc_vec_in(self.arena, arguments))
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression<'a>> {
        let kind = self.current_token();
        if kind.is_literal() {
            return self.parse_literal();
        }
        match kind {
            SyntaxKind::OpenParenToken => {
                self.eat(SyntaxKind::OpenParenToken)?;
                let expression = self.parse_assignment_expression()?;
                self.eat(SyntaxKind::CloseParenToken)?;
                Ok(expression)
            }
            SyntaxKind::Identifier => Ok(Expression::Identifier(self.parse_identifier()?)),
            SyntaxKind::ThisKeyword => {
                self.eat(SyntaxKind::ThisKeyword)?;
                Ok(Expression::This(ThisExpression {}))
            }
            SyntaxKind::NewKeyword => self.nested(|p| p.parse_new_expression()),
            _ => Err(self.expression_expected().into()),
        }
    }

    fn expression_expected(&self) -> SyntaxError {
        if self.lookahead.is_eof() {
            return self.unexpected("expression");
        }
        SyntaxError::ExpressionExpected {
            found: self.lookahead.text.to_string(),
            span: self.lookahead.span,
        }
    }

    fn parse_new_expression(&mut self) -> ParseResult<Expression<'a>> {
        self.eat(SyntaxKind::NewKeyword)?;
        let callee = self.parse_member_expression()?;
        let arguments = self.parse_arguments()?;
        Ok(Expression::New(NewExpression {
            callee: self.arena.alloc(callee),
            arguments,
        }))
    }

    fn parse_identifier(&mut self) -> ParseResult<Identifier<'a>> {
        let token = self.eat(SyntaxKind::Identifier)?;
        Ok(Identifier { name: token.text })
    }

    fn parse_literal(&mut self) -> ParseResult<Expression<'a>> {
        let token = self.lookahead;
        let literal = match token.kind {
            SyntaxKind::NumberToken => {
                let value = token
                    .text
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| unexpected_literal(&token))?;
                Expression::NumericLiteral(NumericLiteral { value })
            }
            SyntaxKind::StringToken => Expression::StringLiteral(StringLiteral {
                value: strip_quotes(token.text),
            }),
            SyntaxKind::TrueKeyword => Expression::BooleanLiteral(BooleanLiteral { value: true }),
            SyntaxKind::FalseKeyword => Expression::BooleanLiteral(BooleanLiteral { value: false }),
            SyntaxKind::NullKeyword => Expression::NullLiteral(NullLiteral {}),
            _ => return Err(unexpected_literal(&token).into()),
        };
        self.eat(token.kind)?;
        Ok(literal)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Only identifiers and member expressions may be assigned to.
fn check_assignment_target<'a>(
    node: Expression<'a>,
    operator_token: &Token<'a>,
) -> Result<AssignmentTarget<'a>, SyntaxError> {
    match node {
        Expression::Identifier(id) => Ok(AssignmentTarget::Identifier(id)),
        Expression::Member(member) => Ok(AssignmentTarget::Member(member)),
        other => Err(SyntaxError::InvalidAssignmentTarget {
            found: other.kind().as_str(),
            span: operator_token.span,
        }),
    }
}

/// The scanner only produces operator text the operator enums know; this
/// covers a token whose text does not map anyway.
fn unknown_operator(token: &Token<'_>, expected: &'static str) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        found: token.text.to_string(),
        expected,
        span: token.span,
    }
}

fn unexpected_literal(token: &Token<'_>) -> SyntaxError {
    SyntaxError::UnexpectedLiteral {
        found: token.text.to_string(),
        span: token.span,
    }
}

/// String token text minus its surrounding quotes.
fn strip_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
