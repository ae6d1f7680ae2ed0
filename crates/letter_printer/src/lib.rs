//! letter_printer: AST to text output.
//!
//! Converts a parsed program back into formatted Letter source. Operands are
//! parenthesized wherever the tree's shape differs from what operator
//! precedence alone would produce, so the output re-parses to the same tree.

use letter_ast::node::*;

/// Options for the printer.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
    /// Whether to emit a trailing newline.
    pub trailing_newline: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

/// How tightly an expression binds, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Assignment,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    /// Member access and `new`; what a `new` callee or member object may be.
    Member,
    Primary,
}

impl Precedence {
    fn tighter(self) -> Precedence {
        match self {
            Precedence::Assignment => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary => Precedence::Call,
            Precedence::Call => Precedence::Member,
            Precedence::Member | Precedence::Primary => Precedence::Primary,
        }
    }
}

fn binary_precedence(operator: BinaryOperator) -> Precedence {
    match operator {
        BinaryOperator::Equal | BinaryOperator::NotEqual => Precedence::Equality,
        BinaryOperator::GreaterThan
        | BinaryOperator::GreaterThanEqual
        | BinaryOperator::LessThan
        | BinaryOperator::LessThanEqual => Precedence::Relational,
        BinaryOperator::Add | BinaryOperator::Subtract => Precedence::Additive,
        BinaryOperator::Multiply | BinaryOperator::Divide => Precedence::Multiplicative,
    }
}

fn logical_precedence(operator: LogicalOperator) -> Precedence {
    match operator {
        LogicalOperator::Or => Precedence::LogicalOr,
        LogicalOperator::And => Precedence::LogicalAnd,
    }
}

fn precedence_of(expr: &Expression<'_>) -> Precedence {
    match expr {
        Expression::Assignment(_) => Precedence::Assignment,
        Expression::Logical(n) => logical_precedence(n.operator),
        Expression::Binary(n) => binary_precedence(n.operator),
        Expression::Unary(_) => Precedence::Unary,
        Expression::Call(_) => Precedence::Call,
        Expression::Member(_) | Expression::New(_) => Precedence::Member,
        Expression::Identifier(_)
        | Expression::NumericLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::This(_)
        | Expression::Super(_) => Precedence::Primary,
    }
}

/// The printer converts AST nodes to text.
pub struct Printer {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options,
        }
    }

    /// Print a program to a string.
    pub fn print_program(&mut self, program: &Program<'_>) -> String {
        self.output.clear();
        self.indent_level = 0;
        for (i, stmt) in program.body.iter().enumerate() {
            if i > 0 {
                self.write_newline();
            }
            self.write_indent();
            self.print_statement(stmt);
        }
        if self.options.trailing_newline && !self.output.is_empty() {
            self.write_newline();
        }
        std::mem::take(&mut self.output)
    }

    // ========================================================================
    // Statement printing
    // ========================================================================

    fn print_statement(&mut self, stmt: &Statement<'_>) {
        match stmt {
            Statement::Empty(_) => self.write(";"),
            Statement::Expression(n) => {
                self.print_expression(n.expression);
                self.write(";");
            }
            Statement::Block(n) => self.print_block(n),
            Statement::Variable(n) => {
                self.print_variable_declarations(n);
                self.write(";");
            }
            Statement::If(n) => self.print_if_statement(n),
            Statement::While(n) => {
                self.write("while (");
                self.print_expression(n.test);
                self.write(") ");
                self.print_statement(n.body);
            }
            Statement::DoWhile(n) => {
                self.write("do ");
                self.print_statement(n.body);
                self.write(" while (");
                self.print_expression(n.test);
                self.write(");");
            }
            Statement::For(n) => self.print_for_statement(n),
            Statement::Function(n) => self.print_function_declaration(n),
            Statement::Return(n) => {
                self.write("return");
                if let Some(argument) = n.argument {
                    self.write(" ");
                    self.print_expression(argument);
                }
                self.write(";");
            }
            Statement::Class(n) => {
                self.write("class ");
                self.write(n.id.name);
                if let Some(super_class) = &n.super_class {
                    self.write(" extends ");
                    self.write(super_class.name);
                }
                self.write(" ");
                self.print_block(&n.body);
            }
        }
    }

    fn print_block(&mut self, node: &BlockStatement<'_>) {
        self.write("{");
        if !node.body.is_empty() {
            self.increase_indent();
            for stmt in node.body.iter() {
                self.write_newline();
                self.write_indent();
                self.print_statement(stmt);
            }
            self.decrease_indent();
            self.write_newline();
            self.write_indent();
        }
        self.write("}");
    }

    /// `let` and its declarations, without a terminator.
    fn print_variable_declarations(&mut self, node: &VariableStatement<'_>) {
        self.write("let ");
        for (i, decl) in node.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(decl.id.name);
            if let Some(init) = decl.init {
                self.write(" = ");
                self.print_expression(init);
            }
        }
    }

    fn print_if_statement(&mut self, node: &IfStatement<'_>) {
        self.write("if (");
        self.print_expression(node.test);
        self.write(") ");
        self.print_statement(node.consequent);
        if let Some(alternate) = node.alternate {
            self.write(" else ");
            self.print_statement(alternate);
        }
    }

    fn print_for_statement(&mut self, node: &ForStatement<'_>) {
        self.write("for (");
        match &node.init {
            Some(ForInit::Variable(decls)) => self.print_variable_declarations(decls),
            Some(ForInit::Expression(expr)) => self.print_expression(expr),
            None => {}
        }
        self.write(";");
        if let Some(test) = node.test {
            self.write(" ");
            self.print_expression(test);
        }
        self.write(";");
        if let Some(update) = node.update {
            self.write(" ");
            self.print_expression(update);
        }
        self.write(") ");
        self.print_statement(node.body);
    }

    fn print_function_declaration(&mut self, node: &FunctionDeclaration<'_>) {
        self.write("def ");
        self.write(node.name.name);
        self.write("(");
        for (i, param) in node.params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(param.name);
        }
        self.write(") ");
        self.print_block(&node.body);
    }

    // ========================================================================
    // Expression printing
    // ========================================================================

    fn print_expression(&mut self, expr: &Expression<'_>) {
        self.print_operand(expr, Precedence::Assignment);
    }

    /// Print `expr` where the grammar expects at least `min` binding strength.
    fn print_operand(&mut self, expr: &Expression<'_>, min: Precedence) {
        if precedence_of(expr) < min {
            self.write("(");
            self.print_expression_inner(expr);
            self.write(")");
        } else {
            self.print_expression_inner(expr);
        }
    }

    fn print_expression_inner(&mut self, expr: &Expression<'_>) {
        match expr {
            Expression::Identifier(n) => self.write(n.name),
            Expression::NumericLiteral(n) => self.write_owned(n.value.to_string()),
            Expression::StringLiteral(n) => self.print_string_literal(n.value),
            Expression::BooleanLiteral(n) => self.write(if n.value { "true" } else { "false" }),
            Expression::NullLiteral(_) => self.write("null"),
            Expression::This(_) => self.write("this"),
            Expression::Super(_) => self.write("super"),
            Expression::Assignment(n) => {
                match n.left {
                    AssignmentTarget::Identifier(id) => self.write(id.name),
                    AssignmentTarget::Member(member) => self.print_member_expression(member),
                }
                self.write(" ");
                self.write(n.operator.as_str());
                self.write(" ");
                self.print_operand(n.right, Precedence::Assignment);
            }
            Expression::Logical(n) => {
                let precedence = logical_precedence(n.operator);
                self.print_binary_parts(n.left, n.operator.as_str(), n.right, precedence);
            }
            Expression::Binary(n) => {
                let precedence = binary_precedence(n.operator);
                self.print_binary_parts(n.left, n.operator.as_str(), n.right, precedence);
            }
            Expression::Unary(n) => {
                self.write(n.operator.as_str());
                self.print_operand(n.argument, Precedence::Unary);
            }
            Expression::Member(n) => self.print_member_expression(n),
            Expression::Call(n) => {
                self.print_operand(n.callee, Precedence::Call);
                self.print_arguments(n.arguments);
            }
            Expression::New(n) => {
                self.write("new ");
                self.print_operand(n.callee, Precedence::Member);
                self.print_arguments(n.arguments);
            }
        }
    }

    /// Left-associative: the right operand needs strictly tighter binding.
    fn print_binary_parts(
        &mut self,
        left: &Expression<'_>,
        operator: &str,
        right: &Expression<'_>,
        precedence: Precedence,
    ) {
        self.print_operand(left, precedence);
        self.write(" ");
        self.write(operator);
        self.write(" ");
        self.print_operand(right, precedence.tighter());
    }

    fn print_member_expression(&mut self, node: &MemberExpression<'_>) {
        self.print_operand(node.object, Precedence::Member);
        if node.computed {
            self.write("[");
            self.print_expression(node.property);
            self.write("]");
        } else {
            self.write(".");
            self.print_expression_inner(node.property);
        }
    }

    fn print_arguments(&mut self, arguments: &[Expression<'_>]) {
        self.write("(");
        for (i, arg) in arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expression(arg);
        }
        self.write(")");
    }

    /// Double quotes unless the value itself holds one.
    fn print_string_literal(&mut self, value: &str) {
        let quote = if value.contains('"') { "'" } else { "\"" };
        self.write(quote);
        self.write(value);
        self.write(quote);
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_owned(&mut self, s: String) {
        self.output.push_str(&s);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

/// Print `program` with default options.
pub fn print_program(program: &Program<'_>) -> String {
    Printer::new().print_program(program)
}
