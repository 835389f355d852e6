//! AST node definitions for the Monkey language.
//!
//! Nodes are tagged variants: one sum type per syntactic category
//! (statement, expression) with a struct per variant. Every node owns
//! the token that originated it, and every node has two observable
//! operations: a token-literal accessor and a `Display` impl rendering
//! the canonical, fully-parenthesised textual form.
//!
//! The canonical form is the precedence witness used throughout the
//! parser tests: prefix and infix nodes always print their surrounding
//! parentheses, so `a + b * c` renders as `(a + (b * c))`.

use std::fmt;

use monkeyc_lex::Token;

/// AST root - an ordered sequence of statements.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// The literal of the first statement's token, or `""` for an empty
    /// program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    /// Concatenation of the statements' canonical forms, no separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Statement
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `let <name> = <value>;`
    Let(LetStmt),
    /// `return <value>;`
    Return(ReturnStmt),
    /// A bare expression in statement position
    Expr(ExprStmt),
}

impl Stmt {
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(s) => &s.token.literal,
            Stmt::Return(s) => &s.token.literal,
            Stmt::Expr(s) => &s.token.literal,
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(s) => write!(f, "{}", s),
            Stmt::Return(s) => write!(f, "{}", s),
            Stmt::Expr(s) => write!(f, "{}", s),
        }
    }
}

/// Let statement
#[derive(Debug, Clone)]
pub struct LetStmt {
    /// The `let` token
    pub token: Token,
    pub name: Ident,
    pub value: Expr,
}

impl fmt::Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token.literal, self.name, self.value)
    }
}

/// Return statement
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    /// The `return` token
    pub token: Token,
    pub value: Expr,
}

impl fmt::Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.token.literal, self.value)
    }
}

/// Expression statement
#[derive(Debug, Clone)]
pub struct ExprStmt {
    /// The first token of the expression
    pub token: Token,
    pub expr: Expr,
}

impl fmt::Display for ExprStmt {
    /// The inner expression's form, unchanged; no semicolon is added.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// Block statement - a braced sequence of statements.
#[derive(Debug, Clone)]
pub struct Block {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Expression
#[derive(Debug, Clone)]
pub enum Expr {
    Ident(Ident),
    Int(IntLit),
    Bool(BoolLit),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Fn(FnLit),
    Call(CallExpr),
}

impl Expr {
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Ident(e) => &e.token.literal,
            Expr::Int(e) => &e.token.literal,
            Expr::Bool(e) => &e.token.literal,
            Expr::Prefix(e) => &e.token.literal,
            Expr::Infix(e) => &e.token.literal,
            Expr::If(e) => &e.token.literal,
            Expr::Fn(e) => &e.token.literal,
            Expr::Call(e) => &e.token.literal,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(e) => write!(f, "{}", e),
            Expr::Int(e) => write!(f, "{}", e),
            Expr::Bool(e) => write!(f, "{}", e),
            Expr::Prefix(e) => write!(f, "{}", e),
            Expr::Infix(e) => write!(f, "{}", e),
            Expr::If(e) => write!(f, "{}", e),
            Expr::Fn(e) => write!(f, "{}", e),
            Expr::Call(e) => write!(f, "{}", e),
        }
    }
}

/// Identifier
#[derive(Debug, Clone)]
pub struct Ident {
    /// The `IDENT` token
    pub token: Token,
    pub value: String,
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Integer literal
#[derive(Debug, Clone)]
pub struct IntLit {
    /// The `INT` token
    pub token: Token,
    pub value: i64,
}

impl fmt::Display for IntLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// Boolean literal
#[derive(Debug, Clone)]
pub struct BoolLit {
    /// The `true` or `false` token
    pub token: Token,
    pub value: bool,
}

impl fmt::Display for BoolLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

/// Prefix expression, e.g. `!ok` or `-5`
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    /// The operator token
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl fmt::Display for PrefixExpr {
    /// `(op right)`, the operator abutting its operand.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix expression, e.g. `a + b`
#[derive(Debug, Clone)]
pub struct InfixExpr {
    /// The operator token
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl fmt::Display for InfixExpr {
    /// `(left op right)`, single spaces around the operator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If expression with optional else branch
#[derive(Debug, Clone)]
pub struct IfExpr {
    /// The `if` token
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: Block,
    pub alternative: Option<Block>,
}

impl fmt::Display for IfExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function literal, e.g. `fn(x, y) { x + y; }`
#[derive(Debug, Clone)]
pub struct FnLit {
    /// The `fn` token
    pub token: Token,
    pub parameters: Vec<Ident>,
    pub body: Block,
}

impl fmt::Display for FnLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(Ident::to_string).collect();
        write!(
            f,
            "{}({}) {}",
            self.token.literal,
            parameters.join(", "),
            self.body
        )
    }
}

/// Call expression, e.g. `add(1, 2 * 3)`
#[derive(Debug, Clone)]
pub struct CallExpr {
    /// The `(` token
    pub token: Token,
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl fmt::Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments: Vec<String> = self.arguments.iter().map(Expr::to_string).collect();
        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
