//! Error types for statement processing and evaluation

use thiserror::Error;

/// Statement-level syntax failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A non-blank statement did not end with `;`.
    #[error("Statement must end with ';'. Input: {0}")]
    MissingTerminator(String),

    /// The clause list of a declaration could not be parsed.
    #[error("Invalid declaration syntax: {0}")]
    InvalidDeclaration(String),

    /// A declaration clause had an `=` but nothing after it.
    #[error("Empty expression in declaration: {0}")]
    EmptyInitializer(String),

    /// A declaration clause had an empty name.
    #[error("Invalid variable name in declaration: {0}")]
    EmptyName(String),

    /// A declared name is not of the form `[A-Za-z_][A-Za-z0-9_]*`.
    #[error("Invalid variable name syntax: {0}")]
    InvalidIdentifier(String),

    /// A statement is neither a declaration nor `identifier = expression`.
    #[error("Invalid expression syntax: {0}")]
    InvalidAssignment(String),

    /// A numeric literal did not fit a 64-bit signed integer.
    #[error("Invalid number format: {0}")]
    MalformedNumber(String),

    /// A token that is neither operand nor operator reached evaluation.
    #[error("Unexpected token in expression: {0}")]
    UnexpectedToken(String),
}

/// Failures of the scoped symbol table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// `exit_scope` was called with only the global scope remaining.
    #[error("Cannot exit global scope.")]
    ExitGlobalScope,

    /// The name already exists in the current (innermost) scope.
    #[error("Variable '{0}' already declared in current scope.")]
    Redeclaration(String),

    /// The name was not found in any active scope.
    #[error("Variable '{0}' not declared in current scope.")]
    UndeclaredVariable(String),
}

/// Numeric failures during postfix evaluation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Right-hand operand of `/` was zero.
    #[error("Division by zero in expression.")]
    DivisionByZero,

    /// Right-hand operand of `%` was zero.
    #[error("Modulus by zero in expression.")]
    ModuloByZero,
}

/// Malformed postfix sequences detected by the evaluator or tree builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// An operator was applied with fewer than two values on the stack.
    #[error("Invalid expression: insufficient operands for operator {0}")]
    InsufficientOperands(char),

    /// The scan finished with zero or more than one value remaining.
    #[error("Invalid expression: expected a single result")]
    IncompleteExpression,
}

/// Any failure raised while processing a single statement.
///
/// Every variant is recovered at the statement-processor boundary; a failed
/// statement never aborts the rest of its batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SproutError {
    /// Statement or literal syntax problem.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Symbol table problem.
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// Division or modulo by zero.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// Postfix sequence did not reduce to one value.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// A failure wrapped with the text of the expression it occurred in.
    #[error("Error in expression '{expr}': {source}")]
    InExpression {
        /// The expression text as it appeared in the statement.
        expr: String,
        /// The underlying failure.
        source: Box<SproutError>,
    },
}

impl SproutError {
    /// Wrap an error with the expression text it was raised in.
    pub fn in_expression(self, expr: impl Into<String>) -> Self {
        SproutError::InExpression {
            expr: expr.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for sprout operations.
pub type Result<T> = std::result::Result<T, SproutError>;
