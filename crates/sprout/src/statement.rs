//! Statement processing: declarations, assignments, and error isolation

use std::fmt;

use crate::environment::Environment;
use crate::error::{Result, SproutError, SyntaxError};
use crate::eval::eval_postfix;
use crate::postfix::to_postfix;
use crate::token::{tokenize, Token};
use crate::tree::{build_assignment_tree, ParseNode};

/// Outcome of one processed statement.
///
/// Rendered with `Display` exactly as the interpreter reports it:
/// `"Variables declared."`, `"Assigned <name> = <value>"`, or
/// `"Error: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    /// A declaration statement took effect.
    Declared,

    /// An assignment statement updated a variable.
    Assigned {
        /// The assigned variable.
        name: String,
        /// The value it now holds.
        value: i64,
    },

    /// The statement was rejected; the rest of the batch still ran.
    Failed {
        /// The offending statement text, trimmed.
        statement: String,
        /// What went wrong.
        error: SproutError,
    },
}

impl fmt::Display for StatementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementOutcome::Declared => write!(f, "Variables declared."),
            StatementOutcome::Assigned { name, value } => {
                write!(f, "Assigned {name} = {value}")
            }
            StatementOutcome::Failed { error, .. } => write!(f, "Error: {error}"),
        }
    }
}

/// Everything produced by one processed block.
#[derive(Debug, Clone, Default)]
pub struct BlockResult {
    /// One outcome per non-blank statement, in input order.
    pub outcomes: Vec<StatementOutcome>,

    /// One parse tree per successfully evaluated assignment or initialized
    /// declaration clause, in evaluation order. Owned by the caller until
    /// exported, then dropped.
    pub trees: Vec<ParseNode>,
}

/// Process a multi-line block of statements against the environment.
///
/// The block is split on line breaks; surrounding whitespace is trimmed and
/// blank lines are skipped. Statements are processed independently: a
/// failure is recorded as a `Failed` outcome and the next statement runs
/// unaffected.
pub fn process_block(env: &mut Environment, input: &str) -> BlockResult {
    let mut result = BlockResult::default();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match process_statement(env, line, &mut result.trees) {
            Ok(outcome) => result.outcomes.push(outcome),
            Err(error) => {
                tracing::debug!(statement = line, %error, "statement rejected");
                result.outcomes.push(StatementOutcome::Failed {
                    statement: line.to_string(),
                    error,
                });
            }
        }
    }

    tracing::debug!(
        statements = result.outcomes.len(),
        trees = result.trees.len(),
        "processed block"
    );
    result
}

/// Process a single trimmed, non-blank statement.
fn process_statement(
    env: &mut Environment,
    line: &str,
    trees: &mut Vec<ParseNode>,
) -> Result<StatementOutcome> {
    let Some(body) = line.strip_suffix(';') else {
        return Err(SyntaxError::MissingTerminator(line.to_string()).into());
    };

    if let Some(clauses) = body.strip_prefix("int ") {
        process_declaration(env, clauses, trees)?;
        Ok(StatementOutcome::Declared)
    } else {
        process_assignment(env, body, trees)
    }
}

/// Process the comma-separated clause list of a declaration.
///
/// Clauses take effect left to right; a failing clause aborts the remainder
/// of its own statement but leaves earlier clauses declared. For an
/// initialized clause the expression is evaluated (and its parse tree
/// recorded) before the name is validated.
fn process_declaration(
    env: &mut Environment,
    clauses: &str,
    trees: &mut Vec<ParseNode>,
) -> Result<()> {
    if clauses.trim().is_empty() {
        return Err(SyntaxError::InvalidDeclaration(format!("int {clauses}")).into());
    }

    for clause in clauses.split(',') {
        let (name, value) = match clause.split_once('=') {
            Some((name_part, expr)) => {
                let tokens = tokenize(expr);
                if tokens.is_empty() {
                    return Err(SyntaxError::EmptyInitializer(clause.trim().to_string()).into());
                }
                let postfix = to_postfix(&tokens);
                let name = name_part.trim();
                let value =
                    eval_postfix(&postfix, env).map_err(|e| e.in_expression(expr.trim()))?;
                trees.push(
                    build_assignment_tree(name, &postfix)
                        .map_err(|e| e.in_expression(expr.trim()))?,
                );
                (name, value)
            }
            None => (clause.trim(), 0),
        };

        if name.is_empty() {
            return Err(SyntaxError::EmptyName(clause.trim().to_string()).into());
        }
        if !is_valid_identifier(name) {
            return Err(SyntaxError::InvalidIdentifier(name.to_string()).into());
        }
        env.declare(name, value)?;
    }

    Ok(())
}

/// Process an assignment statement body (the `;` already stripped).
fn process_assignment(
    env: &mut Environment,
    body: &str,
    trees: &mut Vec<ParseNode>,
) -> Result<StatementOutcome> {
    let tokens = tokenize(body);
    let (name, expr_tokens) = match tokens.as_slice() {
        [Token::Ident(name), Token::Symbol('='), rest @ ..] if !rest.is_empty() => {
            (name.clone(), rest)
        }
        _ => return Err(SyntaxError::InvalidAssignment(body.trim().to_string()).into()),
    };

    // The target must already exist somewhere before the expression runs.
    env.lookup(&name)?;

    let postfix = to_postfix(expr_tokens);
    let value = eval_postfix(&postfix, env).map_err(|e| e.in_expression(body.trim()))?;
    env.assign(&name, value)?;
    trees.push(
        build_assignment_tree(&name, &postfix).map_err(|e| e.in_expression(body.trim()))?,
    );

    Ok(StatementOutcome::Assigned { name, value })
}

/// Check a declared name against `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
