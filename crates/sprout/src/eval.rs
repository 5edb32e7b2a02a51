//! Postfix expression evaluation

use crate::environment::Environment;
use crate::error::{ArithmeticError, Result, StructuralError, SyntaxError};
use crate::token::{Op, Token};

/// Evaluate a postfix token sequence against the symbol table.
///
/// A left-to-right scan over an operand stack: literals are parsed,
/// identifiers resolved through the environment, and each operator pops its
/// right-hand operand first. Exactly one value must remain when the scan
/// ends.
///
/// # Errors
///
/// - `SyntaxError::MalformedNumber` for a literal that does not fit `i64`
/// - `ScopeError::UndeclaredVariable` for an unbound identifier
/// - `StructuralError::InsufficientOperands` when an operator finds fewer
///   than two stacked values
/// - `ArithmeticError` for division or modulo by zero
/// - `StructuralError::IncompleteExpression` when the scan leaves zero or
///   more than one value
pub fn eval_postfix(postfix: &[Token], env: &Environment) -> Result<i64> {
    let mut stack: Vec<i64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(text) => {
                let value = text
                    .parse::<i64>()
                    .map_err(|_| SyntaxError::MalformedNumber(text.clone()))?;
                stack.push(value);
            }
            Token::Ident(name) => stack.push(env.lookup(name)?),
            Token::Op(op) => {
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return Err(StructuralError::InsufficientOperands(op.symbol()).into());
                };
                stack.push(apply(*op, lhs, rhs)?);
            }
            other => {
                return Err(SyntaxError::UnexpectedToken(other.to_string()).into());
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(StructuralError::IncompleteExpression.into()),
    }
}

/// Apply one binary operator to its operands.
///
/// Addition, subtraction and multiplication wrap on overflow; only division
/// and modulo by zero are errors.
fn apply(op: Op, lhs: i64, rhs: i64) -> Result<i64> {
    match op {
        Op::Add => Ok(lhs.wrapping_add(rhs)),
        Op::Sub => Ok(lhs.wrapping_sub(rhs)),
        Op::Mul => Ok(lhs.wrapping_mul(rhs)),
        Op::Div => {
            if rhs == 0 {
                Err(ArithmeticError::DivisionByZero.into())
            } else {
                Ok(lhs.wrapping_div(rhs))
            }
        }
        Op::Rem => {
            if rhs == 0 {
                Err(ArithmeticError::ModuloByZero.into())
            } else {
                Ok(lhs.wrapping_rem(rhs))
            }
        }
        Op::Pow => Ok(integer_power(lhs, rhs)),
    }
}

/// Integer exponentiation by squaring.
///
/// A negative exponent never enters the loop and yields 1.
fn integer_power(mut base: i64, mut exp: i64) -> i64 {
    let mut result: i64 = 1;
    while exp > 0 {
        if exp % 2 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp /= 2;
    }
    result
}
