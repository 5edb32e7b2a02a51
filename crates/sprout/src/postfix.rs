//! Infix-to-postfix conversion via the shunting-yard algorithm

use crate::token::Token;

/// Convert an infix token sequence into postfix (reverse Polish) order.
///
/// Operands pass straight through. An operator first pops every stacked
/// operator of greater *or equal* precedence, so all six operators are
/// left-associative, `^` included: chains evaluate as `(a ^ b) ^ c`.
/// Changing the tie-break changes the result of chained exponentiation.
///
/// Mismatched parentheses are tolerated: a `)` with no matching `(` is
/// ignored, and a `(` still stacked at end of input is dropped. Tokens that
/// are neither operand, operator, nor parenthesis are dropped here and left
/// for the evaluator to reject if they somehow survive.
pub fn to_postfix(infix: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(infix.len());
    let mut ops: Vec<Token> = Vec::new();

    for token in infix {
        match token {
            Token::Number(_) | Token::Ident(_) => output.push(token.clone()),
            Token::Op(op) => {
                while let Some(Token::Op(top)) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        output.extend(ops.pop());
                    } else {
                        break;
                    }
                }
                ops.push(token.clone());
            }
            Token::LParen => ops.push(Token::LParen),
            Token::RParen => {
                while let Some(top) = ops.pop() {
                    if top == Token::LParen {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Symbol(_) => {}
        }
    }

    while let Some(top) = ops.pop() {
        if top != Token::LParen {
            output.push(top);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn postfix_text(expr: &str) -> Vec<String> {
        to_postfix(&tokenize(expr))
            .iter()
            .map(Token::to_string)
            .collect()
    }

    #[test]
    fn test_precedence_ordering() {
        assert_eq!(postfix_text("3+4*2"), ["3", "4", "2", "*", "+"]);
    }

    #[test]
    fn test_equal_precedence_is_left_associative() {
        assert_eq!(postfix_text("8-3-2"), ["8", "3", "-", "2", "-"]);
    }

    #[test]
    fn test_power_is_left_associative() {
        // (2^3)^2, deliberately not the mathematical right-associative reading
        assert_eq!(postfix_text("2^3^2"), ["2", "3", "^", "2", "^"]);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix_text("(3+4)*2"), ["3", "4", "+", "2", "*"]);
    }

    #[test]
    fn test_unmatched_close_paren_is_tolerated() {
        assert_eq!(postfix_text("3+4)"), ["3", "4", "+"]);
    }

    #[test]
    fn test_unmatched_open_paren_is_dropped() {
        assert_eq!(postfix_text("(3+4"), ["3", "4", "+"]);
    }

    #[test]
    fn test_stray_symbol_is_dropped() {
        assert_eq!(postfix_text("3 $ 4"), ["3", "4"]);
    }
}
