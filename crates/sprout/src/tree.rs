//! Binary parse trees for assignment visualization

use crate::error::{Result, StructuralError};
use crate::token::Token;

/// One node of an assignment parse tree.
///
/// Leaves hold operands (a literal or an identifier) and have no children;
/// operator nodes always have exactly two. Nodes own their children
/// outright: no sharing, no cycles, and the whole tree is released together
/// when dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    /// The token text this node represents.
    pub value: String,

    /// Left operand subtree, if any.
    pub left: Option<Box<ParseNode>>,

    /// Right operand subtree, if any.
    pub right: Option<Box<ParseNode>>,
}

impl ParseNode {
    /// Create a childless operand node.
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            left: None,
            right: None,
        }
    }

    /// Create an operator node with both children.
    pub fn branch(value: impl Into<String>, left: ParseNode, right: ParseNode) -> Self {
        Self {
            value: value.into(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Build the parse tree for an assignment from its postfix expression.
///
/// Mirrors postfix evaluation, but pushes subtrees instead of numbers:
/// operand tokens become leaves and each operator combines the two topmost
/// subtrees (right popped first). The finished expression tree is wrapped
/// under a `"="` root with a leaf for the target identifier on the left.
///
/// # Errors
///
/// Fails with `StructuralError::InsufficientOperands` or
/// `StructuralError::IncompleteExpression` under the same conditions as
/// evaluation.
pub fn build_assignment_tree(target: &str, postfix: &[Token]) -> Result<ParseNode> {
    let mut stack: Vec<ParseNode> = Vec::new();

    for token in postfix {
        match token {
            Token::Op(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(StructuralError::InsufficientOperands(op.symbol()).into());
                };
                stack.push(ParseNode::branch(op.to_string(), left, right));
            }
            other => stack.push(ParseNode::leaf(other.to_string())),
        }
    }

    let Some(expr) = stack.pop() else {
        return Err(StructuralError::IncompleteExpression.into());
    };
    if !stack.is_empty() {
        return Err(StructuralError::IncompleteExpression.into());
    }

    Ok(ParseNode::branch("=", ParseNode::leaf(target), expr))
}
