//! # Sprout
//!
//! A miniature interpreter for a toy imperative language of integer
//! declarations and scoped assignments.
//!
//! The language has exactly two statement forms, each terminated by `;`:
//!
//! ```text
//! int a, b = 1 + 2;
//! a = b * 3;
//! ```
//!
//! ## Architecture
//!
//! - **Tokenizer**: statement text to a flat token sequence
//! - **Shunting-Yard**: infix tokens to postfix, honoring precedence
//! - **Evaluator**: postfix scan over an operand stack and the symbol table
//! - **Parse Trees**: one owned binary tree per assignment, exportable as
//!   a Graphviz digraph
//! - **Statement Processor**: declaration/assignment orchestration with
//!   per-statement error isolation
//!
//! Scopes nest: an inner scope may shadow an outer name, lookups search
//! innermost-first, and exiting a scope drops its bindings. The binary wires
//! this into a menu-driven session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod environment;
pub mod error;
pub mod eval;
pub mod export;
pub mod postfix;
pub mod statement;
pub mod token;
pub mod tree;

// Re-export main types
pub use environment::{Binding, Environment, ScopeGuard, VarType};
pub use error::{
    ArithmeticError, Result, ScopeError, SproutError, StructuralError, SyntaxError,
};
pub use eval::eval_postfix;
pub use export::{render_dot, write_dot};
pub use postfix::to_postfix;
pub use statement::{process_block, BlockResult, StatementOutcome};
pub use token::{tokenize, Op, Token};
pub use tree::{build_assignment_tree, ParseNode};

/// Sprout version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
