//! Statement processor tests: declarations, assignments, error isolation

use sprout::*;

// Helper: process one block against a fresh environment
fn run(input: &str) -> (Environment, BlockResult) {
    let mut env = Environment::new();
    let result = process_block(&mut env, input);
    (env, result)
}

// ═══════════════════════════════════════════════════════════════════════
// Declarations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_declaration_without_initializer_defaults_to_zero() {
    let (env, result) = run("int n;");
    assert_eq!(result.outcomes, vec![StatementOutcome::Declared]);
    assert_eq!(env.lookup("n").unwrap(), 0);
}

#[test]
fn test_declaration_with_initializer() {
    let (env, result) = run("int x = 2 + 3;");
    assert_eq!(result.outcomes, vec![StatementOutcome::Declared]);
    assert_eq!(env.lookup("x").unwrap(), 5);
    assert_eq!(result.trees.len(), 1);
}

#[test]
fn test_declaration_multiple_clauses() {
    let (env, result) = run("int a, b = 10;");
    assert_eq!(result.outcomes, vec![StatementOutcome::Declared]);
    assert_eq!(env.lookup("a").unwrap(), 0);
    assert_eq!(env.lookup("b").unwrap(), 10);
    // Only the initialized clause produces a parse tree
    assert_eq!(result.trees.len(), 1);
}

#[test]
fn test_declared_outcome_message() {
    let (_, result) = run("int a;");
    assert_eq!(result.outcomes[0].to_string(), "Variables declared.");
}

#[test]
fn test_declaration_initializer_may_reference_earlier_clause() {
    let (env, _) = run("int a = 4, b = a * 2;");
    assert_eq!(env.lookup("b").unwrap(), 8);
}

#[test]
fn test_declaration_invalid_name_rejected() {
    let (env, result) = run("int 2bad = 6/2;");
    assert!(matches!(
        &result.outcomes[0],
        StatementOutcome::Failed {
            error: SproutError::Syntax(SyntaxError::InvalidIdentifier(name)),
            ..
        } if name == "2bad"
    ));
    assert!(env.is_empty());
}

#[test]
fn test_declaration_evaluates_before_validating_name() {
    // The initializer runs first, so the reported failure is the division,
    // not the bad name.
    let (_, result) = run("int 3x = 1/0;");
    assert!(matches!(
        &result.outcomes[0],
        StatementOutcome::Failed {
            error: SproutError::InExpression { source, .. },
            ..
        } if **source == ArithmeticError::DivisionByZero.into()
    ));
}

#[test]
fn test_declaration_tree_recorded_even_when_name_fails() {
    // Evaluation (and tree capture) precede name validation
    let (_, result) = run("int 2bad = 5;");
    assert_eq!(result.trees.len(), 1);
}

#[test]
fn test_declaration_earlier_clauses_survive_later_failure() {
    let (env, result) = run("int a = 1, a = 2;");
    assert!(matches!(
        &result.outcomes[0],
        StatementOutcome::Failed {
            error: SproutError::Scope(ScopeError::Redeclaration(name)),
            ..
        } if name == "a"
    ));
    // First clause already took effect
    assert_eq!(env.lookup("a").unwrap(), 1);
}

#[test]
fn test_declaration_empty_initializer_rejected() {
    let (_, result) = run("int a = ;");
    assert!(matches!(
        &result.outcomes[0],
        StatementOutcome::Failed {
            error: SproutError::Syntax(SyntaxError::EmptyInitializer(_)),
            ..
        }
    ));
}

#[test]
fn test_redeclaration_reported_but_shadowing_allowed() {
    let mut env = Environment::new();
    let result = process_block(&mut env, "int x = 1;\nint x = 2;");
    assert!(matches!(
        &result.outcomes[1],
        StatementOutcome::Failed {
            error: SproutError::Scope(ScopeError::Redeclaration(_)),
            ..
        }
    ));

    // Same name in a nested scope is fine
    env.enter_scope();
    let result = process_block(&mut env, "int x = 2;");
    assert_eq!(result.outcomes, vec![StatementOutcome::Declared]);
    assert_eq!(env.lookup("x").unwrap(), 2);
}

// ═══════════════════════════════════════════════════════════════════════
// Assignments
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_assignment_updates_and_reports() {
    let (env, result) = run("int a;\na = 5 + 3 * 2;");
    assert_eq!(
        result.outcomes[1],
        StatementOutcome::Assigned {
            name: "a".to_string(),
            value: 11
        }
    );
    assert_eq!(result.outcomes[1].to_string(), "Assigned a = 11");
    assert_eq!(env.lookup("a").unwrap(), 11);
}

#[test]
fn test_assignment_power_operator() {
    let (env, result) = run("int b;\nb = 2 ^ 3;");
    assert_eq!(result.outcomes[1].to_string(), "Assigned b = 8");
    assert_eq!(env.lookup("b").unwrap(), 8);
}

#[test]
fn test_assignment_undeclared_target() {
    let (_, result) = run("w = 5 + 3;");
    assert!(matches!(
        &result.outcomes[0],
        StatementOutcome::Failed {
            error: SproutError::Scope(ScopeError::UndeclaredVariable(name)),
            ..
        } if name == "w"
    ));
    assert_eq!(
        result.outcomes[0].to_string(),
        "Error: Variable 'w' not declared in current scope."
    );
}

#[test]
fn test_assignment_division_by_zero_is_wrapped() {
    let (_, result) = run("int x;\nx = 1/0;");
    assert_eq!(
        result.outcomes[1].to_string(),
        "Error: Error in expression 'x = 1/0': Division by zero in expression."
    );
}

#[test]
fn test_assignment_head_must_be_identifier() {
    let (_, result) = run("int a;\n5 = 3;");
    assert!(matches!(
        &result.outcomes[1],
        StatementOutcome::Failed {
            error: SproutError::Syntax(SyntaxError::InvalidAssignment(_)),
            ..
        }
    ));
}

#[test]
fn test_assignment_requires_expression_tail() {
    let (_, result) = run("int a;\na = ;");
    assert!(matches!(
        &result.outcomes[1],
        StatementOutcome::Failed {
            error: SproutError::Syntax(SyntaxError::InvalidAssignment(_)),
            ..
        }
    ));
}

#[test]
fn test_assignment_from_inner_scope_updates_outer_binding() {
    let mut env = Environment::new();
    process_block(&mut env, "int x = 1;");
    env.enter_scope();
    let result = process_block(&mut env, "x = 42;");
    assert_eq!(result.outcomes[0].to_string(), "Assigned x = 42");
    env.exit_scope().unwrap();
    assert_eq!(env.lookup("x").unwrap(), 42);
}

// ═══════════════════════════════════════════════════════════════════════
// Statement Splitting and Error Isolation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_blank_lines_are_skipped() {
    let (_, result) = run("\n   \n");
    assert!(result.outcomes.is_empty());
    assert!(result.trees.is_empty());
}

#[test]
fn test_missing_terminator_rejected_without_mutation() {
    let (env, result) = run("int x = 5");
    assert!(matches!(
        &result.outcomes[0],
        StatementOutcome::Failed {
            error: SproutError::Syntax(SyntaxError::MissingTerminator(_)),
            ..
        }
    ));
    assert!(!env.contains("x"));
}

#[test]
fn test_failed_statement_does_not_abort_batch() {
    let (env, result) = run("int a = 1;\nbogus;\nint b = 2;");
    assert_eq!(result.outcomes.len(), 3);
    assert_eq!(result.outcomes[0], StatementOutcome::Declared);
    assert!(matches!(result.outcomes[1], StatementOutcome::Failed { .. }));
    assert_eq!(result.outcomes[2], StatementOutcome::Declared);
    assert_eq!(env.lookup("a").unwrap(), 1);
    assert_eq!(env.lookup("b").unwrap(), 2);
}

#[test]
fn test_failed_statement_keeps_its_text() {
    let (_, result) = run("int x = 5");
    assert!(matches!(
        &result.outcomes[0],
        StatementOutcome::Failed { statement, .. } if statement == "int x = 5"
    ));
}

#[test]
fn test_trees_collected_across_statements() {
    let (_, result) = run("int a = 1;\nint b;\na = a + 1;\nb = a * 2;");
    // One tree for the initialized clause, two for the assignments
    assert_eq!(result.trees.len(), 3);
}
