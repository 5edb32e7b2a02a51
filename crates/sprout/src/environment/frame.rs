//! RAII scope guard for automatic scope cleanup

use super::Environment;

/// RAII guard that automatically exits a scope when dropped.
///
/// # Example
///
/// ```
/// use sprout::Environment;
///
/// let mut env = Environment::new();
/// env.declare("x", 1).unwrap();
///
/// {
///     let mut guard = env.scope_guard();
///     guard.declare("y", 2).unwrap();
///     // y is visible here
/// }
/// // guard dropped, scope exited, y is gone
/// assert!(!env.contains("y"));
/// assert!(env.contains("x"));
/// ```
pub struct ScopeGuard<'a> {
    env: &'a mut Environment,
}

impl Environment {
    /// Create a scope guard that enters a scope now and exits it on drop.
    pub fn scope_guard(&mut self) -> ScopeGuard<'_> {
        self.enter_scope();
        ScopeGuard { env: self }
    }
}

impl<'a> Drop for ScopeGuard<'a> {
    fn drop(&mut self) {
        // The guard entered a scope on creation, so depth is at least 2
        // and this cannot fail.
        let _ = self.env.exit_scope();
    }
}

impl<'a> std::ops::Deref for ScopeGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<'a> std::ops::DerefMut for ScopeGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}
