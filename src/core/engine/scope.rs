use crate::types::class::{MethodDefinition, Statement};

/// Lexical scope of one method body
#[derive(Debug, Clone, Copy)]
pub struct MethodScope<'a> {
    pub method: &'a MethodDefinition,
    /// Top-level statements of the body, in source order
    pub statements: &'a [Statement],
}

/// Resolves the scope of a method; `None` means resolution failed
pub trait ScopeResolver: Send + Sync {
    fn acquire<'a>(&self, method: &'a MethodDefinition) -> Option<MethodScope<'a>>;
}

/// A method has a scope exactly when it has a statement block
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntacticScopes;

impl ScopeResolver for SyntacticScopes {
    fn acquire<'a>(&self, method: &'a MethodDefinition) -> Option<MethodScope<'a>> {
        method
            .body
            .as_deref()
            .map(|statements| MethodScope { method, statements })
    }
}
