use crate::core::engine::scope::ScopeResolver;
use crate::core::trace::TraceSink;
use crate::types::class::ClassDeclaration;
use crate::types::{Diagnostic, RuleMeta};

/// Collaborators handed to a rule for one class invocation
pub struct RuleContext<'a> {
    pub scopes: &'a dyn ScopeResolver,
    pub trace: &'a dyn TraceSink,
}

/// Core trait that lint rules must provide
pub trait LintRule: Send + Sync {
    /// Static metadata (name, messages, fixability)
    fn meta(&self) -> &RuleMeta;

    /// Analyse one class declaration; called once per class, with no state
    /// carried over between calls
    fn check_class(&self, class: &ClassDeclaration, ctx: &RuleContext) -> Vec<Diagnostic>;

    /// Rule name (e.g., "readonly-injected-services")
    fn name(&self) -> &'static str {
        self.meta().name
    }
}
