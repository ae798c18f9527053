use crate::core::engine::scope::ScopeResolver;
use crate::core::trace::TraceSink;
use crate::types::class::{ClassDeclaration, Expression, Statement};

use super::candidate::{CandidateSet, ServiceNamePattern};

/// Drop every candidate that some method of the class assigns to.
///
/// Only the top-level statements of each body are looked at. An assignment
/// inside an `if`, a loop or a nested block is not seen.
pub fn scan_mutations(
    class: &ClassDeclaration,
    candidates: &mut CandidateSet<'_>,
    pattern: &ServiceNamePattern,
    scopes: &dyn ScopeResolver,
    trace: &dyn TraceSink,
) {
    for method in class.methods() {
        let Some(scope) = scopes.acquire(method) else {
            trace.error(&format!(
                "[Error] Scope not found for method '{}' in class '{}'",
                method.key,
                class.display_name()
            ));
            continue;
        };

        for statement in scope.statements {
            let Some(name) = assigned_service(statement, pattern) else {
                continue;
            };
            if candidates.remove(name).is_some() && trace.is_enabled() {
                trace.debug(&format!(
                    "[Mutation] '{name}' is reassigned in method '{}'",
                    method.key
                ));
            }
        }
    }
}

/// Member name of a top-level `this.<name> = ...` whose name matches
fn assigned_service<'s>(statement: &'s Statement, pattern: &ServiceNamePattern) -> Option<&'s str> {
    let Statement::Expression(Expression::Assignment { left, .. }) = statement else {
        return None;
    };
    left.self_member_name().filter(|name| pattern.matches(name))
}
