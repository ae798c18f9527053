use crate::core::trace::TraceSink;
use crate::types::class::{Accessibility, ClassDeclaration, Parameter};

use super::candidate::{Candidate, CandidateSet, ServiceNamePattern};

/// Build the candidate set from the constructor's private, non-readonly
/// parameter properties, and optionally from matching private class fields
pub fn collect_candidates<'a>(
    class: &'a ClassDeclaration,
    pattern: &ServiceNamePattern,
    include_class_fields: bool,
    trace: &dyn TraceSink,
) -> CandidateSet<'a> {
    let mut candidates = CandidateSet::new();

    for constructor in class.constructors() {
        for param in &constructor.params {
            let Parameter::Property(property) = param else {
                continue;
            };
            if property.accessibility != Accessibility::Private || property.readonly {
                continue;
            }
            if candidates.insert(Candidate::parameter(property)) && trace.is_enabled() {
                trace.debug(&format!(
                    "[Constructor Analysis] Identified non-readonly private parameter: {}",
                    property.name
                ));
            }
        }
    }

    if include_class_fields {
        for field in class.fields() {
            if field.accessibility != Accessibility::Private
                || field.readonly
                || field.is_static
                || !pattern.matches(&field.name)
            {
                continue;
            }
            if candidates.insert(Candidate::field(field)) && trace.is_enabled() {
                trace.debug(&format!(
                    "[Field Analysis] Identified non-readonly private field: {}",
                    field.name
                ));
            }
        }
    }

    if trace.is_enabled() {
        trace.debug(&format!(
            "[Info] Class '{}' properties that may be reassigned: {:?}",
            class.display_name(),
            candidates.names()
        ));
    }

    candidates
}
