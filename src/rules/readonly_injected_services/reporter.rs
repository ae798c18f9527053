use crate::core::trace::TraceSink;
use crate::types::{Diagnostic, Fix};

use super::candidate::{CandidateSet, DeclarationSite};
use super::{MESSAGE_ID, RULE_NAME};

pub const READONLY_KEYWORD: &str = "readonly ";
pub const PARAMETER_MESSAGE: &str = "Parameter property can be made readonly";
pub const FIELD_MESSAGE: &str = "Property can be made readonly";

/// One diagnostic per surviving candidate, in declaration order
pub fn report(candidates: CandidateSet<'_>, trace: &dyn TraceSink) -> Vec<Diagnostic> {
    candidates
        .into_iter()
        .map(|candidate| {
            if trace.is_enabled() {
                trace.debug(&format!("[Report] '{}' can be made readonly", candidate.name));
            }
            match candidate.site {
                // The binding follows any accessibility modifier, so inserting
                // before it yields `private readonly name`
                DeclarationSite::Parameter(param) => {
                    Diagnostic::new(RULE_NAME, MESSAGE_ID, PARAMETER_MESSAGE, param.span)
                        .with_fix(Fix::insert_before(&param.name_span, READONLY_KEYWORD))
                }
                DeclarationSite::Field(field) => {
                    Diagnostic::new(RULE_NAME, MESSAGE_ID, FIELD_MESSAGE, field.span)
                        .with_fix(Fix::insert_before(&field.name_span, READONLY_KEYWORD))
                }
            }
        })
        .collect()
}
