//! `readonly-injected-services`: flags private constructor parameter
//! properties that are never reassigned and could be declared `readonly`.
//!
//! Each class runs through three phases over a fresh [`CandidateSet`]:
//! collection from the constructor, mutation scanning over every method,
//! and reporting of whatever survives.

pub mod candidate;
pub mod collector;
pub mod reporter;
pub mod scanner;

use crate::core::engine::traits::{LintRule, RuleContext};
use crate::types::class::ClassDeclaration;
use crate::types::config::ReadonlyServicesConfig;
use crate::types::{Diagnostic, FixKind, RuleMessage, RuleMeta, RuleType};

pub use candidate::{Candidate, CandidateKind, CandidateSet, ServiceNamePattern};

pub const RULE_NAME: &str = "readonly-injected-services";
pub const MESSAGE_ID: &str = "addReadonly";

static META: RuleMeta = RuleMeta {
    name: RULE_NAME,
    description: "enforce readonly on injected services",
    category: "Best Practices",
    rule_type: RuleType::Suggestion,
    recommended: true,
    fixable: Some(FixKind::Code),
    messages: &[RuleMessage {
        id: MESSAGE_ID,
        text: "Injected service properties should be readonly.",
    }],
};

#[derive(Debug, Clone, Default)]
pub struct ReadonlyInjectedServices {
    pattern: ServiceNamePattern,
    include_class_fields: bool,
}

impl ReadonlyInjectedServices {
    pub fn new(pattern: ServiceNamePattern, include_class_fields: bool) -> Self {
        Self {
            pattern,
            include_class_fields,
        }
    }

    pub fn from_config(config: &ReadonlyServicesConfig) -> Self {
        Self::new(
            ServiceNamePattern::new(config.name_pattern()),
            config.include_class_fields(),
        )
    }

    pub fn pattern(&self) -> &ServiceNamePattern {
        &self.pattern
    }
}

impl LintRule for ReadonlyInjectedServices {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn check_class(&self, class: &ClassDeclaration, ctx: &RuleContext) -> Vec<Diagnostic> {
        let mut candidates = collector::collect_candidates(
            class,
            &self.pattern,
            self.include_class_fields,
            ctx.trace,
        );
        scanner::scan_mutations(class, &mut candidates, &self.pattern, ctx.scopes, ctx.trace);
        reporter::report(candidates, ctx.trace)
    }
}
