use crate::LintRule;
use crate::types::config::is_rule_enabled;

/// Registry for managing available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a lint rule
    pub fn register<T: LintRule + 'static>(&mut self, rule: T) {
        self.rules.push(Box::new(rule));
    }

    /// Get rule by name
    pub fn get_rule(&self, rule_name: &str) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(rule_name))
            .map(|rule| rule.as_ref())
    }

    /// Get all registered rules, in registration order
    pub fn all_rules(&self) -> Vec<&dyn LintRule> {
        self.rules.iter().map(|rule| rule.as_ref()).collect()
    }

    /// Rules left after applying an enabled-rules list; `None` enables all
    pub fn enabled(&self, enabled: Option<&[String]>) -> Vec<&dyn LintRule> {
        self.rules
            .iter()
            .filter(|rule| is_rule_enabled(rule.name(), enabled))
            .map(|rule| rule.as_ref())
            .collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
