pub mod readonly_injected_services;

use crate::core::registry::RuleRegistry;
use crate::types::config::Config;

/// Registry holding every built-in rule, configured from `config`
pub fn default_registry(config: &Config) -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(
        readonly_injected_services::ReadonlyInjectedServices::from_config(
            &config.readonly_injected_services(),
        ),
    );
    registry
}
