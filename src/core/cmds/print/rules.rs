use log::info;

use crate::core::cli::PrintFormat;
use crate::core::registry::RuleRegistry;
use crate::types::AppResult;
use crate::types::config::{config, is_rule_enabled};

pub fn execute(format: PrintFormat, registry: &RuleRegistry) -> AppResult<()> {
    let rules = registry.all_rules();

    if format == PrintFormat::Json {
        let metas: Vec<_> = rules.iter().map(|rule| rule.meta()).collect();
        println!("{}", serde_json::to_string_pretty(&metas)?);
        return Ok(());
    }

    let enabled = config().rules();
    info!("Available rules:");
    for rule in rules {
        let meta = rule.meta();
        let state = if is_rule_enabled(meta.name, enabled) {
            "on"
        } else {
            "off"
        };
        let fixable = meta
            .fixable
            .map(|kind| format!(", fixable: {kind}"))
            .unwrap_or_default();
        info!(
            "  [{}] {} ({}, {}{}){}",
            state,
            meta.name,
            meta.rule_type,
            meta.category,
            fixable,
            if meta.recommended { " *" } else { "" }
        );
        info!("      {}", meta.description);
    }
    info!("");
    info!("* recommended");
    Ok(())
}
