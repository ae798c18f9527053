use log::info;

use crate::core::cli::PrintFormat;
use crate::types::AppResult;
use crate::types::config::Config;

pub fn execute(format: PrintFormat, config: &Config) -> AppResult<()> {
    let effective_config = config.to_effective();

    if format == PrintFormat::Json {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    // Table format
    info!("Effective Configuration:");
    info!("");
    info!("Global:");
    let ignore = effective_config.ignore_targets();
    if ignore.is_empty() {
        info!("  ignore_targets: []");
    } else {
        info!("  ignore_targets: [{}]", ignore.join(", "));
    }
    match effective_config.rules() {
        Some(rules) => info!("  rules: [{}]", rules.join(", ")),
        None => info!("  rules: all enabled"),
    }

    info!("");
    info!("Log:");
    let log = effective_config.log();
    info!("  level: {}", log.level());
    match log.color() {
        Some(true) => info!("  color: on"),
        Some(false) => info!("  color: off"),
        None => info!("  color: auto"),
    }

    info!("");
    info!("Readonly injected services:");
    let rule = effective_config.readonly_injected_services();
    info!("  name_pattern: {}", rule.name_pattern());
    info!("  include_class_fields: {}", rule.include_class_fields());

    Ok(())
}
