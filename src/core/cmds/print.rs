use crate::core::cli::PrintFormat;
use crate::core::registry::RuleRegistry;
use crate::types::AppResult;
use crate::types::config::Config;

pub mod config;
pub mod rules;

pub enum PrintCommand {
    Rules(PrintFormat),
    Config(PrintFormat),
}

pub fn execute_print(
    command: PrintCommand,
    registry: &RuleRegistry,
    effective_config: &Config,
) -> AppResult<()> {
    match command {
        PrintCommand::Rules(format) => rules::execute(format, registry),
        PrintCommand::Config(format) => config::execute(format, effective_config),
    }
}
