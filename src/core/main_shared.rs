use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands, PrintArgs};
use crate::core::cmds;
use crate::core::logging::init_logging;
use crate::core::registry::RuleRegistry;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, Config, config, init_with_overrides};

/// Parse the command line, initialise config and logging, then dispatch.
///
/// `build_registry` receives the effective configuration for the command so
/// rule options set on the command line reach the rules.
pub fn run_main<F>(build_registry: F) -> AppResult<()>
where
    F: Fn(&Config) -> RuleRegistry,
{
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Current working directory: {}", env::current_dir()?.display());

    // Dispatch to appropriate command
    let exit_code = match args.command {
        Commands::Check(check_args) => {
            // Resolve command-specific options
            let resolved_targets = config()
                .resolve_targets(&check_args.targets, check_args.ignore_targets.as_deref());
            let rules = config().resolve_rules(check_args.rules.as_deref());
            let effective = config().with_rule_overrides(
                check_args.name_pattern.as_deref(),
                check_args.include_class_fields,
            );
            let registry = build_registry(&effective);

            let summary = cmds::execute_check(
                cmds::CheckOptions {
                    fix: check_args.fix,
                    diff: check_args.diff,
                    format: check_args.format,
                },
                &registry,
                resolved_targets,
                rules,
            )?;

            // Unfixed diagnostics fail the run
            if summary.remaining() > 0 { 1 } else { 0 }
        }
        Commands::Print {
            command: print_args,
        } => {
            let registry = build_registry(config());
            let command = match print_args {
                PrintArgs::Rules(args) => cmds::print::PrintCommand::Rules(args.format),
                PrintArgs::Config(args) => cmds::print::PrintCommand::Config(args.format),
            };
            cmds::execute_print(command, &registry, config())?;
            0
        }
        Commands::Init => {
            cmds::execute_init()?;
            0
        }
    };

    // Exit with appropriate code
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
