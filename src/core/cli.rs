use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example configuration file to the current directory
    Init,

    /// Lint TypeScript sources and optionally apply fixes
    Check(CheckArgs),

    /// Print information about rules and configuration
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Report format for `check`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Sarif,
}

/// Report format for the `print` subcommands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintFormat {
    Table,
    Json,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Target(s) to lint: files, directories (recursive) or glob patterns.
    /// Defaults to the current directory.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Comma-separated substrings; any target path containing any will be ignored.
    /// Appended to config ignore_targets.
    #[arg(long = "ignore-targets")]
    pub ignore_targets: Option<String>,

    /// Comma-separated list of rule names to run.
    /// Use 'print rules' subcommand for a full list.
    /// Replaces config rules if provided.
    #[arg(long)]
    pub rules: Option<String>,

    /// Case-insensitive substring that marks a member as an injected service.
    /// Replaces config [readonly_injected_services].name_pattern if provided.
    #[arg(long = "name-pattern")]
    pub name_pattern: Option<String>,

    /// Also check private class fields whose names match the pattern
    #[arg(long = "include-class-fields")]
    pub include_class_fields: bool,

    /// Write fixes back to the source files
    #[arg(long, conflicts_with = "diff")]
    pub fix: bool,

    /// Show the fixes as a unified diff without writing them
    #[arg(long)]
    pub diff: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// List all available rules
    Rules(PrintRulesArgs),

    /// Print the effective global configuration
    Config(PrintConfigArgs),
}

/// Arguments for the print rules subcommand
#[derive(Parser, Debug)]
pub struct PrintRulesArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = PrintFormat::Table)]
    pub format: PrintFormat,
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = PrintFormat::Table)]
    pub format: PrintFormat,
}
