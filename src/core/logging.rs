use std::str::FromStr;

use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

fn level_tag(level: Level, colors: bool) -> String {
    let tag = format!("[{}]", level.as_str().to_lowercase());
    if !colors {
        return tag;
    }
    match level {
        Level::Error => style(tag).red().bold().to_string(),
        Level::Warn => style(tag).yellow().to_string(),
        Level::Info => style(tag).green().to_string(),
        Level::Debug => style(tag).cyan().to_string(),
        Level::Trace => style(tag).dim().to_string(),
    }
}

/// Route `info` records to stdout as bare messages and everything else to
/// stderr with a level tag. Must run after the configuration is initialised.
pub fn init_logging() {
    let log_config = config().log();
    let level = LevelFilter::from_str(log_config.level()).unwrap_or(LevelFilter::Info);
    let colors = colors_enabled();
    console::set_colors_enabled(colors);
    console::set_colors_enabled_stderr(colors);

    let stdout = fern::Dispatch::new()
        .filter(|metadata| metadata.level() == Level::Info)
        .format(|out, message, _record| out.finish(format_args!("{message}")))
        .chain(std::io::stdout());

    let stderr = fern::Dispatch::new()
        .filter(|metadata| metadata.level() != Level::Info)
        .format(move |out, message, record| {
            let tag = level_tag(record.level(), colors);
            if record.level() >= Level::Debug {
                out.finish(format_args!("{tag} {}: {message}", record.target()))
            } else {
                out.finish(format_args!("{tag} {message}"))
            }
        })
        .chain(std::io::stderr());

    let result = fern::Dispatch::new()
        .level(level)
        .chain(stdout)
        .chain(stderr)
        .apply();

    if let Err(e) = result {
        eprintln!("Logger already initialised: {e}");
    }
}
