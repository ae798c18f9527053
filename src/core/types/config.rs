use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Path substrings that are never linted, whatever the configuration says
const ALWAYS_IGNORED: &[&str] = &["node_modules"];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

/// Options of the `readonly-injected-services` rule
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReadonlyServicesConfig {
    pub name_pattern: Option<String>,
    pub include_class_fields: Option<bool>,
}

impl ReadonlyServicesConfig {
    pub fn name_pattern(&self) -> &str {
        self.name_pattern.as_deref().unwrap_or("service")
    }

    pub fn include_class_fields(&self) -> bool {
        self.include_class_fields.unwrap_or(false)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            name_pattern: Some(self.name_pattern().to_string()),
            include_class_fields: Some(self.include_class_fields()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub ignore_targets: Option<Vec<String>>,
    pub rules: Option<Vec<String>>, // None = all enabled (semantic)

    // Nested sections
    pub log: Option<LogConfig>,
    pub readonly_injected_services: Option<ReadonlyServicesConfig>,
}

impl Config {
    pub fn ignore_targets(&self) -> &[String] {
        self.ignore_targets.as_deref().unwrap_or(&[])
    }

    pub fn rules(&self) -> Option<&[String]> {
        self.rules.as_deref() // None = all enabled (semantic)
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn readonly_injected_services(&self) -> ReadonlyServicesConfig {
        self.readonly_injected_services.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            ignore_targets: Some(self.ignore_targets().to_vec()),
            rules: self.rules.as_ref().map(|v| v.to_vec()),
            log: Some(self.log().to_effective()),
            readonly_injected_services: Some(self.readonly_injected_services().to_effective()),
        }
    }

    /// Targets for a `check` run: CLI targets replace nothing but the default `.`,
    /// CLI ignores are appended to the configured ones
    pub fn resolve_targets(&self, cli_targets: &[String], cli_ignore: Option<&str>) -> ResolvedTargets {
        let include = if cli_targets.is_empty() {
            vec![".".to_string()]
        } else {
            cli_targets.to_vec()
        };

        let mut ignore: Vec<String> = ALWAYS_IGNORED.iter().map(|s| s.to_string()).collect();
        ignore.extend(self.ignore_targets().iter().cloned());
        if let Some(csv) = cli_ignore {
            ignore.extend(parse_csv(csv));
        }
        // First occurrence wins, wherever the duplicates sit
        let mut seen = HashSet::new();
        ignore.retain(|pattern| seen.insert(pattern.clone()));

        ResolvedTargets { include, ignore }
    }

    /// CLI list replaces the configured one when given and non-empty
    pub fn resolve_rules(&self, cli_rules: Option<&str>) -> Option<Vec<String>> {
        if let Some(csv) = cli_rules {
            let list = parse_csv(csv);
            if !list.is_empty() {
                return Some(list);
            }
        }
        self.rules().map(|r| r.to_vec())
    }

    /// Copy of this configuration with `check` flags applied to the rule options
    pub fn with_rule_overrides(&self, name_pattern: Option<&str>, include_class_fields: bool) -> Self {
        let mut cfg = self.clone();
        let mut rule = cfg.readonly_injected_services();
        if let Some(pattern) = name_pattern
            && !pattern.trim().is_empty()
        {
            rule.name_pattern = Some(pattern.trim().to_string());
        }
        if include_class_fields {
            rule.include_class_fields = Some(true);
        }
        cfg.readonly_injected_services = Some(rule);
        cfg
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTargets {
    pub include: Vec<String>,
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

const CONFIG_FILENAME: &str = "readonly-services.toml";
static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn get_config_filename() -> &'static str {
    CONFIG_FILENAME
}

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Apply nearest config file found by walking up from cwd
        if let Some(path) = find_nearest_config_file()
            && let Some(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file()
        && let Some(file_cfg) = read_config_file(&path)
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
}

fn read_config_file(path: &Path) -> Option<Config> {
    let contents = fs::read_to_string(path).ok()?;
    match toml::from_str::<Config>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            // Logging is not up yet at this point
            eprintln!("Ignoring malformed config {}: {e}", path.display());
            None
        }
    }
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if let Some(targets) = &file.ignore_targets {
        cfg.ignore_targets = Some(
            cfg.ignore_targets()
                .iter()
                .chain(targets.iter())
                .cloned()
                .collect(),
        );
    }
    if file.rules.is_some() {
        cfg.rules = file.rules.clone(); // override semantics
    }

    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    if let Some(file_rule) = &file.readonly_injected_services {
        let mut rule = cfg.readonly_injected_services.clone().unwrap_or_default();
        if let Some(pattern) = &file_rule.name_pattern {
            if !pattern.trim().is_empty() {
                rule.name_pattern = Some(pattern.clone());
            }
        }
        if file_rule.include_class_fields.is_some() {
            rule.include_class_fields = file_rule.include_class_fields;
        }
        cfg.readonly_injected_services = Some(rule);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let config_filename = get_config_filename();
    for dir in cwd.ancestors() {
        let candidate = dir.join(config_filename);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}

pub fn is_rule_enabled(name: &str, enabled: Option<&[String]>) -> bool {
    if let Some(list) = enabled {
        return list.iter().any(|s| s.eq_ignore_ascii_case(name));
    }
    true
}

pub fn is_path_excluded(path: &Path, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let path_str = path.to_string_lossy();
    patterns
        .iter()
        .filter(|p| !p.is_empty())
        .any(|pat| path_str.contains(pat.as_str()))
}
