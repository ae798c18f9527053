use console::style;
use log::{debug, error, info, warn};
use serde::Serialize;
use similar::TextDiff;

use crate::LintRule;
use crate::core::cli::OutputFormat;
use crate::core::registry::RuleRegistry;
use crate::languages::typescript::engine::TypeScriptEngine;
use crate::types::config::{ResolvedTargets, colors_enabled};
use crate::types::{AppError, AppResult, Diagnostic, Fix, Target};

pub struct CheckOptions {
    pub fix: bool,
    pub diff: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub files: usize,
    pub diagnostics: usize,
    pub fixed: usize,
    pub failed: usize,
}

impl CheckSummary {
    /// Diagnostics still present in the sources after this run
    pub fn remaining(&self) -> usize {
        self.diagnostics - self.fixed
    }
}

struct FileReport {
    target: Target,
    diagnostics: Vec<Diagnostic>,
    fixed: bool,
    diff: Option<String>,
}

// JSON output structures
#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    diagnostics: &'a [Diagnostic],
    fixed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: Vec<JsonFile<'a>>,
    summary: &'a CheckSummary,
}

// SARIF structures (simplified for our use case)
#[derive(Serialize)]
struct SarifReport {
    version: String,
    #[serde(rename = "$schema")]
    schema: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
struct SarifRun {
    tool: SarifTool,
    #[serde(rename = "columnKind")]
    column_kind: String,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
struct SarifRule {
    id: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: u32,
    #[serde(rename = "startColumn")]
    start_column: u32,
}

pub fn execute_check(
    options: CheckOptions,
    registry: &RuleRegistry,
    resolved_targets: ResolvedTargets,
    rules: Option<Vec<String>>,
) -> AppResult<CheckSummary> {
    for name in rules.iter().flatten() {
        if registry.get_rule(name).is_none() {
            warn!("Unknown rule '{name}' ignored");
        }
    }

    let enabled = registry.enabled(rules.as_deref());
    if enabled.is_empty() {
        return Err(AppError::Custom(format!(
            "No rules enabled; available: {}",
            registry
                .all_rules()
                .iter()
                .map(|rule| rule.name())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }
    debug!(
        "Enabled rules: {}",
        enabled.iter().map(|r| r.name()).collect::<Vec<_>>().join(", ")
    );

    let loaded = Target::load_targets(&resolved_targets)?;
    debug!(
        "Loaded {} target(s), {} unreadable",
        loaded.targets.len(),
        loaded.unreadable.len()
    );

    // Unreadable files count as checked-and-failed
    let summary = CheckSummary {
        files: loaded.unreadable.len(),
        failed: loaded.unreadable.len(),
        ..CheckSummary::default()
    };
    let (reports, summary) = check_targets(loaded.targets, summary, &enabled, &options)?;

    match options.format {
        OutputFormat::Json => print_json(&reports, &summary)?,
        OutputFormat::Sarif => print_sarif(&reports, &enabled)?,
        OutputFormat::Table => print_table(&reports, &summary, &options),
    }

    Ok(summary)
}

fn check_targets(
    targets: Vec<Target>,
    mut summary: CheckSummary,
    rules: &[&dyn LintRule],
    options: &CheckOptions,
) -> AppResult<(Vec<FileReport>, CheckSummary)> {
    let engine = TypeScriptEngine::new();
    let mut reports = Vec::new();

    for target in targets {
        summary.files += 1;
        let diagnostics = match engine.lint_source(&target, rules) {
            Ok(diagnostics) => diagnostics,
            Err(e) => {
                error!("Skipping {}: {e}", target.display());
                summary.failed += 1;
                continue;
            }
        };
        summary.diagnostics += diagnostics.len();

        let mut report = FileReport {
            target,
            diagnostics,
            fixed: false,
            diff: None,
        };

        if options.fix || options.diff {
            let fixes: Vec<Fix> = report
                .diagnostics
                .iter()
                .filter_map(|d| d.fix.clone())
                .collect();
            if !fixes.is_empty() {
                let fixed_text = match report.target.apply_fixes(&fixes) {
                    Ok(text) => text,
                    Err(e) => {
                        error!("Cannot fix {}: {e}", report.target.display());
                        reports.push(report);
                        continue;
                    }
                };
                if options.diff {
                    report.diff = Some(unified_diff(&report.target, &fixed_text));
                }
                if options.fix {
                    report.target.write(&fixed_text)?;
                    report.fixed = true;
                    summary.fixed += report
                        .diagnostics
                        .iter()
                        .filter(|d| d.fix.is_some())
                        .count();
                    debug!("Wrote {} fix(es) to {}", fixes.len(), report.target.display());
                }
            }
        }

        reports.push(report);
    }

    Ok((reports, summary))
}

fn unified_diff(target: &Target, fixed_text: &str) -> String {
    let path = target.display();
    TextDiff::from_lines(target.text.as_str(), fixed_text)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}

fn colorize_diff(diff: &str) -> String {
    diff.lines()
        .map(|line| {
            if line.starts_with("+++") || line.starts_with("---") {
                style(line).bold().to_string()
            } else if line.starts_with('+') {
                style(line).green().to_string()
            } else if line.starts_with('-') {
                style(line).red().to_string()
            } else if line.starts_with("@@") {
                style(line).cyan().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_table(reports: &[FileReport], summary: &CheckSummary, options: &CheckOptions) {
    let colors = colors_enabled();
    for report in reports {
        for diagnostic in &report.diagnostics {
            let line = diagnostic.display(&report.target);
            if report.fixed && diagnostic.fix.is_some() {
                info!("{} {}", style("fixed").green(), line);
            } else {
                info!("{line}");
            }
        }
        if let Some(diff) = &report.diff {
            let diff = if colors {
                colorize_diff(diff)
            } else {
                diff.trim_end().to_string()
            };
            info!("{diff}");
        }
    }

    info!("");
    let verdict = if summary.remaining() == 0 {
        style("ok").green().bold()
    } else {
        style("fail").red().bold()
    };
    info!(
        "{}: {} file(s) checked, {} problem(s), {} fixed",
        verdict, summary.files, summary.diagnostics, summary.fixed
    );
    if summary.failed > 0 {
        warn!("{} file(s) could not be checked", summary.failed);
    }
    let fixable = reports
        .iter()
        .flat_map(|r| &r.diagnostics)
        .any(|d| d.fix.is_some());
    if !options.fix && fixable {
        info!("Run with --fix to apply the suggested fixes");
    }
}

fn print_json(reports: &[FileReport], summary: &CheckSummary) -> AppResult<()> {
    let report = JsonReport {
        files: reports
            .iter()
            .filter(|r| !r.diagnostics.is_empty())
            .map(|r| JsonFile {
                path: r.target.display(),
                diagnostics: &r.diagnostics,
                fixed: r.fixed,
                diff: r.diff.as_deref(),
            })
            .collect(),
        summary,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_sarif(reports: &[FileReport], rules: &[&dyn LintRule]) -> AppResult<()> {
    // Only unfixed diagnostics are reported
    let results: Vec<SarifResult> = reports
        .iter()
        .flat_map(|report| {
            report
                .diagnostics
                .iter()
                .filter(|d| !(report.fixed && d.fix.is_some()))
                .map(|d| SarifResult {
                    rule_id: d.rule.to_string(),
                    level: "warning".to_string(),
                    message: SarifMessage {
                        text: d.message.clone(),
                    },
                    locations: vec![SarifLocation {
                        physical_location: SarifPhysicalLocation {
                            artifact_location: SarifArtifactLocation {
                                uri: report.target.display(),
                            },
                            region: SarifRegion {
                                start_line: d.span.line + 1,
                                start_column: d.span.utf16_column(&report.target.text) + 1,
                            },
                        },
                    }],
                })
        })
        .collect();

    let sarif_report = SarifReport {
        version: "2.1.0".to_string(),
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    rules: rules
                        .iter()
                        .map(|rule| SarifRule {
                            id: rule.name().to_string(),
                            short_description: SarifMessage {
                                text: rule.meta().description.to_string(),
                            },
                        })
                        .collect(),
                },
            },
            column_kind: "utf16CodeUnits".to_string(),
            results,
        }],
    };
    println!("{}", serde_json::to_string_pretty(&sarif_report)?);
    Ok(())
}
