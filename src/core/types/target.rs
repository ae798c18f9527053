use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use serde::Serialize;
use strum::Display;

use crate::types::config::{ResolvedTargets, is_path_excluded};
use crate::types::{Fix, LintError, LintResult};

/// Ambient declaration files carry no class bodies worth checking
const DECLARATION_SUFFIXES: &[&str] = &[".d.ts", ".d.mts", ".d.cts"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Grammar for a path, or `None` when the file is not a TypeScript source
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if DECLARATION_SUFFIXES
            .iter()
            .any(|suffix| file_name.ends_with(suffix))
        {
            return None;
        }
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "ts" | "mts" | "cts" => Some(Dialect::TypeScript),
            "tsx" => Some(Dialect::Tsx),
            _ => None,
        }
    }
}

/// Result of resolving targets on disk
#[derive(Debug, Default)]
pub struct LoadedTargets {
    pub targets: Vec<Target>,
    /// Matching files whose contents could not be read
    pub unreadable: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Target {
    pub path: PathBuf,
    #[serde(skip)]
    pub text: String,
    pub dialect: Dialect,
}

impl Target {
    pub fn new(path: PathBuf, text: String, dialect: Dialect) -> Self {
        Self {
            path,
            text,
            dialect,
        }
    }

    /// Returns a cwd-relative path string suitable for logging
    pub fn display(&self) -> String {
        if let Ok(cwd) = std::env::current_dir() {
            let target_abs = if self.path.is_absolute() {
                self.path.clone()
            } else {
                cwd.join(&self.path)
            };

            if let Ok(relative) = target_abs.strip_prefix(&cwd) {
                let s = relative.to_string_lossy().to_string();
                if s.is_empty() { ".".to_string() } else { s }
            } else {
                self.path.to_string_lossy().to_string()
            }
        } else {
            self.path.to_string_lossy().to_string()
        }
    }

    /// Load every TypeScript source named by the resolved targets.
    ///
    /// Files that cannot be read as UTF-8 text are logged and listed in
    /// `unreadable` rather than failing the whole load.
    pub fn load_targets(resolved_targets: &ResolvedTargets) -> io::Result<LoadedTargets> {
        let mut loaded = LoadedTargets::default();

        for pattern in &resolved_targets.include {
            let path = PathBuf::from(pattern);

            if path.is_file() {
                if !is_path_excluded(&path, &resolved_targets.ignore) {
                    Self::load_single_file(path, &mut loaded);
                }
            } else if path.is_dir() {
                Self::load_from_directory(path, &resolved_targets.ignore, &mut loaded)?;
            } else {
                let paths = glob::glob(pattern).map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid glob pattern '{pattern}': {e}"),
                    )
                })?;
                for entry in paths {
                    match entry {
                        Ok(glob_path) => {
                            if glob_path.is_file()
                                && !is_path_excluded(&glob_path, &resolved_targets.ignore)
                            {
                                Self::load_single_file(glob_path, &mut loaded);
                            } else if glob_path.is_dir() {
                                Self::load_from_directory(
                                    glob_path,
                                    &resolved_targets.ignore,
                                    &mut loaded,
                                )?;
                            }
                        }
                        Err(e) => {
                            info!("Skipping invalid glob entry: {}", e);
                        }
                    }
                }
            }
        }

        if loaded.targets.is_empty() && loaded.unreadable.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No TypeScript targets found after filtering",
            ));
        }

        Ok(loaded)
    }

    fn load_single_file(target_path: PathBuf, loaded: &mut LoadedTargets) {
        let Some(dialect) = Dialect::from_path(&target_path) else {
            debug!(
                "Skipping file {}: not a TypeScript source",
                target_path.display()
            );
            return;
        };
        match fs::read_to_string(&target_path) {
            Ok(text) => loaded.targets.push(Target::new(target_path, text, dialect)),
            Err(e) => {
                error!("Skipping {}: {e}", target_path.display());
                loaded.unreadable.push(target_path);
            }
        }
    }

    fn load_from_directory(
        dir_path: PathBuf,
        ignore_patterns: &[String],
        loaded: &mut LoadedTargets,
    ) -> io::Result<()> {
        if is_path_excluded(&dir_path, ignore_patterns) {
            return Ok(());
        }

        // Sorted so output order does not depend on the filesystem
        let mut entries = fs::read_dir(dir_path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort();

        for path in entries {
            if path.is_file() {
                if !is_path_excluded(&path, ignore_patterns) {
                    Self::load_single_file(path, loaded);
                }
            } else if path.is_dir() {
                Self::load_from_directory(path, ignore_patterns, loaded)?;
            }
        }
        Ok(())
    }

    /// Apply insertion fixes and return the new text; the target is left untouched
    pub fn apply_fixes(&self, fixes: &[Fix]) -> LintResult<String> {
        // Highest offset first so earlier offsets stay valid
        let mut ordered: Vec<&Fix> = fixes.iter().collect();
        ordered.sort_by(|a, b| {
            b.byte_offset
                .cmp(&a.byte_offset)
                .then_with(|| a.text.cmp(&b.text))
        });
        ordered.dedup_by(|a, b| a.byte_offset == b.byte_offset && a.text == b.text);

        let mut fixed = self.text.clone();
        for fix in ordered {
            let offset = fix.byte_offset as usize;
            if !self.text.is_char_boundary(offset) {
                return Err(LintError::InvalidFix {
                    offset: fix.byte_offset,
                    len: self.text.len(),
                });
            }
            fixed.insert_str(offset, &fix.text);
        }
        Ok(fixed)
    }

    pub fn write(&self, text: &str) -> io::Result<()> {
        fs::write(&self.path, text)
    }
}
