//! Per-file conversion outcomes.
//!
//! A single malformed template must never abort the whole conversion, but
//! it must never vanish silently either: every file ends up as an explicit
//! outcome in the batch report.

use std::path::{Path, PathBuf};

use console::style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { source: PathBuf, dest: PathBuf },
    Skipped { source: PathBuf, reason: String },
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub outcomes: Vec<FileOutcome>,
    pub assets_copied: usize,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn converted(&mut self, source: impl Into<PathBuf>, dest: impl Into<PathBuf>) {
        self.outcomes.push(FileOutcome::Converted {
            source: source.into(),
            dest: dest.into(),
        });
    }

    pub fn skipped(&mut self, source: impl Into<PathBuf>, reason: impl Into<String>) {
        let source = source.into();
        let reason = reason.into();
        eprintln!(
            "{} skipping {}: {}",
            style("warning:").yellow().bold(),
            source.display(),
            reason
        );
        self.outcomes.push(FileOutcome::Skipped { source, reason });
    }

    pub fn converted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Converted { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Skipped { .. }))
            .count()
    }

    pub fn print_summary(&self, dest: &Path) {
        println!(
            "\n{} Project converted at {}",
            style("✓").green().bold(),
            style(dest.display()).cyan()
        );
        println!(
            "  {} files converted, {} assets copied, {} skipped",
            self.converted_count(),
            self.assets_copied,
            self.skipped_count()
        );
        for outcome in &self.outcomes {
            if let FileOutcome::Skipped { source, reason } = outcome {
                println!(
                    "  {} {} ({})",
                    style("skipped").yellow(),
                    source.display(),
                    reason
                );
            }
        }
    }
}
