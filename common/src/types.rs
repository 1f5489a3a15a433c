//! Batch type definitions
//!
//! Shared between the CLI and the desktop app:
//! - BatchRequest: what the user asked to convert
//! - ConversionJob: one source/destination pair, derived per run
//! - BatchReport: per-file outcomes of a finished run

use crate::error::Result;
use crate::paths::display_name;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Immutable snapshot of the user's selection, handed to the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    files: Vec<PathBuf>,
    output_dir: String,
}

impl BatchRequest {
    pub fn new(files: Vec<PathBuf>, output_dir: impl Into<String>) -> Self {
        Self {
            files,
            output_dir: output_dir.into(),
        }
    }

    /// Selected files, in selection order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Output directory, falling back to `cwd` when the text is blank.
    pub fn output_dir_or(&self, cwd: &Path) -> PathBuf {
        let text = self.output_dir.trim();
        if text.is_empty() {
            cwd.to_path_buf()
        } else {
            PathBuf::from(text)
        }
    }

    /// Output directory, falling back to the process working directory.
    pub fn resolve_output_dir(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(self.output_dir_or(&cwd))
    }
}

/// One conversion, recomputed every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum FileStatus {
    Converted,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn converted(job: &ConversionJob) -> Self {
        Self {
            source: job.source.clone(),
            destination: job.destination.clone(),
            status: FileStatus::Converted,
        }
    }

    pub fn failed(job: &ConversionJob, reason: impl Into<String>) -> Self {
        Self {
            source: job.source.clone(),
            destination: job.destination.clone(),
            status: FileStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self.status, FileStatus::Converted)
    }
}

/// Result of one full batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_converted())
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.converted_count()
    }

    pub fn all_converted(&self) -> bool {
        self.failed_count() == 0
    }

    /// Completion message: where the PDFs went, how many made it, and which
    /// files did not.
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Converted {} of {} files.\nPDF files were saved to: {}",
            self.converted_count(),
            self.total(),
            self.output_dir.display()
        );
        if !self.all_converted() {
            text.push_str("\n\nFailed:");
            for outcome in self.failed() {
                if let FileStatus::Failed { reason } = &outcome.status {
                    text.push_str(&format!("\n  - {}: {reason}", display_name(&outcome.source)));
                }
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str) -> ConversionJob {
        ConversionJob {
            source: PathBuf::from(format!("/docs/{name}.docx")),
            destination: PathBuf::from(format!("/out/{name}.pdf")),
        }
    }

    #[test]
    fn test_output_dir_blank_uses_cwd() {
        let request = BatchRequest::new(vec![PathBuf::from("a.docx")], "");
        assert_eq!(request.output_dir_or(Path::new("/work")), PathBuf::from("/work"));

        let request = BatchRequest::new(vec![PathBuf::from("a.docx")], "   ");
        assert_eq!(request.output_dir_or(Path::new("/work")), PathBuf::from("/work"));
    }

    #[test]
    fn test_output_dir_given() {
        let request = BatchRequest::new(vec![], " /tmp/out ");
        assert_eq!(request.output_dir_or(Path::new("/work")), PathBuf::from("/tmp/out"));
        assert!(request.is_empty());
    }

    #[test]
    fn test_resolve_output_dir_blank_is_current_dir() {
        let request = BatchRequest::new(vec![], "");
        let resolved = request.resolve_output_dir().unwrap();
        assert_eq!(resolved, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_report_counts_and_summary() {
        let report = BatchReport {
            output_dir: PathBuf::from("/out"),
            outcomes: vec![
                FileOutcome::converted(&job("a")),
                FileOutcome::failed(&job("b"), "engine exited with code 1"),
            ],
        };

        assert_eq!(report.total(), 2);
        assert_eq!(report.converted_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.all_converted());

        let summary = report.summary();
        assert!(summary.contains("Converted 1 of 2 files."));
        assert!(summary.contains("/out"));
        assert!(summary.contains("b.docx: engine exited with code 1"));
        assert!(!summary.contains("a.docx"));
    }

    #[test]
    fn test_report_serializes_status_inline() {
        let report = BatchReport {
            output_dir: PathBuf::from("/out"),
            outcomes: vec![FileOutcome::failed(&job("b"), "missing")],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outputDir"], "/out");
        assert_eq!(json["outcomes"][0]["status"], "failed");
        assert_eq!(json["outcomes"][0]["reason"], "missing");
    }
}
