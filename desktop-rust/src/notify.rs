use rfd::{MessageButtons, MessageDialog, MessageLevel};

use word_pdf_common::BatchReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Warning,
    Error,
    Info,
}

impl From<Notice> for MessageLevel {
    fn from(notice: Notice) -> Self {
        match notice {
            Notice::Warning => MessageLevel::Warning,
            Notice::Error => MessageLevel::Error,
            Notice::Info => MessageLevel::Info,
        }
    }
}

/// Blocks until the user dismisses the dialog.
pub fn show(notice: Notice, title: &str, text: &str) {
    let _ = MessageDialog::new()
        .set_level(notice.into())
        .set_title(title)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn file_failed_text(file_name: &str, error: &str) -> String {
    format!("Failed to convert {file_name} to PDF: {error}")
}

/// Info when everything converted, warning as soon as one file failed.
pub fn completion(report: &BatchReport) -> (Notice, &'static str, String) {
    if report.all_converted() {
        (Notice::Info, "Conversion complete", report.summary())
    } else {
        (Notice::Warning, "Conversion finished with errors", report.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use word_pdf_common::{ConversionJob, FileOutcome};

    fn job(name: &str) -> ConversionJob {
        ConversionJob {
            source: PathBuf::from(format!("{name}.docx")),
            destination: PathBuf::from(format!("out/{name}.pdf")),
        }
    }

    #[test]
    fn test_completion_all_converted_is_info() {
        let report = BatchReport {
            output_dir: PathBuf::from("out"),
            outcomes: vec![FileOutcome::converted(&job("a"))],
        };
        let (notice, _, text) = completion(&report);

        assert_eq!(notice, Notice::Info);
        assert!(text.contains("out"));
    }

    #[test]
    fn test_completion_with_failure_is_warning() {
        let report = BatchReport {
            output_dir: PathBuf::from("out"),
            outcomes: vec![
                FileOutcome::converted(&job("a")),
                FileOutcome::failed(&job("b"), "timed out"),
            ],
        };
        let (notice, title, text) = completion(&report);

        assert_eq!(notice, Notice::Warning);
        assert!(title.contains("errors"));
        assert!(text.contains("b.docx: timed out"));
    }

    #[test]
    fn test_file_failed_text() {
        let text = file_failed_text("a.docx", "File is empty: a.docx");
        assert_eq!(text, "Failed to convert a.docx to PDF: File is empty: a.docx");
    }
}
