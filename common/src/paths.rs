//! Destination path planning

use crate::types::ConversionJob;
use std::path::{Path, PathBuf};

/// Extension written for every converted file.
pub const TARGET_EXTENSION: &str = "pdf";

/// Source extensions accepted when nothing else is configured.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["docx"];

/// Destination for `source` inside `output_dir`: same stem, `.pdf` extension.
///
/// Only the last extension is dropped, so `a.b.docx` becomes `a.b.pdf`.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use word_pdf_common::destination_for;
///
/// let dest = destination_for(Path::new("/docs/a.docx"), Path::new("out"));
/// assert_eq!(dest, PathBuf::from("out/a.pdf"));
/// ```
pub fn destination_for(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    output_dir.join(format!("{stem}.{TARGET_EXTENSION}"))
}

/// File name shown to the user, or the whole path when there is none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// One job per source, in the order given.
pub fn plan_jobs(sources: &[PathBuf], output_dir: &Path) -> Vec<ConversionJob> {
    sources
        .iter()
        .map(|source| ConversionJob {
            source: source.clone(),
            destination: destination_for(source, output_dir),
        })
        .collect()
}

/// Case-insensitive extension check against `extensions` (without dots).
pub fn has_source_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
        return false;
    };
    extensions
        .iter()
        .any(|e| e.as_ref().trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_strips_extension() {
        let dest = destination_for(Path::new("/home/user/Report.docx"), Path::new("/out"));
        assert_eq!(dest, PathBuf::from("/out/Report.pdf"));
    }

    #[test]
    fn test_destination_keeps_inner_dots() {
        let dest = destination_for(Path::new("minutes.2024.v2.docx"), Path::new("out"));
        assert_eq!(dest, PathBuf::from("out/minutes.2024.v2.pdf"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/docs/report.docx")), "report.docx");
        assert_eq!(display_name(Path::new("/")), "/");
        assert_eq!(display_name(Path::new("docs/..")), "docs/..");
    }

    #[test]
    fn test_plan_jobs_preserves_order() {
        let sources = vec![PathBuf::from("b.docx"), PathBuf::from("a.docx")];
        let jobs = plan_jobs(&sources, Path::new("out"));

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].source, PathBuf::from("b.docx"));
        assert_eq!(jobs[0].destination, PathBuf::from("out/b.pdf"));
        assert_eq!(jobs[1].destination, PathBuf::from("out/a.pdf"));
    }

    #[test]
    fn test_plan_jobs_empty() {
        assert!(plan_jobs(&[], Path::new("out")).is_empty());
    }

    #[test]
    fn test_has_source_extension() {
        assert!(has_source_extension(Path::new("a.docx"), DEFAULT_SOURCE_EXTENSIONS));
        assert!(has_source_extension(Path::new("A.DOCX"), DEFAULT_SOURCE_EXTENSIONS));
        assert!(has_source_extension(Path::new("a.doc"), &[".doc", "docx"]));
        assert!(!has_source_extension(Path::new("a.pdf"), DEFAULT_SOURCE_EXTENSIONS));
        assert!(!has_source_extension(Path::new("docx"), DEFAULT_SOURCE_EXTENSIONS));
    }
}
