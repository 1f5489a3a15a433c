use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use word_pdf_common::has_source_extension;

/// Prefix Word uses for its owner/lock files next to an open document.
const LOCK_FILE_PREFIX: &str = "~$";

/// Collects source documents in `folder`, sorted by file name.
pub fn scan_folder<S: AsRef<str>>(folder: &Path, extensions: &[S], recursive: bool) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ConvertError::SourceMissing(folder.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut documents: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| has_source_extension(path, extensions) && !is_lock_file(path))
        .collect();

    documents.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));

    Ok(documents)
}

/// Checks the source exists, is a file, and is not empty. Returns its size.
pub fn validate_source(path: &Path) -> Result<u64> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta,
        _ => return Err(ConvertError::SourceMissing(path.to_path_buf())),
    };
    if meta.len() == 0 {
        return Err(ConvertError::SourceEmpty(path.to_path_buf()));
    }
    Ok(meta.len())
}

fn is_lock_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with(LOCK_FILE_PREFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const EXTS: &[&str] = &["docx"];

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), EXTS, false);
        assert!(matches!(result, Err(ConvertError::SourceMissing(_))));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c.docx"), b"x").unwrap();
        fs::write(dir.path().join("a.DOCX"), b"x").unwrap();
        fs::write(dir.path().join("b.docx"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("~$b.docx"), b"x").unwrap();

        let result = scan_folder(dir.path(), EXTS, false).unwrap();
        let names: Vec<_> = result
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.DOCX", "b.docx", "c.docx"]);
    }

    #[test]
    fn test_scan_folder_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("top.docx"), b"x").unwrap();
        fs::write(dir.path().join("sub").join("nested.docx"), b"x").unwrap();

        assert_eq!(scan_folder(dir.path(), EXTS, false).unwrap().len(), 1);
        assert_eq!(scan_folder(dir.path(), EXTS, true).unwrap().len(), 2);
    }

    #[test]
    fn test_validate_source() {
        let dir = tempdir().unwrap();
        let full = dir.path().join("full.docx");
        let empty = dir.path().join("empty.docx");
        fs::write(&full, b"PK\x03\x04").unwrap();
        fs::write(&empty, b"").unwrap();

        assert_eq!(validate_source(&full).unwrap(), 4);
        assert!(matches!(validate_source(&empty), Err(ConvertError::SourceEmpty(_))));
        assert!(matches!(
            validate_source(&dir.path().join("missing.docx")),
            Err(ConvertError::SourceMissing(_))
        ));
        assert!(matches!(validate_source(dir.path()), Err(ConvertError::SourceMissing(_))));
    }
}
