use std::path::PathBuf;

use word_pdf_common::BatchRequest;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub files: Vec<PathBuf>,
    pub output_dir: String,
    pub progress: f32,
    pub show_progress: bool,
    pub running: bool,
    pub status: String,
}

impl AppState {
    /// A new selection replaces the old one; a cancelled dialog keeps it.
    pub fn replace_files(&mut self, picked: Option<Vec<PathBuf>>) {
        if let Some(files) = picked {
            if !files.is_empty() {
                self.files = files;
            }
        }
    }

    pub fn set_output_dir(&mut self, picked: Option<PathBuf>) {
        if let Some(dir) = picked {
            self.output_dir = dir.display().to_string();
        }
    }

    pub fn batch_request(&self) -> BatchRequest {
        BatchRequest::new(self.files.clone(), self.output_dir.clone())
    }

    pub fn start(&mut self) {
        self.running = true;
        self.show_progress = true;
        self.progress = 0.0;
    }

    pub fn finish(&mut self, status: impl Into<String>) {
        self.running = false;
        self.status = status.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_replace_files_discards_previous_selection() {
        let mut state = AppState::default();
        state.replace_files(Some(vec![PathBuf::from("a.docx"), PathBuf::from("b.docx")]));
        state.replace_files(Some(vec![PathBuf::from("c.docx")]));

        assert_eq!(state.files, vec![PathBuf::from("c.docx")]);
    }

    #[test]
    fn test_cancelled_dialogs_keep_state() {
        let mut state = AppState::default();
        state.replace_files(Some(vec![PathBuf::from("a.docx")]));
        state.set_output_dir(Some(PathBuf::from("/out")));

        state.replace_files(None);
        state.set_output_dir(None);

        assert_eq!(state.files, vec![PathBuf::from("a.docx")]);
        assert_eq!(state.output_dir, "/out");
    }

    #[test]
    fn test_batch_request_snapshot() {
        let mut state = AppState::default();
        state.replace_files(Some(vec![PathBuf::from("b.docx"), PathBuf::from("a.docx")]));

        let request = state.batch_request();
        state.files.clear();

        assert_eq!(request.files(), &[PathBuf::from("b.docx"), PathBuf::from("a.docx")]);
        assert_eq!(request.output_dir_or(Path::new("/work")), PathBuf::from("/work"));
    }

    #[test]
    fn test_start_resets_progress() {
        let mut state = AppState {
            progress: 100.0,
            ..Default::default()
        };
        state.start();

        assert!(state.running);
        assert!(state.show_progress);
        assert_eq!(state.progress, 0.0);

        state.finish("done");
        assert!(!state.running);
        assert_eq!(state.status, "done");
    }
}
