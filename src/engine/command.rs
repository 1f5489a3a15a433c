use super::{ConversionEngine, EngineKind, EngineSession};
use crate::config::Config;
use crate::error::{ConvertError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use tokio::process::Command;
use word_pdf_common::destination_for;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

const LIBREOFFICE_CANDIDATES: &[&str] = &[
    r"C:\Program Files\LibreOffice\program\soffice.exe",
    r"C:\Program Files (x86)\LibreOffice\program\soffice.exe",
    "/Applications/LibreOffice.app/Contents/MacOS/soffice",
    "/usr/bin/soffice",
    "/usr/bin/libreoffice",
    "/usr/local/bin/soffice",
    "/opt/libreoffice/program/soffice",
    "/snap/bin/libreoffice",
];

const OFFICE_TO_PDF_EXE: &str = "OfficeToPDF.exe";

/// Bytes escaped in a `file://` path; `/` and `:` stay literal.
const FILE_URL_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Runs an external converter program once per document.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    kind: EngineKind,
    program: PathBuf,
    timeout: Duration,
}

impl CommandEngine {
    pub fn new(kind: EngineKind, program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            kind,
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let program = config
            .engine_path
            .clone()
            .unwrap_or_else(|| resolve_program(config.engine));
        Self::new(config.engine, program, Duration::from_secs(config.timeout_seconds))
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ConversionEngine for CommandEngine {
    type Session = CommandSession;

    fn name(&self) -> &str {
        self.kind.label()
    }

    fn acquire(&self) -> Result<CommandSession> {
        let scratch = tempfile::Builder::new()
            .prefix("word-pdf-")
            .tempdir()
            .map_err(|e| ConvertError::EngineUnavailable(format!("cannot create session folder: {e}")))?;
        tracing::debug!("{} session at {}", self.name(), scratch.path().display());
        Ok(CommandSession {
            engine: self.clone(),
            scratch,
        })
    }
}

/// Scratch folder for one conversion: the engine's private profile and its
/// raw output. Removed when the session is dropped.
#[derive(Debug)]
pub struct CommandSession {
    engine: CommandEngine,
    scratch: TempDir,
}

impl CommandSession {
    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    fn out_dir(&self) -> PathBuf {
        self.scratch.path().join("out")
    }

    fn profile_dir(&self) -> PathBuf {
        self.scratch.path().join("profile")
    }

    /// Where the engine leaves its PDF for `source`.
    pub fn produced_file(&self, source: &Path) -> PathBuf {
        destination_for(source, &self.out_dir())
    }

    pub fn build_args(&self, source: &Path) -> Vec<OsString> {
        match self.engine.kind {
            EngineKind::LibreOffice => vec![
                "--headless".into(),
                "--norestore".into(),
                format!("-env:UserInstallation={}", file_url(&self.profile_dir())).into(),
                "--convert-to".into(),
                "pdf".into(),
                "--outdir".into(),
                self.out_dir().into_os_string(),
                source.as_os_str().to_os_string(),
            ],
            EngineKind::OfficeToPdf => vec![
                source.as_os_str().to_os_string(),
                self.produced_file(source).into_os_string(),
            ],
        }
    }
}

impl EngineSession for CommandSession {
    async fn convert(&self, source: &Path, destination: &Path) -> Result<()> {
        std::fs::create_dir_all(self.out_dir())?;

        let args = self.build_args(source);
        tracing::debug!("{} {:?}", self.engine.program.display(), args);

        let mut command = Command::new(&self.engine.program);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        let output = match tokio::time::timeout(self.engine.timeout, command.output()).await {
            Err(_) => return Err(ConvertError::EngineTimeout(self.engine.timeout.as_secs())),
            Ok(Err(e)) => {
                return Err(ConvertError::EngineUnavailable(format!(
                    "{}: {e}",
                    self.engine.program.display()
                )))
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::EngineFailed(format!(
                "exit code {:?}: {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        let produced = self.produced_file(source);
        if !produced.is_file() {
            return Err(ConvertError::NoOutput(source.to_path_buf()));
        }
        move_file(&produced, destination)
    }
}

/// Explicit path from config, a known install location, or the bare program
/// name for a `PATH` lookup.
pub fn resolve_program(kind: EngineKind) -> PathBuf {
    match kind {
        EngineKind::LibreOffice => LIBREOFFICE_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from("soffice")),
        EngineKind::OfficeToPdf => {
            let beside_exe = std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|dir| dir.join(OFFICE_TO_PDF_EXE)));
            let in_data_dir = dirs::data_dir().map(|dir| dir.join("word-pdf").join(OFFICE_TO_PDF_EXE));
            beside_exe
                .into_iter()
                .chain(in_data_dir)
                .find(|p| p.exists())
                .unwrap_or_else(|| PathBuf::from(OFFICE_TO_PDF_EXE))
        }
    }
}

fn file_url(path: &Path) -> String {
    let slashed = path.to_string_lossy().replace('\\', "/");
    let text = utf8_percent_encode(&slashed, FILE_URL_PATH).to_string();
    if text.starts_with('/') {
        format!("file://{text}")
    } else {
        format!("file:///{text}")
    }
}

/// Rename, falling back to copy + remove across filesystems.
fn move_file(from: &Path, to: &Path) -> Result<()> {
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }
    std::fs::copy(from, to)?;
    std::fs::remove_file(from)?;
    Ok(())
}
