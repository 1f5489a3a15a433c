//! Conversion engine abstraction
//!
//! The engine is a black box that turns one document into one PDF. Each
//! conversion runs inside a session: acquired right before the call and
//! released (dropped) right after it, whether the call succeeded or not.

mod command;

pub use command::{CommandEngine, CommandSession};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::path::Path;

pub trait ConversionEngine {
    type Session: EngineSession;

    /// Human-readable engine name for logs.
    fn name(&self) -> &str;

    /// Prepares whatever one conversion needs. Dropping the session releases it.
    fn acquire(&self) -> Result<Self::Session>;
}

pub trait EngineSession {
    /// Converts `source` and leaves the result at exactly `destination`.
    fn convert(&self, source: &Path, destination: &Path) -> impl Future<Output = Result<()>>;
}

/// Which external program does the conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    /// `soffice --headless --convert-to pdf`
    #[default]
    #[serde(rename = "libreoffice")]
    LibreOffice,
    /// `OfficeToPDF.exe <source> <destination>` (drives Microsoft Office)
    #[serde(rename = "office-to-pdf")]
    OfficeToPdf,
}

impl EngineKind {
    pub fn label(&self) -> &'static str {
        match self {
            EngineKind::LibreOffice => "LibreOffice",
            EngineKind::OfficeToPdf => "OfficeToPDF",
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::LibreOffice => write!(f, "libreoffice"),
            EngineKind::OfficeToPdf => write!(f, "office-to-pdf"),
        }
    }
}
