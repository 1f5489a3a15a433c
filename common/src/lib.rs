//! word-pdf Common Library
//!
//! Types and helpers shared by the CLI and the desktop app. Nothing here
//! touches the conversion engine or the UI.

pub mod error;
pub mod paths;
pub mod progress;
pub mod types;

pub use error::{Error, Result};
pub use paths::{destination_for, display_name, has_source_extension, plan_jobs, DEFAULT_SOURCE_EXTENSIONS, TARGET_EXTENSION};
pub use progress::percent;
pub use types::{BatchReport, BatchRequest, ConversionJob, FileOutcome, FileStatus};
