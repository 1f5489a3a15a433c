pub mod batch;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod scanner;

pub use batch::{run_batch, BatchEvent};
pub use config::Config;
pub use engine::{CommandEngine, ConversionEngine, EngineKind, EngineSession};
pub use error::{ConvertError, Result};
