use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "word-pdf")]
#[command(about = "Batch converter for Word documents to PDF", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert documents to PDF
    Convert {
        /// Documents to convert, in order
        files: Vec<PathBuf>,

        /// Output folder (default: config default_output_dir, else the current folder)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also convert every document found in this folder
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// Scan --folder recursively
        #[arg(short = 'r', long, requires = "folder")]
        recursive: bool,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,
}
