use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use word_pdf::cli::{Cli, Commands};
use word_pdf::error::{ConvertError, Result};
use word_pdf::{run_batch, scanner, BatchEvent, CommandEngine, Config};
use word_pdf_common::{display_name, BatchRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Convert { files, output, folder, recursive, json } => {
            println!("📄 word-pdf - convert\n");

            let mut sources: Vec<PathBuf> = files;
            if let Some(folder) = folder {
                let found = scanner::scan_folder(&folder, &config.source_extensions, recursive)?;
                println!("✔ {} document(s) found in {}", found.len(), folder.display());
                sources.extend(found);
            }

            let output_text = output
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| config.default_output_text());
            let request = BatchRequest::new(sources, output_text);

            let engine = CommandEngine::from_config(&config);
            println!("- engine: {} ({})\n", engine.kind(), engine.program().display());

            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let report = run_batch(&engine, &request, |event| match event {
                BatchEvent::Started { .. } => bar.set_position(0),
                BatchEvent::FileStarted { index, total, source } => {
                    bar.set_message(format!("[{index}/{total}] {}", display_name(&source)));
                }
                BatchEvent::FileFailed { source, error, .. } => {
                    bar.println(format!("✘ {}: {error}", display_name(&source)));
                }
                BatchEvent::FileConverted { destination, .. } => {
                    bar.println(format!("✔ {}", destination.display()));
                }
                BatchEvent::Progress { percent, .. } => bar.set_position(percent.round() as u64),
                BatchEvent::Finished(_) => bar.finish_and_clear(),
            })
            .await;

            let report = match report {
                Ok(report) => report,
                Err(err) => {
                    bar.abandon();
                    return Err(err);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("\n{}", report.summary());
            }

            if !report.all_converted() {
                return Err(ConvertError::BatchIncomplete {
                    failed: report.failed_count(),
                    total: report.total(),
                });
            }
            println!("\n✅ Done");
        }

        Commands::Config => {
            println!("Config file: {}", Config::config_path()?.display());
            println!("  engine: {}", config.engine);
            println!(
                "  engine path: {}",
                CommandEngine::from_config(&config).program().display()
            );
            println!("  timeout: {}s", config.timeout_seconds);
            println!(
                "  default output: {}",
                config
                    .default_output_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(current folder)".into())
            );
            println!("  extensions: {}", config.source_extensions.join(", "));
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "word_pdf=debug,info" } else { "word_pdf=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
