//! Batch conversion orchestrator
//!
//! Runs every job of a `BatchRequest` in order, one file at a time. A failed
//! file is recorded and reported, then the batch moves on; only an empty
//! selection or an unusable output folder stops a run before it starts.

use crate::engine::{ConversionEngine, EngineSession};
use crate::error::{ConvertError, Result};
use crate::scanner::validate_source;
use std::collections::HashSet;
use std::path::PathBuf;
use word_pdf_common::{percent, plan_jobs, BatchReport, BatchRequest, ConversionJob, FileOutcome};

/// What the orchestrator reports while it works.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    Started { total: usize, output_dir: PathBuf },
    FileStarted { index: usize, total: usize, source: PathBuf },
    FileConverted { index: usize, source: PathBuf, destination: PathBuf },
    FileFailed { index: usize, source: PathBuf, error: String },
    Progress { index: usize, total: usize, percent: f64 },
    Finished(BatchReport),
}

pub async fn run_batch<E, F>(engine: &E, request: &BatchRequest, mut on_event: F) -> Result<BatchReport>
where
    E: ConversionEngine,
    F: FnMut(BatchEvent),
{
    if request.is_empty() {
        return Err(ConvertError::NoFilesSelected);
    }

    let output_dir = request.resolve_output_dir()?;
    std::fs::create_dir_all(&output_dir).map_err(|source| ConvertError::OutputDir {
        path: output_dir.clone(),
        source,
    })?;

    let jobs = plan_jobs(request.files(), &output_dir);
    warn_on_shared_destinations(&jobs);

    let total = jobs.len();
    tracing::info!(
        "Converting {} file(s) with {} into {}",
        total,
        engine.name(),
        output_dir.display()
    );
    on_event(BatchEvent::Started {
        total,
        output_dir: output_dir.clone(),
    });

    let mut outcomes = Vec::with_capacity(total);
    for (i, job) in jobs.iter().enumerate() {
        let index = i + 1;
        on_event(BatchEvent::FileStarted {
            index,
            total,
            source: job.source.clone(),
        });

        match convert_one(engine, job).await {
            Ok(()) => {
                tracing::info!("[{index}/{total}] {} -> {}", job.source.display(), job.destination.display());
                on_event(BatchEvent::FileConverted {
                    index,
                    source: job.source.clone(),
                    destination: job.destination.clone(),
                });
                outcomes.push(FileOutcome::converted(job));
            }
            Err(err) => {
                let error = err.to_string();
                tracing::warn!("[{index}/{total}] {} failed: {error}", job.source.display());
                on_event(BatchEvent::FileFailed {
                    index,
                    source: job.source.clone(),
                    error: error.clone(),
                });
                outcomes.push(FileOutcome::failed(job, error));
            }
        }

        on_event(BatchEvent::Progress {
            index,
            total,
            percent: percent(index, total),
        });
    }

    let report = BatchReport { output_dir, outcomes };
    tracing::info!("Batch finished: {} of {} converted", report.converted_count(), report.total());
    on_event(BatchEvent::Finished(report.clone()));
    Ok(report)
}

async fn convert_one<E: ConversionEngine>(engine: &E, job: &ConversionJob) -> Result<()> {
    validate_source(&job.source)?;

    if let Some(parent) = job.destination.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let session = engine.acquire()?;
    let result = session.convert(&job.source, &job.destination).await;
    drop(session);
    result
}

fn warn_on_shared_destinations(jobs: &[ConversionJob]) {
    let mut seen = HashSet::new();
    for job in jobs {
        if !seen.insert(&job.destination) {
            tracing::warn!(
                "{} will overwrite an earlier output at {}",
                job.source.display(),
                job.destination.display()
            );
        }
    }
}
