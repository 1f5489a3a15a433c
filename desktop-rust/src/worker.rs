use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use word_pdf::{run_batch, BatchEvent, CommandEngine, Config};
use word_pdf_common::BatchRequest;

pub enum UiMessage {
    Batch(BatchEvent),
    Aborted(String),
}

/// Runs the batch on its own thread; events come back over the channel.
pub fn spawn_batch(config: Config, request: BatchRequest) -> Receiver<UiMessage> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        if let Err(err) = run(&config, &request, &tx) {
            tracing::error!("batch aborted: {err:#}");
            let _ = tx.send(UiMessage::Aborted(format!("{err:#}")));
        }
    });

    rx
}

fn run(config: &Config, request: &BatchRequest, tx: &Sender<UiMessage>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start conversion runtime")?;
    let engine = CommandEngine::from_config(config);

    runtime.block_on(run_batch(&engine, request, |event| {
        let _ = tx.send(UiMessage::Batch(event));
    }))?;
    Ok(())
}
