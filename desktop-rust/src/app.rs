use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui::{self, Color32, RichText};
use word_pdf::{BatchEvent, Config};
use word_pdf_common::display_name;

use crate::model::AppState;
use crate::notify::{self, Notice};
use crate::worker::{spawn_batch, UiMessage};

const TITLE_COLOR: Color32 = Color32::from_rgb(0, 51, 102);
const ACTION_COLOR: Color32 = Color32::from_rgb(0, 123, 255);
const CONVERT_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
const CLOSE_COLOR: Color32 = Color32::from_rgb(255, 87, 51);

pub struct DesktopApp {
    state: AppState,
    config: Config,
    batch_rx: Option<Receiver<UiMessage>>,
}

impl DesktopApp {
    pub fn new(config: Config) -> Self {
        let state = AppState {
            output_dir: config.default_output_text(),
            ..Default::default()
        };
        Self {
            state,
            config,
            batch_rx: None,
        }
    }

    fn select_files(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Word documents", self.config.source_extensions.as_slice())
            .pick_files();
        self.state.replace_files(picked);
    }

    fn select_output_folder(&mut self) {
        let picked = rfd::FileDialog::new().pick_folder();
        self.state.set_output_dir(picked);
    }

    fn convert(&mut self) {
        if self.state.running {
            return;
        }
        let request = self.state.batch_request();
        if request.is_empty() {
            notify::show(Notice::Warning, "Warning", "Please select at least one Word document.");
            return;
        }

        tracing::info!("starting batch of {} file(s)", request.files().len());
        self.state.start();
        self.state.status = "Conversion running...".to_string();
        self.batch_rx = Some(spawn_batch(self.config.clone(), request));
    }

    fn poll_messages(&mut self) {
        let Some(rx) = &self.batch_rx else {
            return;
        };

        let mut pending = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(msg) => pending.push(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        for msg in pending {
            self.handle_message(msg);
        }

        if disconnected {
            self.batch_rx = None;
            if self.state.running {
                self.state.finish("Conversion stopped unexpectedly");
            }
        }
    }

    fn handle_message(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::Batch(BatchEvent::Started { total, output_dir }) => {
                self.state.progress = 0.0;
                self.state.status = format!("Converting {total} file(s) into {}", output_dir.display());
            }
            UiMessage::Batch(BatchEvent::FileStarted { index, total, source }) => {
                self.state.status = format!("[{index}/{total}] {}", display_name(&source));
            }
            UiMessage::Batch(BatchEvent::FileConverted { .. }) => {}
            UiMessage::Batch(BatchEvent::FileFailed { source, error, .. }) => {
                notify::show(Notice::Error, "Error", &notify::file_failed_text(&display_name(&source), &error));
            }
            UiMessage::Batch(BatchEvent::Progress { percent, .. }) => {
                self.state.progress = percent as f32;
            }
            UiMessage::Batch(BatchEvent::Finished(report)) => {
                self.state.finish(format!(
                    "Converted {} of {} file(s)",
                    report.converted_count(),
                    report.total()
                ));
                let (notice, title, text) = notify::completion(&report);
                notify::show(notice, title, &text);
            }
            UiMessage::Aborted(error) => {
                self.state.finish("Conversion failed");
                notify::show(Notice::Error, "Error", &error);
            }
        }
    }

    fn render_file_list(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(120)))
            .inner_margin(egui::Margin::same(6.0))
            .show(ui, |ui| {
                ui.set_width(420.0);
                egui::ScrollArea::vertical()
                    .max_height(130.0)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if self.state.files.is_empty() {
                            ui.label(RichText::new("No files selected").color(Color32::from_gray(140)));
                        }
                        for path in &self.state.files {
                            ui.label(RichText::new(display_name(path)).size(12.0))
                                .on_hover_text(path.display().to_string());
                        }
                    });
            });
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();
        if self.state.running {
            ctx.request_repaint();
        }

        let idle = !self.state.running;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(RichText::new("Word to PDF Converter").size(22.0).strong().color(TITLE_COLOR));
                ui.label(RichText::new("Select the Word files to convert to PDF.").size(15.0));
                ui.add_space(15.0);

                let select_files = egui::Button::new(RichText::new("Select Word Files").color(Color32::WHITE))
                    .fill(ACTION_COLOR);
                if ui.add_enabled(idle, select_files).clicked() {
                    self.select_files();
                }

                ui.add_space(10.0);
                self.render_file_list(ui);
                ui.label(format!("{} file(s) selected", self.state.files.len()));

                ui.add_space(10.0);
                ui.label("Output folder (optional):");
                ui.add_enabled(
                    idle,
                    egui::TextEdit::singleline(&mut self.state.output_dir)
                        .desired_width(420.0)
                        .hint_text("Current folder"),
                );

                let select_folder = egui::Button::new(RichText::new("Select Folder").color(Color32::WHITE))
                    .fill(ACTION_COLOR);
                if ui.add_enabled(idle, select_folder).clicked() {
                    self.select_output_folder();
                }

                if self.state.show_progress {
                    ui.add_space(20.0);
                    ui.add(
                        egui::ProgressBar::new(self.state.progress / 100.0)
                            .desired_width(400.0)
                            .show_percentage(),
                    );
                }

                ui.add_space(20.0);
                let convert = egui::Button::new(RichText::new("Convert to PDF").color(Color32::WHITE))
                    .fill(CONVERT_COLOR);
                if ui.add_enabled(idle, convert).clicked() {
                    self.convert();
                }

                ui.add_space(15.0);
                let close = egui::Button::new(RichText::new("Close").color(Color32::WHITE)).fill(CLOSE_COLOR);
                if ui.add(close).clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                if !self.state.status.is_empty() {
                    ui.add_space(10.0);
                    ui.label(RichText::new(&self.state.status).color(Color32::from_gray(170)));
                }
            });
        });
    }
}
