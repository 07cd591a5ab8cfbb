//! Desktop front-end for the extractor

use eframe::egui;
use email_harvest::{DedupCasing, Notice, Session};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct ExtractorApp {
    session: Session,
    notices: VecDeque<Notice>,
}

impl ExtractorApp {
    fn path_row(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
        ui.label(label);
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(value).desired_width(400.0));
            ui.button("Browse").clicked()
        })
        .inner
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        if Self::path_row(ui, "Input File:", &mut self.session.input)
            && let Some(path) = rfd::FileDialog::new()
                .add_filter("Text files", &["txt"])
                .pick_file()
        {
            self.session.choose_input(&path);
        }

        if Self::path_row(ui, "Output File:", &mut self.session.output)
            && let Some(path) = rfd::FileDialog::new()
                .add_filter("Text files", &["txt"])
                .save_file()
        {
            let path = if path.extension().is_none() {
                path.with_extension("txt")
            } else {
                path
            };
            self.session.choose_output(&path);
        }

        ui.add_space(8.0);
        ui.checkbox(&mut self.session.deduplicate, "Remove duplicate emails");
        ui.add_enabled_ui(self.session.deduplicate, |ui| {
            let mut preserve = self.session.casing == DedupCasing::PreserveFirst;
            if ui
                .checkbox(&mut preserve, "Keep original capitalization")
                .changed()
            {
                self.session.casing = if preserve {
                    DedupCasing::PreserveFirst
                } else {
                    DedupCasing::TitleCase
                };
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Extract Emails").clicked()
                && let Err(notice) = self.session.start()
            {
                self.notices.push_back(notice);
            }
            if ui.button("Clear").clicked() {
                self.session.clear();
            }
        });
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notices.front() else {
            return;
        };
        let title = if notice.is_error() { "Error" } else { "Success" };
        let message = notice.message().to_string();

        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.notices.pop_front();
        }
    }
}

impl eframe::App for ExtractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.notices.extend(self.session.poll());

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.session.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading("Email Extractor"));
            ui.add_space(8.0);

            self.form(ui);

            ui.add_space(8.0);
            ui.label("Extracted Emails:");
            egui::ScrollArea::vertical()
                .id_salt("preview_scroll_area")
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.session.preview.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(10),
                    );
                });
        });

        self.notice_window(ctx);

        if self.session.is_running() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("email_harvest=info")),
        )
        .init();

    info!("starting email-harvest v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([600.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Email Extractor",
        options,
        Box::new(|_cc| Ok(Box::new(ExtractorApp::default()))),
    )
}
