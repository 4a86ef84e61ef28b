use eframe::egui;
use label_sheet::{FormState, GenerationSummary, LabelError, LabelOptions};
use tokio::runtime::Runtime;

use crate::logger::AppLogger;
use crate::ui_components::{BRAND_BLUE, apply_theme};
use crate::views::{FormAction, show_form, show_settings};

/// Blocking message shown over the form
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn from_error(error: &LabelError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.to_string(),
            is_error: true,
        }
    }

    pub fn from_summary(summary: &GenerationSummary) -> Self {
        let mut message = format!(
            "PDF has been created with {} label(s) on {} page(s):\n{}",
            summary.labels_rendered,
            summary.pages,
            summary.output_path.display()
        );
        if summary.labels_skipped > 0 {
            message.push_str(&format!(
                "\n{} blank serial number(s) were left empty.",
                summary.labels_skipped
            ));
        }
        Self {
            title: "Generating PDF".to_string(),
            message,
            is_error: false,
        }
    }
}

pub struct LabelApp {
    form: FormState,
    options: LabelOptions,
    notice: Option<Notice>,
    banner: Option<egui::TextureHandle>,
    logger: AppLogger,
    show_log: bool,
    runtime: Runtime,
}

impl LabelApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        options: LabelOptions,
        logger: AppLogger,
        banner: Option<egui::ColorImage>,
    ) -> Self {
        apply_theme(&cc.egui_ctx);

        let banner = banner.map(|image| {
            cc.egui_ctx
                .load_texture("banner", image, egui::TextureOptions::LINEAR)
        });

        let today = chrono::Local::now().format("%Y-%m-%d").to_string();

        Self {
            form: FormState::with_date(today),
            options,
            notice: None,
            banner,
            logger,
            show_log: false,
            runtime,
        }
    }

    /// Validate, render, save and open in one pass
    fn submit(&mut self) {
        let result = self.form.to_request().and_then(|request| {
            log::info!(
                "Generating {} label(s) for product type {}",
                request.count,
                request.product_type
            );
            self.runtime
                .block_on(label_sheet::generate_and_open(&request, &self.options))
        });

        self.notice = Some(match result {
            Ok(summary) => Notice::from_summary(&summary),
            Err(e) => {
                log::error!("{e}");
                Notice::from_error(&e)
            }
        });
    }

    fn import_serials(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv", "txt"])
            .pick_file()
        else {
            return;
        };

        match self
            .runtime
            .block_on(label_sheet::load_serials_from_csv(&path))
        {
            Ok(serials) => self.form.set_manual_entries(serials),
            Err(e) => {
                log::error!("Failed to import {}: {e}", path.display());
                self.notice = Some(Notice::from_error(&e));
            }
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let response = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            let color = if notice.is_error {
                ui.visuals().error_fg_color
            } else {
                BRAND_BLUE
            };
            ui.heading(egui::RichText::new(&notice.title).color(color));
            ui.add_space(6.0);
            ui.label(&notice.message);
            ui.add_space(10.0);
            ui.button("OK").clicked()
        });

        if response.inner || response.should_close() {
            self.notice = None;
        }
    }

    fn show_log_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("log")
            .resizable(true)
            .show_animated(ctx, self.show_log, |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Log");
                    if ui.small_button("Clear").clicked() {
                        self.logger.clear();
                    }
                });
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in self.logger.entries() {
                            ui.monospace(entry.format_line());
                        }
                    });
            });
    }
}

impl eframe::App for LabelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.toggle_value(&mut self.show_log, "Log");
            });
        });

        self.show_log_panel(ctx);

        let mut action = FormAction::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(banner) = &self.banner {
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Image::new((banner.id(), banner.size_vec2())).max_width(500.0),
                        );
                    });
                    ui.add_space(10.0);
                }

                action = show_form(ui, &mut self.form);
                ui.add_space(10.0);
                show_settings(ui, &mut self.options);
            });
        });

        match action {
            FormAction::Generate => self.submit(),
            FormAction::ImportSerials => self.import_serials(),
            FormAction::None => {}
        }

        self.show_notice(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_notice_from_input_error() {
        let error = LabelError::input("Date and Product Type cannot be empty.");
        let notice = Notice::from_error(&error);
        assert_eq!(notice.title, "Input Error");
        assert_eq!(notice.message, "Date and Product Type cannot be empty.");
        assert!(notice.is_error);
    }

    #[test]
    fn test_notice_from_font_error() {
        let error = LabelError::Font {
            path: PathBuf::from("Arial.ttf"),
            reason: "font not found".to_string(),
        };
        let notice = Notice::from_error(&error);
        assert_eq!(notice.title, "Font Error");
        assert!(notice.message.contains("Arial.ttf"));
    }

    #[test]
    fn test_notice_from_summary_mentions_skipped() {
        let summary = GenerationSummary {
            output_path: PathBuf::from("labels.pdf"),
            labels_rendered: 1,
            labels_skipped: 1,
            pages: 1,
        };
        let notice = Notice::from_summary(&summary);
        assert!(!notice.is_error);
        assert!(notice.message.contains("labels.pdf"));
        assert!(notice.message.contains("1 blank"));
    }
}
