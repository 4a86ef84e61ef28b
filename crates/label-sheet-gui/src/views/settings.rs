use eframe::egui;
use label_sheet::{FontSource, LabelOptions};
use std::path::PathBuf;

use crate::ui_components::labeled_drag_clamped;

pub fn show_settings(ui: &mut egui::Ui, options: &mut LabelOptions) {
    egui::CollapsingHeader::new("Output Settings")
        .default_open(false)
        .show(ui, |ui| {
            show_font_section(ui, options);
            ui.add_space(6.0);
            show_output_section(ui, options);
            ui.add_space(6.0);
            show_geometry_section(ui, options);
        });
}

fn show_font_section(ui: &mut egui::Ui, options: &mut LabelOptions) {
    let mut builtin = options.font == FontSource::Builtin;
    if ui
        .checkbox(&mut builtin, "Use built-in Helvetica")
        .changed()
    {
        options.font = if builtin {
            FontSource::Builtin
        } else {
            FontSource::default()
        };
    }

    if let FontSource::File(path) = &mut options.font {
        ui.horizontal(|ui| {
            ui.label("Font file:");
            let mut text = path.display().to_string();
            if ui.text_edit_singleline(&mut text).changed() {
                *path = PathBuf::from(text);
            }
            if ui.button("Browse...").clicked() {
                if let Some(picked) = rfd::FileDialog::new()
                    .add_filter("TrueType font", &["ttf", "otf"])
                    .pick_file()
                {
                    log::info!("Using font {}", picked.display());
                    *path = picked;
                }
            }
        });
    }

    labeled_drag_clamped(
        ui,
        "Font size:",
        &mut options.template.font_size_pt,
        6.0..=36.0,
        " pt",
    );
}

fn show_output_section(ui: &mut egui::Ui, options: &mut LabelOptions) {
    ui.horizontal(|ui| {
        ui.label("Output file:");
        let mut text = options.output_path.display().to_string();
        if ui.text_edit_singleline(&mut text).changed() {
            options.output_path = PathBuf::from(text);
        }
    });
}

fn show_geometry_section(ui: &mut egui::Ui, options: &mut LabelOptions) {
    let geometry = &options.geometry;
    ui.label(format!(
        "Sheet: {:.0} x {:.0} pt, {} x {} labels of {:.1} x {:.1} pt",
        geometry.page_width_pt,
        geometry.page_height_pt,
        geometry.columns,
        geometry.rows,
        geometry.label_width_pt,
        geometry.label_height_pt,
    ));

    let geometry = &mut options.geometry;
    labeled_drag_clamped(ui, "Margin:", &mut geometry.margin_pt, 0.0..=144.0, " pt");
    labeled_drag_clamped(
        ui,
        "Column spacing:",
        &mut geometry.x_spacing_pt,
        0.0..=72.0,
        " pt",
    );
    labeled_drag_clamped(
        ui,
        "Row spacing:",
        &mut geometry.y_spacing_pt,
        0.0..=72.0,
        " pt",
    );
}
