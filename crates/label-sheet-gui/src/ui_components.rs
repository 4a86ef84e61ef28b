use eframe::egui;
use egui::{Color32, RichText};

pub const BRAND_BLUE: Color32 = Color32::from_rgb(0x00, 0x87, 0xbe);
pub const PAPER_WHITE: Color32 = Color32::from_rgb(0xfe, 0xff, 0xff);
pub const HEADING_WHITE: Color32 = Color32::from_rgb(0xff, 0xfe, 0xff);

/// Light theme in the company colours
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAPER_WHITE;
    visuals.window_fill = PAPER_WHITE;
    visuals.extreme_bg_color = PAPER_WHITE;
    visuals.selection.bg_fill = BRAND_BLUE;
    visuals.widgets.inactive.fg_stroke.color = BRAND_BLUE;
    visuals.widgets.hovered.bg_stroke.color = BRAND_BLUE;
    ctx.set_visuals(visuals);
}

/// Blue framed group with a bold white title
pub fn section_frame<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(BRAND_BLUE)
        .stroke(egui::Stroke::new(1.0, Color32::BLACK))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(title).strong().size(16.0).color(HEADING_WHITE));
            ui.add_space(6.0);
            add_contents(ui)
        })
        .inner
}

/// Bold white caption for a row inside a [`section_frame`]
pub fn field_caption(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong().color(HEADING_WHITE));
}

/// Labeled drag value clamped to `range`, laid out on one row
pub fn labeled_drag_clamped<T>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    range: std::ops::RangeInclusive<T>,
    suffix: &str,
) -> bool
where
    T: egui::emath::Numeric,
{
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(value)
                .range(range)
                .suffix(suffix)
                .speed(0.1),
        )
        .changed()
    })
    .inner
}
