use eframe::egui;
use label_sheet::{FormState, SerialMode};

use crate::ui_components::{BRAND_BLUE, PAPER_WHITE, field_caption, section_frame};

/// What the operator asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Generate,
    ImportSerials,
}

const FIELD_WIDTH: f32 = 260.0;

pub fn entry_id(index: usize) -> egui::Id {
    egui::Id::new(("manual_serial", index))
}

pub fn show_form(ui: &mut egui::Ui, form: &mut FormState) -> FormAction {
    let mut action = FormAction::None;

    section_frame(ui, "Input Details", |ui| {
        egui::Grid::new("input_details")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                if form.mode == SerialMode::Auto {
                    field_caption(ui, "Starting Serial Number:");
                    text_field(ui, &mut form.start_serial);
                    ui.end_row();
                }

                field_caption(ui, "Date (YYYY-MM-DD):");
                text_field(ui, &mut form.date);
                ui.end_row();

                field_caption(ui, "Product Type:");
                text_field(ui, &mut form.product_type);
                ui.end_row();

                field_caption(ui, "Number of Labels:");
                let mut count_text = form.count_text().to_string();
                if text_field(ui, &mut count_text) {
                    form.set_count_text(count_text);
                }
                ui.end_row();

                for mode in [SerialMode::Auto, SerialMode::Manual] {
                    let radio = ui.radio_value(
                        &mut form.mode,
                        mode,
                        egui::RichText::new(mode.name()).strong().color(PAPER_WHITE),
                    );
                    if radio.changed() {
                        log::debug!("Serial mode switched to {}", mode.name());
                    }
                }
                ui.end_row();
            });
    });

    if form.mode == SerialMode::Manual {
        ui.add_space(10.0);
        if show_manual_entries(ui, form) {
            action = FormAction::ImportSerials;
        }
    }

    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        let button = egui::Button::new(
            egui::RichText::new("Generate PDF")
                .strong()
                .color(PAPER_WHITE),
        )
        .fill(BRAND_BLUE);
        if ui.add(button).clicked() {
            action = FormAction::Generate;
        }
    });

    action
}

fn text_field(ui: &mut egui::Ui, value: &mut String) -> bool {
    ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH))
        .changed()
}

/// One field per label with Up/Down moving between fields.
///
/// Returns true when the operator asked to import serials from a file.
fn show_manual_entries(ui: &mut egui::Ui, form: &mut FormState) -> bool {
    let mut import = false;
    let mut focus_move = None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Serial Numbers").strong().color(BRAND_BLUE));
        if ui.button("Import...").clicked() {
            import = true;
        }
    });

    egui::ScrollArea::vertical()
        .max_height(300.0)
        .show(ui, |ui| {
            for (index, entry) in form.manual_entries_mut().iter_mut().enumerate() {
                let response = ui.add(
                    egui::TextEdit::singleline(entry)
                        .id(entry_id(index))
                        .hint_text(format!("Label {}", index + 1))
                        .desired_width(FIELD_WIDTH * 1.6),
                );

                if response.has_focus() {
                    ui.input(|input| {
                        if input.key_pressed(egui::Key::ArrowUp) {
                            focus_move = Some((index, FocusMove::Up));
                        } else if input.key_pressed(egui::Key::ArrowDown) {
                            focus_move = Some((index, FocusMove::Down));
                        }
                    });
                }
            }
        });

    if let Some((index, direction)) = focus_move {
        let target = match direction {
            FocusMove::Up => form.focus_up(index),
            FocusMove::Down => form.focus_down(index),
        };
        if let Some(target) = target {
            ui.memory_mut(|memory| memory.request_focus(entry_id(target)));
        }
    }

    import
}

#[derive(Debug, Clone, Copy)]
enum FocusMove {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ids_are_distinct() {
        assert_ne!(entry_id(0), entry_id(1));
        assert_eq!(entry_id(3), entry_id(3));
    }
}
