use crate::models::event::HexColor;
use chrono::NaiveDate;
use egui::{Color32, RichText};

/// State for the Add Event dialog
pub struct EventDialogState {
    pub date: NaiveDate,
    pub time: String,
    pub description: String,
    /// Hex text; validated by the store on save
    pub color: String,
    pub error_message: Option<String>,
}

/// Outcome of one frame of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDialogResult {
    None,
    Saved,
    Cancelled,
}

impl EventDialogState {
    pub fn new_event(date: NaiveDate, default_color: &HexColor) -> Self {
        Self {
            date,
            time: String::new(),
            description: String::new(),
            color: default_color.to_string(),
            error_message: None,
        }
    }
}

const COLOR_PRESETS: &[(&str, &str)] = &[
    ("Blue", "#4a90e2"),
    ("Green", "#10b981"),
    ("Red", "#ef4444"),
    ("Yellow", "#f59e0b"),
    ("Purple", "#8b5cf6"),
    ("Pink", "#ec4899"),
];

pub fn render_event_dialog(ctx: &egui::Context, state: &mut EventDialogState) -> EventDialogResult {
    let mut result = EventDialogResult::None;
    let mut open = true;

    egui::Window::new("Add Event")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label(RichText::new(state.date.format("%A, %B %-d, %Y").to_string()).strong());
            ui.add_space(8.0);

            egui::Grid::new("event_dialog_fields")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Time (HH:MM):");
                    let time_edit = ui.add(
                        egui::TextEdit::singleline(&mut state.time)
                            .hint_text("14:30")
                            .desired_width(80.0),
                    );
                    if time_edit.changed() {
                        state.error_message = None;
                    }
                    ui.end_row();

                    ui.label("Description:");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.description).desired_width(200.0),
                    );
                    ui.end_row();

                    ui.label("Color:");
                    ui.horizontal(|ui| {
                        ui.add(egui::TextEdit::singleline(&mut state.color).desired_width(80.0));
                        if let Ok(parsed) = HexColor::parse(&state.color) {
                            let (r, g, b) = parsed.rgb();
                            let mut color = Color32::from_rgb(r, g, b);
                            if ui.color_edit_button_srgba(&mut color).changed() {
                                state.color = HexColor::from_rgb(color.r(), color.g(), color.b()).to_string();
                            }
                        }
                    });
                    ui.end_row();
                });

            ui.horizontal_wrapped(|ui| {
                for (name, hex) in COLOR_PRESETS {
                    if ui.small_button(*name).clicked() {
                        state.color = hex.to_string();
                    }
                }
            });

            if let Some(message) = &state.error_message {
                ui.add_space(6.0);
                ui.colored_label(Color32::from_rgb(200, 60, 60), message.as_str());
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Save").clicked() || enter {
                    result = EventDialogResult::Saved;
                }
                if ui.button("Cancel").clicked() {
                    result = EventDialogResult::Cancelled;
                }
            });
        });

    if !open {
        result = EventDialogResult::Cancelled;
    }
    result
}
