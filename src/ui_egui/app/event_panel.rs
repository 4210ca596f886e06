//! Event list for the selected day, with Add/Delete buttons.

use super::CalendarApp;
use crate::ui_egui::views::to_color32;
use egui::{RichText, Vec2};

const PANEL_HEIGHT: f32 = 200.0;

impl CalendarApp {
    pub(super) fn render_event_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("event_panel")
            .resizable(true)
            .default_height(PANEL_HEIGHT)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let heading = match self.selected_date {
                        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
                        None => "No date selected".to_string(),
                    };
                    ui.label(RichText::new(heading).strong());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let can_delete = self.selected_event.is_some();
                        if ui
                            .add_enabled(can_delete, egui::Button::new("Delete Event"))
                            .clicked()
                        {
                            self.delete_selected_event();
                        }
                        if ui.button("Add Event").clicked() {
                            self.open_add_dialog();
                        }
                    });
                });
                ui.separator();
                self.render_event_list(ui);
            });
    }

    fn render_event_list(&mut self, ui: &mut egui::Ui) {
        let Some(key) = self.selected_key() else {
            ui.weak("Select a day to see its events.");
            return;
        };

        let events = self.store.events_on(&key);
        if events.is_empty() {
            ui.weak("No events on this day.");
            return;
        }

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, event) in events.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), egui::Sense::hover());
                        ui.painter().rect_filled(swatch, 2.0, to_color32(&event.color));

                        let selected = self.selected_event == Some(index);
                        if ui.selectable_label(selected, event.list_label()).clicked() {
                            clicked = Some(index);
                        }
                    });
                }
            });

        if let Some(index) = clicked {
            self.selected_event = Some(index);
        }
    }
}
