use super::CalendarApp;

impl CalendarApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // Text fields in the dialog own the keyboard while it is open
        if self.event_dialog_state.is_some() {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.event_dialog_state = None;
            }
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::PageUp) {
                self.navigate_previous();
            }

            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::PageDown) {
                self.navigate_next();
            }

            if i.modifiers.ctrl && i.key_pressed(egui::Key::T) {
                self.jump_to_today();
            }

            if i.modifiers.ctrl && i.key_pressed(egui::Key::N) {
                self.open_add_dialog();
            }

            if i.key_pressed(egui::Key::Delete) {
                self.delete_selected_event();
            }
        });
    }
}
