mod event_panel;
mod navigation;
mod shortcuts;
mod toast;

use self::toast::ToastManager;
use crate::models::event::HexColor;
use crate::models::settings::AppConfig;
use crate::services::event_store::{EventStore, StoreError};
use crate::services::navigator::Navigator;
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogResult, EventDialogState};
use crate::ui_egui::views::month_view::MonthView;
use crate::utils::date::{date_key, first_of_month};
use chrono::{Datelike, NaiveDate};

pub struct CalendarApp {
    navigator: Navigator,
    store: EventStore,
    /// Day 1 of the month being shown
    current_date: NaiveDate,
    /// Selected day, independent of which month is shown
    selected_date: Option<NaiveDate>,
    /// Row selected in the selected day's event list
    selected_event: Option<usize>,
    default_color: HexColor,
    event_dialog_state: Option<EventDialogState>,
    toast_manager: ToastManager,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        self.render_header(ctx);
        self.render_event_panel(ctx);
        self.render_month(ctx);
        self.render_event_dialog(ctx);

        let style = ctx.style();
        self.toast_manager.render(ctx, &style.visuals);
    }
}

impl CalendarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let events_path = config.events_path();
        log::info!("Using events file {}", events_path.display());

        let (store, load_error) = EventStore::load_or_recover(events_path);
        let mut app = Self::with_store(store, config.default_event_color());

        if let Some(err) = load_error {
            app.toast_manager
                .error(format!("{}. Starting with an empty calendar.", err));
        }
        app
    }

    fn with_store(store: EventStore, default_color: HexColor) -> Self {
        let navigator = Navigator::new();
        let current_date = first_of_month(navigator.today());

        Self {
            navigator,
            store,
            current_date,
            selected_date: None,
            selected_event: None,
            default_color,
            event_dialog_state: None,
            toast_manager: ToastManager::new(),
        }
    }

    fn selected_key(&self) -> Option<String> {
        self.selected_date.map(date_key)
    }

    fn select_day(&mut self, date: NaiveDate) {
        if self.selected_date != Some(date) {
            self.selected_event = None;
        }
        self.selected_date = Some(date);
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("month_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous month").clicked() {
                    self.navigate_previous();
                }

                let title = self.navigator.month_title(self.current_date);
                let label_width = (ui.available_width() - 40.0).max(0.0);
                ui.allocate_ui_with_layout(
                    egui::vec2(label_width, 24.0),
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label(egui::RichText::new(title).size(18.0).strong());
                    },
                );

                if ui.button("▶").on_hover_text("Next month").clicked() {
                    self.navigate_next();
                }
            });
            ui.add_space(6.0);
        });
    }

    fn render_month(&mut self, ctx: &egui::Context) {
        let Some(view) = self
            .navigator
            .grid_for(self.current_date.year(), self.current_date.month())
        else {
            log::error!("No grid for {}", self.current_date);
            return;
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            let clicked = MonthView::show(
                ui,
                &view,
                self.current_date,
                &self.navigator,
                &self.store,
                self.selected_date,
            );
            if let Some(date) = clicked {
                self.select_day(date);
            }
        });
    }

    fn open_add_dialog(&mut self) {
        match self.selected_date {
            Some(date) => {
                self.event_dialog_state =
                    Some(EventDialogState::new_event(date, &self.default_color));
            }
            None => self
                .toast_manager
                .warning(StoreError::NoDateSelected.to_string()),
        }
    }

    fn render_event_dialog(&mut self, ctx: &egui::Context) {
        let Some(state) = self.event_dialog_state.as_mut() else {
            return;
        };

        match render_event_dialog(ctx, state) {
            EventDialogResult::None => {}
            EventDialogResult::Cancelled => {
                self.event_dialog_state = None;
            }
            EventDialogResult::Saved => {
                let key = date_key(state.date);
                let result =
                    self.store
                        .add(&key, state.time.trim(), &state.description, &state.color);

                match result {
                    Ok(()) => {
                        self.toast_manager.success("Event saved");
                        self.selected_event = None;
                        self.event_dialog_state = None;
                    }
                    Err(err) if err.is_user_error() => {
                        state.error_message = Some(err.to_string());
                    }
                    Err(err) => {
                        // Store was rolled back; keep the dialog so nothing typed is lost
                        state.error_message = Some(err.to_string());
                        self.toast_manager.error(err.to_string());
                    }
                }
            }
        }
    }

    fn delete_selected_event(&mut self) {
        let Some(key) = self.selected_key() else {
            self.toast_manager
                .warning(StoreError::NoDateSelected.to_string());
            return;
        };

        match self.store.delete(&key, self.selected_event) {
            Ok(event) => {
                self.selected_event = None;
                self.toast_manager
                    .success(format!("Deleted \"{}\"", event.list_label()));
            }
            // Nothing highlighted in the list; silently ignore like a disabled button
            Err(StoreError::NothingSelected) => {}
            Err(err) if err.is_user_error() => {
                self.selected_event = None;
                self.toast_manager.warning(err.to_string());
            }
            Err(err) => self.toast_manager.error(err.to_string()),
        }
    }
}
