use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, Margin, Sense, Stroke, Vec2};

use super::to_color32;
use crate::models::calendar_view::{CalendarView, WEEKDAY_HEADERS};
use crate::services::event_store::EventStore;
use crate::services::navigator::{Clock, Navigator};
use crate::utils::date::{date_key, with_day};

const HEADER_HEIGHT: f32 = 30.0;
const MIN_CELL_HEIGHT: f32 = 48.0;
const INDICATOR_HEIGHT: f32 = 4.0;
const SPACING: f32 = 2.0;

/// Cell colors for the month grid
struct MonthPalette {
    header_bg: Color32,
    header_text: Color32,
    cell_bg: Color32,
    hover_bg: Color32,
    empty_bg: Color32,
    selected_bg: Color32,
    selected_border: Color32,
    today_bg: Color32,
    text: Color32,
    border: Color32,
}

impl MonthPalette {
    fn from_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self {
                header_bg: Color32::from_rgb(45, 48, 55),
                header_text: Color32::from_gray(220),
                cell_bg: Color32::from_rgb(32, 34, 38),
                hover_bg: Color32::from_rgb(40, 43, 48),
                empty_bg: Color32::from_rgb(26, 27, 30),
                selected_bg: Color32::from_rgb(30, 55, 85),
                selected_border: Color32::from_rgb(100, 160, 230),
                today_bg: Color32::from_rgb(40, 70, 110),
                text: Color32::from_gray(230),
                border: Color32::from_gray(60),
            }
        } else {
            Self {
                header_bg: Color32::WHITE,
                header_text: Color32::from_gray(40),
                cell_bg: Color32::WHITE,
                hover_bg: Color32::from_rgb(0xf5, 0xf8, 0xfc),
                empty_bg: Color32::from_rgb(0xf0, 0xf2, 0xf5),
                selected_bg: Color32::from_rgb(0xe3, 0xf2, 0xfd),
                selected_border: Color32::from_rgb(0x4a, 0x90, 0xe2),
                today_bg: Color32::from_rgb(0xbb, 0xde, 0xfb),
                text: Color32::from_gray(30),
                border: Color32::from_gray(215),
            }
        }
    }
}

pub struct MonthView;

impl MonthView {
    /// Draw the month grid. Returns the date of a clicked day, if any.
    pub fn show<C: Clock>(
        ui: &mut egui::Ui,
        view: &CalendarView,
        current_date: NaiveDate,
        navigator: &Navigator<C>,
        store: &EventStore,
        selected_date: Option<NaiveDate>,
    ) -> Option<NaiveDate> {
        let palette = MonthPalette::from_visuals(ui.visuals());
        let col_width = (ui.available_width() - SPACING * 6.0) / 7.0;

        egui::Grid::new("month_header_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for day in WEEKDAY_HEADERS {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(palette.header_bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, palette.border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |ui| {
                                    ui.centered_and_justified(|ui| {
                                        ui.label(
                                            egui::RichText::new(day)
                                                .size(14.0)
                                                .color(palette.header_text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });

        ui.add_space(SPACING * 2.0);

        let rows = view.rows.max(1) as f32;
        let cell_height =
            ((ui.available_height() - SPACING * (rows - 1.0)) / rows).max(MIN_CELL_HEIGHT);

        let mut clicked = None;
        egui::Grid::new("month_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for week in view.weeks() {
                    for slot in week {
                        let size = Vec2::new(col_width, cell_height);
                        let Some(day) = slot else {
                            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
                            ui.painter().rect_filled(rect, 2.0, palette.empty_bg);
                            continue;
                        };
                        let Some(date) = with_day(current_date, day) else {
                            continue;
                        };

                        let events = store.events_on(&date_key(date));
                        let cell = DayCell {
                            day,
                            is_today: navigator.is_today(current_date, day),
                            is_selected: selected_date == Some(date),
                            indicator: events.first().map(|event| to_color32(&event.color)),
                            event_count: events.len(),
                        };
                        if cell.render(ui, size, &palette) {
                            clicked = Some(date);
                        }
                    }
                    ui.end_row();
                }
            });

        clicked
    }
}

/// What a single day cell needs to draw itself
struct DayCell {
    day: u32,
    is_today: bool,
    is_selected: bool,
    /// Color of the day's first event
    indicator: Option<Color32>,
    event_count: usize,
}

impl DayCell {
    /// Returns true when clicked
    fn render(&self, ui: &mut egui::Ui, size: Vec2, palette: &MonthPalette) -> bool {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let painter = ui.painter();

        let bg = if self.is_selected {
            palette.selected_bg
        } else if response.hovered() {
            palette.hover_bg
        } else {
            palette.cell_bg
        };
        painter.rect_filled(rect, 4.0, bg);

        let stroke = if self.is_selected {
            Stroke::new(2.0, palette.selected_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        painter.rect_stroke(rect, 4.0, stroke);

        let label_center = rect.center_top() + Vec2::new(0.0, 18.0);
        if self.is_today {
            painter.circle_filled(label_center, 13.0, palette.today_bg);
        }
        let font = if self.is_today {
            FontId::proportional(15.0)
        } else {
            FontId::proportional(14.0)
        };
        painter.text(
            label_center,
            Align2::CENTER_CENTER,
            self.day.to_string(),
            font,
            palette.text,
        );

        if let Some(color) = self.indicator {
            let strip = egui::Rect::from_min_max(
                egui::pos2(rect.left() + 4.0, rect.bottom() - INDICATOR_HEIGHT - 4.0),
                egui::pos2(rect.right() - 4.0, rect.bottom() - 4.0),
            );
            painter.rect_filled(strip, 2.0, color);
        }

        let response = if self.event_count > 0 {
            let noun = if self.event_count == 1 { "event" } else { "events" };
            response.on_hover_text(format!("{} {}", self.event_count, noun))
        } else {
            response
        };

        response.clicked()
    }
}
