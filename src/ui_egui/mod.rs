mod app;
mod event_dialog;
pub mod views;

pub use app::CalendarApp;
