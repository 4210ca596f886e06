// Module exports for models

pub mod calendar_view;
pub mod event;
pub mod settings;
