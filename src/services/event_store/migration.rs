//! Load-time schema migration for the events file.
//!
//! Records are read loosely as [`RawEvent`], upgraded by each step in
//! [`MIGRATIONS`] in order, and only then converted into validated
//! [`Event`]s. New fields get a step here instead of special cases in the
//! model.

use serde::Deserialize;

use crate::models::event::{Event, EventTime, HexColor, DEFAULT_EVENT_COLOR};

/// An event record as it may appear in any historical version of the file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// A migration step; returns whether the record was changed.
pub type MigrationStep = fn(&mut RawEvent) -> bool;

/// Steps applied to every record, oldest first
pub const MIGRATIONS: &[(&str, MigrationStep)] = &[
    ("backfill color", backfill_color),
    ("pad time", pad_time),
];

/// Records created before events had colors get the default.
fn backfill_color(raw: &mut RawEvent) -> bool {
    if raw.color.is_some() {
        return false;
    }
    raw.color = Some(DEFAULT_EVENT_COLOR.to_string());
    true
}

/// Older files may hold unpadded times such as `9:30` or `9:5`; rewrite
/// them as `HH:MM`. Anything else is left for validation to reject.
fn pad_time(raw: &mut RawEvent) -> bool {
    let Some((hour, minute)) = raw.time.split_once(':') else {
        return false;
    };
    let is_short_number =
        |part: &str| (1..=2).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit());
    if !is_short_number(hour) || !is_short_number(minute) {
        return false;
    }

    let padded = format!("{:0>2}:{:0>2}", hour, minute);
    if padded == raw.time {
        return false;
    }
    raw.time = padded;
    true
}

/// Run every migration step over `raw`; returns the number of changes.
pub fn migrate(raw: &mut RawEvent) -> usize {
    let mut changed = 0;
    for &(name, step) in MIGRATIONS {
        if step(raw) {
            log::debug!("Applied migration '{}' to event at {}", name, raw.time);
            changed += 1;
        }
    }
    changed
}

impl TryFrom<RawEvent> for Event {
    type Error = String;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let time = EventTime::parse(&raw.time)
            .map_err(|rule| format!("invalid time '{}': {}", raw.time, rule))?;
        let color = match raw.color {
            Some(color) => HexColor::parse(&color)?,
            None => HexColor::default(),
        };

        Ok(Event::new(time, raw.description, color))
    }
}
