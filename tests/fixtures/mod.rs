// Test fixtures - reusable test data
// Provides consistent dates, event documents and scratch stores

#![allow(dead_code)]

use chrono::NaiveDate;
use month_calendar::services::event_store::EventStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday 15 March 2024
    pub fn mar_15_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Events files as written by different versions of the app
pub mod documents {
    /// Written before events had a color
    pub const LEGACY_NO_COLOR: &str = r#"{
        "2024-03-15": [
            {"time": "14:30", "description": "Meeting"},
            {"time": "09:00", "description": "Standup"}
        ]
    }"#;

    /// Mix of old and new records
    pub const MIXED: &str = r##"{
        "2024-03-15": [
            {"time": "09:00", "description": "Standup", "color": "#ff0000"},
            {"time": "12:00", "description": "Lunch"}
        ],
        "2024-03-16": [
            {"time": "10:00", "description": "Hike", "color": "#10b981"}
        ]
    }"##;

    /// Hand-typed times that were never zero padded
    pub const LEGACY_UNPADDED_TIMES: &str = r##"{
        "2024-03-15": [
            {"time": "14:00", "description": "Review", "color": "#ff0000"},
            {"time": "9:30", "description": "Standup"},
            {"time": "9:5", "description": "Coffee", "color": "#10b981"}
        ]
    }"##;

    /// Truncated mid-write
    pub const TRUNCATED: &str = r#"{"2024-03-15": [{"time": "09:00", "descr"#;
}

/// A scratch directory with the path an events file would live at
pub struct ScratchStore {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl ScratchStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("calendar_events.json");
        Self { dir, path }
    }

    /// Scratch location pre-populated with `contents`
    pub fn with_contents(contents: &str) -> Self {
        let scratch = Self::new();
        std::fs::write(&scratch.path, contents).expect("Failed to write fixture");
        scratch
    }

    pub fn load(&self) -> EventStore {
        EventStore::load(&self.path).expect("Failed to load store")
    }
}
