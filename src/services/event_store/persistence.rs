use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use super::error::LoadFailure;
use super::migration::{migrate, RawEvent};
use crate::models::event::Event;
use crate::utils::date::is_date_key;

pub type EventMap = BTreeMap<String, Vec<Event>>;

/// Read and migrate the events document. `Ok(None)` means no file yet.
pub fn read_events(path: &Path) -> Result<Option<EventMap>, LoadFailure> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let raw: BTreeMap<String, Vec<RawEvent>> = serde_json::from_str(&data)?;

    let mut migrated = 0;
    let mut events = EventMap::new();
    for (date_key, records) in raw {
        if !is_date_key(&date_key) {
            return Err(LoadFailure::InvalidRecord {
                reason: "key is not a YYYY-MM-DD date".to_string(),
                date_key,
            });
        }

        let mut list = Vec::with_capacity(records.len());
        for mut record in records {
            migrated += migrate(&mut record);
            let event = Event::try_from(record).map_err(|reason| LoadFailure::InvalidRecord {
                date_key: date_key.clone(),
                reason,
            })?;
            list.push(event);
        }

        // Hand-edited files may be out of order or hold empty days
        if list.is_empty() {
            continue;
        }
        list.sort_by_key(|event| event.time);
        events.insert(date_key, list);
    }

    if migrated > 0 {
        log::info!("Migrated {} event record(s) from {}", migrated, path.display());
    }

    Ok(Some(events))
}

/// Write the whole document to a sibling temp file, then rename it over
/// `path` so a failed write never clobbers the previous file.
pub fn write_events(path: &Path, events: &EventMap) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let data = serde_json::to_string_pretty(events)?;
    let tmp_path = sibling_path(path, ".tmp");

    let result = (|| {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// Move an unreadable events file out of the way, keeping it for
/// inspection. Returns where it went.
pub fn quarantine(path: &Path) -> io::Result<PathBuf> {
    let suffix = format!(".corrupt-{}", Local::now().format("%Y%m%d-%H%M%S"));
    let target = sibling_path(path, &suffix);
    fs::rename(path, &target)?;
    Ok(target)
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("events"));
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventTime, HexColor};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn event(time: &str, description: &str) -> Event {
        Event::new(EventTime::parse(time).unwrap(), description, HexColor::default())
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        assert!(read_events(&dir.path().join("none.json")).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        let mut events = EventMap::new();
        events.insert(
            "2024-03-15".to_string(),
            vec![event("09:00", "Standup"), event("14:30", "Review")],
        );

        write_events(&path, &events).unwrap();
        assert_eq!(read_events(&path).unwrap(), Some(events));
        assert!(!sibling_path(&path, ".tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("events.json");
        write_events(&path, &EventMap::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_read_sorts_and_drops_empty_days() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(
            &path,
            r##"{
                "2024-01-01": [],
                "2024-01-02": [
                    {"time": "18:00", "description": "Dinner", "color": "#ff0000"},
                    {"time": "08:00", "description": "Breakfast", "color": "#00ff00"}
                ]
            }"##,
        )
        .unwrap();

        let events = read_events(&path).unwrap().unwrap();
        assert!(!events.contains_key("2024-01-01"));
        let times: Vec<String> = events["2024-01-02"].iter().map(|e| e.time.to_string()).collect();
        assert_eq!(times, vec!["08:00", "18:00"]);
    }

    #[test]
    fn test_read_rejects_bad_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, r#"{"someday": [{"time": "08:00"}]}"#).unwrap();

        assert!(matches!(
            read_events(&path),
            Err(LoadFailure::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_read_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(read_events(&path), Err(LoadFailure::Parse(_))));
    }

    #[test]
    fn test_quarantine_moves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, "garbage").unwrap();

        let moved = quarantine(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(&moved).unwrap(), "garbage");
        assert!(moved
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("events.json.corrupt-"));
    }
}
