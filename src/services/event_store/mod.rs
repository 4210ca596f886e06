//! Event store: the date → events mapping and its JSON file.
//!
//! Every successful mutation is saved before the call returns. A failed
//! save rolls the mutation back so memory and disk never disagree.

use std::path::{Path, PathBuf};

use crate::models::event::{Event, EventTime, HexColor};
use crate::utils::date::is_date_key;

mod error;
pub mod migration;
mod persistence;

pub use error::{LoadFailure, StoreError, StoreResult};
pub use persistence::EventMap;

/// Events per date key, each day's list kept sorted by time.
///
/// Days with no events are never present as keys.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    events: EventMap,
}

impl EventStore {
    /// An empty store that will save to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            events: EventMap::new(),
        }
    }

    /// Load from `path`. A missing file is a first run and yields an empty
    /// store; an unreadable or corrupt file is an error.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        match persistence::read_events(&path) {
            Ok(Some(events)) => {
                log::info!(
                    "Loaded events for {} date(s) from {}",
                    events.len(),
                    path.display()
                );
                Ok(Self { path, events })
            }
            Ok(None) => {
                log::info!("No events file at {}, starting empty", path.display());
                Ok(Self::empty(path))
            }
            Err(source) => Err(StoreError::Load { path, source }),
        }
    }

    /// Startup policy: like [`load`](Self::load), but an unreadable file is
    /// moved aside and an empty store returned along with the error so the
    /// caller can report it.
    pub fn load_or_recover(path: impl Into<PathBuf>) -> (Self, Option<StoreError>) {
        let path = path.into();
        match Self::load(path.clone()) {
            Ok(store) => (store, None),
            Err(err) => {
                log::warn!("{}", err);
                match persistence::quarantine(&path) {
                    Ok(moved) => log::warn!("Preserved unreadable events file as {}", moved.display()),
                    Err(e) => log::error!(
                        "Could not move unreadable events file {} aside: {}",
                        path.display(),
                        e
                    ),
                }
                (Self::empty(path), Some(err))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Events on `date_key`, sorted by time; empty when the day has none.
    pub fn events_on(&self, date_key: &str) -> &[Event] {
        self.events
            .get(date_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains_date(&self, date_key: &str) -> bool {
        self.events.contains_key(date_key)
    }

    /// Date keys with at least one event, ascending
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    /// Number of dates holding events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events across all dates
    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Validate and add an event, then save.
    pub fn add(
        &mut self,
        date_key: &str,
        time: &str,
        description: &str,
        color: &str,
    ) -> StoreResult<()> {
        if !is_date_key(date_key) {
            return Err(StoreError::InvalidDateKey(date_key.to_string()));
        }
        let time = EventTime::parse(time).map_err(|rule| StoreError::InvalidTime {
            input: time.to_string(),
            rule,
        })?;
        let color = HexColor::parse(color).map_err(|reason| StoreError::InvalidColor {
            input: color.to_string(),
            reason,
        })?;

        let previous = self.events.get(date_key).cloned();
        let list = self.events.entry(date_key.to_string()).or_default();
        list.push(Event::new(time, description, color));
        list.sort_by_key(|event| event.time);

        if let Err(err) = self.save() {
            self.restore(date_key, previous);
            return Err(err);
        }

        log::debug!("Added event at {} on {}", time, date_key);
        Ok(())
    }

    /// Remove the event at `index` of the sorted list for `date_key`, then
    /// save. `None` means nothing was selected and is a no-op.
    pub fn delete(&mut self, date_key: &str, index: Option<usize>) -> StoreResult<Event> {
        let index = index.ok_or(StoreError::NothingSelected)?;

        let Some(list) = self.events.get_mut(date_key) else {
            return Err(StoreError::NoSuchEvent {
                date_key: date_key.to_string(),
                index,
            });
        };
        if index >= list.len() {
            return Err(StoreError::NoSuchEvent {
                date_key: date_key.to_string(),
                index,
            });
        }

        let previous = list.clone();
        let removed = list.remove(index);
        if list.is_empty() {
            self.events.remove(date_key);
        }

        if let Err(err) = self.save() {
            self.restore(date_key, Some(previous));
            return Err(err);
        }

        log::debug!("Deleted event at {} on {}", removed.time, date_key);
        Ok(removed)
    }

    /// Write the whole mapping to the store's file.
    pub fn save(&self) -> StoreResult<()> {
        persistence::write_events(&self.path, &self.events).map_err(|source| {
            log::error!("Failed to save events to {}: {}", self.path.display(), source);
            StoreError::Save {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn restore(&mut self, date_key: &str, previous: Option<Vec<Event>>) {
        match previous {
            Some(list) => {
                self.events.insert(date_key.to_string(), list);
            }
            None => {
                self.events.remove(date_key);
            }
        }
    }
}

/// Selected date key, or [`StoreError::NoDateSelected`].
pub fn require_selection(selected: Option<&str>) -> StoreResult<&str> {
    selected.ok_or(StoreError::NoDateSelected)
}
