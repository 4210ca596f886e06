// Property-based tests for event ordering and the empty-key invariant

use month_calendar::services::event_store::EventStore;
use proptest::prelude::*;

fn time_strategy() -> impl Strategy<Value = String> {
    (0..24u8, 0..60u8).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: after any sequence of adds the day's list is sorted by time
    #[test]
    fn prop_adds_keep_day_sorted(times in prop::collection::vec(time_strategy(), 1..12)) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EventStore::empty(dir.path().join("calendar_events.json"));

        for time in &times {
            store.add("2024-03-15", time, "event", "#4a90e2").unwrap();
        }

        let stored: Vec<String> = store
            .events_on("2024-03-15")
            .iter()
            .map(|e| e.time.to_string())
            .collect();
        let mut expected = times.clone();
        expected.sort();
        prop_assert_eq!(stored, expected);
    }

    /// Property: deleting every event, in any order, removes the date key
    #[test]
    fn prop_deleting_everything_removes_key(
        times in prop::collection::vec(time_strategy(), 1..8),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 8),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EventStore::empty(dir.path().join("calendar_events.json"));
        for time in &times {
            store.add("2024-03-15", time, "", "#4a90e2").unwrap();
        }

        for pick in picks.iter().take(times.len()) {
            prop_assert!(store.contains_date("2024-03-15"));
            let len = store.events_on("2024-03-15").len();
            store.delete("2024-03-15", Some(pick.index(len))).unwrap();
        }

        prop_assert!(!store.contains_date("2024-03-15"));
        prop_assert!(EventStore::load(store.path()).unwrap().is_empty());
    }
}
