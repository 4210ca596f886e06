// Property-based tests for the month grid and month stepping

use chrono::{Datelike, NaiveDate};
use month_calendar::services::navigator::Navigator;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Property: every day gets exactly one cell and no cell is shared
    #[test]
    fn prop_grid_cells_are_distinct(year in 1900..2200i32, month in 1..=12u32) {
        let view = Navigator::new().grid_for(year, month).unwrap();

        prop_assert_eq!(view.cells.len() as u32, view.days_in_month);

        let mut seen = HashSet::new();
        for (i, cell) in view.cells.iter().enumerate() {
            prop_assert_eq!(cell.day, i as u32 + 1);
            prop_assert!(cell.col < 7);
            prop_assert!(cell.row >= 1 && cell.row <= view.rows);
            prop_assert!(seen.insert((cell.row, cell.col)));
        }
    }

    /// Property: columns cycle Monday..Sunday from the first day's weekday
    #[test]
    fn prop_grid_columns_follow_weekdays(year in 1900..2200i32, month in 1..=12u32) {
        let view = Navigator::new().grid_for(year, month).unwrap();

        for cell in &view.cells {
            let date = NaiveDate::from_ymd_opt(year, month, cell.day).unwrap();
            prop_assert_eq!(cell.col, date.weekday().num_days_from_monday());
        }
    }

    /// Property: rows = ceil((start_column + days) / 7), always 4 to 6
    #[test]
    fn prop_grid_row_count(year in 1900..2200i32, month in 1..=12u32) {
        let view = Navigator::new().grid_for(year, month).unwrap();

        let expected = (view.start_column + view.days_in_month + 6) / 7;
        prop_assert_eq!(view.rows, expected);
        prop_assert!((4..=6).contains(&view.rows));
        prop_assert_eq!(view.cells.last().unwrap().row, view.rows);
    }

    /// Property: days_in_month is the last valid day of the month
    #[test]
    fn prop_days_in_month_is_last_day(year in 1900..2200i32, month in 1..=12u32) {
        let view = Navigator::new().grid_for(year, month).unwrap();

        prop_assert!(NaiveDate::from_ymd_opt(year, month, view.days_in_month).is_some());
        prop_assert!(NaiveDate::from_ymd_opt(year, month, view.days_in_month + 1).is_none());
    }

    /// Property: next_month lands on day 1 of the following month from any day
    #[test]
    fn prop_next_month_is_first_of_following(
        year in 1900..2200i32,
        month in 1..=12u32,
        day in 1..=31u32,
    ) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return Ok(());
        };
        let next = Navigator::new().next_month(date);

        prop_assert_eq!(next.day(), 1);
        let months_apart = (next.year() * 12 + next.month() as i32) - (year * 12 + month as i32);
        prop_assert_eq!(months_apart, 1);
    }

    /// Property: next then previous from day 1 of M stays in month M
    #[test]
    fn prop_next_then_previous_round_trips_month(year in 1900..2200i32, month in 1..=12u32) {
        let navigator = Navigator::new();
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let back = navigator.previous_month(navigator.next_month(first));

        prop_assert_eq!((back.year(), back.month()), (year, month));
    }
}
