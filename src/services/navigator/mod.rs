//! Month navigation and grid computation.
//!
//! The navigator is pure date arithmetic; the only outside input is the
//! current date, supplied by a [`Clock`] so "today" can be pinned in tests.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::calendar_view::CalendarView;
use crate::utils::date::first_of_month;

/// Source of the current local date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time via `chrono::Local`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Maps reference dates to month grids and steps between months.
#[derive(Debug, Clone, Default)]
pub struct Navigator<C: Clock = SystemClock> {
    clock: C,
}

impl Navigator<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Navigator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Grid layout for (year, month); `None` if that month does not exist.
    pub fn grid_for(&self, year: i32, month: u32) -> Option<CalendarView> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days_in_month = last_day_of_month(first)?.day();
        let start_column = first.weekday().num_days_from_monday();

        Some(CalendarView::layout(year, month, days_in_month, start_column))
    }

    /// First day of the month after `date`.
    ///
    /// Day 28 plus four days always lands in the following month, whatever
    /// the month's length.
    pub fn next_month(&self, date: NaiveDate) -> NaiveDate {
        let late = date.with_day(28).unwrap_or(date);
        first_of_month(late + Duration::days(4))
    }

    /// Last day of the month before `date`.
    ///
    /// Callers wanting day 1 as the reference should pass the result
    /// through [`first_of_month`].
    pub fn previous_month(&self, date: NaiveDate) -> NaiveDate {
        first_of_month(date) - Duration::days(1)
    }

    /// True when `day` of `date`'s month is the clock's current date.
    pub fn is_today(&self, date: NaiveDate, day: u32) -> bool {
        let today = self.clock.today();
        date.year() == today.year() && date.month() == today.month() && day == today.day()
    }

    /// Header label, e.g. `March 2024`
    pub fn month_title(&self, date: NaiveDate) -> String {
        date.format("%B %Y").to_string()
    }
}

/// Last day of `first`'s month: jump 32 days ahead, back up to day 1 of
/// that month, then step back one day.
fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let next = first.checked_add_signed(Duration::days(32))?;
    first_of_month(next).pred_opt()
}
