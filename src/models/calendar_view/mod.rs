// Calendar view module
// Derived month grid layout, recomputed on every navigation

/// Number of columns in the month grid (Monday..Sunday)
pub const DAYS_PER_WEEK: u32 = 7;

/// Weekday header labels, Monday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Position of one day in the month grid.
///
/// Row 0 is reserved for the weekday headers, so day rows start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub day: u32,
    pub row: u32,
    pub col: u32,
}

/// Month grid for one (year, month)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Column of day 1 (0 = Monday .. 6 = Sunday)
    pub start_column: u32,
    /// Number of day rows, not counting the header row
    pub rows: u32,
    /// Cells for days 1..=days_in_month, in day order
    pub cells: Vec<GridCell>,
}

impl CalendarView {
    /// Lay out a month given its length and the column of its first day.
    pub fn layout(year: i32, month: u32, days_in_month: u32, start_column: u32) -> Self {
        let cells = (1..=days_in_month)
            .map(|day| {
                let offset = start_column + day - 1;
                GridCell {
                    day,
                    row: 1 + offset / DAYS_PER_WEEK,
                    col: offset % DAYS_PER_WEEK,
                }
            })
            .collect();

        Self {
            year,
            month,
            days_in_month,
            start_column,
            rows: (start_column + days_in_month).div_ceil(DAYS_PER_WEEK),
            cells,
        }
    }

    /// Cell for a given day of the month
    pub fn cell_for(&self, day: u32) -> Option<GridCell> {
        if day == 0 {
            return None;
        }
        self.cells.get(day as usize - 1).copied()
    }

    /// Day shown at (row, col), or `None` for blank cells and the header row
    pub fn day_at(&self, row: u32, col: u32) -> Option<u32> {
        if row == 0 || col >= DAYS_PER_WEEK {
            return None;
        }
        let offset = (row - 1) * DAYS_PER_WEEK + col;
        if offset < self.start_column {
            return None;
        }
        let day = offset - self.start_column + 1;
        (day <= self.days_in_month).then_some(day)
    }

    /// Iterate the grid row by row; blank cells yield `None`.
    pub fn weeks(&self) -> impl Iterator<Item = [Option<u32>; 7]> + '_ {
        (1..=self.rows).map(move |row| {
            let mut week = [None; 7];
            for (col, slot) in week.iter_mut().enumerate() {
                *slot = self.day_at(row, col as u32);
            }
            week
        })
    }
}
