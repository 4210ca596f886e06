use super::CalendarApp;
use crate::utils::date::first_of_month;

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        // previous_month lands on the last day; the view is keyed on day 1
        self.current_date = first_of_month(self.navigator.previous_month(self.current_date));
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = self.navigator.next_month(self.current_date);
    }

    pub(super) fn jump_to_today(&mut self) {
        let today = self.navigator.today();
        self.current_date = first_of_month(today);
        self.select_day(today);
    }
}
