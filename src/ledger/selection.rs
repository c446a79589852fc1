use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::month::{shift_month, MonthKey, MonthWindow};

/// The month currently used as the aggregation window anchor.
///
/// Any date is accepted; only its year and month matter to aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    selected: NaiveDate,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl SelectionState {
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    pub fn selected_month(&self) -> NaiveDate {
        self.selected
    }

    pub fn set_selected_month(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn previous_month(&mut self) -> NaiveDate {
        self.selected = shift_month(self.selected, -1);
        self.selected
    }

    pub fn next_month(&mut self) -> NaiveDate {
        self.selected = shift_month(self.selected, 1);
        self.selected
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.selected)
    }

    pub fn window(&self) -> MonthWindow {
        MonthWindow::containing(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_moves_whole_months() {
        let mut selection = SelectionState::new(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(
            selection.previous_month(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        selection.next_month();
        selection.next_month();
        assert_eq!(selection.month_key().to_string(), "2024-04");
    }

    #[test]
    fn accepts_far_past_and_future_dates() {
        let mut selection = SelectionState::default();
        selection.set_selected_month(NaiveDate::from_ymd_opt(1901, 7, 4).unwrap());
        assert_eq!(selection.month_key().to_string(), "1901-07");
        selection.set_selected_month(NaiveDate::from_ymd_opt(2999, 12, 25).unwrap());
        assert_eq!(selection.window().end, NaiveDate::from_ymd_opt(2999, 12, 31).unwrap());
    }
}
