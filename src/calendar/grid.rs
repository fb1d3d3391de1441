use chrono::{Datelike, Months, NaiveDate};

use super::format::month_name;

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day(u32),
}

/// Days of one month laid out in Sunday-first columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub cells: Vec<Cell>,
}

impl MonthGrid {
    /// `month` is 1-based. Returns `None` for an out-of-range month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let offset = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(year, month)?;

        let mut cells = vec![Cell::Blank; offset];
        cells.extend((1..=days).map(Cell::Day));

        Some(Self { cells })
    }
}

/// Length of the month, taken from the day before the first of the next one.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    next.pred_opt().map(|last| last.day())
}

pub fn is_today(year: i32, month: u32, day: u32, today: NaiveDate) -> bool {
    today.day() == day && today.month() == month && today.year() == year
}

/// The displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    first: NaiveDate,
}

impl CalendarCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month()), self.year())
    }

    pub fn next(&mut self) {
        if let Some(d) = self.first.checked_add_months(Months::new(1)) {
            self.first = d;
        }
    }

    pub fn prev(&mut self) {
        if let Some(d) = self.first.checked_sub_months(Months::new(1)) {
            self.first = d;
        }
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.year(), self.month()).unwrap_or(MonthGrid { cells: Vec::new() })
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year(), self.month()).unwrap_or(28)
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    pub fn is_today(&self, day: u32, today: NaiveDate) -> bool {
        is_today(self.year(), self.month(), day, today)
    }
}
