use chrono::{Datelike, NaiveDate, NaiveTime};
use ratatui::style::Color;

use super::format::{add_minutes_to_time, end_minutes, format_date_key, format_time_12h};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub duration_minutes: u32,
    pub color: Color,
}

impl Event {
    pub fn start_minutes(&self) -> u32 {
        end_minutes(self.start, 0)
    }

    /// Minutes since midnight at which the event ends. Not wrapped.
    pub fn end_minutes(&self) -> u32 {
        end_minutes(self.start, self.duration_minutes)
    }

    pub fn end_display(&self) -> String {
        add_minutes_to_time(self.start, self.duration_minutes)
    }

    /// `9:00 AM (60 min)`
    pub fn duration_display(&self) -> String {
        format!(
            "{} ({} min)",
            format_time_12h(self.start),
            self.duration_minutes
        )
    }

    pub fn date_key(&self) -> String {
        format_date_key(self.date.year(), self.date.month(), self.date.day())
    }
}
