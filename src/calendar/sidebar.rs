use chrono::{Datelike, NaiveDate};

use super::event::Event;
use super::format::month_name;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub date: NaiveDate,
    /// List order, never re-sorted.
    pub events: Vec<Event>,
}

impl Selection {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn title(&self) -> String {
        format!("Events for {} {}", month_name(self.date.month()), self.day())
    }
}

/// What the right-hand panel shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Sidebar {
    #[default]
    Upcoming,
    Detail(Selection),
}

impl Sidebar {
    /// Switch to the detail view for `date`. A day without events leaves
    /// the sidebar untouched and returns `false`.
    pub fn select(&mut self, date: NaiveDate, events: Vec<Event>) -> bool {
        if events.is_empty() {
            return false;
        }
        *self = Sidebar::Detail(Selection { date, events });
        true
    }

    pub fn back(&mut self) {
        *self = Sidebar::Upcoming;
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Sidebar::Detail(sel) => Some(sel),
            Sidebar::Upcoming => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Sidebar::Detail(_))
    }
}
