use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::index::{conflicting_pairs, has_time_conflict, UPCOMING_LIMIT};
use crate::calendar::{CalendarCursor, Cell, Event, EventIndex, Sidebar};
use crate::event::Action;

/// One grid position with everything the month view draws in it.
///
/// A day with two or more events lists them by start time.
#[derive(Debug, Clone)]
pub struct DayCell<'a> {
    pub cell: Cell,
    pub events: Vec<&'a Event>,
    pub has_conflict: bool,
    pub is_today: bool,
    pub is_focused: bool,
    pub is_selected: bool,
}

pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub today: NaiveDate,
    pub cursor: CalendarCursor,
    pub focused_day: u32,
    pub sidebar: Sidebar,
    pub status_message: Option<String>,
    index: EventIndex,
}

impl App {
    pub fn new(index: EventIndex, today: NaiveDate, start: Option<NaiveDate>) -> Self {
        let cursor = CalendarCursor::containing(start.unwrap_or(today));
        let focused_day = if cursor.is_today(today.day(), today) {
            today.day()
        } else {
            1
        };

        Self {
            running: true,
            show_help: false,
            today,
            cursor,
            focused_day,
            sidebar: Sidebar::default(),
            status_message: None,
            index,
        }
    }

    pub fn apply(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::ToggleHelp | Action::Back => self.show_help = false,
                Action::Quit => self.running = false,
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => self.show_help = true,
            Action::PrevMonth => self.prev_month(),
            Action::NextMonth => self.next_month(),
            Action::Today => self.go_to_today(),
            Action::Move(delta) => self.move_focus(delta),
            Action::Select => self.select_focused_day(),
            Action::Back => self.back_to_upcoming(),
        }
    }

    pub fn next_month(&mut self) {
        self.cursor.next();
        self.on_month_changed();
    }

    pub fn prev_month(&mut self) {
        self.cursor.prev();
        self.on_month_changed();
    }

    pub fn go_to_today(&mut self) {
        self.cursor = CalendarCursor::containing(self.today);
        self.focused_day = self.today.day();
        debug!(month = %self.cursor.title(), "jumped to today");
    }

    fn on_month_changed(&mut self) {
        // Keep the focused day, clamped into the new month.
        self.focused_day = self.focused_day.min(self.cursor.days());
        debug!(month = %self.cursor.title(), "month changed");
    }

    /// Move the focused day by `delta` days, staying inside the month.
    pub fn move_focus(&mut self, delta: i64) {
        let last = self.cursor.days() as i64;
        self.focused_day = (self.focused_day as i64 + delta).clamp(1, last) as u32;
    }

    pub fn events_for_day(&self, day: u32) -> Vec<&Event> {
        self.index.events_for_day(&self.cursor, day)
    }

    /// Show the events of `day` in the sidebar. Days without events
    /// leave the sidebar as it was.
    pub fn select_day(&mut self, day: u32) -> bool {
        let Some(date) = self.cursor.date_of(day) else {
            return false;
        };
        let events: Vec<Event> = self.events_for_day(day).into_iter().cloned().collect();
        let count = events.len();

        if self.sidebar.select(date, events) {
            debug!(%date, count, "day selected");
            true
        } else {
            debug!(%date, "no events on day, selection ignored");
            self.status_message = Some(format!("No events on {}", date.format("%B %-d")));
            false
        }
    }

    pub fn select_focused_day(&mut self) {
        self.select_day(self.focused_day);
    }

    pub fn back_to_upcoming(&mut self) {
        if self.sidebar.is_detail() {
            debug!("back to upcoming events");
        }
        self.sidebar.back();
    }

    pub fn upcoming(&self) -> Vec<&Event> {
        self.index.upcoming(self.today, UPCOMING_LIMIT)
    }

    /// Ids of selected-day events that overlap another one.
    pub fn selection_conflicts(&self) -> HashSet<u32> {
        let Some(selection) = self.sidebar.selection() else {
            return HashSet::new();
        };
        let refs: Vec<&Event> = selection.events.iter().collect();
        conflicting_pairs(&refs)
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect()
    }

    pub fn day_cells(&self) -> Vec<DayCell<'_>> {
        let selected = self.sidebar.selection().map(|s| s.date);

        self.cursor
            .grid()
            .cells
            .into_iter()
            .map(|cell| match cell {
                Cell::Blank => DayCell {
                    cell,
                    events: Vec::new(),
                    has_conflict: false,
                    is_today: false,
                    is_focused: false,
                    is_selected: false,
                },
                Cell::Day(day) => {
                    let mut events = self.events_for_day(day);
                    if events.len() >= 2 {
                        events.sort_by_key(|e| e.start);
                    }
                    DayCell {
                        cell,
                        has_conflict: has_time_conflict(&events),
                        events,
                        is_today: self.cursor.is_today(day, self.today),
                        is_focused: day == self.focused_day,
                        is_selected: selected.is_some() && selected == self.cursor.date_of(day),
                    }
                }
            })
            .collect()
    }
}
