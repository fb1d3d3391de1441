use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use super::event::Event;
use super::format::{parse_clock, parse_date_key, parse_hex_color, MINUTES_PER_DAY};

/// One event exactly as written in the source table.
#[derive(Debug, Clone, Copy)]
pub struct RawEvent {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub duration: u32,
    pub color: &'static str,
}

/// Longest accepted event. Keeps end-of-event arithmetic within a day
/// of the start.
pub const MAX_DURATION_MINUTES: u32 = MINUTES_PER_DAY;

pub const BUILTIN_EVENTS: &[RawEvent] = &[
    RawEvent {
        id: 1,
        title: "Team Meeting",
        date: "2025-06-20",
        time: "09:00",
        duration: 60,
        color: "#3B82F6",
    },
    RawEvent {
        id: 2,
        title: "Project Deadline",
        date: "2025-06-25",
        time: "17:00",
        duration: 30,
        color: "#EF4444",
    },
    RawEvent {
        id: 3,
        title: "Client Presentation",
        date: "2025-06-22",
        time: "14:00",
        duration: 90,
        color: "#10B981",
    },
    RawEvent {
        id: 4,
        title: "Code Review",
        date: "2025-06-20",
        time: "11:00",
        duration: 45,
        color: "#F59E0B",
    },
    RawEvent {
        id: 5,
        title: "Sprint Planning",
        date: "2025-06-23",
        time: "10:00",
        duration: 120,
        color: "#8B5CF6",
    },
    RawEvent {
        id: 6,
        title: "Lunch Meeting",
        date: "2025-06-22",
        time: "12:30",
        duration: 60,
        color: "#06B6D4",
    },
    RawEvent {
        id: 7,
        title: "Workshop",
        date: "2025-06-19",
        time: "15:00",
        duration: 180,
        color: "#EC4899",
    },
];

#[derive(Error, Debug, PartialEq)]
pub enum DatasetError {
    #[error("Duplicate event id {0}")]
    DuplicateId(u32),

    #[error("Event {id}: title is empty")]
    EmptyTitle { id: u32 },

    #[error("Event {id}: invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { id: u32, value: String },

    #[error("Event {id}: invalid time {value:?}, expected HH:MM")]
    InvalidTime { id: u32, value: String },

    #[error("Event {id}: duration must be between 1 and 1440 minutes")]
    InvalidDuration { id: u32 },

    #[error("Event {id}: invalid color {value:?}, expected #rrggbb")]
    InvalidColor { id: u32, value: String },
}

/// Validate the whole table. The first malformed record rejects the set.
pub fn load(raw: &[RawEvent]) -> Result<Vec<Event>, DatasetError> {
    let mut ids = HashSet::new();
    let mut events = Vec::with_capacity(raw.len());

    for r in raw {
        if !ids.insert(r.id) {
            return Err(DatasetError::DuplicateId(r.id));
        }
        if r.title.trim().is_empty() {
            return Err(DatasetError::EmptyTitle { id: r.id });
        }
        let date = parse_date_key(r.date).ok_or_else(|| DatasetError::InvalidDate {
            id: r.id,
            value: r.date.to_string(),
        })?;
        let start = parse_clock(r.time).ok_or_else(|| DatasetError::InvalidTime {
            id: r.id,
            value: r.time.to_string(),
        })?;
        if r.duration == 0 || r.duration > MAX_DURATION_MINUTES {
            return Err(DatasetError::InvalidDuration { id: r.id });
        }
        let color = parse_hex_color(r.color).ok_or_else(|| DatasetError::InvalidColor {
            id: r.id,
            value: r.color.to_string(),
        })?;

        events.push(Event {
            id: r.id,
            title: r.title.to_string(),
            date,
            start,
            duration_minutes: r.duration,
            color,
        });
    }

    debug!(count = events.len(), "event dataset loaded");
    Ok(events)
}

pub fn builtin() -> Result<Vec<Event>, DatasetError> {
    load(BUILTIN_EVENTS)
}
