use chrono::{NaiveDate, NaiveTime, Timelike};
use ratatui::style::Color;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// `YYYY-MM-DD`, zero-padded. `month` is 1-based.
pub fn format_date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Inverse of [`format_date_key`]. Only the zero-padded form is accepted.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let bytes = key.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Strict `HH:MM` parse.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    if s.len() != 5 || s.as_bytes()[2] != b':' {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// `9:00 AM`, `12:30 PM`, `12:05 AM`.
pub fn format_time_12h(time: NaiveTime) -> String {
    let hour = time.hour();
    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, time.minute(), ampm)
}

/// Minutes since midnight of `time` plus `minutes`, without wrapping.
pub fn end_minutes(time: NaiveTime, minutes: u32) -> u32 {
    (time.hour() * 60 + time.minute()).saturating_add(minutes)
}

/// `HH:MM` of `time + minutes`. Past midnight the hour wraps modulo 24
/// and a `(+N)` day suffix is appended.
pub fn add_minutes_to_time(time: NaiveTime, minutes: u32) -> String {
    let total = end_minutes(time, minutes);
    let days = total / MINUTES_PER_DAY;
    let rem = total % MINUTES_PER_DAY;
    let clock = format!("{:02}:{:02}", rem / 60, rem % 60);
    if days == 0 {
        clock
    } else {
        format!("{} (+{})", clock, days)
    }
}

/// `#rrggbb` (either case).
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}
