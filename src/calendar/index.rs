//! Queries over the static event list.
//!
//! Nothing here reorders the list itself: lookups return events in list
//! order and the overlap checks sort their own copy.

use chrono::NaiveDate;

use super::event::Event;
use super::grid::CalendarCursor;

pub const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    events: Vec<Event>,
}

impl EventIndex {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Events of `day` in the month shown by `cursor`.
    pub fn events_for_day(&self, cursor: &CalendarCursor, day: u32) -> Vec<&Event> {
        match cursor.date_of(day) {
            Some(date) => self.events_on(date),
            None => Vec::new(),
        }
    }

    /// At most `limit` events dated today or later, earliest date first.
    /// Events sharing a date keep list order.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self.events.iter().filter(|e| e.date >= today).collect();
        upcoming.sort_by_key(|e| e.date);
        upcoming.truncate(limit);
        upcoming
    }
}

fn sorted_by_start<'a>(events: &[&'a Event]) -> Vec<&'a Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start);
    sorted
}

/// True when any two events of one day overlap.
///
/// Checks neighbours in start order. That is enough for a yes/no answer:
/// if `a` overlaps some later-starting `c`, it also overlaps whatever
/// starts between them.
pub fn has_time_conflict(events: &[&Event]) -> bool {
    if events.len() < 2 {
        return false;
    }

    sorted_by_start(events)
        .windows(2)
        .any(|pair| pair[1].start_minutes() < pair[0].end_minutes())
}

/// Every overlapping pair as `(earlier id, later id)` in start order.
pub fn conflicting_pairs(events: &[&Event]) -> Vec<(u32, u32)> {
    let sorted = sorted_by_start(events);
    let mut pairs = Vec::new();

    for (i, a) in sorted.iter().enumerate() {
        let a_end = a.end_minutes();
        for b in &sorted[i + 1..] {
            // Later entries start no earlier than `b`.
            if b.start_minutes() >= a_end {
                break;
            }
            pairs.push((a.id, b.id));
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::dataset;
    use chrono::NaiveTime;
    use ratatui::style::Color;

    fn ev(id: u32, date: (i32, u32, u32), time: (u32, u32), duration: u32) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            duration_minutes: duration,
            color: Color::White,
        }
    }

    fn day_events(rows: &[(u32, (u32, u32), u32)]) -> Vec<Event> {
        rows.iter()
            .map(|&(id, t, d)| ev(id, (2025, 6, 20), t, d))
            .collect()
    }

    fn refs(events: &[Event]) -> Vec<&Event> {
        events.iter().collect()
    }

    fn builtin_index() -> EventIndex {
        EventIndex::new(dataset::builtin().unwrap())
    }

    #[test]
    fn test_events_for_day_keeps_list_order() {
        let index = builtin_index();
        let cursor = CalendarCursor::containing(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        let titles: Vec<&str> = index
            .events_for_day(&cursor, 20)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Team Meeting", "Code Review"]);

        let titles: Vec<&str> = index
            .events_for_day(&cursor, 22)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Client Presentation", "Lunch Meeting"]);
    }

    #[test]
    fn test_events_for_day_misses_other_months() {
        let index = builtin_index();
        let july = CalendarCursor::containing(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert!(index.events_for_day(&july, 20).is_empty());
        assert!(index.events_for_day(&july, 0).is_empty());
        assert!(index.events_for_day(&july, 32).is_empty());
    }

    #[test]
    fn test_single_event_never_conflicts() {
        assert!(!has_time_conflict(&[]));
        let one = day_events(&[(1, (9, 0), 600)]);
        assert!(!has_time_conflict(&refs(&one)));
    }

    #[test]
    fn test_overlapping_pair_conflicts() {
        let events = day_events(&[(1, (9, 0), 60), (2, (9, 30), 30)]);
        assert!(has_time_conflict(&refs(&events)));
        assert_eq!(conflicting_pairs(&refs(&events)), vec![(1, 2)]);
    }

    #[test]
    fn test_separate_and_touching_events_do_not_conflict() {
        let separate = day_events(&[(1, (9, 0), 30), (2, (10, 0), 30)]);
        assert!(!has_time_conflict(&refs(&separate)));

        let touching = day_events(&[(1, (9, 0), 60), (2, (10, 0), 30)]);
        assert!(!has_time_conflict(&refs(&touching)));
        assert!(conflicting_pairs(&refs(&touching)).is_empty());
    }

    #[test]
    fn test_conflict_found_regardless_of_list_order() {
        let events = day_events(&[(1, (9, 30), 30), (2, (9, 0), 60)]);
        assert!(has_time_conflict(&refs(&events)));
        assert_eq!(conflicting_pairs(&refs(&events)), vec![(2, 1)]);
    }

    #[test]
    fn test_long_event_covering_later_ones() {
        let events = day_events(&[(1, (9, 0), 180), (2, (9, 30), 10), (3, (10, 0), 10)]);
        assert!(has_time_conflict(&refs(&events)));
        assert_eq!(conflicting_pairs(&refs(&events)), vec![(1, 2), (1, 3)]);
    }

    #[test]
    fn test_event_ending_past_midnight_still_overlaps_late_start() {
        let events = day_events(&[(1, (23, 0), 120), (2, (23, 30), 15)]);
        assert!(has_time_conflict(&refs(&events)));
    }

    #[test]
    fn test_builtin_days_have_no_conflicts() {
        let index = builtin_index();
        for day in 19..=25 {
            let date = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
            assert!(!has_time_conflict(&index.events_on(date)), "day {}", day);
        }
    }

    #[test]
    fn test_upcoming_filters_sorts_and_limits() {
        let index = builtin_index();
        let today = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let ids: Vec<u32> = index.upcoming(today, UPCOMING_LIMIT).iter().map(|e| e.id).collect();
        // 19th is in the past; same-date events keep list order.
        assert_eq!(ids, vec![1, 4, 3, 6, 5]);
    }

    #[test]
    fn test_upcoming_never_shows_past_or_more_than_limit() {
        let index = builtin_index();
        let start = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        for offset in 0..15 {
            let today = start + chrono::Duration::days(offset);
            let upcoming = index.upcoming(today, UPCOMING_LIMIT);
            assert!(upcoming.len() <= UPCOMING_LIMIT);
            assert!(upcoming.iter().all(|e| e.date >= today));
            assert!(upcoming.windows(2).all(|w| w[0].date <= w[1].date));
        }
    }

    #[test]
    fn test_upcoming_empty_after_last_event() {
        let index = builtin_index();
        let today = NaiveDate::from_ymd_opt(2025, 6, 26).unwrap();
        assert!(index.upcoming(today, UPCOMING_LIMIT).is_empty());
    }
}
