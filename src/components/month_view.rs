use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::DayCell;
use crate::calendar::format::truncate;
use crate::calendar::grid::DAY_NAMES;
use crate::calendar::Cell;
use crate::theme::{self, Theme};

/// Titles shown per cell before collapsing into "+N more".
const MAX_TITLES: usize = 2;

pub struct MonthView;

impl MonthView {
    pub fn render(frame: &mut Frame, area: Rect, title: &str, cells: &[DayCell]) {
        let theme = theme::current();

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let weeks: Vec<&[DayCell]> = cells.chunks(7).collect();
        if weeks.is_empty() {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);
        let columns = || Layout::horizontal([Constraint::Ratio(1, 7); 7]);

        // Header row
        for (name, col) in DAY_NAMES.iter().zip(columns().split(rows[0]).iter()) {
            let header = Paragraph::new(Line::from(Span::styled(
                format!("{:^width$}", name, width = col.width as usize),
                theme.header,
            )));
            frame.render_widget(header, *col);
        }

        let week_rows =
            Layout::vertical(vec![Constraint::Ratio(1, weeks.len() as u32); weeks.len()])
                .split(rows[1]);

        for (week, row) in weeks.iter().zip(week_rows.iter()) {
            for (cell, col) in week.iter().zip(columns().split(*row).iter()) {
                render_cell(frame, *col, cell, theme);
            }
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &DayCell, theme: &Theme) {
    let Cell::Day(day) = cell.cell else {
        return;
    };

    let number_style = if cell.is_focused {
        theme.selected.add_modifier(Modifier::BOLD)
    } else if cell.is_today {
        theme.today.add_modifier(Modifier::BOLD)
    } else if cell.events.is_empty() {
        theme.dim
    } else {
        Style::default()
    };

    let mut header = vec![Span::styled(format!("{:>2}", day), number_style)];
    if cell.has_conflict {
        header.push(Span::styled(" !", theme.conflict));
    }

    // Too small for a bordered box: number plus an event marker.
    if area.height < 3 || area.width < 6 {
        if !cell.events.is_empty() {
            header.push(Span::styled("*", theme.dim));
        }
        frame.render_widget(Paragraph::new(Line::from(header)), area);
        return;
    }

    let border_style = if cell.is_focused {
        Theme::border_for(theme.selected)
    } else if cell.is_selected {
        Theme::border_for(theme.highlight)
    } else if cell.is_today {
        Theme::border_for(theme.today)
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines = vec![Line::from(header)];
    for ev in cell.events.iter().take(MAX_TITLES) {
        lines.push(Line::from(Span::styled(
            truncate(&ev.title, width),
            Style::default()
                .fg(Color::Black)
                .bg(ev.color)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if cell.events.len() > MAX_TITLES {
        lines.push(Line::from(Span::styled(
            format!("+{} more", cell.events.len() - MAX_TITLES),
            theme.dim,
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::calendar::{dataset, Event, EventIndex};
    use chrono::{NaiveDate, NaiveTime};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                MonthView::render(frame, area, &app.cursor.title(), &app.day_cells())
            })
            .unwrap();
        screen(&terminal)
    }

    fn june_app(events: Vec<Event>) -> App {
        let june = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        App::new(EventIndex::new(events), june, None)
    }

    #[test]
    fn test_renders_title_header_and_titles() {
        let app = june_app(dataset::builtin().unwrap());
        let out = draw(&app, 120, 40);
        assert!(out.contains("June 2025"));
        for name in DAY_NAMES {
            assert!(out.contains(name), "missing {}", name);
        }
        assert!(out.contains("Team Meet"));
        assert!(out.contains("Workshop"));
        assert!(!out.contains('!'));
    }

    #[test]
    fn test_overflow_and_conflict_markers() {
        let start = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let events: Vec<Event> = (0..4)
            .map(|i| Event {
                id: i + 1,
                title: format!("E{}", i + 1),
                date,
                start: start(9 + i),
                duration_minutes: 90,
                color: Color::Blue,
            })
            .collect();

        let app = june_app(events);
        let out = draw(&app, 120, 40);
        assert!(out.contains("+2 more"));
        assert!(out.contains("10 !"));
        assert!(out.contains("E1"));
        assert!(!out.contains("E3"));
    }

    #[test]
    fn test_cell_keeps_earliest_titles_before_overflow() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let events: Vec<Event> = [(1, 15), (2, 11), (3, 8)]
            .into_iter()
            .map(|(id, hour)| Event {
                id,
                title: format!("E{}", id),
                date,
                start: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
                duration_minutes: 30,
                color: Color::Blue,
            })
            .collect();

        let app = june_app(events);
        let out = draw(&app, 120, 40);
        assert!(out.contains("E3"));
        assert!(out.contains("E2"));
        assert!(!out.contains("E1"));
        assert!(out.contains("+1 more"));
    }

    #[test]
    fn test_compact_cells_when_short() {
        let app = june_app(dataset::builtin().unwrap());
        let out = draw(&app, 40, 9);
        assert!(out.contains("20*"));
    }
}
