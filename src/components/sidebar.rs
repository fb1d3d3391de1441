use std::collections::HashSet;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::calendar::{Event, Sidebar};
use crate::theme;

pub struct SidebarView;

impl SidebarView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        sidebar: &Sidebar,
        upcoming: &[&Event],
        conflicts: &HashSet<u32>,
    ) {
        let theme = theme::current();

        let (title, footer) = match sidebar {
            Sidebar::Upcoming => ("Upcoming Events".to_string(), String::new()),
            Sidebar::Detail(sel) => (sel.title(), " Esc: Back to Upcoming Events ".to_string()),
        };

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(footer, theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        let mut items: Vec<ListItem> = Vec::new();
        match sidebar {
            Sidebar::Upcoming => {
                if upcoming.is_empty() {
                    let inner = block.inner(area);
                    frame.render_widget(block, area);
                    let msg = Paragraph::new("No upcoming events").style(theme.dim);
                    frame.render_widget(msg, inner);
                    return;
                }
                for ev in upcoming {
                    items.push(format_upcoming(ev));
                }
            }
            Sidebar::Detail(sel) => {
                for ev in &sel.events {
                    items.push(format_detail(ev, conflicts.contains(&ev.id)));
                }
            }
        }

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

fn color_bar(ev: &Event) -> Span<'static> {
    Span::styled("\u{258c} ", Style::default().fg(ev.color))
}

fn format_upcoming(ev: &Event) -> ListItem<'static> {
    let theme = theme::current();
    ListItem::new(vec![
        Line::from(vec![
            color_bar(ev),
            Span::styled(ev.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![color_bar(ev), Span::styled(ev.date_key(), theme.dim)]),
        Line::from(vec![color_bar(ev), Span::styled(ev.duration_display(), theme.dim)]),
        Line::from(""),
    ])
}

fn format_detail(ev: &Event, overlaps: bool) -> ListItem<'static> {
    let theme = theme::current();

    let mut title = vec![
        color_bar(ev),
        Span::styled(ev.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ];
    if overlaps {
        title.push(Span::styled(" ! overlaps", theme.conflict));
    }

    ListItem::new(vec![
        Line::from(title),
        Line::from(vec![
            color_bar(ev),
            Span::styled(ev.duration_display(), theme.dim),
        ]),
        Line::from(vec![
            color_bar(ev),
            Span::styled(format!("until {}", ev.end_display()), theme.dim),
        ]),
        Line::from(""),
    ])
}
