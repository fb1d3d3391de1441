use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::{self, Theme};

const NAVIGATION: &[(&str, &str)] = &[
    ("  h/l  \u{2190}/\u{2192}  ", "Previous/next day"),
    ("  j/k  \u{2193}/\u{2191}  ", "Next/previous week"),
    ("  [/]  p/n    ", "Previous/next month"),
    ("  t           ", "Jump to today"),
];

const SIDEBAR: &[(&str, &str)] = &[
    ("  Enter       ", "Show events of the focused day"),
    ("  Esc         ", "Back to upcoming events"),
];

const GENERAL: &[(&str, &str)] = &[
    ("  ?           ", "Toggle this help"),
    ("  q  Ctrl-C   ", "Quit"),
];

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    ("Navigation", NAVIGATION),
    ("Sidebar", SIDEBAR),
    ("General", GENERAL),
];

pub fn render_help(frame: &mut Frame, area: Rect) {
    let theme = theme::current();

    let popup_w = area.width.clamp(30, 52).min(area.width);
    let popup_h = area.height.clamp(12, 18).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let accent = Theme::border_for(theme.selected);
    let block = Block::default()
        .title(" Keybindings ")
        .title_style(accent.add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(accent);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = accent.add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines = Vec::new();
    for (i, (section, keys)) in BINDINGS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*section, section_style)));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(*key, key_style),
                Span::raw(*desc),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
