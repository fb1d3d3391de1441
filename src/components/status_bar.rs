use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::calendar::Sidebar;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, sidebar: &Sidebar, message: Option<&str>) {
        let w = area.width as usize;
        let style = theme::current().status;

        let mode_str = match sidebar {
            Sidebar::Upcoming => "Upcoming",
            Sidebar::Detail(_) => "Day detail",
        };

        // A status message replaces the key hints until the next key press.
        let right_text = match message {
            Some(msg) => format!(" {} ", msg),
            None => hints(w, sidebar.is_detail()).to_string(),
        };

        let line = status_line(w, format!(" {} ", mode_str), right_text, style);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

/// `left` and `right` pushed to opposite ends of a `width`-column bar.
fn status_line(width: usize, left: String, right: String, style: Style) -> Line<'static> {
    let left = Span::styled(left, style);
    let right = Span::styled(right, style);
    let padding = " ".repeat(width.saturating_sub(left.width() + right.width()));
    Line::from(vec![left, Span::styled(padding, style), right])
}

fn hints(width: usize, detail: bool) -> &'static str {
    match (width, detail) {
        (w, true) if w >= 80 => " hjkl:Move Enter:Select Esc:Back [/]:Month t:Today ?:Help q:Quit",
        (w, false) if w >= 80 => " hjkl:Move Enter:Select [/]:Month t:Today ?:Help q:Quit",
        (w, true) if w >= 50 => " Enter:Select Esc:Back [/]:Month q:Quit",
        (w, false) if w >= 50 => " Enter:Select [/]:Month t:Today q:Quit",
        _ => " ?:Help q:Quit",
    }
}
