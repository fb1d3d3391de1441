use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything a key press can ask of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PrevMonth,
    NextMonth,
    Today,
    /// Move the focused day by this many days.
    Move(i64),
    Select,
    Back,
    ToggleHelp,
    Quit,
}

pub fn next_key_event(timeout: Duration) -> color_eyre::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    let action = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('['), _) | (KeyCode::Char('p'), _) | (KeyCode::PageUp, _) => {
            Action::PrevMonth
        }
        (KeyCode::Char(']'), _) | (KeyCode::Char('n'), _) | (KeyCode::PageDown, _) => {
            Action::NextMonth
        }
        (KeyCode::Char('t'), _) => Action::Today,
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => Action::Move(-1),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => Action::Move(1),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Action::Move(-7),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Action::Move(7),
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => Action::Select,
        (KeyCode::Esc, _) | (KeyCode::Backspace, _) => Action::Back,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        _ => return None,
    };
    Some(action)
}
