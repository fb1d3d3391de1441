mod app;
mod calendar;
mod cli;
mod components;
mod event;
mod logging;
mod theme;
mod tui;

use std::time::Duration;

use app::App;
use calendar::{dataset, EventIndex};
use chrono::Local;
use clap::Parser;
use color_eyre::Result;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use tracing::info;

/// Sidebar width when it sits next to the month grid.
const SIDEBAR_WIDTH: u16 = 36;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();

    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(args.verbose, &log_path)?;

    let config_path = args.config.clone().unwrap_or_else(theme::default_config_path);
    theme::install(theme::Theme::resolve(&config_path, args.theme.as_deref()));

    let events = dataset::builtin()?;
    let today = Local::now().date_naive();
    info!(events = events.len(), %today, "starting month view");
    let mut app = App::new(EventIndex::new(events), today, args.month);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        // The date can roll over while the program is open.
        app.today = Local::now().date_naive();

        terminal.draw(|frame| draw(frame, app))?;

        if let Some(key) = event::next_key_event(Duration::from_millis(100))? {
            // Clear status message on any key
            app.status_message = None;
            if let Some(action) = event::action_for(key) {
                app.apply(action);
            }
        }
    }

    info!("quitting");
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: content + status bar
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
    let (month_area, sidebar_area) = split_content(layout[0]);

    components::MonthView::render(frame, month_area, &app.cursor.title(), &app.day_cells());
    components::SidebarView::render(
        frame,
        sidebar_area,
        &app.sidebar,
        &app.upcoming(),
        &app.selection_conflicts(),
    );

    if app.show_help {
        components::render_help(frame, area);
    }

    components::StatusBar::render(
        frame,
        layout[1],
        &app.sidebar,
        app.status_message.as_deref(),
    );
}

/// Sidebar to the right on wide terminals, below the grid on narrow ones.
fn split_content(area: Rect) -> (Rect, Rect) {
    if area.width >= 80 {
        let parts =
            Layout::horizontal([Constraint::Min(40), Constraint::Length(SIDEBAR_WIDTH)]).split(area);
        (parts[0], parts[1])
    } else {
        let parts = Layout::vertical([Constraint::Min(10), Constraint::Length(12)]).split(area);
        (parts[0], parts[1])
    }
}
