pub mod help;
pub mod month_view;
pub mod sidebar;
pub mod status_bar;

pub use help::render_help;
pub use month_view::MonthView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBar;
