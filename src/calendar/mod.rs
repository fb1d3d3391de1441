pub mod dataset;
pub mod event;
pub mod format;
pub mod grid;
pub mod index;
pub mod sidebar;

pub use event::Event;
pub use grid::{CalendarCursor, Cell};
pub use index::EventIndex;
pub use sidebar::Sidebar;
