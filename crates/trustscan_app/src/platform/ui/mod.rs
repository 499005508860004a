pub mod constants;
pub mod dashboard;
pub mod render;
pub mod terminal;

pub use dashboard::{apply_all, validate, ControlId, Dashboard, UiCommand};
pub use terminal::TerminalDashboard;
