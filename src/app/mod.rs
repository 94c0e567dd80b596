mod actions;
mod app;
mod command;
mod panel;
mod popup;
mod state;

pub use actions::error_text;
pub use app::*;
pub use command::*;
pub use panel::*;
pub use popup::*;
pub use state::*;
