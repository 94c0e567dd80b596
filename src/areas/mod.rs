use std::cell::Cell;

use ratatui::layout::Rect;

mod known_area;
pub use known_area::*;
