use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Stylize};
use ratatui::widgets::{Block, BorderType, Clear, Widget};

/// Smallest terminal the two-pane layout is drawn in.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

pub const HEADER_BG: Color = Color::Cyan;
pub const ERROR_FG: Color = Color::Red;
pub const INFO_FG: Color = Color::Yellow;

/// A `w` by `h` rectangle centered in `area`, shrunk to fit.
pub fn fix_center(area: Rect, w: u16, h: u16) -> Rect {
  let [_, x, _] = Layout::horizontal([Constraint::Fill(1), Constraint::Length(w.min(area.width)), Constraint::Fill(1)]).areas(area);
  Layout::vertical([Constraint::Fill(1), Constraint::Length(h.min(area.height)), Constraint::Fill(1)]).split(x)[1]
}

pub fn clear(area: Rect, buffer: &mut Buffer) {
  Clear.render(area, buffer);
}

#[inline(always)]
pub fn blk<'a>() -> Block<'a> {
  Block::bordered().border_type(BorderType::Plain).fg(Color::White)
}

pub fn too_small(area: Rect) -> bool {
  area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}
