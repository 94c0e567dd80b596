use std::path::Path;

use fft::pins::Pins;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::{Color, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::ui::{HEADER_BG, blk};

pub const KEY_HELP: &[&str] = &[
  "Navigation:",
  " h       - Parent dir",
  " j/k     - Down/Up",
  " l/Enter - Open",
  " gg/G    - Top/End",
  " H/L     - Back/Forward",
  "",
  "Commands:",
  " dd      - Delete",
  " yy      - Copy",
  " xx      - Cut",
  " pp      - Paste",
  " :q      - Quit",
  " :ren    - Rename",
  " :hdn    - Toggle hidden",
  " ?       - Help",
];

/// Right pane: key reference followed by the pinned folders.
pub struct CommandsPane<'a> {
  pins: &'a Pins,
  cwd: &'a Path,
}

impl<'a> CommandsPane<'a> {
  pub fn new(pins: &'a Pins, cwd: &'a Path) -> Self {
    Self { pins, cwd }
  }

  fn pin_lines(&self) -> impl Iterator<Item = Line<'static>> + '_ {
    let header = Line::raw("Pinned (:go N):");
    let pins = self.pins.folders().iter().enumerate().map(|(index, path)| {
      let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
      let line = Line::raw(format!(" {}. {name}", index + 1));
      if path == self.cwd { line.fg(Color::Cyan).bold() } else { line.fg(Color::Blue) }
    });

    [Line::raw(""), header].into_iter().chain(pins)
  }
}

impl Widget for CommandsPane<'_> {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    let block = blk().title_top(Line::raw(" Commands ").fg(Color::Black).bg(HEADER_BG));
    let lines = KEY_HELP.iter().copied().map(Line::raw).chain(self.pin_lines()).collect::<Vec<_>>();

    Paragraph::new(lines).block(block).render(area, buf);
  }
}
