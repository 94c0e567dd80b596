use crossterm::event::Event;
use helper::RenderEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;

use crate::ui::fix_center;
use crate::widgets::{Alert, Viewer};

const HELP: &[&str] = &[
  "Navigation:",
  " h         - Parent directory",
  " j/k       - Move down/up",
  " l/Enter   - Open file/dir",
  " gg/G      - Jump to top/bottom",
  " H/L       - History back/forward",
  " ~         - Home directory",
  " /pattern  - Quick search",
  "",
  "File Operations:",
  " dd        - Delete file/empty dir",
  " yy        - Yank (copy) file",
  " xx        - Cut file",
  " pp        - Paste",
  " v         - View file content",
  " P         - Pin current directory",
  "",
  "Command Mode (:) Commands:",
  " :q        - Quit",
  " :hdn      - Toggle hidden files",
  " :mkdir    - Create directory",
  " :ren      - Rename file/dir",
  " :about    - Show about info",
  " :p path   - Change directory",
  " :ss text  - Search",
  " :ow prog  - Open with program",
  " :pin      - Pin current directory",
  " :unpin N  - Remove pin N",
  " :go N     - Go to pin N",
  " :back/:fwd/:home/:refresh",
  "",
  "Mouse Controls:",
  " Left click   - Select item",
  " Double click - Open item",
  " Right click  - Item name",
];

const ABOUT: &[&str] = &[
  "Fk-Files - File Manager",
  "───────────────────────",
  "Part of FikusTools project",
  "Developed by FikusPI",
  "License: BSD 3-Clause",
  "",
  "A hybrid file manager combining",
  "Norton Commander interface with",
  "Vim-like keybindings.",
];

pub enum Popup {
  Alert(Alert),
  Viewer(Viewer),
}

impl Popup {
  pub fn help() -> Self {
    Popup::Alert(Alert::new("Fk-Files Help", HELP.iter().copied()))
  }

  pub fn about() -> Self {
    Popup::Alert(Alert::new("About", ABOUT.iter().copied()).add_line("").add_line(concat!("Version ", env!("CARGO_PKG_VERSION"))))
  }

  pub fn handle_event(&mut self, event: &Event) -> Option<RenderEvent> {
    match self {
      Popup::Alert(alert) => alert.handle_event(event),
      Popup::Viewer(viewer) => viewer.handle_event(event),
    }
  }

  pub fn area(&self, area: Rect) -> Rect {
    match self {
      Popup::Alert(alert) => fix_center(area, alert.width(), alert.height()),
      Popup::Viewer(_) => fix_center(area, area.width.saturating_sub(4), area.height.saturating_sub(2)),
    }
  }
}

impl Widget for &Popup {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    let area = self.area(area);

    match self {
      Popup::Alert(widget) => widget.render(area, buf),
      Popup::Viewer(widget) => widget.render(area, buf),
    }
  }
}
