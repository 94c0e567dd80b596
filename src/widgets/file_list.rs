use fft::{Entry, format_size, format_time};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::Panel;
use crate::ui::{HEADER_BG, blk};

const NAME_CHARS: usize = 20;
const NAME_WIDTH: usize = 22;

/// Left pane: the listing window of a [`Panel`].
pub struct FileList<'a> {
  panel: &'a Panel,
  icons: bool,
}

impl<'a> FileList<'a> {
  pub fn new(panel: &'a Panel, icons: bool) -> Self {
    Self { panel, icons }
  }

  fn title(&self) -> Line<'static> {
    let cwd = self.panel.cwd();
    let name = cwd
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| cwd.display().to_string());
    Line::raw(format!(" {name} ")).fg(Color::Black).bg(HEADER_BG)
  }
}

pub fn entry_style(entry: &Entry, selected: bool) -> Style {
  let style = if entry.is_dir() {
    Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD)
  } else if entry.is_executable() {
    Style::new().fg(Color::Green)
  } else if entry.is_hidden() {
    Style::new().fg(Color::Magenta)
  } else {
    Style::new().fg(Color::White)
  };

  if selected { style.fg(Color::Black).bg(Color::White) } else { style }
}

/// `name/                  <DIR> 01.02.24 10:00`
pub fn entry_text(entry: &Entry) -> String {
  let size = if entry.is_dir() { "<DIR>".to_owned() } else { format_size(entry.size) };
  let name = entry.display_name(NAME_CHARS);
  format!("{name:<width$} {size} {}", format_time(entry.modified.as_ref()), width = NAME_WIDTH)
}

fn entry_line(entry: &Entry, selected: bool, icons: bool) -> Line<'static> {
  let style = entry_style(entry, selected);
  let mut spans = Vec::with_capacity(2);
  if icons {
    let (icon, _) = entry.icon();
    spans.push(Span::styled(format!("{icon} "), style));
  }
  spans.push(Span::styled(entry_text(entry), style));
  Line::from(spans).style(style)
}

impl Widget for FileList<'_> {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    let block = blk().title_top(self.title());
    let inner = block.inner(area);
    self.panel.set_rows(inner.height as usize);
    self.panel.area.replace(inner);

    let selected = self.panel.selected();
    let lines = self
      .panel
      .visible()
      .map(|(index, entry)| entry_line(entry, index == selected, self.icons))
      .collect::<Vec<_>>();

    Paragraph::new(lines).block(block).render(area, buf);
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;
  use std::sync::Arc;

  use fft::EntryKind;

  use super::*;

  fn entry(name: &str, kind: EntryKind, mode: u32) -> Entry {
    Entry {
      name: Arc::from(name),
      path: Arc::from(Path::new("/tmp").join(name)),
      kind,
      size: 12,
      modified: None,
      mode,
    }
  }

  #[test]
  fn row_columns() {
    let file = entry("notes.txt", EntryKind::File, 0o644);
    assert_eq!(entry_text(&file), format!("{:<22}   12B {}", "notes.txt", " ".repeat(12)));

    let dir = entry("a-very-long-directory-name", EntryKind::Dir, 0o755);
    assert!(entry_text(&dir).starts_with("a-very-long-director/  <DIR>"));
  }

  #[test]
  fn colors_follow_entry_kind() {
    let dir = entry("src", EntryKind::Dir, 0o755);
    let exe = entry("run.sh", EntryKind::File, 0o755);
    let hidden = entry(".env", EntryKind::File, 0o644);
    let plain = entry("a.txt", EntryKind::File, 0o644);

    assert_eq!(entry_style(&dir, false).fg, Some(Color::Blue));
    assert!(entry_style(&dir, false).add_modifier.contains(Modifier::BOLD));
    assert_eq!(entry_style(&exe, false).fg, Some(Color::Green));
    assert_eq!(entry_style(&hidden, false).fg, Some(Color::Magenta));
    assert_eq!(entry_style(&plain, false).fg, Some(Color::White));

    let selected = entry_style(&plain, true);
    assert_eq!((selected.fg, selected.bg), (Some(Color::Black), Some(Color::White)));
  }
}
