use std::cell::Cell;

use crossterm::event::{Event, MouseEventKind};
use fft::preview::Preview;
use helper::{RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::ui::{blk, clear};

/// Read-only popup showing the head of a file.
pub struct Viewer {
  preview: Preview,
  offset: usize,
  rows: Cell<usize>,
}

impl Viewer {
  pub fn new(preview: Preview) -> Self {
    Self {
      preview,
      offset: 0,
      rows: Cell::new(1),
    }
  }

  pub fn offset(&self) -> usize {
    self.offset
  }

  fn line_count(&self) -> usize {
    self.preview.lines.len() + usize::from(self.preview.truncated)
  }

  fn max_offset(&self) -> usize {
    self.line_count().saturating_sub(self.rows.get().max(1))
  }

  fn scroll(&mut self, delta: isize) -> RenderEvent {
    let offset = self.offset.saturating_add_signed(delta).min(self.max_offset());
    if offset == self.offset {
      return RenderEvent::no_ops();
    }
    self.offset = offset;
    RenderEvent::render()
  }

  pub fn handle_event(&mut self, event: &Event) -> Option<RenderEvent> {
    let page = self.rows.get().max(1) as isize;
    match event {
      Event::Key(
        keys!(Char('q'), NONE, Press) | keys!(Esc, NONE, Press) | keys!(Enter, NONE, Press) | keys!(Char('v'), NONE, Press),
      ) => Some(RenderEvent::handled()),
      Event::Key(keys!(Char('j'), NONE, Press) | keys!(Down, NONE, Press)) => Some(self.scroll(1)),
      Event::Key(keys!(Char('k'), NONE, Press) | keys!(Up, NONE, Press)) => Some(self.scroll(-1)),
      Event::Key(keys!(PageDown, NONE, Press) | keys!(Char(' '), NONE, Press)) => Some(self.scroll(page)),
      Event::Key(keys!(PageUp, NONE, Press)) => Some(self.scroll(-page)),
      Event::Key(keys!(Char('g'), NONE, Press) | keys!(Home, NONE, Press)) => Some(self.scroll(isize::MIN)),
      Event::Key(keys!(Char('G'), NONE | SHIFT, Press) | keys!(End, NONE, Press)) => Some(self.scroll(isize::MAX)),
      Event::Mouse(mouse) => match mouse.kind {
        MouseEventKind::ScrollDown => Some(self.scroll(1)),
        MouseEventKind::ScrollUp => Some(self.scroll(-1)),
        _ => Some(RenderEvent::no_ops()),
      },
      Event::Key(_) => Some(RenderEvent::no_ops()),
      _ => None,
    }
  }

  fn as_text(&self) -> Text {
    let mut text = Text::from_iter(self.preview.lines.iter().map(String::as_str).map(Line::raw));
    if self.preview.truncated {
      text.push_line(Line::raw("-- first lines only --").fg(Color::DarkGray).italic());
    }
    text
  }

  fn line_controls(&self) -> Line {
    let last = (self.offset + self.rows.get()).min(self.line_count());
    Line::from_iter([
      Span::raw("[j/k]").blue(),
      Span::raw(" Scroll "),
      Span::raw("[q]").blue(),
      Span::raw(" Close "),
      Span::raw(format!("{}-{}/{}", (self.offset + 1).min(last), last, self.line_count())).fg(Color::DarkGray),
    ])
    .centered()
  }
}

impl Widget for &Viewer {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    clear(area, buf);

    let block = blk()
      .title_top(Line::raw(format!(" {} ", self.preview.title())).bold())
      .title_bottom(self.line_controls())
      .fg(Color::White);
    self.rows.set(block.inner(area).height as usize);

    Paragraph::new(self.as_text())
      .block(block)
      .scroll((self.offset.min(u16::MAX as usize) as u16, 0))
      .render(area, buf);
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;
  use std::sync::Arc;

  use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

  use super::*;

  fn viewer(lines: usize) -> Viewer {
    Viewer::new(Preview {
      path: Arc::from(Path::new("/tmp/notes.txt")),
      lines: (0..lines).map(|n| format!("line {n}")).collect(),
      truncated: false,
    })
  }

  fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  #[test]
  fn scrolling_is_clamped_to_content() {
    let mut viewer = viewer(10);
    viewer.rows.set(4);

    viewer.handle_event(&key(KeyCode::Char('j')));
    assert_eq!(viewer.offset(), 1);
    viewer.handle_event(&key(KeyCode::PageDown));
    assert_eq!(viewer.offset(), 5);
    viewer.handle_event(&key(KeyCode::PageDown));
    assert_eq!(viewer.offset(), 6);
    assert!(viewer.handle_event(&key(KeyCode::Char('j'))).is_some_and(|event| event.kind.is_no_ops()));
    viewer.handle_event(&key(KeyCode::Char('g')));
    assert_eq!(viewer.offset(), 0);
  }

  #[test]
  fn closing_keys() {
    let mut viewer = viewer(1);
    assert!(viewer.handle_event(&key(KeyCode::Esc)).is_some_and(|event| event.kind.is_handled()));
    assert!(viewer.handle_event(&key(KeyCode::Char('q'))).is_some_and(|event| event.kind.is_handled()));
  }

  #[test]
  fn render_records_visible_rows() {
    let viewer = viewer(3);
    let area = Rect::new(0, 0, 30, 6);
    let mut buf = Buffer::empty(area);
    (&viewer).render(area, &mut buf);

    assert_eq!(viewer.rows.get(), 4);
    let first: String = (1..29).map(|x| buf[(x, 1)].symbol().to_owned()).collect();
    assert!(first.starts_with("line 0"));
  }
}
