use std::ops::Deref;
use std::rc::Rc;

use crossterm::event::{Event, KeyEventKind, MouseEventKind};
use helper::RenderEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

use crate::ui::{blk, clear};

/// A titled block of text dismissed by any key or click.
pub struct Alert {
  title: Rc<str>,
  content: Vec<Rc<str>>,
}

impl Alert {
  pub fn new(title: impl Into<Rc<str>>, content: impl IntoIterator<Item = impl Into<Rc<str>>>) -> Self {
    Self {
      title: title.into(),
      content: Vec::from_iter(content.into_iter().map(Into::into)),
    }
  }

  pub fn add_line(mut self, line: impl Into<Rc<str>>) -> Self {
    self.content.push(line.into());
    self
  }

  pub fn height(&self) -> u16 {
    (self.content.len() as u16).saturating_add(2)
  }

  pub fn width(&self) -> u16 {
    let widest = self.content.iter().map(|line| line.chars().count()).max().unwrap_or_default();
    (widest.max(self.title.chars().count()) as u16).saturating_add(4)
  }

  pub fn handle_event(&mut self, event: &Event) -> Option<RenderEvent> {
    match event {
      Event::Key(key) if key.kind == KeyEventKind::Press => Some(RenderEvent::handled()),
      Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => Some(RenderEvent::handled()),
      _ => None,
    }
  }

  fn as_lines(&self) -> impl Iterator<Item = Line> {
    self.content.iter().map(Deref::deref).map(Line::from)
  }

  fn line_controls(&self) -> Line {
    let spans = vec![Span::raw("[ANY KEY]").blue(), Span::raw(" "), Span::raw("Continue")];
    Line::from(spans).centered()
  }
}

impl Widget for &Alert {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    clear(area, buf);

    let block = blk()
      .title_top(Line::raw(self.title.deref()).bold())
      .title_bottom(self.line_controls())
      .fg(Color::Rgb(255, 123, 0));

    Paragraph::new(Text::from_iter(self.as_lines()))
      .block(block)
      .wrap(Wrap { trim: false })
      .render(area, buf);
  }
}
