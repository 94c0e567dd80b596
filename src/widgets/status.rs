use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::Widget;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};

use crate::app::Message;
use crate::ui::HEADER_BG;
use crate::widgets::{Timestamp, key_hints};

pub const DEFAULT_HINTS: &[(&str, &str)] = &[
  ("j/k", "Navigate"),
  ("l", "Open"),
  ("dd", "Delete"),
  ("yy", "Copy"),
  ("pp", "Paste"),
  (":q", "Quit"),
  ("?", "Help"),
];

/// Row under the panes: position in the listing on the left, user and clock on the right.
pub struct StatusBar<'a> {
  pub selected: usize,
  pub total: usize,
  pub show_hidden: bool,
  /// Permission string of the selected entry.
  pub mode: Option<String>,
  /// Label of whatever the clipboard holds, e.g. `copy: notes.txt`.
  pub clipboard: Option<String>,
  /// Leader of a chord still waiting for its second key.
  pub chord: Option<char>,
  pub back: bool,
  pub forward: bool,
  pub user: &'a str,
  pub clock: Timestamp,
}

impl StatusBar<'_> {
  pub fn position(&self) -> String {
    format!(" {}/{} ", (self.selected + 1).min(self.total), self.total)
  }
}

impl Widget for StatusBar<'_> {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    let style = Style::new().fg(Color::Black).bg(HEADER_BG);
    buf.set_style(area, style);
    let [left, right] = Layout::horizontal([Constraint::Percentage(50); 2]).areas(area);

    let mut spans = vec![Span::raw(self.position())];
    if let Some(mode) = self.mode {
      spans.push(Span::raw(format!("{mode} ")));
    }
    if self.show_hidden {
      spans.push(Span::raw("[hidden] "));
    }
    if let Some(clipboard) = self.clipboard {
      spans.push(Span::raw(format!("[{clipboard}] ")));
    }
    if let Some(leader) = self.chord {
      spans.push(Span::raw(format!("{leader}- ")).bold());
    }
    Line::from(spans).render(left, buf);

    let back = if self.back { '<' } else { ' ' };
    let forward = if self.forward { '>' } else { ' ' };
    Line::raw(format!(" {back}{forward} {} ", self.user)).render(right, buf);
    Line::from_iter(self.clock.as_spans()).right_aligned().render(right, buf);
  }
}

/// Last row: the command being typed, the latest message or the key hints.
pub enum BottomLine<'a> {
  Editor(Line<'static>),
  Message(&'a Message),
  Hints,
}

impl Widget for BottomLine<'_> {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    match self {
      BottomLine::Editor(line) => {
        buf.set_style(area, Style::new().fg(Color::White).bg(Color::Black));
        line.render(area, buf);
      }
      BottomLine::Message(message) => {
        Line::raw(message.text.as_str()).fg(message.severity.color()).render(area, buf);
      }
      BottomLine::Hints => {
        buf.set_style(area, Style::new().fg(Color::Black).bg(HEADER_BG));
        key_hints(DEFAULT_HINTS).render(area, buf);
      }
    }
  }
}
