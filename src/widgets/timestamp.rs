use std::ops::Deref;

use chrono::{DateTime, Local, TimeDelta};
use ratatui::prelude::{Color, Stylize};
use ratatui::text::{Line, Span};

impl Default for Timestamp {
  fn default() -> Self {
    Self(Local::now())
  }
}
impl Deref for Timestamp {
  type Target = DateTime<Local>;
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
  pub fn as_spans(&self) -> [Span<'static>; 3] {
    [
      Span::raw(ratatui::symbols::line::DOUBLE_VERTICAL_LEFT).fg(Color::DarkGray),
      Span::raw(self.0.format("%H:%M:%S").to_string()).fg(Color::White),
      Span::raw(ratatui::symbols::line::DOUBLE_VERTICAL_RIGHT).fg(Color::DarkGray),
    ]
  }

  pub fn now() -> Self {
    Self::default()
  }

  pub fn elapsed_at(&self, now: DateTime<Local>) -> TimeDelta {
    now - self.0
  }

  /// Whether less than `span` has passed between this timestamp and `now`.
  pub fn within(&self, span: TimeDelta, now: DateTime<Local>) -> bool {
    self.elapsed_at(now) < span
  }
}

impl From<DateTime<Local>> for Timestamp {
  fn from(value: DateTime<Local>) -> Self {
    Self(value)
  }
}

impl From<Timestamp> for Line<'static> {
  fn from(value: Timestamp) -> Self {
    Line::from_iter(value.as_spans())
  }
}
