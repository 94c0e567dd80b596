use chrono::{DateTime, Local, TimeDelta};
use ratatui::style::Color;
use strum::{Display, EnumIs};

use crate::ui::{ERROR_FG, INFO_FG};
use crate::widgets::Timestamp;

/// How long a status message stays on the bottom line.
pub const MESSAGE_SECS: i64 = 3;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Display, EnumIs)]
pub enum Mode {
  #[default]
  Normal,
  Command,
  Search,
}

impl Mode {
  pub fn prefix(&self) -> &'static str {
    match self {
      Mode::Normal => "",
      Mode::Command => ":",
      Mode::Search => "/",
    }
  }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, EnumIs)]
pub enum Severity {
  Info,
  Error,
}

impl Severity {
  pub fn color(&self) -> Color {
    match self {
      Severity::Info => INFO_FG,
      Severity::Error => ERROR_FG,
    }
  }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Message {
  pub text: String,
  pub severity: Severity,
  pub created: Timestamp,
}

impl Message {
  pub fn info(text: impl Into<String>) -> Self {
    Self::new(text, Severity::Info)
  }

  pub fn error(text: impl Into<String>) -> Self {
    Self::new(text, Severity::Error)
  }

  fn new(text: impl Into<String>, severity: Severity) -> Self {
    Self {
      text: text.into(),
      severity,
      created: Timestamp::now(),
    }
  }

  pub fn is_visible(&self, now: DateTime<Local>) -> bool {
    self.created.within(TimeDelta::seconds(MESSAGE_SECS), now)
  }
}
