use std::path::PathBuf;

use strum::{Display, EnumIs};

/// A parsed command-line entry (the text typed after `:`).
#[derive(Debug, Clone, Eq, PartialEq, Display, EnumIs)]
pub enum Command {
  Empty,
  Quit,
  ToggleHidden,
  MakeDir(String),
  Rename(String),
  About,
  Help,
  Search(String),
  Goto(PathBuf),
  Pin,
  /// Unpin by 1-based position, or the current directory when absent.
  Unpin(Option<usize>),
  /// Jump to the pinned folder at this 1-based position.
  GoPin(usize),
  OpenWith(String),
  Back,
  Forward,
  Home,
  Refresh,
  Invalid(String),
  Unknown(String),
}

impl Command {
  pub fn parse(input: &str) -> Self {
    let input = input.trim();
    if let Some(pattern) = input.strip_prefix('/') {
      return Command::Search(pattern.to_owned());
    }

    let mut parts = input.split_whitespace();
    let Some(cmd) = parts.next() else {
      return Command::Empty;
    };
    let args = parts.collect::<Vec<_>>().join(" ");
    let has_args = !args.is_empty();

    match cmd {
      "q" | "quit" => Command::Quit,
      "hdn" => Command::ToggleHidden,
      "mkdir" if has_args => Command::MakeDir(args),
      "ren" if has_args => Command::Rename(args),
      "about" => Command::About,
      "help" => Command::Help,
      "ss" if has_args => Command::Search(args),
      "p" if has_args => Command::Goto(PathBuf::from(args)),
      "pin" => Command::Pin,
      "unpin" if !has_args => Command::Unpin(None),
      "unpin" => position(&args).map(|n| Command::Unpin(Some(n))).unwrap_or(Command::Invalid(args)),
      "go" if has_args => position(&args).map(Command::GoPin).unwrap_or(Command::Invalid(args)),
      "ow" if has_args => Command::OpenWith(args),
      "back" => Command::Back,
      "fwd" => Command::Forward,
      "home" => Command::Home,
      "refresh" => Command::Refresh,
      other => Command::Unknown(other.to_owned()),
    }
  }
}

fn position(value: &str) -> Option<usize> {
  value.parse::<usize>().ok().filter(|n| *n > 0)
}
