use ratatui::prelude::*;

mod alert;
pub use alert::*;

mod commands;
pub use commands::*;

mod file_list;
pub use file_list::*;

mod line_editor;
pub use line_editor::*;

mod status;
pub use status::*;

mod timestamp;
pub use timestamp::*;

mod viewer;
pub use viewer::*;

/// `key:Label` pairs separated by two spaces, keys in bold.
pub fn key_hints<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
  let mut spans = Vec::with_capacity(hints.len() * 3 + 1);
  spans.push(Span::raw(" "));
  for (key, label) in hints {
    spans.push(Span::raw(*key).bold());
    spans.push(Span::raw(":"));
    spans.push(Span::raw(*label));
    spans.push(Span::raw("  "));
  }
  Line::from(spans)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hints_are_spaced() {
    let line = key_hints(&[("j/k", "Navigate"), ("?", "Help")]);
    assert_eq!(line.to_string(), " j/k:Navigate  ?:Help  ");
  }
}
