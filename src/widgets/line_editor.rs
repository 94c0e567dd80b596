use crossterm::event::KeyEvent;
use helper::keys;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LineEdit {
  Edited,
  Submit,
  Cancel,
  Ignored,
}

/// Single-line text input with a byte-based cursor kept on char boundaries.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct LineEditor {
  cursor: usize,
  input: String,
}

impl LineEditor {
  pub fn new(input: impl Into<String>) -> Self {
    let input = input.into();
    Self {
      cursor: input.len(),
      input,
    }
  }

  pub fn as_str(&self) -> &str {
    &self.input
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn take(&mut self) -> String {
    self.cursor = 0;
    std::mem::take(&mut self.input)
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> LineEdit {
    match key {
      keys!(Enter, NONE, Press) => return LineEdit::Submit,
      keys!(Esc, NONE, Press) => return LineEdit::Cancel,
      keys!(Backspace, NONE, Press) => self.backspace(),
      keys!(Backspace, CONTROL, Press) | keys!(Char('w'), CONTROL, Press) => self.backspace_word(),
      keys!(Delete, NONE, Press) => self.delete(),
      keys!(Left, NONE, Press) => self.left(),
      keys!(Right, NONE, Press) => self.right(),
      keys!(Home, NONE, Press) | keys!(Char('a'), CONTROL, Press) => self.cursor = 0,
      keys!(End, NONE, Press) | keys!(Char('e'), CONTROL, Press) => self.cursor = self.input.len(),
      keys!(Char('u'), CONTROL, Press) => {
        self.input.clear();
        self.cursor = 0;
      }
      keys!(Char(chr), NONE | SHIFT, Press) => self.push(chr),
      _ => return LineEdit::Ignored,
    }
    LineEdit::Edited
  }

  pub fn push(&mut self, chr: char) {
    self.input.insert(self.cursor, chr);
    self.cursor += chr.len_utf8();
  }

  pub fn push_str(&mut self, value: &str) {
    self.input.insert_str(self.cursor, value);
    self.cursor += value.len();
  }

  pub fn backspace(&mut self) {
    let Some((start, _)) = self.input[..self.cursor].char_indices().next_back() else {
      return;
    };
    self.input.drain(start..self.cursor);
    self.cursor = start;
  }

  pub fn delete(&mut self) {
    if let Some(chr) = self.input[self.cursor..].chars().next() {
      self.input.drain(self.cursor..self.cursor + chr.len_utf8());
    }
  }

  pub fn left(&mut self) {
    if let Some((start, _)) = self.input[..self.cursor].char_indices().next_back() {
      self.cursor = start;
    }
  }

  pub fn right(&mut self) {
    if let Some(chr) = self.input[self.cursor..].chars().next() {
      self.cursor += chr.len_utf8();
    }
  }

  /// Removes the word before the cursor along with any whitespace after it.
  pub fn backspace_word(&mut self) {
    let before = &self.input[..self.cursor];
    let trimmed = before.trim_end();
    let start = trimmed.rfind(char::is_whitespace).map(|pos| pos + 1).unwrap_or(0);
    self.input.drain(start..self.cursor);
    self.cursor = start;
  }

  /// Renders `prefix` and the text with a block cursor.
  pub fn as_line(&self, prefix: &str) -> Line<'static> {
    let (before, rest) = self.input.split_at(self.cursor);
    let mut chars = rest.chars();
    let under = chars.next().map(String::from).unwrap_or_else(|| " ".to_owned());

    Line::from_iter([
      Span::raw(format!("{prefix}{before}")),
      Span::raw(under).fg(Color::Black).bg(Color::White),
      Span::raw(chars.as_str().to_owned()),
    ])
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyModifiers};

  use super::*;

  fn press(editor: &mut LineEditor, code: KeyCode) -> LineEdit {
    editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  #[test]
  fn typing_and_editing_in_the_middle() {
    let mut editor = LineEditor::default();
    for chr in "mkdir ab".chars() {
      press(&mut editor, KeyCode::Char(chr));
    }
    press(&mut editor, KeyCode::Left);
    press(&mut editor, KeyCode::Char('X'));
    assert_eq!(editor.as_str(), "mkdir aXb");

    press(&mut editor, KeyCode::Backspace);
    press(&mut editor, KeyCode::Delete);
    assert_eq!(editor.as_str(), "mkdir a");
  }

  #[test]
  fn multibyte_characters_keep_cursor_on_boundaries() {
    let mut editor = LineEditor::new("héllo");
    editor.left();
    editor.left();
    editor.left();
    editor.left();
    assert_eq!(editor.cursor(), 1);
    editor.right();
    assert_eq!(editor.cursor(), 3);
    editor.backspace();
    assert_eq!(editor.as_str(), "hllo");
  }

  #[test]
  fn word_backspace() {
    let mut editor = LineEditor::new("ren old name  ");
    editor.backspace_word();
    assert_eq!(editor.as_str(), "ren old ");
    editor.backspace_word();
    editor.backspace_word();
    assert_eq!(editor.as_str(), "");
    editor.backspace_word();
    assert_eq!(editor.cursor(), 0);
  }

  #[test]
  fn enter_and_escape_are_reported() {
    let mut editor = LineEditor::new("q");
    assert_eq!(press(&mut editor, KeyCode::Enter), LineEdit::Submit);
    assert_eq!(press(&mut editor, KeyCode::Esc), LineEdit::Cancel);
    assert_eq!(press(&mut editor, KeyCode::F(2)), LineEdit::Ignored);
    assert_eq!(editor.take(), "q");
    assert_eq!(editor.as_str(), "");
  }

  #[test]
  fn rendered_line_marks_the_cursor() {
    let mut editor = LineEditor::new("abc");
    assert_eq!(editor.as_line(":").to_string(), ":abc ");
    editor.left();
    assert_eq!(editor.as_line(":").to_string(), ":abc");
  }
}
