mod events;
mod internal_macros;

pub use events::*;

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

  use crate::keys;

  fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
      code,
      modifiers,
      kind: KeyEventKind::Press,
      state: KeyEventState::NONE,
    }
  }

  fn classify(event: KeyEvent) -> &'static str {
    match event {
      keys!(Char('c'), CONTROL, Press) => "quit",
      keys!(Char('G'), NONE | SHIFT, Press) => "bottom",
      keys!(Char('j'), NONE, Press) | keys!(Down, NONE, Press) => "down",
      keys!(Char(_), NONE, Press) => "char",
      keys!(Enter) => "enter",
      _ => "other",
    }
  }

  #[test]
  fn control_chords_need_exact_modifiers() {
    assert_eq!(classify(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), "quit");
    assert_eq!(classify(key(KeyCode::Char('c'), KeyModifiers::CONTROL | KeyModifiers::ALT)), "other");
  }

  #[test]
  fn uppercase_matches_with_or_without_shift() {
    assert_eq!(classify(key(KeyCode::Char('G'), KeyModifiers::SHIFT)), "bottom");
    assert_eq!(classify(key(KeyCode::Char('G'), KeyModifiers::NONE)), "bottom");
  }

  #[test]
  fn arrow_and_vim_keys_share_an_arm() {
    assert_eq!(classify(key(KeyCode::Char('j'), KeyModifiers::NONE)), "down");
    assert_eq!(classify(key(KeyCode::Down, KeyModifiers::NONE)), "down");
    assert_eq!(classify(key(KeyCode::Char('x'), KeyModifiers::NONE)), "char");
  }

  #[test]
  fn release_events_only_match_kindless_patterns() {
    let mut event = key(KeyCode::Char('j'), KeyModifiers::NONE);
    event.kind = KeyEventKind::Release;
    assert_eq!(classify(event), "other");

    let mut enter = key(KeyCode::Enter, KeyModifiers::SHIFT);
    enter.kind = KeyEventKind::Release;
    assert_eq!(classify(enter), "enter");
  }

  #[test]
  fn alternative_codes() {
    let matches = |event: KeyEvent| matches!(event, keys!(Char('q') | Char('Q')));

    assert!(matches(key(KeyCode::Char('q'), KeyModifiers::NONE)));
    assert!(matches(key(KeyCode::Char('Q'), KeyModifiers::SHIFT)));
    assert!(!matches(key(KeyCode::Esc, KeyModifiers::NONE)));
  }
}
