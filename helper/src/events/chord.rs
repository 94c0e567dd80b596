/// Result of feeding one character into a [`KeyChord`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Chord {
  /// A leader was pressed, the next key decides.
  Wait,
  /// The leader was pressed twice (`dd`, `gg`, ...).
  Pair(char),
  /// The leader was followed by another key; both presses are swallowed.
  Cancelled,
  /// A plain key that is not part of any chord.
  Key(char),
}

/// Tracks vim-style doubled keys such as `dd` or `yy`.
#[derive(Clone, Debug, Default)]
pub struct KeyChord {
  leaders: &'static [char],
  pending: Option<char>,
}

impl KeyChord {
  pub const fn new(leaders: &'static [char]) -> Self {
    Self { leaders, pending: None }
  }

  pub fn feed(&mut self, chr: char) -> Chord {
    match self.pending.take() {
      Some(leader) if leader == chr => Chord::Pair(chr),
      Some(_) => Chord::Cancelled,
      None if self.leaders.contains(&chr) => {
        self.pending = Some(chr);
        Chord::Wait
      }
      None => Chord::Key(chr),
    }
  }

  pub fn pending(&self) -> Option<char> {
    self.pending
  }

  pub fn reset(&mut self) {
    self.pending = None;
  }
}
