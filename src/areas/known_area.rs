use ratatui::layout::Position;

use super::*;

/// Remembers where a widget was last drawn so mouse events can be mapped back to it.
#[derive(Debug, Default, Clone)]
pub struct KnownArea {
  inner: Cell<Option<Rect>>,
}

impl KnownArea {
  pub fn replace(&self, inner: impl Into<Option<Rect>>) {
    self.inner.replace(inner.into());
  }

  pub fn contains(&self, position: Position) -> bool {
    self.inner.get().is_some_and(|area| area.contains(position))
  }

  /// Row offset of `position` inside the area, if it falls within it.
  pub fn row_of(&self, position: Position) -> Option<u16> {
    let area = self.inner.get()?;
    area.contains(position).then(|| position.y - area.y)
  }
}
