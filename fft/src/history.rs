use std::path::{Path, PathBuf};

/// Back/forward navigation over visited directories.
#[derive(Debug, Default, Clone)]
pub struct History {
  visited: Vec<PathBuf>,
  index: usize,
}

impl History {
  pub fn new(start: impl Into<PathBuf>) -> Self {
    Self {
      visited: vec![start.into()],
      index: 0,
    }
  }

  pub fn current(&self) -> Option<&Path> {
    self.visited.get(self.index).map(PathBuf::as_path)
  }

  /// Records a visit. Anything ahead of the cursor is forgotten; revisiting the current
  /// directory is a no-op.
  pub fn visit(&mut self, path: impl Into<PathBuf>) {
    let path = path.into();
    if self.current() == Some(path.as_path()) {
      return;
    }
    if !self.visited.is_empty() {
      self.visited.truncate(self.index + 1);
    }
    self.visited.push(path);
    self.index = self.visited.len() - 1;
  }

  pub fn back(&mut self) -> Option<&Path> {
    if self.index == 0 {
      return None;
    }
    self.index -= 1;
    self.current()
  }

  pub fn forward(&mut self) -> Option<&Path> {
    if self.index + 1 >= self.visited.len() {
      return None;
    }
    self.index += 1;
    self.current()
  }

  pub fn can_go_back(&self) -> bool {
    self.index > 0
  }

  pub fn can_go_forward(&self) -> bool {
    self.index + 1 < self.visited.len()
  }
}
