use std::path::{Path, PathBuf};

use strum::{Display, EnumIs};

use crate::{Entry, FsError, Result, ops};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Display, EnumIs)]
pub enum ClipMode {
  #[default]
  Copy,
  Cut,
}

/// Result of pasting one clipboard path.
#[derive(Debug)]
pub struct PasteOutcome {
  pub source: PathBuf,
  pub mode: ClipMode,
  pub result: Result<PathBuf>,
}

impl PasteOutcome {
  pub fn name(&self) -> String {
    self
      .source
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| self.source.display().to_string())
  }
}

#[derive(Debug, Default)]
pub struct Clipboard {
  paths: Vec<PathBuf>,
  mode: ClipMode,
}

impl Clipboard {
  pub fn yank(&mut self, entry: &Entry) -> Result<()> {
    self.store(entry, ClipMode::Copy)
  }

  pub fn cut(&mut self, entry: &Entry) -> Result<()> {
    self.store(entry, ClipMode::Cut)
  }

  fn store(&mut self, entry: &Entry, mode: ClipMode) -> Result<()> {
    if entry.is_parent() {
      return Err(FsError::ParentEntry);
    }
    self.paths = vec![entry.path.to_path_buf()];
    self.mode = mode;
    Ok(())
  }

  pub fn is_empty(&self) -> bool {
    self.paths.is_empty()
  }

  pub fn mode(&self) -> ClipMode {
    self.mode
  }

  pub fn paths(&self) -> &[PathBuf] {
    &self.paths
  }

  /// Copies or moves every stored path into `dest_dir`. The clipboard is empty afterwards,
  /// whether or not the individual pastes succeeded.
  pub async fn paste(&mut self, dest_dir: &Path) -> Result<Vec<PasteOutcome>> {
    if self.paths.is_empty() {
      return Err(FsError::ClipboardEmpty);
    }

    let mode = std::mem::take(&mut self.mode);
    let mut outcomes = Vec::with_capacity(self.paths.len());
    for source in std::mem::take(&mut self.paths) {
      let result = match mode {
        ClipMode::Copy => ops::copy_into(&source, dest_dir).await,
        ClipMode::Cut => ops::move_into(&source, dest_dir).await,
      };
      outcomes.push(PasteOutcome { source, mode, result });
    }

    Ok(outcomes)
  }
}

#[cfg(test)]
mod tests {
  use std::fs::{create_dir, write};

  use super::*;
  use crate::read_listing;

  async fn find(dir: &Path, name: &str) -> Entry {
    read_listing(dir, true)
      .await
      .unwrap()
      .into_iter()
      .find(|entry| entry.name.as_ref() == name)
      .unwrap()
  }

  #[tokio::test]
  async fn paste_on_empty_clipboard_fails() {
    let dir = tempfile::tempdir().unwrap();
    let error = Clipboard::default().paste(dir.path()).await.unwrap_err();
    assert!(matches!(error, FsError::ClipboardEmpty));
  }

  #[tokio::test]
  async fn yank_then_paste_copies_and_clears() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path().join("doc"), "hello").unwrap();
    create_dir(dir.path().join("dest")).unwrap();

    let mut clipboard = Clipboard::default();
    clipboard.yank(&find(dir.path(), "doc").await).unwrap();
    let outcomes = clipboard.paste(&dir.path().join("dest")).await.unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].name(), "doc");
    assert!(outcomes[0].mode.is_copy());
    assert!(outcomes[0].result.is_ok());
    assert!(dir.path().join("doc").exists());
    assert!(dir.path().join("dest/doc").exists());
    assert!(clipboard.is_empty());
  }

  #[tokio::test]
  async fn cut_then_paste_moves() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path().join("doc"), "hello").unwrap();
    create_dir(dir.path().join("dest")).unwrap();

    let mut clipboard = Clipboard::default();
    clipboard.cut(&find(dir.path(), "doc").await).unwrap();
    assert!(clipboard.mode().is_cut());

    let outcomes = clipboard.paste(&dir.path().join("dest")).await.unwrap();
    assert!(outcomes[0].result.is_ok());
    assert!(!dir.path().join("doc").exists());
    assert!(dir.path().join("dest/doc").exists());
  }

  #[tokio::test]
  async fn failed_paste_still_clears() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path().join("doc"), "hello").unwrap();

    let mut clipboard = Clipboard::default();
    clipboard.yank(&find(dir.path(), "doc").await).unwrap();
    let outcomes = clipboard.paste(dir.path()).await.unwrap();

    assert!(matches!(outcomes[0].result, Err(FsError::AlreadyExists(_))));
    assert!(clipboard.is_empty());
  }

  #[tokio::test]
  async fn parent_entry_cannot_be_yanked() {
    let dir = tempfile::tempdir().unwrap();
    let mut clipboard = Clipboard::default();

    assert!(matches!(clipboard.yank(&find(dir.path(), "..").await), Err(FsError::ParentEntry)));
    assert!(clipboard.is_empty());
  }
}
