use std::cell::Cell;
use std::path::{Path, PathBuf};

use fft::{Entry, read_listing};
use ratatui::layout::Position;

use crate::areas::KnownArea;

/// Rows kept above a search hit when it is scrolled into view.
pub const SEARCH_CONTEXT: usize = 2;

/// The directory pane: listing, selection and scroll window.
#[derive(Debug)]
pub struct Panel {
  cwd: PathBuf,
  entries: Vec<Entry>,
  selected: usize,
  top: usize,
  show_hidden: bool,
  rows: Cell<usize>,
  pub(crate) area: KnownArea,
}

impl Panel {
  pub async fn open(dir: impl Into<PathBuf>, show_hidden: bool) -> fft::Result<Self> {
    let cwd = dir.into();
    let entries = read_listing(&cwd, show_hidden).await?;

    Ok(Self {
      cwd,
      entries,
      selected: 0,
      top: 0,
      show_hidden,
      rows: Cell::new(1),
      area: KnownArea::default(),
    })
  }

  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  pub fn entries(&self) -> &[Entry] {
    &self.entries
  }

  pub fn selected(&self) -> usize {
    self.selected
  }

  pub fn top(&self) -> usize {
    self.top
  }

  pub fn show_hidden(&self) -> bool {
    self.show_hidden
  }

  pub fn selected_entry(&self) -> Option<&Entry> {
    self.entries.get(self.selected)
  }

  /// Switches to `dir`. On failure nothing changes.
  pub async fn change_dir(&mut self, dir: impl Into<PathBuf>) -> fft::Result<()> {
    let dir = dir.into();
    self.entries = read_listing(&dir, self.show_hidden).await?;
    self.cwd = dir;
    self.selected = 0;
    self.top = 0;
    Ok(())
  }

  /// Re-reads the listing, keeping the selected name when it still exists.
  pub async fn reload(&mut self) -> fft::Result<()> {
    let keep = self.selected_entry().map(|entry| entry.name.clone());
    self.entries = read_listing(&self.cwd, self.show_hidden).await?;

    let found = keep.and_then(|name| self.entries.iter().position(|entry| entry.name == name));
    match found {
      Some(index) => self.selected = index,
      None => self.selected = self.selected.min(self.entries.len().saturating_sub(1)),
    }
    self.keep_visible();
    Ok(())
  }

  pub async fn set_hidden(&mut self, show_hidden: bool) -> fft::Result<()> {
    self.show_hidden = show_hidden;
    self.reload().await
  }

  pub fn rows(&self) -> usize {
    self.rows.get().max(1)
  }

  /// Records how many rows the last draw could show.
  pub fn set_rows(&self, rows: usize) {
    self.rows.set(rows);
  }

  pub fn move_by(&mut self, delta: isize) {
    let last = self.entries.len().saturating_sub(1);
    self.selected = self.selected.saturating_add_signed(delta).min(last);
    self.keep_visible();
  }

  pub fn select(&mut self, index: usize) {
    if index < self.entries.len() {
      self.selected = index;
      self.keep_visible();
    }
  }

  pub fn select_first(&mut self) {
    self.selected = 0;
    self.top = 0;
  }

  pub fn select_last(&mut self) {
    self.selected = self.entries.len().saturating_sub(1);
    self.top = self.entries.len().saturating_sub(self.rows());
  }

  /// Selects `index` and scrolls so a few rows stay visible above it.
  pub fn scroll_to(&mut self, index: usize) {
    if index < self.entries.len() {
      self.selected = index;
      self.top = index.saturating_sub(SEARCH_CONTEXT);
    }
  }

  pub fn keep_visible(&mut self) {
    let rows = self.rows();
    if self.selected < self.top {
      self.top = self.selected;
    } else if self.selected >= self.top + rows {
      self.top = self.selected + 1 - rows;
    }
  }

  pub fn visible(&self) -> impl Iterator<Item = (usize, &Entry)> {
    self.entries.iter().enumerate().skip(self.top).take(self.rows())
  }

  /// Listing index under a mouse position inside the drawn list.
  pub fn row_at(&self, position: Position) -> Option<usize> {
    let index = self.top + self.area.row_of(position)? as usize;
    (index < self.entries.len()).then_some(index)
  }
}
