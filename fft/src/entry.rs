use std::fs::Metadata;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Local};
use devicons::FileIcon;
use strum::{Display, EnumIs};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumIs)]
pub enum EntryKind {
  /// The synthetic `..` row leading to the parent directory.
  Parent,
  Dir,
  File,
}

/// One row of a directory listing.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Entry {
  pub name: Arc<str>,
  pub path: Arc<Path>,
  pub kind: EntryKind,
  pub size: u64,
  pub modified: Option<DateTime<Local>>,
  pub mode: u32,
}

impl Entry {
  pub const PARENT_NAME: &'static str = "..";

  pub fn parent(path: &Path) -> Self {
    Self {
      name: Arc::from(Self::PARENT_NAME),
      path: Arc::from(path),
      kind: EntryKind::Parent,
      size: 0,
      modified: None,
      mode: 0,
    }
  }

  pub fn from_metadata(name: impl Into<Arc<str>>, path: &Path, metadata: &Metadata) -> Self {
    let kind = if metadata.is_dir() { EntryKind::Dir } else { EntryKind::File };

    Self {
      name: name.into(),
      path: Arc::from(path),
      kind,
      size: metadata.len(),
      modified: metadata.modified().ok().map(DateTime::<Local>::from),
      mode: permission_bits(metadata),
    }
  }

  pub fn is_dir(&self) -> bool {
    !self.kind.is_file()
  }

  pub fn is_parent(&self) -> bool {
    self.kind.is_parent()
  }

  pub fn is_hidden(&self) -> bool {
    !self.is_parent() && self.name.starts_with('.')
  }

  pub fn is_executable(&self) -> bool {
    self.mode & 0o111 != 0
  }

  /// `ls -l` style permissions, e.g. `drwxr-xr-x`.
  pub fn mode_string(&self) -> String {
    let mut out = String::with_capacity(10);
    out.push(if self.is_dir() { 'd' } else { '-' });
    for shift in [6, 3, 0] {
      let bits = (self.mode >> shift) & 0o7;
      out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
      out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
      out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
  }

  /// Name as shown in a panel: at most `max` characters, directories get a trailing `/`.
  pub fn display_name(&self, max: usize) -> String {
    let mut name: String = self.name.chars().take(max).collect();
    if self.is_dir() {
      name.push('/');
    }
    name
  }

  /// Nerd-font glyph and its hex color.
  pub fn icon(&self) -> (char, &'static str) {
    let icon = FileIcon::from(self.path.as_ref());
    (icon.icon, icon.color)
  }
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> u32 {
  use std::os::unix::fs::PermissionsExt;

  metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &Metadata) -> u32 {
  if metadata.permissions().readonly() { 0o444 } else { 0o666 }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(name: &str, kind: EntryKind, mode: u32) -> Entry {
    Entry {
      name: Arc::from(name),
      path: Arc::from(Path::new("/tmp").join(name).as_path()),
      kind,
      size: 0,
      modified: None,
      mode,
    }
  }

  #[test]
  fn mode_string_matches_ls() {
    assert_eq!(entry("bin", EntryKind::Dir, 0o755).mode_string(), "drwxr-xr-x");
    assert_eq!(entry("notes", EntryKind::File, 0o640).mode_string(), "-rw-r-----");
    assert_eq!(entry("none", EntryKind::File, 0).mode_string(), "----------");
  }

  #[test]
  fn any_execute_bit_counts() {
    assert!(entry("run", EntryKind::File, 0o100).is_executable());
    assert!(entry("run", EntryKind::File, 0o001).is_executable());
    assert!(!entry("data", EntryKind::File, 0o644).is_executable());
  }

  #[test]
  fn parent_is_a_directory_but_never_hidden() {
    let parent = Entry::parent(Path::new("/"));
    assert!(parent.is_dir());
    assert!(!parent.is_hidden());
    assert!(entry(".profile", EntryKind::File, 0o644).is_hidden());
  }

  #[test]
  fn display_name_truncates_before_slash() {
    let dir = entry("a-really-long-directory-name", EntryKind::Dir, 0o755);
    assert_eq!(dir.display_name(20), "a-really-long-direct/");
    assert_eq!(entry("short", EntryKind::File, 0o644).display_name(20), "short");
  }
}
