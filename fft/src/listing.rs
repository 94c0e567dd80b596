use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::{Entry, FsError, Result};

/// Reads `dir` into panel order: `..` first (unless `dir` is a root), then
/// directories, then files, each group by case-insensitive name.
///
/// Entries whose metadata cannot be read, such as dangling symlinks, are skipped.
pub async fn read_listing(dir: &Path, show_hidden: bool) -> Result<Vec<Entry>> {
  let mut readdir = fs::read_dir(dir).await.map_err(|source| FsError::io(dir, source))?;
  let mut entries = Vec::new();

  while let Some(item) = readdir.next_entry().await.map_err(|source| FsError::io(dir, source))? {
    let name = item.file_name().to_string_lossy().into_owned();
    if !show_hidden && name.starts_with('.') {
      continue;
    }

    let path = item.path();
    match fs::metadata(&path).await {
      Ok(metadata) => entries.push(Entry::from_metadata(name, &path, &metadata)),
      Err(error) => debug!(path = %path.display(), %error, "skipping unreadable entry"),
    }
  }

  sort_entries(&mut entries);
  if let Some(parent) = dir.parent() {
    entries.insert(0, Entry::parent(parent));
  }

  Ok(entries)
}

pub fn sort_entries(entries: &mut [Entry]) {
  entries.sort_by_cached_key(|entry| (!entry.is_dir(), entry.name.to_lowercase()));
}
