//! Filesystem operations behind the panel commands.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use strum::Display;
use tokio::fs;
use tracing::{info, warn};

use crate::{Entry, FsError, Result};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
pub enum Deleted {
  #[strum(to_string = "File")]
  File,
  #[strum(to_string = "Directory")]
  Directory,
}

/// Removes a file, a symlink or an empty directory. Non-empty directories are refused.
pub async fn delete(entry: &Entry) -> Result<Deleted> {
  if entry.is_parent() {
    return Err(FsError::ParentEntry);
  }

  let path = entry.path.as_ref();
  let metadata = fs::symlink_metadata(path).await.map_err(|source| FsError::io(path, source))?;

  if metadata.is_dir() {
    let mut readdir = fs::read_dir(path).await.map_err(|source| FsError::io(path, source))?;
    if readdir.next_entry().await.map_err(|source| FsError::io(path, source))?.is_some() {
      return Err(FsError::DirectoryNotEmpty(path.to_path_buf()));
    }
    fs::remove_dir(path).await.map_err(|source| FsError::io(path, source))?;
    info!(path = %path.display(), "directory deleted");
    Ok(Deleted::Directory)
  } else {
    fs::remove_file(path).await.map_err(|source| FsError::io(path, source))?;
    info!(path = %path.display(), "file deleted");
    Ok(Deleted::File)
  }
}

/// Renames `entry` inside its own directory.
pub async fn rename(entry: &Entry, new_name: &str) -> Result<PathBuf> {
  if entry.is_parent() {
    return Err(FsError::ParentEntry);
  }

  let from = entry.path.as_ref();
  let to = from.parent().unwrap_or(Path::new("/")).join(new_name);
  ensure_vacant(&to).await?;

  fs::rename(from, &to).await.map_err(|source| FsError::io(from, source))?;
  info!(from = %from.display(), to = %to.display(), "renamed");
  Ok(to)
}

/// Creates `cwd/name` including missing intermediate directories.
pub async fn make_dir(cwd: &Path, name: &str) -> Result<PathBuf> {
  let path = cwd.join(name);
  ensure_vacant(&path).await?;

  fs::create_dir_all(&path).await.map_err(|source| FsError::io(&path, source))?;
  info!(path = %path.display(), "directory created");
  Ok(path)
}

/// Copies `src` (recursively for directories) to `dest_dir/<file name of src>`.
pub async fn copy_into(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
  let dest = destination(src, dest_dir).await?;
  if dest.starts_with(src) {
    return Err(FsError::IntoItself(src.to_path_buf()));
  }

  let (from, to) = (src.to_path_buf(), dest.clone());
  let copied = tokio::task::spawn_blocking(move || copy_recursive(&from, &to))
    .await
    .map_err(|join| FsError::io(src, join.into()))?;

  if let Err(error) = copied {
    match remove_any(&dest).await {
      Err(cleanup) if !cleanup.is_not_found() => {
        warn!(path = %dest.display(), error = %cleanup, "partial copy left behind");
      }
      _ => {}
    }
    return Err(error);
  }

  info!(from = %src.display(), to = %dest.display(), "copied");
  Ok(dest)
}

/// Moves `src` to `dest_dir/<file name of src>`, copying across filesystems when needed.
pub async fn move_into(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
  let dest = destination(src, dest_dir).await?;
  if dest.starts_with(src) {
    return Err(FsError::IntoItself(src.to_path_buf()));
  }

  match fs::rename(src, &dest).await {
    Ok(()) => {}
    Err(error) if error.kind() == ErrorKind::CrossesDevices => {
      warn!(from = %src.display(), to = %dest.display(), "rename crosses devices, copying instead");
      copy_into(src, dest_dir).await?;
      remove_any(src).await?;
    }
    Err(source) => return Err(FsError::io(src, source)),
  }

  info!(from = %src.display(), to = %dest.display(), "moved");
  Ok(dest)
}

async fn destination(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
  let name = src.file_name().ok_or(FsError::ParentEntry)?;
  if !fs::metadata(dest_dir).await.map_err(|source| FsError::io(dest_dir, source))?.is_dir() {
    return Err(FsError::NotADirectory(dest_dir.to_path_buf()));
  }

  let dest = dest_dir.join(name);
  ensure_vacant(&dest).await?;
  Ok(dest)
}

async fn ensure_vacant(path: &Path) -> Result<()> {
  match fs::symlink_metadata(path).await {
    Ok(_) => Err(FsError::AlreadyExists(path.to_path_buf())),
    Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
    Err(source) => Err(FsError::io(path, source)),
  }
}

async fn remove_any(path: &Path) -> Result<()> {
  let metadata = fs::symlink_metadata(path).await.map_err(|source| FsError::io(path, source))?;
  let removed = if metadata.is_dir() {
    fs::remove_dir_all(path).await
  } else {
    fs::remove_file(path).await
  };
  removed.map_err(|source| FsError::io(path, source))
}

/// Symlinks are recreated, never followed.
fn copy_recursive(src: &Path, dest: &Path) -> Result<()> {
  let metadata = std::fs::symlink_metadata(src).map_err(|source| FsError::io(src, source))?;
  if metadata.file_type().is_symlink() {
    return copy_link(src, dest);
  }
  if !metadata.is_dir() {
    std::fs::copy(src, dest).map_err(|source| FsError::io(src, source))?;
    return Ok(());
  }

  std::fs::create_dir(dest).map_err(|source| FsError::io(dest, source))?;
  for item in std::fs::read_dir(src).map_err(|source| FsError::io(src, source))? {
    let item = item.map_err(|source| FsError::io(src, source))?;
    copy_recursive(&item.path(), &dest.join(item.file_name()))?;
  }
  std::fs::set_permissions(dest, metadata.permissions()).map_err(|source| FsError::io(dest, source))
}

#[cfg(unix)]
fn copy_link(src: &Path, dest: &Path) -> Result<()> {
  let target = std::fs::read_link(src).map_err(|source| FsError::io(src, source))?;
  std::os::unix::fs::symlink(target, dest).map_err(|source| FsError::io(dest, source))
}

#[cfg(not(unix))]
fn copy_link(src: &Path, dest: &Path) -> Result<()> {
  std::fs::copy(src, dest).map_err(|source| FsError::io(src, source))?;
  Ok(())
}
