use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T, E = FsError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum FsError {
  #[error("{}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("Directory not empty!")]
  DirectoryNotEmpty(PathBuf),
  #[error("the parent entry cannot be changed")]
  ParentEntry,
  #[error("{} already exists", .0.display())]
  AlreadyExists(PathBuf),
  #[error("{} is not a directory", .0.display())]
  NotADirectory(PathBuf),
  #[error("Not a file")]
  NotAFile(PathBuf),
  #[error("cannot copy {} into itself", .0.display())]
  IntoItself(PathBuf),
  #[error("Clipboard is empty")]
  ClipboardEmpty,
  #[error("failed to run {program}: {source}")]
  Opener {
    program: String,
    #[source]
    source: io::Error,
  },
  #[error("{program} exited with {status}")]
  OpenerStatus { program: String, status: ExitStatus },
  #[error("invalid config {}: {source}", path.display())]
  Config {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

impl FsError {
  pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
    Self::Io {
      path: path.as_ref().to_path_buf(),
      source,
    }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
  }
}
