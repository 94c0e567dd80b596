use std::path::Path;

use tokio::process::Command;
use tracing::info;

use crate::{FsError, Result};

/// Program and leading arguments used to open a path with the desktop default.
pub fn default_opener() -> (&'static str, &'static [&'static str]) {
  if cfg!(target_os = "macos") {
    ("open", &[])
  } else if cfg!(windows) {
    ("cmd", &["/C", "start", ""])
  } else {
    ("xdg-open", &[])
  }
}

pub async fn open_default(path: &Path) -> Result<()> {
  let (program, args) = default_opener();
  run(program, args, path).await
}

/// Runs `program path`, waiting for it to exit.
pub async fn open_with(program: &str, path: &Path) -> Result<()> {
  run(program, &[], path).await
}

async fn run(program: &str, args: &[&str], path: &Path) -> Result<()> {
  info!(program, path = %path.display(), "opening");
  let status = Command::new(program)
    .args(args)
    .arg(path)
    .status()
    .await
    .map_err(|source| FsError::Opener {
      program: program.to_owned(),
      source,
    })?;

  if status.success() {
    Ok(())
  } else {
    Err(FsError::OpenerStatus {
      program: program.to_owned(),
      status,
    })
  }
}
