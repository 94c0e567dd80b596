//! Staged installation of the binary and its desktop entry.
//!
//! Layout below `DESTDIR` (or `/`):
//! - `usr/bin/fk-files`, mode 0755
//! - `usr/share/applications/fk-files.desktop`, mode 0644

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::args::{InstallArgs, UninstallArgs};

pub const BINARY_NAME: &str = "fk-files";
pub const DESKTOP_FILE_NAME: &str = "fk-files.desktop";
pub const DESKTOP_ENTRY: &str = include_str!("../fk-files.desktop");

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InstallLayout {
  pub binary: PathBuf,
  pub desktop_entry: PathBuf,
}

impl InstallLayout {
  /// An absent or empty `destdir` installs into `/`.
  pub fn new(destdir: Option<&Path>) -> Self {
    let root = destdir.filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("/"));

    Self {
      binary: root.join("usr/bin").join(BINARY_NAME),
      desktop_entry: root.join("usr/share/applications").join(DESKTOP_FILE_NAME),
    }
  }

  pub fn install(&self, binary_src: &Path, desktop_src: Option<&Path>) -> Result<()> {
    if !binary_src.is_file() {
      bail!("binary {} does not exist", binary_src.display());
    }
    if let Some(src) = desktop_src.filter(|src| !src.is_file()) {
      bail!("desktop file {} does not exist", src.display());
    }
    create_parent(&self.binary)?;
    if same_file(binary_src, &self.binary) {
      info!(path = %self.binary.display(), "binary already in place");
    } else {
      fs::copy(binary_src, &self.binary)
        .with_context(|| format!("copying {} to {}", binary_src.display(), self.binary.display()))?;
    }
    set_mode(&self.binary, 0o755)?;
    info!(path = %self.binary.display(), "installed binary");

    create_parent(&self.desktop_entry)?;
    match desktop_src {
      Some(src) => {
        fs::copy(src, &self.desktop_entry)
          .with_context(|| format!("copying {} to {}", src.display(), self.desktop_entry.display()))?;
      }
      None => {
        fs::write(&self.desktop_entry, DESKTOP_ENTRY).with_context(|| format!("writing {}", self.desktop_entry.display()))?;
      }
    }
    set_mode(&self.desktop_entry, 0o644)?;
    info!(path = %self.desktop_entry.display(), "installed desktop entry");

    Ok(())
  }

  /// Removes both installed files. Files that are already gone are skipped, so running this
  /// twice, or without a prior install, succeeds. Returns the paths actually removed.
  pub fn uninstall(&self) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for path in [&self.binary, &self.desktop_entry] {
      match fs::remove_file(path) {
        Ok(()) => {
          info!(path = %path.display(), "removed");
          removed.push(path.clone());
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {}
        Err(error) => return Err(error).with_context(|| format!("removing {}", path.display())),
      }
    }
    Ok(removed)
  }
}

pub fn run_install(args: InstallArgs) -> Result<()> {
  let layout = InstallLayout::new(args.destdir.as_deref());
  let binary = match args.binary {
    Some(binary) => binary,
    None => std::env::current_exe().context("locating the running executable")?,
  };
  layout.install(&binary, args.desktop_file.as_deref())
}

pub fn run_uninstall(args: UninstallArgs) -> Result<()> {
  let layout = InstallLayout::new(args.destdir.as_deref());
  let removed = layout.uninstall()?;
  if removed.is_empty() {
    info!("nothing to remove");
  }
  Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
  }
  Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
  match (a.canonicalize(), b.canonicalize()) {
    (Ok(a), Ok(b)) => a == b,
    _ => false,
  }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(path, fs::Permissions::from_mode(mode)).with_context(|| format!("setting mode of {}", path.display()))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Fixture {
    stage: tempfile::TempDir,
    sources: tempfile::TempDir,
  }

  impl Fixture {
    fn new() -> Self {
      let sources = tempfile::tempdir().unwrap();
      fs::write(sources.path().join("fk-files"), b"#!/bin/sh\necho fk\n").unwrap();
      fs::write(sources.path().join("custom.desktop"), b"[Desktop Entry]\nName=Custom\n").unwrap();

      Self {
        stage: tempfile::tempdir().unwrap(),
        sources,
      }
    }

    fn layout(&self) -> InstallLayout {
      InstallLayout::new(Some(self.stage.path()))
    }

    fn binary(&self) -> PathBuf {
      self.sources.path().join("fk-files")
    }

    fn desktop(&self) -> PathBuf {
      self.sources.path().join("custom.desktop")
    }
  }

  #[test]
  fn layout_follows_destdir() {
    let layout = InstallLayout::new(Some(Path::new("/stage")));
    assert_eq!(layout.binary, Path::new("/stage/usr/bin/fk-files"));
    assert_eq!(layout.desktop_entry, Path::new("/stage/usr/share/applications/fk-files.desktop"));
  }

  #[test]
  fn empty_destdir_means_root() {
    assert_eq!(InstallLayout::new(Some(Path::new(""))), InstallLayout::new(None));
    assert_eq!(InstallLayout::new(None).binary, Path::new("/usr/bin/fk-files"));
  }

  #[test]
  fn install_places_executable_and_identical_desktop_entry() {
    let fixture = Fixture::new();
    let layout = fixture.layout();

    layout.install(&fixture.binary(), Some(fixture.desktop().as_path())).unwrap();

    assert!(layout.binary.is_file());
    assert_eq!(fs::read(&layout.binary).unwrap(), fs::read(fixture.binary()).unwrap());
    assert_eq!(fs::read(&layout.desktop_entry).unwrap(), fs::read(fixture.desktop()).unwrap());

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      let mode = fs::metadata(&layout.binary).unwrap().permissions().mode();
      assert_eq!(mode & 0o777, 0o755);
    }
  }

  #[test]
  fn builtin_desktop_entry_is_used_by_default() {
    let fixture = Fixture::new();
    let layout = fixture.layout();

    layout.install(&fixture.binary(), None).unwrap();

    let written = fs::read_to_string(&layout.desktop_entry).unwrap();
    assert_eq!(written, DESKTOP_ENTRY);
    assert!(written.contains("Exec=fk-files"));
  }

  #[test]
  fn uninstall_removes_both_files() {
    let fixture = Fixture::new();
    let layout = fixture.layout();
    layout.install(&fixture.binary(), Some(fixture.desktop().as_path())).unwrap();

    let removed = layout.uninstall().unwrap();

    assert_eq!(removed, [layout.binary.clone(), layout.desktop_entry.clone()]);
    assert!(!layout.binary.exists());
    assert!(!layout.desktop_entry.exists());
  }

  #[test]
  fn uninstall_without_install_succeeds() {
    let fixture = Fixture::new();
    let layout = fixture.layout();

    assert!(layout.uninstall().unwrap().is_empty());
    assert!(layout.uninstall().unwrap().is_empty());
  }

  #[test]
  fn missing_sources_fail_without_side_effects() {
    let fixture = Fixture::new();
    let layout = fixture.layout();

    let error = layout.install(&fixture.sources.path().join("missing"), None).unwrap_err();
    assert!(error.to_string().contains("does not exist"));
    assert!(!layout.binary.exists());

    let missing = fixture.sources.path().join("missing.desktop");
    let error = layout.install(&fixture.binary(), Some(missing.as_path())).unwrap_err();
    assert!(error.to_string().contains("missing.desktop"));
    assert!(!layout.binary.exists());
    assert!(!layout.desktop_entry.exists());
  }

  #[test]
  fn reinstall_overwrites_previous_files() {
    let fixture = Fixture::new();
    let layout = fixture.layout();
    layout.install(&fixture.binary(), None).unwrap();

    fs::write(fixture.binary(), b"#!/bin/sh\necho v2\n").unwrap();
    layout.install(&fixture.binary(), Some(fixture.desktop().as_path())).unwrap();

    assert_eq!(fs::read(&layout.binary).unwrap(), b"#!/bin/sh\necho v2\n");
    assert_eq!(fs::read(&layout.desktop_entry).unwrap(), fs::read(fixture.desktop()).unwrap());
  }
}
