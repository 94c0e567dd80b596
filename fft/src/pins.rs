//! Pinned folders, persisted as a JSON array of paths (`~/.fk_files_config.json`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{FsError, Result};

pub const CONFIG_FILE_NAME: &str = ".fk_files_config.json";

pub fn default_config_path() -> Option<PathBuf> {
  dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pins {
  #[serde(skip)]
  config: PathBuf,
  folders: Vec<PathBuf>,
}

impl Pins {
  /// Loads pins from `config`, falling back to home, Documents and Downloads when the
  /// file does not exist. Folders that no longer exist are dropped.
  pub fn load(config: impl Into<PathBuf>) -> Result<Self> {
    let config = config.into();
    let folders = match std::fs::read_to_string(&config) {
      Ok(raw) => serde_json::from_str::<Pins>(&raw)
        .map_err(|source| FsError::Config {
          path: config.clone(),
          source,
        })?
        .folders,
      Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
        debug!(config = %config.display(), "no pin config, using defaults");
        Self::defaults()
      }
      Err(source) => return Err(FsError::io(&config, source)),
    };

    let mut pins = Self { config, folders };
    pins.prune();
    Ok(pins)
  }

  fn defaults() -> Vec<PathBuf> {
    dirs::home_dir()
      .map(|home| vec![home.clone(), home.join("Documents"), home.join("Downloads")])
      .unwrap_or_default()
  }

  pub fn save(&self) -> Result<()> {
    if let Some(parent) = self.config.parent() {
      std::fs::create_dir_all(parent).map_err(|source| FsError::io(parent, source))?;
    }
    let raw = serde_json::to_string(self).map_err(|source| FsError::Config {
      path: self.config.clone(),
      source,
    })?;
    std::fs::write(&self.config, raw).map_err(|source| FsError::io(&self.config, source))
  }

  pub fn folders(&self) -> &[PathBuf] {
    &self.folders
  }

  pub fn get(&self, index: usize) -> Option<&Path> {
    self.folders.get(index).map(PathBuf::as_path)
  }

  pub fn contains(&self, path: &Path) -> bool {
    self.folders.iter().any(|folder| folder == path)
  }

  /// Returns `false` when `path` was already pinned.
  pub fn pin(&mut self, path: impl Into<PathBuf>) -> bool {
    let path = path.into();
    if self.contains(&path) {
      return false;
    }
    info!(path = %path.display(), "pinned");
    self.folders.push(path);
    true
  }

  pub fn unpin(&mut self, path: &Path) -> bool {
    let before = self.folders.len();
    self.folders.retain(|folder| folder != path);
    before != self.folders.len()
  }

  pub fn unpin_at(&mut self, index: usize) -> Option<PathBuf> {
    (index < self.folders.len()).then(|| self.folders.remove(index))
  }

  /// Drops folders that are no longer directories and returns how many were removed.
  pub fn prune(&mut self) -> usize {
    let before = self.folders.len();
    self.folders.retain(|folder| folder.is_dir());
    before - self.folders.len()
  }
}
