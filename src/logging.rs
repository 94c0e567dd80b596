use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FK_FILES_LOG";

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The terminal UI owns stdout, so events go to `<cache dir>/fk-files/fk-files.log`.
/// Returns the log path, or `None` when the platform has no cache directory.
pub fn init_file() -> Result<Option<PathBuf>> {
  let Some(dir) = dirs::cache_dir().map(|cache| cache.join("fk-files")) else {
    return Ok(None);
  };
  std::fs::create_dir_all(&dir).with_context(|| format!("creating log directory {}", dir.display()))?;

  let path = dir.join("fk-files.log");
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&path)
    .with_context(|| format!("opening log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .try_init()
    .map_err(|error| anyhow!(error))?;

  Ok(Some(path))
}

/// Plain stderr logging for the non-interactive subcommands.
pub fn init_stderr() {
  _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_writer(std::io::stderr)
    .without_time()
    .try_init();
}
