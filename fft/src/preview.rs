use std::path::Path;
use std::sync::Arc;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{FsError, Result};

pub const PREVIEW_LINES: usize = 100;

/// The first lines of a file, decoded lossily so binary files still preview.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Preview {
  pub path: Arc<Path>,
  pub lines: Vec<String>,
  pub truncated: bool,
}

impl Preview {
  pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let metadata = tokio::fs::metadata(path).await.map_err(|source| FsError::io(path, source))?;
    if !metadata.is_file() {
      return Err(FsError::NotAFile(path.to_path_buf()));
    }

    let file = File::open(path).await.map_err(|source| FsError::io(path, source))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    let mut truncated = false;

    loop {
      buf.clear();
      match reader.read_until(b'\n', &mut buf).await {
        Ok(0) => break,
        Ok(_) if lines.len() == PREVIEW_LINES => {
          truncated = true;
          break;
        }
        Ok(_) => {
          let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
          let line = line.strip_suffix(b"\r").unwrap_or(line);
          lines.push(String::from_utf8_lossy(line).into_owned());
        }
        Err(error) => {
          lines.push(error.to_string());
          break;
        }
      }
    }

    Ok(Self {
      path: Arc::from(path),
      lines,
      truncated,
    })
  }

  pub fn title(&self) -> String {
    self
      .path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| self.path.display().to_string())
  }
}
