use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::select;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

pub const DEFAULT_POLL: Duration = Duration::from_secs(2);

/// Background task noticing on-disk changes of the directory shown in the panel.
///
/// Every detected change bumps the generation counter returned by [`DirWatcher::subscribe`].
pub struct DirWatcher {
  handle: JoinHandle<()>,
  dir_tx: watch::Sender<Arc<Path>>,
  changes: watch::Receiver<u64>,
}

impl DirWatcher {
  pub fn spawn(dir: impl Into<PathBuf>, poll: Duration) -> Self {
    let (dir_tx, dir_rx) = watch::channel(Arc::from(dir.into()));
    let (changes_tx, changes) = watch::channel(0u64);

    Self {
      handle: tokio::spawn(dir_scanner(dir_rx, changes_tx, poll)),
      dir_tx,
      changes,
    }
  }

  /// Points the watcher at another directory. Switching does not count as a change.
  pub fn watch(&self, dir: &Path) {
    self.dir_tx.send_if_modified(|current| {
      if current.as_ref() == dir {
        false
      } else {
        *current = Arc::from(dir);
        true
      }
    });
  }

  pub fn subscribe(&self) -> watch::Receiver<u64> {
    self.changes.clone()
  }
}

impl Drop for DirWatcher {
  fn drop(&mut self) {
    self.handle.abort();
  }
}

async fn modified(dir: &Path) -> Option<SystemTime> {
  tokio::fs::metadata(dir).await.and_then(|metadata| metadata.modified()).ok()
}

async fn dir_scanner(mut dir_rx: watch::Receiver<Arc<Path>>, changes_tx: watch::Sender<u64>, poll: Duration) {
  let mut dir = dir_rx.borrow_and_update().clone();
  let mut last = modified(&dir).await;
  let mut ticker = interval(poll);
  ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

  loop {
    select! {
      _ = ticker.tick() => {
        let current = modified(&dir).await;
        if current != last {
          debug!(dir = %dir.display(), "directory changed on disk");
          last = current;
          changes_tx.send_modify(|generation| *generation += 1);
        }
      },
      changed = dir_rx.changed() => {
        if changed.is_err() {
          break;
        }
        dir = dir_rx.borrow_and_update().clone();
        last = modified(&dir).await;
      },
    }
  }
}
