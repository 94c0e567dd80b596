use std::path::{Path, PathBuf};

use fft::clipboard::ClipMode;
use fft::ops::{self, Deleted};
use fft::preview::Preview;
use fft::search::find_matches;
use fft::{FsError, opener};
use helper::{RenderEvent, RenderKind};
use tracing::{info, warn};

use super::*;
use crate::widgets::{LineEditor, Viewer};

/// Status line text for a failed operation.
pub fn error_text(error: &FsError) -> String {
  match error {
    FsError::DirectoryNotEmpty(_) | FsError::ClipboardEmpty | FsError::NotAFile(_) => error.to_string(),
    other => format!("Error: {other}"),
  }
}

impl App {
  pub(super) fn info(&mut self, text: impl Into<String>) -> RenderEvent {
    self.message = Some(Message::info(text));
    RenderEvent::render()
  }

  pub(super) fn error(&mut self, text: impl Into<String>) -> RenderEvent {
    self.message = Some(Message::error(text));
    RenderEvent::render()
  }

  /// Puts an error outcome on the bottom line, stamped with the time it happened.
  pub fn show(&mut self, event: RenderEvent) -> RenderEvent {
    let RenderKind::Error(ref span) = event.kind else {
      return event;
    };
    warn!(error = %span, "event failed");
    self.message = Some(Message {
      created: event.event_time.into(),
      ..Message::error(format!("Error: {span}"))
    });
    RenderEvent::render()
  }

  fn fail(&mut self, error: FsError) -> RenderEvent {
    warn!(%error, "operation failed");
    self.error(error_text(&error))
  }

  /// Lists `dir` and records it in the history. A directory that cannot be read leaves
  /// the panel where it was.
  pub async fn navigate_to(&mut self, dir: impl Into<PathBuf>) -> RenderEvent {
    match self.enter(dir.into()).await {
      Ok(()) => {
        self.history.visit(self.panel.cwd());
        RenderEvent::render()
      }
      Err(error) => self.fail(error),
    }
  }

  async fn enter(&mut self, dir: PathBuf) -> fft::Result<()> {
    self.panel.change_dir(dir).await?;
    self.watcher.watch(self.panel.cwd());
    info!(cwd = %self.panel.cwd().display(), "entered directory");
    Ok(())
  }

  pub(super) async fn go_parent(&mut self) -> RenderEvent {
    match self.panel.cwd().parent() {
      Some(parent) => {
        let parent = parent.to_path_buf();
        self.navigate_to(parent).await
      }
      None => RenderEvent::no_ops(),
    }
  }

  pub(super) async fn go_home(&mut self) -> RenderEvent {
    match dirs::home_dir() {
      Some(home) => self.navigate_to(home).await,
      None => self.error("Error: home directory not found"),
    }
  }

  pub(super) async fn history_back(&mut self) -> RenderEvent {
    let Some(dir) = self.history.back().map(Path::to_path_buf) else {
      return self.info("No previous directory");
    };
    if let Err(error) = self.enter(dir).await {
      self.history.forward();
      return self.fail(error);
    }
    RenderEvent::render()
  }

  pub(super) async fn history_forward(&mut self) -> RenderEvent {
    let Some(dir) = self.history.forward().map(Path::to_path_buf) else {
      return self.info("No next directory");
    };
    if let Err(error) = self.enter(dir).await {
      self.history.back();
      return self.fail(error);
    }
    RenderEvent::render()
  }

  /// Directories are entered, files are queued for the desktop opener.
  pub(super) async fn open_selected(&mut self) -> RenderEvent {
    let Some(entry) = self.panel.selected_entry() else {
      return RenderEvent::no_ops();
    };
    if entry.is_dir() {
      let dir = entry.path.to_path_buf();
      return self.navigate_to(dir).await;
    }

    self.pending = Some(External::Default(entry.path.to_path_buf()));
    RenderEvent::suspend()
  }

  pub(super) fn open_selected_with(&mut self, program: String) -> RenderEvent {
    let target = self.panel.selected_entry().filter(|entry| !entry.is_parent());
    let Some(path) = target.map(|entry| entry.path.to_path_buf()) else {
      return self.error("Not a file");
    };
    self.pending = Some(External::With(program, path));
    RenderEvent::suspend()
  }

  /// Runs the queued external program. The caller must have released the terminal.
  pub async fn run_external(&mut self) -> RenderEvent {
    let result = match self.pending.take() {
      Some(External::Default(path)) => opener::open_default(&path).await,
      Some(External::With(program, path)) => opener::open_with(&program, &path).await,
      None => return RenderEvent::no_ops(),
    };

    if let Err(error) = result {
      self.fail(error);
      self.mode = Mode::Command;
      self.editor = LineEditor::new("ow ");
    }
    self.reload().await
  }

  pub(super) async fn view_selected(&mut self) -> RenderEvent {
    let Some(entry) = self.panel.selected_entry() else {
      return RenderEvent::no_ops();
    };
    if entry.is_dir() {
      return self.error("Not a file");
    }

    match Preview::load(entry.path.as_ref()).await {
      Ok(preview) => {
        self.popup = Some(Popup::Viewer(Viewer::new(preview)));
        RenderEvent::render()
      }
      Err(error) => self.fail(error),
    }
  }

  pub(super) async fn delete_selected(&mut self) -> RenderEvent {
    let Some(entry) = self.panel.selected_entry().cloned() else {
      return RenderEvent::no_ops();
    };
    if entry.is_parent() {
      return RenderEvent::no_ops();
    }

    match ops::delete(&entry).await {
      Ok(deleted) => {
        let text = match deleted {
          Deleted::Directory => format!("Directory deleted: {}", entry.name),
          Deleted::File => format!("File deleted: {}", entry.name),
        };
        self.refresh_listing().await;
        self.info(text)
      }
      Err(error) => self.fail(error),
    }
  }

  pub(super) fn yank_selected(&mut self) -> RenderEvent {
    let Some(entry) = self.panel.selected_entry() else {
      return RenderEvent::no_ops();
    };
    match self.clipboard.yank(entry) {
      Ok(()) => self.info("Copied to clipboard"),
      Err(error) => self.fail(error),
    }
  }

  pub(super) fn cut_selected(&mut self) -> RenderEvent {
    let Some(entry) = self.panel.selected_entry() else {
      return RenderEvent::no_ops();
    };
    match self.clipboard.cut(entry) {
      Ok(()) => self.info("Cut to clipboard"),
      Err(error) => self.fail(error),
    }
  }

  /// Pastes everything on the clipboard into the current directory; the message reports
  /// the last outcome.
  pub(super) async fn paste(&mut self) -> RenderEvent {
    let dest = self.panel.cwd().to_path_buf();
    let outcomes = match self.clipboard.paste(&dest).await {
      Ok(outcomes) => outcomes,
      Err(error) => return self.fail(error),
    };

    let mut event = RenderEvent::no_ops();
    for outcome in outcomes {
      let name = outcome.name();
      event = match (outcome.result, outcome.mode) {
        (Ok(_), ClipMode::Copy) => self.info(format!("Copied: {name}")),
        (Ok(_), ClipMode::Cut) => self.info(format!("Moved: {name}")),
        (Err(error), _) => self.fail(error),
      };
    }
    self.refresh_listing().await;
    event
  }

  pub(super) async fn rename_selected(&mut self, name: &str) -> RenderEvent {
    let Some(entry) = self.panel.selected_entry().cloned() else {
      return RenderEvent::no_ops();
    };
    if entry.is_parent() {
      return RenderEvent::no_ops();
    }

    match ops::rename(&entry, name).await {
      Ok(_) => {
        self.refresh_listing().await;
        if let Some(index) = self.panel.entries().iter().position(|entry| entry.name.as_ref() == name) {
          self.panel.select(index);
        }
        self.info(format!("Renamed to: {name}"))
      }
      Err(error) => self.fail(error),
    }
  }

  pub(super) async fn make_dir(&mut self, name: &str) -> RenderEvent {
    let cwd = self.panel.cwd().to_path_buf();
    match ops::make_dir(&cwd, name).await {
      Ok(_) => {
        self.refresh_listing().await;
        self.info(format!("Directory created: {name}"))
      }
      Err(error) => self.fail(error),
    }
  }

  /// Selects the first name containing `pattern`, keeping two rows of context above it.
  pub(super) fn search(&mut self, pattern: &str) -> RenderEvent {
    let matches = find_matches(self.panel.entries(), pattern);
    match matches.first() {
      Some(&first) => {
        self.panel.scroll_to(first);
        self.info(format!("Found {} matches", matches.len()))
      }
      None => self.error("No matches found"),
    }
  }

  pub(super) async fn toggle_hidden(&mut self) -> RenderEvent {
    let show = !self.panel.show_hidden();
    if let Err(error) = self.panel.set_hidden(show).await {
      return self.fail(error);
    }
    self.info(format!("Hidden files: {}", if show { "ON" } else { "OFF" }))
  }

  /// `~` expands to the home directory; relative paths start at the current directory.
  pub(super) fn resolve(&self, path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
      if let Some(home) = dirs::home_dir() {
        return home.join(rest);
      }
    }
    self.panel.cwd().join(path)
  }

  pub(super) async fn goto(&mut self, path: &Path) -> RenderEvent {
    let target = self.resolve(path);
    match tokio::fs::canonicalize(&target).await {
      Ok(dir) if dir.is_dir() => self.navigate_to(dir).await,
      _ => self.error("Invalid path"),
    }
  }

  pub(super) fn pin_current(&mut self) -> RenderEvent {
    let cwd = self.panel.cwd().to_path_buf();
    if !self.pins.pin(&cwd) {
      return self.info("Already pinned");
    }
    self.save_pins(format!("Pinned: {}", cwd.display()))
  }

  pub(super) fn unpin(&mut self, position: Option<usize>) -> RenderEvent {
    let removed = match position {
      Some(position) => self.pins.unpin_at(position - 1),
      None => {
        let cwd = self.panel.cwd().to_path_buf();
        self.pins.unpin(&cwd).then_some(cwd)
      }
    };
    match removed {
      Some(path) => self.save_pins(format!("Unpinned: {}", path.display())),
      None => self.error("Not pinned"),
    }
  }

  fn save_pins(&mut self, text: String) -> RenderEvent {
    match self.pins.save() {
      Ok(()) => self.info(text),
      Err(error) => self.fail(error),
    }
  }

  pub(super) async fn go_pin(&mut self, position: usize) -> RenderEvent {
    match self.pins.get(position - 1).map(Path::to_path_buf) {
      Some(dir) => self.navigate_to(dir).await,
      None => self.error(format!("No pin {position}")),
    }
  }

  /// Re-reads the listing after an on-disk change and drops pins that vanished.
  pub async fn reload(&mut self) -> RenderEvent {
    self.refresh_listing().await;
    if self.pins.prune() > 0 {
      if let Err(error) = self.pins.save() {
        return self.fail(error);
      }
    }
    RenderEvent::render()
  }

  async fn refresh_listing(&mut self) {
    if let Err(error) = self.panel.reload().await {
      self.fail(error);
    }
  }

  pub(super) async fn run_command(&mut self, command: Command) -> RenderEvent {
    info!(%command, "command");
    match command {
      Command::Empty => RenderEvent::render(),
      Command::Quit => RenderEvent::exit(),
      Command::ToggleHidden => self.toggle_hidden().await,
      Command::MakeDir(name) => self.make_dir(&name).await,
      Command::Rename(name) => self.rename_selected(&name).await,
      Command::About => {
        self.popup = Some(Popup::about());
        RenderEvent::render()
      }
      Command::Help => {
        self.popup = Some(Popup::help());
        RenderEvent::render()
      }
      Command::Search(pattern) => self.search(&pattern),
      Command::Goto(path) => self.goto(&path).await,
      Command::Pin => self.pin_current(),
      Command::Unpin(position) => self.unpin(position),
      Command::GoPin(position) => self.go_pin(position).await,
      Command::OpenWith(program) => self.open_selected_with(program),
      Command::Back => self.history_back().await,
      Command::Forward => self.history_forward().await,
      Command::Home => self.go_home().await,
      Command::Refresh => self.reload().await,
      Command::Invalid(argument) => self.error(format!("Invalid argument: {argument}")),
      Command::Unknown(name) => self.error(format!("Unknown command: {name}")),
    }
  }
}
