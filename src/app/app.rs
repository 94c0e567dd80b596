use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chrono::{Local, TimeDelta};
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use fft::Entry;
use fft::clipboard::Clipboard;
use fft::history::History;
use fft::pins::{Pins, default_config_path};
use fft::runner::{DEFAULT_POLL, DirWatcher};
use helper::{Chord, KeyChord, RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::prelude::Widget;
use ratatui::style::Stylize;
use ratatui::text::Line;
use tokio::sync::watch;
use tracing::debug;

use super::*;
use crate::args::AppArgs;
use crate::ui::{ERROR_FG, too_small};
use crate::widgets::{BottomLine, CommandsPane, FileList, LineEdit, LineEditor, StatusBar, Timestamp};

/// Two clicks on the same row within this window open it.
pub const DOUBLE_CLICK_MS: i64 = 400;

const CHORD_LEADERS: &[char] = &['d', 'g', 'y', 'x', 'p'];

/// Startup settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppOptions {
  pub start: PathBuf,
  pub show_hidden: bool,
  pub config: PathBuf,
  pub icons: bool,
  pub poll: Duration,
}

impl AppOptions {
  pub async fn from_args(args: &AppArgs) -> anyhow::Result<Self> {
    let start = match args.path {
      Some(ref path) => path.clone(),
      None => std::env::current_dir().context("cannot read the current directory")?,
    };
    let start = tokio::fs::canonicalize(&start)
      .await
      .with_context(|| format!("cannot open {}", start.display()))?;
    let config = match args.config {
      Some(ref config) => config.clone(),
      None => default_config_path().context("cannot locate the home directory for the pin config")?,
    };

    Ok(Self {
      start,
      show_hidden: args.hidden,
      config,
      icons: args.icons,
      poll: DEFAULT_POLL,
    })
  }
}

/// An external program to run once the terminal has been handed back.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum External {
  Default(PathBuf),
  With(String, PathBuf),
}

pub struct App {
  pub(super) panel: Panel,
  pub(super) mode: Mode,
  pub(super) editor: LineEditor,
  chord: KeyChord,
  pub(super) clipboard: Clipboard,
  pub(super) history: History,
  pub(super) pins: Pins,
  pub(super) popup: Option<Popup>,
  pub(super) message: Option<Message>,
  pub(super) pending: Option<External>,
  last_click: Option<(usize, Timestamp)>,
  user: String,
  icons: bool,
  pub(super) watcher: DirWatcher,
}

impl App {
  pub async fn new(options: AppOptions) -> anyhow::Result<Self> {
    let panel = Panel::open(&options.start, options.show_hidden)
      .await
      .with_context(|| format!("cannot list {}", options.start.display()))?;
    let pins = Pins::load(&options.config).context("cannot load pinned folders")?;
    let watcher = DirWatcher::spawn(&options.start, options.poll);

    Ok(Self {
      history: History::new(&options.start),
      panel,
      mode: Mode::Normal,
      editor: LineEditor::default(),
      chord: KeyChord::new(CHORD_LEADERS),
      clipboard: Clipboard::default(),
      pins,
      popup: None,
      message: None,
      pending: None,
      last_click: None,
      user: current_user(),
      icons: options.icons,
      watcher,
    })
  }

  /// Bumped whenever the watched directory changes on disk.
  pub fn subscribe_changes(&self) -> watch::Receiver<u64> {
    self.watcher.subscribe()
  }

  pub fn panel(&self) -> &Panel {
    &self.panel
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub fn message(&self) -> Option<&Message> {
    self.message.as_ref()
  }

  pub fn pending(&self) -> Option<&External> {
    self.pending.as_ref()
  }

  pub async fn handle(&mut self, event: Event) -> RenderEvent {
    if let Event::FocusGained | Event::FocusLost = event {
      return RenderEvent::no_ops();
    } else if let Event::Resize { .. } = event {
      return RenderEvent::render();
    } else if let Some(event) = self.try_handle_popup(&event) {
      return event;
    }

    match event {
      Event::Key(key) if key.kind == KeyEventKind::Press => match self.mode {
        Mode::Normal => self.handle_normal(key).await,
        Mode::Command | Mode::Search => self.handle_editor(key).await,
      },
      Event::Mouse(mouse) if self.mode.is_normal() => self.handle_mouse(mouse).await,
      Event::Paste(text) if !self.mode.is_normal() => {
        self.editor.push_str(&text);
        RenderEvent::render()
      }
      _ => RenderEvent::no_ops(),
    }
  }

  fn try_handle_popup(&mut self, event: &Event) -> Option<RenderEvent> {
    let popup = self.popup.as_mut()?;
    let handled = popup.handle_event(event).unwrap_or_else(RenderEvent::no_ops);

    if handled.kind.is_handled() {
      self.popup = None;
      Some(RenderEvent::render())
    } else {
      Some(handled)
    }
  }

  async fn handle_normal(&mut self, key: KeyEvent) -> RenderEvent {
    debug!(code = ?key.code, modifiers = ?key.modifiers, "normal mode key");
    if let keys!(Char(chr), NONE | SHIFT, Press) = key {
      return self.handle_char(chr).await;
    }

    self.chord.reset();
    match key {
      keys!(Char('c'), CONTROL, Press) => RenderEvent::exit(),
      keys!(Down, NONE, Press) => self.move_selection(1),
      keys!(Up, NONE, Press) => self.move_selection(-1),
      keys!(PageDown, NONE, Press) => self.move_selection(self.panel.rows() as isize),
      keys!(PageUp, NONE, Press) => self.move_selection(-(self.panel.rows() as isize)),
      keys!(Left, NONE, Press) => self.go_parent().await,
      keys!(Right, NONE, Press) | keys!(Enter, NONE, Press) => self.open_selected().await,
      _ => RenderEvent::no_ops(),
    }
  }

  async fn handle_char(&mut self, chr: char) -> RenderEvent {
    match self.chord.feed(chr) {
      Chord::Wait | Chord::Cancelled => RenderEvent::render(),
      Chord::Pair('d') => self.delete_selected().await,
      Chord::Pair('g') => {
        self.panel.select_first();
        RenderEvent::render()
      }
      Chord::Pair('y') => self.yank_selected(),
      Chord::Pair('x') => self.cut_selected(),
      Chord::Pair('p') => self.paste().await,
      Chord::Pair(_) => RenderEvent::no_ops(),
      Chord::Key('j') => self.move_selection(1),
      Chord::Key('k') => self.move_selection(-1),
      Chord::Key('h') => self.go_parent().await,
      Chord::Key('l') => self.open_selected().await,
      Chord::Key('G') => {
        self.panel.select_last();
        RenderEvent::render()
      }
      Chord::Key('v') => self.view_selected().await,
      Chord::Key('?') => {
        self.popup = Some(Popup::help());
        RenderEvent::render()
      }
      Chord::Key(':') => self.enter_mode(Mode::Command),
      Chord::Key('/') => self.enter_mode(Mode::Search),
      Chord::Key('H') => self.history_back().await,
      Chord::Key('L') => self.history_forward().await,
      Chord::Key('~') => self.go_home().await,
      Chord::Key('P') => self.pin_current(),
      Chord::Key(_) => RenderEvent::no_ops(),
    }
  }

  fn enter_mode(&mut self, mode: Mode) -> RenderEvent {
    self.mode = mode;
    self.editor.take();
    RenderEvent::render()
  }

  async fn handle_editor(&mut self, key: KeyEvent) -> RenderEvent {
    match self.editor.handle_key(key) {
      LineEdit::Edited => RenderEvent::render(),
      LineEdit::Ignored => RenderEvent::no_ops(),
      LineEdit::Cancel => {
        self.mode = Mode::Normal;
        self.editor.take();
        RenderEvent::render()
      }
      LineEdit::Submit => {
        let mode = std::mem::take(&mut self.mode);
        let input = self.editor.take();
        let command = match mode {
          Mode::Search => Command::Search(input),
          _ => Command::parse(&input),
        };
        self.run_command(command).await
      }
    }
  }

  async fn handle_mouse(&mut self, mouse: MouseEvent) -> RenderEvent {
    if mouse.kind != MouseEventKind::Moved {
      self.chord.reset();
    }

    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
      MouseEventKind::Down(MouseButton::Left) => {
        let Some(index) = self.panel.row_at(position) else {
          return RenderEvent::no_ops();
        };
        let now = Timestamp::now();
        let double = self
          .last_click
          .take()
          .is_some_and(|(row, at)| row == index && at.within(TimeDelta::milliseconds(DOUBLE_CLICK_MS), *now));

        self.panel.select(index);
        if double {
          self.open_selected().await
        } else {
          self.last_click = Some((index, now));
          RenderEvent::render()
        }
      }
      MouseEventKind::Down(MouseButton::Right) => {
        self.last_click = None;
        if let Some(index) = self.panel.row_at(position) {
          self.panel.select(index);
        }
        match self.panel.selected_entry() {
          Some(entry) if !entry.is_parent() => {
            let text = format!("Right click on: {}", entry.name);
            self.info(text)
          }
          _ => RenderEvent::no_ops(),
        }
      }
      MouseEventKind::ScrollDown if self.panel.area.contains(position) => self.move_selection(1),
      MouseEventKind::ScrollUp if self.panel.area.contains(position) => self.move_selection(-1),
      _ => RenderEvent::no_ops(),
    }
  }

  fn move_selection(&mut self, delta: isize) -> RenderEvent {
    let before = self.panel.selected();
    self.panel.move_by(delta);
    if before == self.panel.selected() { RenderEvent::no_ops() } else { RenderEvent::render() }
  }

  fn clipboard_label(&self) -> Option<String> {
    let path = self.clipboard.paths().first()?;
    let name = path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    Some(format!("{}: {name}", self.clipboard.mode().to_string().to_lowercase()))
  }

  fn bottom_line(&self) -> BottomLine<'_> {
    if !self.mode.is_normal() {
      return BottomLine::Editor(self.editor.as_line(self.mode.prefix()));
    }
    match self.message {
      Some(ref message) if message.is_visible(Local::now()) => BottomLine::Message(message),
      _ => BottomLine::Hints,
    }
  }
}

fn current_user() -> String {
  ["USER", "LOGNAME", "USERNAME"]
    .into_iter()
    .find_map(|key| std::env::var(key).ok().filter(|value| !value.is_empty()))
    .unwrap_or_else(|| "unknown".to_owned())
}

impl Widget for &App {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    if too_small(area) {
      Line::raw("Terminal too small! Resize and restart.").fg(ERROR_FG).render(area, buf);
      return;
    }

    let [main, status, bottom] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Length(1)]).areas(area);
    let [left, right] = Layout::horizontal([Constraint::Percentage(50); 2]).areas(main);

    FileList::new(&self.panel, self.icons).render(left, buf);
    CommandsPane::new(&self.pins, self.panel.cwd()).render(right, buf);
    StatusBar {
      selected: self.panel.selected(),
      total: self.panel.entries().len(),
      show_hidden: self.panel.show_hidden(),
      mode: self.panel.selected_entry().map(Entry::mode_string),
      clipboard: self.clipboard_label(),
      chord: self.chord.pending(),
      back: self.history.can_go_back(),
      forward: self.history.can_go_forward(),
      user: &self.user,
      clock: Timestamp::now(),
    }
    .render(status, buf);
    self.bottom_line().render(bottom, buf);

    if let Some(ref popup) = self.popup {
      popup.render(area, buf);
    }
  }
}
