use std::io::{ErrorKind, Stdout, stdout};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use helper::{PollEvent, RenderEvent, RenderKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::select;
use tokio::time::Interval;
use tracing::{error, info};

use crate::app::{App, AppOptions};
use crate::args::{AppArgs, Command};

pub mod app;
pub mod areas;
pub mod args;
pub mod install;
pub mod logging;
pub mod ui;
pub mod widgets;

type Term = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let mut args = AppArgs::parse();
  match args.command.take() {
    Some(Command::Install(install)) => {
      logging::init_stderr();
      return install::run_install(install);
    }
    Some(Command::Uninstall(uninstall)) => {
      logging::init_stderr();
      return install::run_uninstall(uninstall);
    }
    None => {}
  }

  let log = logging::init_file()?;
  let options = AppOptions::from_args(&args).await?;
  info!(log = ?log, start = %options.start.display(), "starting");
  let app = App::new(options).await?;

  let mut terminal = enter_terminal().context("cannot set up the terminal")?;
  let status = run(&mut terminal, app, args.create_fps_interval()).await;
  leave_terminal(&mut terminal).context("cannot restore the terminal")?;

  if let Err(ref error) = status {
    error!(%error, "terminated");
  }
  status
}

async fn run(terminal: &mut Term, mut app: App, mut fps: Interval) -> anyhow::Result<()> {
  let mut events = PollEvent::default();
  let mut changes = app.subscribe_changes();
  terminal.draw(|frame| frame.render_widget(&app, frame.area()))?;

  loop {
    let handled = select! {
      _ = fps.tick() => RenderEvent::render(),
      Ok(()) = changes.changed() => app.reload().await,
      event = events.read() => match event {
        Ok(event) => app.handle(event).await,
        Err(error) if error.kind() == ErrorKind::UnexpectedEof => return Err(error.into()),
        Err(error) => app.show(error.into()),
      },
    };

    match handled.kind {
      RenderKind::Exit => break,
      RenderKind::NoOps => continue,
      RenderKind::Suspend => {
        leave_terminal(terminal)?;
        app.run_external().await;
        enter_alternate(terminal)?;
        terminal.clear()?;
      }
      _ => {}
    }

    terminal.draw(|frame| frame.render_widget(&app, frame.area()))?;
  }

  info!("exiting");
  Ok(())
}

fn enter_terminal() -> anyhow::Result<Term> {
  let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
  enter_alternate(&mut terminal)?;
  Ok(terminal)
}

fn enter_alternate(terminal: &mut Term) -> std::io::Result<()> {
  enable_raw_mode()?;
  execute!(terminal.backend_mut(), EnterAlternateScreen, EnableMouseCapture)?;
  terminal.hide_cursor()
}

/// Hands the terminal back in its cooked state, either on exit or while an external program runs.
fn leave_terminal(terminal: &mut Term) -> std::io::Result<()> {
  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
  terminal.show_cursor()
}
