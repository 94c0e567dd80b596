use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tokio::time::Interval;

#[derive(Parser, Debug, Clone, Default)]
#[command(
  name = "fk-files",
  about = "Two-pane terminal file manager with vim-like keybindings",
  version,
  author = "FikusPI"
)]
pub struct AppArgs {
  /// Directory to open, defaults to the current directory
  pub path: Option<PathBuf>,

  /// Redraw rate in frames per second. 0 redraws only on events and once per second for status messages
  #[arg(long, default_value = "0")]
  pub fps: u8,

  /// Show hidden entries on start (toggle later with :hdn)
  #[arg(short = 'a', long)]
  pub hidden: bool,

  /// Pinned folders file, defaults to ~/.fk_files_config.json
  #[arg(long)]
  pub config: Option<PathBuf>,

  /// Draw nerd-font file icons in front of names
  #[arg(long)]
  pub icons: bool,

  #[command(subcommand)]
  pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
  /// Install the binary and its desktop entry below DESTDIR
  Install(InstallArgs),
  /// Remove what `install` placed below DESTDIR
  Uninstall(UninstallArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InstallArgs {
  /// Staging root prepended to every install path
  #[arg(long, env = "DESTDIR")]
  pub destdir: Option<PathBuf>,

  /// Executable to install, defaults to the running binary
  #[arg(long)]
  pub binary: Option<PathBuf>,

  /// Desktop entry to install, defaults to the built-in fk-files.desktop
  #[arg(long)]
  pub desktop_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UninstallArgs {
  /// Staging root prepended to every install path
  #[arg(long, env = "DESTDIR")]
  pub destdir: Option<PathBuf>,
}

impl AppArgs {
  pub fn create_fps_interval(&self) -> Interval {
    if self.fps == 0 {
      tokio::time::interval(tokio::time::Duration::from_secs(1))
    } else {
      tokio::time::interval(tokio::time::Duration::from_millis(1000 / self.fps.max(5) as u64))
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_consistent() {
    AppArgs::command().debug_assert();
  }

  #[test]
  fn plain_path_opens_the_browser() {
    let args = AppArgs::try_parse_from(["fk-files", "-a", "--icons", "/srv"]).unwrap();

    assert_eq!(args.path, Some(PathBuf::from("/srv")));
    assert!(args.hidden);
    assert!(args.icons);
    assert!(args.command.is_none());
  }

  #[test]
  fn install_subcommand_takes_destdir_flag() {
    let args = AppArgs::try_parse_from(["fk-files", "install", "--destdir", "/tmp/stage", "--binary", "target/fk-files"]).unwrap();

    let Some(Command::Install(install)) = args.command else {
      panic!("expected install subcommand");
    };
    assert_eq!(install.destdir, Some(PathBuf::from("/tmp/stage")));
    assert_eq!(install.binary, Some(PathBuf::from("target/fk-files")));
    assert_eq!(install.desktop_file, None);
  }

  #[test]
  fn uninstall_subcommand() {
    let args = AppArgs::try_parse_from(["fk-files", "uninstall", "--destdir", "/tmp/stage"]).unwrap();
    assert!(matches!(args.command, Some(Command::Uninstall(UninstallArgs { destdir: Some(_) }))));
  }
}
