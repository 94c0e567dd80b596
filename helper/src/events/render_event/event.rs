use ratatui::text::Span;
use strum::{Display, EnumIs};

#[derive(Clone, Debug, Default, Eq, PartialEq, EnumIs, Display)]
pub enum RenderKind {
  #[default]
  Render,
  NoOps,
  #[strum(to_string = "{0}")]
  Error(Span<'static>),
  /// A popup finished and can be closed.
  Handled,
  /// The terminal must be released for an external program.
  Suspend,
  Exit,
}
