use chrono::{DateTime, Local};
use ratatui::text::Span;

macro_rules! impl_variants {
    ($vi:vis, $variant:ident, $event:ident$(($($parname:ident:$partype:ty),*))? $(,)?) => {
      impl $crate::RenderEvent {
        $vi fn $variant($($($parname: $partype),+)?) -> Self {
          Self {kind: $crate::RenderKind::$event$(($($parname),+))?, event_time: Local::now()}
        }
      }
    };
}

impl_variants!(pub, render, Render);
impl_variants!(pub, no_ops, NoOps);
impl_variants!(pub, handled, Handled);
impl_variants!(pub, suspend, Suspend);
impl_variants!(pub, exit, Exit);
impl_variants!(pub, error, Error(v: Span<'static>));

mod event;
pub use event::RenderKind;

/// Outcome of handling one terminal event, telling the main loop what to do next.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderEvent {
  pub kind: RenderKind,
  pub event_time: DateTime<Local>,
}

impl From<std::io::Error> for RenderEvent {
  fn from(error: std::io::Error) -> Self {
    Self::error(Span::from(error.to_string()))
  }
}
