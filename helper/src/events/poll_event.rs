use std::io::{Error, ErrorKind, Result};

use crossterm::event::{Event, EventStream};
use futures::StreamExt;

/// Async reader over the crossterm event stream.
#[derive(Default)]
pub struct PollEvent {
  inner: EventStream,
}

impl PollEvent {
  /// Waits for the next terminal event. A closed stream is reported as `UnexpectedEof`.
  pub async fn read(&mut self) -> Result<Event> {
    match self.inner.next().await {
      Some(event) => event,
      None => Err(Error::new(ErrorKind::UnexpectedEof, "terminal event stream closed")),
    }
  }
}
