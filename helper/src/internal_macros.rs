#[doc(hidden)]
#[macro_export]
macro_rules! __keys_code {
  ($key:ident($val:tt)) => {
    ::crossterm::event::KeyCode::$key($val)
  };
  ($key:ident) => {
    ::crossterm::event::KeyCode::$key
  };
}

/// Builds a `KeyEvent` pattern for `match` arms.
///
/// ```ignore
/// keys!(Enter)                          // any modifiers, any kind
/// keys!(Char('j') | Char('k'))          // alternative key codes
/// keys!(Char('c'), CONTROL)             // exact modifiers
/// keys!(Char('G'), NONE | SHIFT, Press) // modifiers and kind
/// keys!(Char(chr), NONE, Press)         // binds the character
/// ```
///
/// Modifiers are matched exactly, so `keys!(Char('c'), CONTROL)` does not match `CONTROL | SHIFT`.
#[macro_export]
macro_rules! keys {
  ($key1:ident($val1:tt) | $key2:ident($val2:tt)) => {
    ::crossterm::event::KeyEvent {
      code: $crate::__keys_code!($key1($val1)) | $crate::__keys_code!($key2($val2)),
      ..
    }
  };

  ($key:ident($val:tt), $($mods:ident)|+, $kind:ident) => {
    ::crossterm::event::KeyEvent {
      code: $crate::__keys_code!($key($val)),
      modifiers: $(::crossterm::event::KeyModifiers::$mods)|+,
      kind: ::crossterm::event::KeyEventKind::$kind,
      ..
    }
  };
  ($key:ident, $($mods:ident)|+, $kind:ident) => {
    ::crossterm::event::KeyEvent {
      code: $crate::__keys_code!($key),
      modifiers: $(::crossterm::event::KeyModifiers::$mods)|+,
      kind: ::crossterm::event::KeyEventKind::$kind,
      ..
    }
  };

  ($key:ident($val:tt), $($mods:ident)|+) => {
    ::crossterm::event::KeyEvent {
      code: $crate::__keys_code!($key($val)),
      modifiers: $(::crossterm::event::KeyModifiers::$mods)|+,
      ..
    }
  };
  ($key:ident, $($mods:ident)|+) => {
    ::crossterm::event::KeyEvent {
      code: $crate::__keys_code!($key),
      modifiers: $(::crossterm::event::KeyModifiers::$mods)|+,
      ..
    }
  };

  ($key:ident($val:tt)) => {
    ::crossterm::event::KeyEvent {
      code: $crate::__keys_code!($key($val)),
      ..
    }
  };
  ($key:ident) => {
    ::crossterm::event::KeyEvent {
      code: $crate::__keys_code!($key),
      ..
    }
  };
}
