use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

/// A raised condition (panic) captured at a conversion boundary.
///
/// Holds the original panic payload. Payloads raised with `panic!` carry a message that [`message`](Self::message)
/// returns; payloads raised with [`std::panic::panic_any`] can be recovered with [`downcast`](Self::downcast).
#[derive(Error)]
#[error("{}", describe(.payload))]
pub struct Panic {
  payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
  #[inline]
  pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
    Self { payload }
  }

  /// Gets the panic message, if the payload is a string.
  #[inline]
  pub fn message(&self) -> Option<&str> { payload_message(&*self.payload) }

  #[inline]
  pub fn is<P: Any>(&self) -> bool {
    self.payload.is::<P>()
  }

  /// Recovers the payload as a `P`, or gives `self` back if the payload is of another type.
  pub fn downcast<P: Any>(self) -> Result<P, Self> {
    self.payload.downcast::<P>().map(|p| *p).map_err(Self::new)
  }

  /// Raises the captured condition again.
  #[inline]
  pub fn resume(self) -> ! {
    std::panic::resume_unwind(self.payload)
  }
}

impl Debug for Panic {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Panic")
      .field("message", &self.message())
      .finish_non_exhaustive()
  }
}

fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
  if let Some(message) = payload.downcast_ref::<&'static str>() {
    Some(message)
  } else if let Some(message) = payload.downcast_ref::<String>() {
    Some(message.as_str())
  } else {
    None
  }
}

#[allow(clippy::borrowed_box)]
fn describe<'a>(payload: &'a Box<dyn Any + Send + 'static>) -> &'a str {
  payload_message(&**payload).unwrap_or("panicked with a non-string payload")
}

/// Runs `f`, capturing a panic into `Err`.
///
/// Panics are caught with [`AssertUnwindSafe`]: the closure is consumed, so nothing it captured is observed again
/// by the caller after an unwind.
pub fn catch<T>(f: impl FnOnce() -> T) -> Result<T, Panic> {
  catch_unwind(AssertUnwindSafe(f)).map_err(Panic::new)
}

#[cfg(test)]
mod tests {
  use std::panic::panic_any;

  use super::*;

  #[derive(Debug, PartialEq)]
  struct Boom(u32);

  #[test]
  fn test_catch_returns_value() {
    assert_eq!(catch(|| 1 + 1).ok(), Some(2));
  }

  #[test]
  fn test_catch_static_message() {
    let panic = catch(|| -> () { panic!("static message") }).unwrap_err();
    assert_eq!(panic.message(), Some("static message"));
    assert_eq!(panic.to_string(), "static message");
  }

  #[test]
  fn test_catch_formatted_message() {
    let code = 7;
    let panic = catch(|| -> () { panic!("code {}", code) }).unwrap_err();
    assert_eq!(panic.message(), Some("code 7"));
    assert!(panic.is::<String>());
  }

  #[test]
  fn test_downcast_custom_payload() {
    let panic = catch(|| -> () { panic_any(Boom(3)) }).unwrap_err();
    assert_eq!(panic.message(), None);
    assert_eq!(panic.to_string(), "panicked with a non-string payload");
    let panic = panic.downcast::<String>().unwrap_err();
    assert_eq!(panic.downcast::<Boom>().ok(), Some(Boom(3)));
  }

  #[test]
  fn test_display_and_debug_use_message() {
    let panic = Panic::new(Box::new("described"));
    assert_eq!(format!("{}", panic), "described");
    assert_eq!(format!("{:?}", panic), "Panic { message: Some(\"described\"), .. }");
    let panic = Panic::new(Box::new(Boom(1)));
    assert_eq!(format!("{}", panic), "panicked with a non-string payload");
  }

  #[test]
  #[should_panic(expected = "again")]
  fn test_resume() {
    let panic = catch(|| -> () { panic!("again") }).unwrap_err();
    panic.resume();
  }
}
