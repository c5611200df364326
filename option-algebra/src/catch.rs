//! Converting a panicking thunk into `None`.
//!
//! [`try_catch`] evaluates a thunk exactly once. If the thunk panics, the
//! panic is caught at that call and the result is `None`; the panic's
//! payload is discarded (it is logged at `debug` level through
//! `tracing`). [`catch`] is the variant that keeps the payload.
//!
//! Only unwinding panics can be caught. A binary built with
//! `panic = "abort"` terminates before `try_catch` can observe anything.
//! The default panic hook still reports the panic on stderr.
//!
//! # Example
//!
//! ```rust
//! use option_algebra::catch::try_catch;
//!
//! assert_eq!(try_catch(|| 1), Some(1));
//! assert_eq!(try_catch(|| -> i32 { panic!("boom") }), None);
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// A panic caught by [`catch`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("thunk panicked: {message}")]
pub struct Panicked {
    /// The panic message, when the payload was a string.
    pub message: String,
}

impl Panicked {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_owned()
        };
        Panicked { message }
    }
}

/// Run `thunk` once, turning a panic into [`Panicked`].
///
/// ```rust
/// use option_algebra::catch::catch;
///
/// let err = catch(|| -> () { panic!("out of range: {}", 7) }).unwrap_err();
/// assert_eq!(err.message, "out of range: 7");
/// assert_eq!(catch(|| "fine"), Ok("fine"));
/// ```
pub fn catch<T, F>(thunk: F) -> Result<T, Panicked>
where
    F: FnOnce() -> T,
{
    // The boundary covers this one call. Whatever state `thunk` captured
    // is the caller's, exactly as with a bare `catch_unwind`.
    panic::catch_unwind(AssertUnwindSafe(thunk))
        .map_err(|payload| Panicked::from_payload(&*payload))
}

/// Run `thunk` once: `Some(result)` on return, `None` on panic.
///
/// The panic hook runs before the unwind reaches this call, so the
/// default hook still prints the panic to stderr. Install a hook to
/// silence it:
///
/// ```rust
/// use option_algebra::catch::try_catch;
/// use std::panic;
///
/// let previous = panic::take_hook();
/// panic::set_hook(Box::new(|_| {}));
/// let r = try_catch(|| -> u8 { panic!("quiet") });
/// panic::set_hook(previous);
///
/// assert_eq!(r, None);
/// ```
pub fn try_catch<T, F>(thunk: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    match catch(thunk) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(%err, "try_catch: discarding panic");
            None
        }
    }
}

/// Run a fallible `thunk` once: `None` on `Err` or on panic.
///
/// ```rust
/// use option_algebra::catch::try_catch_result;
///
/// assert_eq!(try_catch_result(|| "12".parse::<u8>()), Some(12));
/// assert_eq!(try_catch_result(|| "300".parse::<u8>()), None);
/// ```
pub fn try_catch_result<T, E, F>(thunk: F) -> Option<T>
where
    F: FnOnce() -> Result<T, E>,
{
    try_catch(thunk).and_then(Result::ok)
}
