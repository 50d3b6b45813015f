//! Capturing panics as failures.

use alloc::{boxed::Box, string::String};
use core::{
    any::{Any, type_name},
    fmt,
};
use std::panic::{self, AssertUnwindSafe};

use super::Callable;
use crate::errors::Result;

/// A panic raised by a function wrapped with [`wrap_unwind`].
#[derive(Debug)]
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    /// The panic message, when the payload is a `&str` or a `String`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// The original payload, for resuming the unwind or inspecting custom payloads.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {message}"),
            None => f.write_str("panicked with a non-string payload"),
        }
    }
}

impl core::error::Error for Panic {}

/// A function whose panics come back as [`Result`] failures.
#[derive(Debug, Clone, Copy)]
pub struct WrappedUnwind<F> {
    func: F,
}

/// Wraps `func` so that every call produces a [`Result`], with a panic as the failure.
///
/// The process panic hook still runs when `func` panics.
///
/// # Examples
///
/// ```
/// use resultx::wrap_unwind;
///
/// let divide = wrap_unwind(|a: i32, b: i32| a / b);
///
/// assert_eq!(divide.call((20, 2)).unwrap_value(), 10);
/// assert!(divide.call((20, 0)).is_failure());
/// ```
pub const fn wrap_unwind<F>(func: F) -> WrappedUnwind<F> {
    WrappedUnwind { func }
}

impl<F> WrappedUnwind<F> {
    /// Invokes the wrapped function with `args`, capturing a panic as the failure.
    pub fn call<Args>(&self, args: Args) -> Result<F::Output, Panic>
    where
        F: Callable<Args>,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| self.func.call_with(args))) {
            Ok(output) => Result::Success(output),
            Err(payload) => {
                let panic = Panic { payload };
                log::debug!(
                    target: "resultx::wrap",
                    "call to `{}` {panic}, captured as a failure",
                    type_name::<F>()
                );
                Result::Failure(panic)
            }
        }
    }

    pub fn into_inner(self) -> F {
        self.func
    }
}
