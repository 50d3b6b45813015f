use core::fmt;

use thiserror::Error;

/// The two states of a [`Result`](super::Result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Success,
    Failure,
}

impl State {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Success => Self::Failure,
            Self::Failure => Self::Success,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Failure => f.write_str("failure"),
        }
    }
}

/// Returned by [`Result::new`](super::Result::new) when the channels do not hold exactly one payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConstructionError {
    #[error("must initiate a value or an error")]
    Neither,
    #[error("cannot initiate a value and an error at the same time")]
    Both,
}

/// A channel was read that the result does not populate.
///
/// The payload of the populated channel travels with the error so that it is not lost
/// when the result is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("cannot use {found} result as {expected} value")]
pub struct UnwrapError<P> {
    expected: State,
    found: State,
    payload: P,
}

impl<P> UnwrapError<P> {
    pub(crate) const fn new(expected: State, payload: P) -> Self {
        Self {
            expected,
            found: expected.opposite(),
            payload,
        }
    }

    /// The state the caller asked for.
    #[must_use]
    pub const fn expected(&self) -> State {
        self.expected
    }

    /// The state the result was actually in.
    #[must_use]
    pub const fn found(&self) -> State {
        self.found
    }

    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}
