//! A success-or-failure container and an adapter that turns failing calls into it.
//!
//! ```
//! use resultx::{wrap, Result};
//!
//! fn halve(n: i32) -> core::result::Result<i32, &'static str> {
//!     if n % 2 == 0 { Ok(n / 2) } else { Err("odd") }
//! }
//!
//! let halve = wrap(halve);
//!
//! let even: Result<i32, &str> = halve.call((10,));
//! assert!(even.is_success());
//! assert_eq!(even.map_value(|n| n + 1), 6);
//!
//! let odd = halve.call((7,));
//! assert_eq!(odd.value_or(0), 0);
//! assert_eq!(odd.unwrap_error(), "odd");
//! ```
#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2, try_trait_v2_residual))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod errors;
pub mod wrap;

pub use errors::{
    ConstructionError, Error, State, UnwrapError,
    Result::{self, Failure, Success},
};
pub use wrap::{Callable, Fallible, Wrapped, wrap};

#[cfg(feature = "std")]
pub use wrap::unwind::{Panic, WrappedUnwind, wrap_unwind};
