//! Adapting calls that can fail into [`Result`]s.
//!
//! [`wrap`] takes any function or closure whose return type is [`Fallible`] and
//! gives back a [`Wrapped`] whose [`call`](Wrapped::call) never fails: an `Err` or
//! `Failure` coming out of the function is captured as the failure payload of the
//! returned [`Result`].
//!
//! Arguments are passed as a tuple, so the same adapter serves functions of any
//! arity up to eight.

use core::any::type_name;

use crate::errors::Result;

#[cfg(feature = "std")]
pub mod unwind;

/// A return type that carries either a value or a raised error.
pub trait Fallible {
    type Value;
    type Error;

    fn into_result(self) -> Result<Self::Value, Self::Error>;
}

impl<V, E> Fallible for core::result::Result<V, E> {
    type Value = V;
    type Error = E;

    fn into_result(self) -> Result<V, E> {
        Result::from(self)
    }
}

impl<V, E> Fallible for Result<V, E> {
    type Value = V;
    type Error = E;

    fn into_result(self) -> Self {
        self
    }
}

/// Something that can be invoked with the argument tuple `Args`.
pub trait Callable<Args> {
    type Output;

    fn call_with(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($arg:ident: $ty:ident),*) => {
        impl<Func, Ret, $($ty),*> Callable<($($ty,)*)> for Func
        where
            Func: Fn($($ty),*) -> Ret,
        {
            type Output = Ret;

            fn call_with(&self, ($($arg,)*): ($($ty,)*)) -> Ret {
                self($($arg),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(a: A);
impl_callable!(a: A, b: B);
impl_callable!(a: A, b: B, c: C);
impl_callable!(a: A, b: B, c: C, d: D);
impl_callable!(a: A, b: B, c: C, d: D, e: E);
impl_callable!(a: A, b: B, c: C, d: D, e: E, f: F);
impl_callable!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_callable!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);

/// A function whose failures come back as [`Result`] values.
#[derive(Debug, Clone, Copy)]
pub struct Wrapped<F> {
    func: F,
}

/// Wraps `func` so that every call produces a [`Result`].
///
/// # Examples
///
/// ```
/// use resultx::wrap;
///
/// let parse = wrap(|text: &str| text.parse::<i32>());
///
/// assert_eq!(parse.call(("20",)).unwrap_value(), 20);
/// assert!(parse.call(("twenty",)).is_failure());
/// ```
pub const fn wrap<F>(func: F) -> Wrapped<F> {
    Wrapped { func }
}

impl<F> Wrapped<F> {
    /// Invokes the wrapped function with `args`.
    ///
    /// A normal return becomes a success; a returned error becomes a failure holding
    /// that exact error.
    pub fn call<Args>(
        &self,
        args: Args,
    ) -> Result<<F::Output as Fallible>::Value, <F::Output as Fallible>::Error>
    where
        F: Callable<Args>,
        F::Output: Fallible,
    {
        let outcome = self.func.call_with(args).into_result();
        if outcome.is_failure() {
            log::debug!(
                target: "resultx::wrap",
                "call to `{}` failed, captured as a failure",
                type_name::<F>()
            );
        }
        outcome
    }

    pub fn into_inner(self) -> F {
        self.func
    }
}
