use super::{ConstructionError, Result};

impl<V, E> Result<V, E> {
    /// Converts into the standard library's result.
    ///
    /// # Errors
    ///
    /// Returns `Err` holding the failure value when the result is a failure.
    pub fn into_std(self) -> core::result::Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<V, E> From<core::result::Result<V, E>> for Result<V, E> {
    fn from(result: core::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for core::result::Result<V, E> {
    fn from(result: Result<V, E>) -> Self {
        result.into_std()
    }
}

impl<V, E> TryFrom<(Option<V>, Option<E>)> for Result<V, E> {
    type Error = ConstructionError;

    fn try_from((value, error): (Option<V>, Option<E>)) -> core::result::Result<Self, Self::Error> {
        Self::new(value, error).into_std()
    }
}

#[cfg(feature = "try_trait")]
mod try_trait {
    use core::{
        convert::Infallible,
        ops::{ControlFlow, FromResidual, Residual, Try},
    };

    use crate::errors::Result;

    impl<V, E> Try for Result<V, E> {
        type Output = V;
        type Residual = Result<Infallible, E>;

        fn from_output(output: V) -> Self {
            Self::Success(output)
        }

        fn branch(self) -> ControlFlow<Self::Residual, V> {
            match self {
                Self::Success(value) => ControlFlow::Continue(value),
                Self::Failure(error) => ControlFlow::Break(Result::Failure(error)),
            }
        }
    }

    impl<V, E> Residual<V> for Result<Infallible, E> {
        type TryType = Result<V, E>;
    }

    impl<V, E, F: From<E>> FromResidual<Result<Infallible, E>> for Result<V, F> {
        fn from_residual(residual: Result<Infallible, E>) -> Self {
            match residual {
                Result::Success(never) => match never {},
                Result::Failure(error) => Self::Failure(From::from(error)),
            }
        }
    }

    impl<V, E, F: From<E>> FromResidual<core::result::Result<Infallible, E>> for Result<V, F> {
        fn from_residual(residual: core::result::Result<Infallible, E>) -> Self {
            match residual {
                Ok(never) => match never {},
                Err(error) => Self::Failure(From::from(error)),
            }
        }
    }

    impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for core::result::Result<T, F> {
        fn from_residual(residual: Result<Infallible, E>) -> Self {
            match residual {
                Result::Success(never) => match never {},
                Result::Failure(error) => Err(From::from(error)),
            }
        }
    }
}
