use core::{any::type_name, fmt, ptr};

use super::Result;

/// Diagnostic form: payload type, state and the payload's address.
///
/// Meant for logs. The address is that of the slot holding the payload inside this
/// result, so it changes when the result is moved. For pointer payloads such as the
/// default `Box<dyn Error>` it is the address of the box, not of the boxed error.
impl<V, E> fmt::Display for Result<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(
                f,
                "Result<{}> (Success) @ addr:{:p}",
                type_name::<V>(),
                ptr::from_ref(value)
            ),
            Self::Failure(error) => write!(
                f,
                "Result<{}> (Failure) @ addr:{:p}",
                type_name::<E>(),
                ptr::from_ref(error)
            ),
        }
    }
}
