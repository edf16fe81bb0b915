use alloc::string::String;
use core::{error::Error as StdError, fmt::Debug};

/// Capability an error type needs to be wrapped into a [`CodedError`](crate::CodedError):
/// it can be constructed from a message and reports a type name.
pub trait ErrorBase: StdError + Debug + Sized {
    #[must_use]
    fn from_message(message: String) -> Self;

    #[must_use]
    fn name(&self) -> &str;

    #[must_use]
    fn message(&self) -> &str;
}

macro_rules! impl_error_base {
    (
        $(#[$meta:meta])*
        $ty:ident => $name:literal
    ) => {
        $(#[$meta])*
        #[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
        #[error("{message}")]
        pub struct $ty {
            message: String,
        }

        impl ErrorBase for $ty {
            #[inline]
            fn from_message(message: String) -> Self {
                Self { message }
            }

            #[inline]
            fn name(&self) -> &str {
                $name
            }

            #[inline]
            fn message(&self) -> &str {
                &self.message
            }
        }
    };
}

impl_error_base! {
    /// General failure
    Generic => "Error"
}

impl_error_base! {
    /// Value of an unexpected type
    TypeMismatch => "TypeError"
}

impl_error_base! {
    /// Value outside of the allowed range or set of values
    OutOfRange => "RangeError"
}
