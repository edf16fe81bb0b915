/// Builds an array of [`Arg`](crate::Arg) from values of different types.
///
/// # Examples
/// ```rust
/// use keyerr::{args, Arg};
///
/// let args = args!["/tmp/x", 42, true];
/// assert_eq!(args[1], Arg::Int(42));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Arg::from($arg)),*]
    };
}

/// Constructs a coded error from the process-wide registry.
/// Requires the `std` feature.
///
/// # Syntax
/// ```text
/// coded!(Variant, key [, arg ...])
/// ```
///
/// # Examples
/// ```rust
/// use keyerr::{coded, register, TypeError};
///
/// register("DOC_BAD_ARG", "Expected %s, got %s").unwrap();
///
/// let err = coded!(TypeError, "DOC_BAD_ARG", "string", 1).unwrap();
/// assert_eq!(err.message(), "Expected string, got 1");
/// assert_eq!(err.name(), "TypeError [DOC_BAD_ARG]");
/// ```
#[macro_export]
macro_rules! coded {
    ($variant:ty, $key:expr $(, $arg:expr)* $(,)?) => {
        <$variant>::new($key, &$crate::args![$($arg),*])
    };
}
