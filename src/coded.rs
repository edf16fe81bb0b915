use alloc::{format, string::String};
use core::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
    panic::Location,
};
use tracing::debug;

use crate::{
    base::{ErrorBase, Generic, OutOfRange, TypeMismatch},
    errors::ResolveErrorKind,
    Arg, Registry,
};

/// Error with a message resolved by key and the key kept as its code.
///
/// The wrapped base error holds the resolved message, so the coded error can be
/// turned back into its base with [`CodedError::into_base`].
#[derive(Debug, Clone)]
pub struct CodedError<B> {
    base: B,
    code: String,
    location: &'static Location<'static>,
}

/// Coded general failure
pub type Error = CodedError<Generic>;
/// Coded type mismatch
pub type TypeError = CodedError<TypeMismatch>;
/// Coded out of range value
pub type RangeError = CodedError<OutOfRange>;

impl<B: ErrorBase> CodedError<B> {
    /// Constructs an error with a message from the process-wide registry.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::NoMessage`] if nothing is registered for the key,
    /// no error is constructed in that case.
    #[cfg(feature = "std")]
    #[inline]
    #[track_caller]
    pub fn new(key: &str, args: &[Arg]) -> Result<Self, ResolveErrorKind> {
        let message = crate::global::resolve(key, args)?;
        Ok(Self::with_message(key, message, Location::caller()))
    }

    /// Constructs an error with a message from the given registry.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::NoMessage`] if nothing is registered for the key,
    /// no error is constructed in that case.
    #[inline]
    #[track_caller]
    pub fn from_registry(registry: &Registry, key: &str, args: &[Arg]) -> Result<Self, ResolveErrorKind> {
        let message = registry.resolve(key, args)?;
        Ok(Self::with_message(key, message, Location::caller()))
    }

    fn with_message(key: &str, message: String, location: &'static Location<'static>) -> Self {
        debug!(code = key, %location, "Constructed");
        Self {
            base: B::from_message(message),
            code: key.into(),
            location,
        }
    }
}

impl<B: ErrorBase> CodedError<B> {
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        self.base.message()
    }

    /// Base name followed by the code, e.g. `TypeError [BAD_ARG]`
    #[inline]
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} [{}]", self.base.name(), self.code)
    }

    /// Where the error was constructed
    #[inline]
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    #[inline]
    #[must_use]
    pub const fn base(&self) -> &B {
        &self.base
    }

    #[inline]
    #[must_use]
    pub fn into_base(self) -> B {
        self.base
    }
}

impl<B> AsRef<B> for CodedError<B> {
    #[inline]
    fn as_ref(&self) -> &B {
        &self.base
    }
}

impl<B: ErrorBase> Display for CodedError<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.base.name(), self.code, self.base.message())
    }
}

impl<B: ErrorBase> StdError for CodedError<B> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{CodedError, Error, RangeError, TypeError};
    use crate::{
        base::{ErrorBase, Generic, TypeMismatch},
        errors::ResolveErrorKind,
        Arg, Registry, RegistryBuilder,
    };

    use alloc::{
        format,
        string::{String, ToString as _},
    };
    use core::{error::Error as StdError, fmt};
    use tracing_test::traced_test;

    fn registry() -> Registry {
        RegistryBuilder::new()
            .register("FILE_NOT_FOUND", "File %s was not found")
            .register("CLOSED", "Stream is closed")
            .register_fn("BAD_ARG", |args| {
                format!(
                    "Expected {}, got {}",
                    args.first().map(Arg::to_string).unwrap_or_default(),
                    args.get(1).map(Arg::to_string).unwrap_or_default(),
                )
            })
            .build()
    }

    #[test]
    #[traced_test]
    fn test_fixed_message() {
        let err = Error::from_registry(&registry(), "CLOSED", &[]).unwrap();

        assert_eq!(err.message(), "Stream is closed");
        assert_eq!(err.code(), "CLOSED");
        assert_eq!(err.name(), "Error [CLOSED]");
        assert_eq!(err.to_string(), "Error [CLOSED]: Stream is closed");
    }

    #[test]
    #[traced_test]
    fn test_template_message() {
        let err = Error::from_registry(&registry(), "FILE_NOT_FOUND", &[Arg::from("/tmp/x")]).unwrap();

        assert_eq!(err.message(), "File /tmp/x was not found");
        assert_eq!(err.code(), "FILE_NOT_FOUND");
    }

    #[test]
    #[traced_test]
    fn test_computed_message() {
        let args = [Arg::from("string"), Arg::from("number")];
        let err = TypeError::from_registry(&registry(), "BAD_ARG", &args).unwrap();

        assert_eq!(err.message(), "Expected string, got number");
        assert!(err.name().starts_with("TypeError"));
        assert!(err.name().ends_with("[BAD_ARG]"));
    }

    #[test]
    #[traced_test]
    fn test_unknown_key() {
        let err = RangeError::from_registry(&registry(), "UNKNOWN_KEY", &[]).unwrap_err();

        assert_eq!(err, ResolveErrorKind::NoMessage { key: "UNKNOWN_KEY".into() });
    }

    #[test]
    fn test_registry_error_helper() {
        let err = registry().error::<TypeMismatch>("CLOSED", &[]).unwrap();

        assert_eq!(err.name(), "TypeError [CLOSED]");
    }

    #[test]
    fn test_base_is_preserved() {
        let err = Error::from_registry(&registry(), "CLOSED", &[]).unwrap();

        let base: &Generic = err.as_ref();
        assert_eq!(base.message(), "Stream is closed");
        assert_eq!(err.base().name(), "Error");
        assert_eq!(err.clone().into_base().to_string(), "Stream is closed");

        let dyn_err: &dyn StdError = &err;
        assert!(dyn_err.source().is_none());
        assert_eq!(dyn_err.to_string(), "Error [CLOSED]: Stream is closed");
    }

    #[test]
    fn test_location_points_to_caller() {
        let line = line!() + 1;
        let err = Error::from_registry(&registry(), "CLOSED", &[]).unwrap();

        assert_eq!(err.location().file(), file!());
        assert_eq!(err.location().line(), line);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_new_uses_process_wide_registry() {
        crate::register("CODED_PROCESS_WIDE", "process-wide %s").unwrap();

        let err = Error::new("CODED_PROCESS_WIDE", &[Arg::from("message")]).unwrap();
        assert_eq!(err.message(), "process-wide message");
        assert!(Error::new("CODED_NOT_REGISTERED", &[]).is_err());
    }

    #[test]
    fn test_message_is_copied() {
        let first = RegistryBuilder::new().register("K", "first").build();
        let err = Error::from_registry(&first, "K", &[]).unwrap();
        drop(first);

        assert_eq!(err.message(), "first");
    }

    #[derive(Debug)]
    struct Custom {
        message: String,
        name: &'static str,
    }

    impl fmt::Display for Custom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.message)
        }
    }

    impl StdError for Custom {}

    impl ErrorBase for Custom {
        fn from_message(message: String) -> Self {
            Self { message, name: "CustomError" }
        }

        fn name(&self) -> &str {
            self.name
        }

        fn message(&self) -> &str {
            &self.message
        }
    }

    #[test]
    fn test_name_follows_base() {
        let mut err = CodedError::<Custom>::from_registry(&registry(), "CLOSED", &[]).unwrap();
        assert_eq!(err.name(), "CustomError [CLOSED]");

        err.base.name = "RenamedError";
        assert_eq!(err.name(), "RenamedError [CLOSED]");
    }
}
