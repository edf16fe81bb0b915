#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod arg;
pub(crate) mod base;
pub(crate) mod coded;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(feature = "std")]
pub(crate) mod global;
pub(crate) mod message;
pub(crate) mod registry;

pub mod format;

pub use arg::Arg;
pub use base::{ErrorBase, Generic, OutOfRange, TypeMismatch};
pub use coded::{CodedError, Error, RangeError, TypeError};
pub use config::Config;
pub use errors::{RegisterErrorKind, ResolveErrorKind};
#[cfg(feature = "std")]
pub use global::{configure, freeze, is_frozen, register, register_fn, resolve, snapshot};
pub use message::Message;
pub use registry::{Registry, RegistryBuilder};
