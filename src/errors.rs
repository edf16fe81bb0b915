mod register;
mod resolve;

pub use register::RegisterErrorKind;
pub use resolve::ResolveErrorKind;
