use alloc::string::String;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveErrorKind {
    #[error("An invalid error message key was used: {key}.")]
    NoMessage { key: String },
}
