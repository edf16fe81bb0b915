use alloc::string::String;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterErrorKind {
    #[error("Registry is frozen, message with key {key} can't be registered")]
    Frozen { key: String },
    #[error("Registry is frozen, config can't be changed")]
    FrozenConfig,
}
