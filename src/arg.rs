use alloc::{
    borrow::Cow,
    string::{String, ToString as _},
};
use core::fmt::{self, Display, Formatter};

use crate::format::{format_number, inspect_json};

/// Value passed to a message when an error is constructed.
///
/// Fixed templates substitute arguments into their placeholders,
/// computed messages receive them as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Json(serde_json::Value),
}

impl Arg {
    /// Captures any displayable value as a string argument
    #[inline]
    #[must_use]
    pub fn display(value: impl Display) -> Self {
        Self::Str(value.to_string())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            Self::Json(serde_json::Value::String(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_str(&self) -> bool {
        self.as_str().is_some()
    }
}

impl Display for Arg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => f.write_str(&format_number(*value)),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
            Self::Json(serde_json::Value::String(value)) => f.write_str(value),
            Self::Json(value) => f.write_str(&inspect_json(value, 0)),
        }
    }
}

impl From<&str> for Arg {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<&String> for Arg {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<String> for Arg {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Cow<'_, str>> for Arg {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl From<char> for Arg {
    #[inline]
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for Arg {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Arg {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Arg {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<serde_json::Value> for Arg {
    #[inline]
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_from_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(value.into())
                }
            }
        )*
    };
}

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
                }
            }
        )*
    };
}

impl_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);
impl_from_wide_int!(u64, usize, isize, i128, u128);

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Arg;

    use alloc::string::{String, ToString as _};

    #[test]
    fn test_conversions() {
        assert_eq!(Arg::from("a"), Arg::Str("a".into()));
        assert_eq!(Arg::from(String::from("b")), Arg::Str("b".into()));
        assert_eq!(Arg::from(7_u8), Arg::Int(7));
        assert_eq!(Arg::from(-7_i32), Arg::Int(-7));
        assert_eq!(Arg::from(u64::MAX), Arg::Float(18_446_744_073_709_551_615.0));
        assert_eq!(Arg::from(None::<&str>), Arg::Null);
        assert_eq!(Arg::from(Some(true)), Arg::Bool(true));
        assert_eq!(Arg::display(std::path::Path::new("/tmp/x").display()), Arg::Str("/tmp/x".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Arg::from("text").to_string(), "text");
        assert_eq!(Arg::from(42).to_string(), "42");
        assert_eq!(Arg::from(1.5).to_string(), "1.5");
        assert_eq!(Arg::from(2.0).to_string(), "2");
        assert_eq!(Arg::from(-0.0).to_string(), "-0");
        assert_eq!(Arg::Null.to_string(), "null");
        assert_eq!(Arg::from(serde_json::json!({ "a": 1 })).to_string(), "{ a: 1 }");
        assert_eq!(Arg::from(serde_json::json!("raw")).to_string(), "raw");
        assert_eq!(Arg::from(serde_json::json!({ "a": { "b": 1 } })).to_string(), "{ a: [Object] }");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Arg::from("path").as_str(), Some("path"));
        assert_eq!(Arg::from(serde_json::json!("path")).as_str(), Some("path"));
        assert_eq!(Arg::from(1).as_str(), None);
        assert!(Arg::from("x").is_str());
        assert!(Arg::from(serde_json::json!("x")).is_str());
        assert!(!Arg::from(serde_json::json!(["x"])).is_str());
        assert!(!Arg::Null.is_str());
    }
}
