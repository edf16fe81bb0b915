use alloc::{
    borrow::Cow,
    string::{String, ToString as _},
    sync::Arc,
};
use core::fmt::{self, Debug, Display, Formatter};

use crate::{format::format, Arg};

pub(crate) type MessageFn = Arc<dyn Fn(&[Arg]) -> String + Send + Sync>;

/// Value stored for a key in a registry
#[derive(Clone)]
pub enum Message {
    /// Fixed text, optionally with printf-style placeholders
    Template(Cow<'static, str>),
    /// Text produced from the construction arguments
    Computed(MessageFn),
}

impl Message {
    /// Coerces any displayable value to a fixed template
    #[inline]
    #[must_use]
    pub fn template(value: impl Display) -> Self {
        Self::Template(Cow::Owned(value.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&[Arg]) -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Produces the final text for `args`.
    ///
    /// Computed messages are called with `args` as they are, so they are
    /// responsible for their arity and argument types.
    /// Templates are returned unchanged without arguments and formatted otherwise.
    #[must_use]
    pub fn render(&self, args: &[Arg]) -> String {
        match self {
            Self::Computed(f) => f(args),
            Self::Template(template) if args.is_empty() => template.to_string(),
            Self::Template(template) => format(template, args),
        }
    }
}

impl Debug for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&'static str> for Message {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::Template(Cow::Borrowed(value))
    }
}

impl From<String> for Message {
    #[inline]
    fn from(value: String) -> Self {
        Self::Template(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for Message {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::Template(value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Message;
    use crate::Arg;

    use alloc::{format, string::String};
    use core::sync::atomic::{AtomicU8, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_template_without_args() {
        let message = Message::from("100%% done, %s");
        assert_eq!(message.render(&[]), "100%% done, %s");
    }

    #[test]
    fn test_template_with_args() {
        let message = Message::from("File %s was not found");
        assert_eq!(message.render(&[Arg::from("/tmp/x")]), "File /tmp/x was not found");
    }

    #[test]
    fn test_template_coercion() {
        assert_eq!(Message::template(404).render(&[]), "404");
        assert_eq!(Message::template('x').render(&[]), "x");
    }

    #[test]
    fn test_computed() {
        let call_count = Arc::new(AtomicU8::new(0));
        let message = Message::computed({
            let call_count = call_count.clone();
            move |args| {
                call_count.fetch_add(1, Ordering::SeqCst);
                format!(
                    "Expected {}, got {}",
                    args.first().and_then(Arg::as_str).unwrap_or("?"),
                    args.get(1).and_then(Arg::as_str).unwrap_or("?"),
                )
            }
        });

        assert_eq!(message.render(&[Arg::from("string"), Arg::from("number")]), "Expected string, got number");
        assert_eq!(message.render(&[]), "Expected ?, got ?");
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_computed_ignores_placeholders() {
        let message = Message::computed(|_| String::from("%s stays"));
        assert_eq!(message.render(&[Arg::from("x")]), "%s stays");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Message::from("a")), "Template(\"a\")");
        assert_eq!(format!("{:?}", Message::computed(|_| String::new())), "Computed(..)");
    }
}
