use alloc::{borrow::Cow, collections::BTreeMap, string::String, sync::Arc};
use tracing::{debug, error, warn};

use crate::{
    base::ErrorBase,
    coded::CodedError,
    errors::ResolveErrorKind,
    message::Message,
    Arg, Config,
};

pub(crate) type Messages = BTreeMap<Cow<'static, str>, Message>;

/// Collects messages before they are read.
///
/// Registration is only possible here: [`RegistryBuilder::build`] consumes the builder
/// and returns a [`Registry`] without any way to change its messages.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    messages: Messages,
    config: Config,
}

impl RegistryBuilder {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(Config::new())
    }

    #[inline]
    #[must_use]
    pub const fn with_config(config: Config) -> Self {
        Self {
            messages: BTreeMap::new(),
            config,
        }
    }

    /// Registers a message for the key, replacing the previous one if any
    #[inline]
    #[must_use]
    pub fn register(mut self, key: impl Into<Cow<'static, str>>, message: impl Into<Message>) -> Self {
        self.add_message(key.into(), message.into());
        self
    }

    /// Registers a message computed from the construction arguments
    #[inline]
    #[must_use]
    pub fn register_fn<F>(self, key: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&[Arg]) -> String + Send + Sync + 'static,
    {
        self.register(key, Message::computed(f))
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> Registry {
        debug!(messages = self.messages.len(), "Registry built");
        Registry {
            messages: Arc::new(self.messages),
            config: self.config,
        }
    }
}

impl RegistryBuilder {
    #[inline]
    pub(crate) fn add_message(&mut self, key: Cow<'static, str>, message: Message) -> Option<Message> {
        insert_message(&mut self.messages, self.config, key, message)
    }
}

/// Read-only set of messages.
///
/// Cloning is cheap, clones share the same messages.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    messages: Arc<Messages>,
    config: Config,
}

impl Registry {
    #[inline]
    #[must_use]
    pub const fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolves the key to the final message text.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::NoMessage`] if nothing is registered for the key.
    pub fn resolve(&self, key: &str, args: &[Arg]) -> Result<String, ResolveErrorKind> {
        let message = lookup_message(&self.messages, key)?.render(args);
        debug!(key, "Resolved");
        Ok(message)
    }

    /// Constructs a coded error with a message from this registry
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::NoMessage`] if nothing is registered for the key.
    #[inline]
    #[track_caller]
    pub fn error<B: ErrorBase>(&self, key: &str, args: &[Arg]) -> Result<CodedError<B>, ResolveErrorKind> {
        CodedError::from_registry(self, key, args)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Message> {
        self.messages.get(key)
    }

    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(|key| &**key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }
}

impl Registry {
    pub(crate) fn from_messages(messages: Messages, config: Config) -> Self {
        Self {
            messages: Arc::new(messages),
            config,
        }
    }
}

pub(crate) fn insert_message(
    messages: &mut Messages,
    config: Config,
    key: Cow<'static, str>,
    message: Message,
) -> Option<Message> {
    if messages.contains_key(&key) {
        if config.warn_on_overwrite {
            warn!(key = %key, "Message overwritten");
        } else {
            debug!(key = %key, "Message overwritten");
        }
    } else {
        debug!(key = %key, "Message registered");
    }

    messages.insert(key, message)
}

pub(crate) fn lookup_message<'a>(messages: &'a Messages, key: &str) -> Result<&'a Message, ResolveErrorKind> {
    match messages.get(key) {
        Some(message) => Ok(message),
        None => {
            let err = ResolveErrorKind::NoMessage { key: key.into() };
            error!("{}", err);
            Err(err)
        }
    }
}
