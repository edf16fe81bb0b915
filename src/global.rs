//! Process-wide registry.
//!
//! Messages are registered during initialization and read afterwards.
//! [`freeze`] closes the registration phase: every later [`register`] fails.

use alloc::{borrow::Cow, string::String};
use parking_lot::RwLock;
use tracing::{debug, error};

use crate::{
    errors::{RegisterErrorKind, ResolveErrorKind},
    message::Message,
    registry::{insert_message, lookup_message, Messages},
    Arg, Config, Registry,
};

struct GlobalRegistry {
    messages: Messages,
    config: Config,
    frozen: bool,
}

static GLOBAL: RwLock<GlobalRegistry> = RwLock::new(GlobalRegistry {
    messages: Messages::new(),
    config: Config::new(),
    frozen: false,
});

/// Registers a message for the key, replacing the previous one if any.
///
/// # Errors
/// Returns [`RegisterErrorKind::Frozen`] if the registry was frozen with [`freeze`].
pub fn register(key: impl Into<Cow<'static, str>>, message: impl Into<Message>) -> Result<(), RegisterErrorKind> {
    let key = key.into();
    let mut global = GLOBAL.write();
    if global.frozen {
        let err = RegisterErrorKind::Frozen { key: key.into_owned() };
        error!("{}", err);
        return Err(err);
    }

    let config = global.config;
    insert_message(&mut global.messages, config, key, message.into());
    Ok(())
}

/// Registers a message computed from the construction arguments.
///
/// # Errors
/// Returns [`RegisterErrorKind::Frozen`] if the registry was frozen with [`freeze`].
#[inline]
pub fn register_fn<F>(key: impl Into<Cow<'static, str>>, f: F) -> Result<(), RegisterErrorKind>
where
    F: Fn(&[Arg]) -> String + Send + Sync + 'static,
{
    register(key, Message::computed(f))
}

/// Resolves the key to the final message text.
///
/// # Errors
/// Returns [`ResolveErrorKind::NoMessage`] if nothing is registered for the key.
pub fn resolve(key: &str, args: &[Arg]) -> Result<String, ResolveErrorKind> {
    // Computed messages run without the lock held, so they may use the registry themselves
    let message = lookup_message(&GLOBAL.read().messages, key)?.clone();
    let message = message.render(args);
    debug!(key, "Resolved");
    Ok(message)
}

/// Replaces the config used for subsequent registrations.
///
/// # Errors
/// Returns [`RegisterErrorKind::FrozenConfig`] if the registry was frozen with [`freeze`].
pub fn configure(config: Config) -> Result<(), RegisterErrorKind> {
    let mut global = GLOBAL.write();
    if global.frozen {
        let err = RegisterErrorKind::FrozenConfig;
        error!("{}", err);
        return Err(err);
    }

    global.config = config;
    Ok(())
}

/// Ends the registration phase. Calling it again has no effect.
pub fn freeze() {
    let mut global = GLOBAL.write();
    if !global.frozen {
        global.frozen = true;
        debug!(messages = global.messages.len(), "Registry frozen");
    }
}

#[inline]
#[must_use]
pub fn is_frozen() -> bool {
    GLOBAL.read().frozen
}

/// Copies the currently registered messages into a standalone registry
#[must_use]
pub fn snapshot() -> Registry {
    let global = GLOBAL.read();
    Registry::from_messages(global.messages.clone(), global.config)
}
