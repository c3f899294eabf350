use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use onboard_shared::Action;
use serde::Serialize;
use tracing::debug;

/// Click/confirm/dismiss callback. Clones share the same closure and
/// compare equal.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Where dispatched actions go. Fire-and-forget: failures are the
/// implementor's business.
pub trait EffectBus {
    fn dispatch(&self, action: Action);

    fn open_url(&self, url: &str);
}

/// Read-only accessor for the signed-in username.
pub trait CurrentUser {
    fn username(&self) -> Option<String>;
}

impl<F> CurrentUser for F
where
    F: Fn() -> Option<String>,
{
    fn username(&self) -> Option<String> {
        self()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticUser(pub Option<String>);

impl CurrentUser for StaticUser {
    fn username(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "payload", rename_all = "camelCase")]
pub enum Effect {
    Dispatch(Action),
    OpenUrl(String),
}

/// Bus that keeps every effect in issue order.
#[derive(Debug, Default)]
pub struct RecordingBus {
    effects: RefCell<Vec<Effect>>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }

    pub fn take(&self) -> Vec<Effect> {
        self.effects.take()
    }
}

impl EffectBus for RecordingBus {
    fn dispatch(&self, action: Action) {
        debug!(?action, "dispatch");
        self.effects.borrow_mut().push(Effect::Dispatch(action));
    }

    fn open_url(&self, url: &str) {
        debug!(url, "open url");
        self.effects
            .borrow_mut()
            .push(Effect::OpenUrl(url.to_string()));
    }
}
