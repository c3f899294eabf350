use std::rc::Rc;

use onboard_shared::Action;
use tracing::debug;

use crate::effects::{EffectBus, Handler};

/// Wiring behind the people-search affordance on a follow card.
#[derive(Clone)]
pub struct SearchBar {
    bus: Rc<dyn EffectBus>,
    on_close: Option<Handler>,
}

impl SearchBar {
    /// `on_close` replaces the default close behaviour, which navigates up.
    pub fn new(bus: Rc<dyn EffectBus>, on_close: Option<Handler>) -> Self {
        Self { bus, on_close }
    }

    pub fn on_close(&self) {
        match &self.on_close {
            | Some(on_close) => on_close.call(),
            | None => self.bus.dispatch(Action::NavigateUp),
        }
    }

    /// Closes the search, then shows the picked profile.
    pub fn on_click(&self, username: &str) {
        debug!(username, "search result picked");
        self.on_close();
        self.bus.dispatch(Action::ShowUserProfile {
            username: username.to_string(),
        });
    }
}
