use gloo::console::log;
use onboard_core::EffectBus;
use onboard_core::effects::Effect;
use onboard_shared::Action;
use yew::Callback;

/// Forwards every effect into the app's
/// reducer; URLs also open in a new tab.
pub struct AppBus {
  on_effect: Callback<Effect>
}

impl AppBus {
  pub fn new(
    on_effect: Callback<Effect>
  ) -> Self {
    Self { on_effect }
  }
}

impl EffectBus for AppBus {
  fn dispatch(&self, action: Action) {
    ui_debug(
      "dispatch",
      &format!("{action:?}")
    );
    self
      .on_effect
      .emit(Effect::Dispatch(action));
  }

  fn open_url(&self, url: &str) {
    ui_debug("open_url", url);
    if let Some(window) =
      web_sys::window()
      && let Err(err) = window
        .open_with_url_and_target(
          url, "_blank"
        )
    {
      tracing::warn!(
        url,
        error = ?err,
        "failed to open url"
      );
    }
    self.on_effect.emit(
      Effect::OpenUrl(url.to_string())
    );
  }
}

pub fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
