use std::collections::BTreeSet;
use std::rc::Rc;

use onboard_core::effects::Effect;
use onboard_core::feed::FeedFile;
use onboard_core::search::SearchBar;
use onboard_core::userdata::fill_user_data;
use onboard_core::{
  EffectBus,
  Platform,
  TaskChooser,
  catalog
};
use onboard_shared::{
  Action,
  TodoType
};
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_memo,
  use_reducer
};

use crate::bus::{
  AppBus,
  ui_debug
};
use crate::components::TaskCard;

const SAMPLE_FEED: &str =
  include_str!("../assets/feed.json");

const MOBILE_MAX_WIDTH: f64 = 600.0;

/// Skipped todos stay hidden for the rest
/// of the session.
#[derive(
  Clone, PartialEq, Default, Debug,
)]
struct FeedState {
  skipped: BTreeSet<TodoType>,
  log:     Vec<String>
}

impl Reducible for FeedState {
  type Action = Effect;

  fn reduce(
    self: Rc<Self>,
    effect: Effect
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    if let Effect::Dispatch(
      Action::SkipTodo { todo_type }
    ) = &effect
    {
      next.skipped.insert(*todo_type);
    }
    next.log.push(
      serde_json::to_string(&effect)
        .unwrap_or_else(|err| {
          format!(
            "unserializable effect: \
             {err}"
          )
        })
    );
    Rc::new(next)
  }
}

fn load_feed() -> FeedFile {
  let mut feed =
    match FeedFile::from_json(
      SAMPLE_FEED
    ) {
      | Ok(feed) => feed,
      | Err(err) => {
        ui_debug(
          "load_feed",
          &format!("{err:#}")
        );
        return FeedFile::default();
      }
    };

  let source = feed.clone();
  if let Err(err) =
    fill_user_data(&mut feed.home, &source)
  {
    ui_debug(
      "fill_user_data",
      &format!("{err:#}")
    );
  }
  feed
}

fn detect_platform() -> Platform {
  let width = web_sys::window()
    .and_then(|window| {
      window.inner_width().ok()
    })
    .and_then(|value| value.as_f64());
  match width {
    | Some(width)
      if width < MOBILE_MAX_WIDTH =>
    {
      Platform::Mobile
    }
    | _ => Platform::Desktop
  }
}

fn is_skipped(
  skipped: &BTreeSet<TodoType>,
  raw: &str
) -> bool {
  TodoType::parse(raw)
    .is_some_and(|t| skipped.contains(&t))
}

#[function_component(App)]
pub fn app() -> Html {
  let feed = use_memo((), |_| load_feed());
  let state =
    use_reducer(FeedState::default);

  let on_effect = {
    let dispatcher = state.dispatcher();
    Callback::from(
      move |effect: Effect| {
        dispatcher.dispatch(effect)
      }
    )
  };
  let bus: Rc<dyn EffectBus> =
    Rc::new(AppBus::new(on_effect));

  let username = feed.username.clone();
  let chooser = TaskChooser::new(
    Rc::clone(&bus),
    Rc::new(move || username.clone()),
    detect_platform()
  );

  let on_search_pick = {
    let search =
      SearchBar::new(Rc::clone(&bus), None);
    Callback::from(
      move |username: String| {
        search.on_click(&username)
      }
    )
  };

  let cards = catalog::descriptors(
    &feed.home
  )
  .into_iter()
  .filter(|descriptor| {
    !is_skipped(
      &state.skipped,
      &descriptor.todo_type
    )
  })
  .filter_map(|descriptor| {
    chooser.choose_task(&descriptor)
  })
  .collect::<Vec<_>>();

  html! {
      <div class="people-feed">
          <div class="header">{ "Things to do" }</div>
          {
              if cards.is_empty() {
                  html! { <div class="empty">{ "You're all caught up." }</div> }
              } else {
                  html! {
                      <>
                          { for cards.into_iter().enumerate().map(|(idx, node)| html! {
                              <TaskCard
                                  key={idx}
                                  node={node}
                                  on_search_pick={on_search_pick.clone()}
                              />
                          }) }
                      </>
                  }
              }
          }
          <div class="panel effect-log">
              <div class="header">{ "Dispatched" }</div>
              { for state.log.iter().map(|line| html! { <pre>{ line }</pre> }) }
          </div>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn skip_effect_hides_that_type() {
    let state = Rc::new(
      FeedState::default()
    );
    let state = state.reduce(
      Effect::Dispatch(
        Action::SkipTodo {
          todo_type: TodoType::Chat
        }
      )
    );
    let state = state
      .reduce(Effect::OpenUrl(
        "https://example.com"
          .to_string()
      ));

    assert!(is_skipped(
      &state.skipped,
      "chat"
    ));
    assert!(!is_skipped(
      &state.skipped,
      "folder"
    ));
    assert!(!is_skipped(
      &state.skipped,
      "notAType"
    ));
    assert_eq!(state.log.len(), 2);
  }

  #[test]
  fn sample_feed_parses() {
    let feed =
      FeedFile::from_json(SAMPLE_FEED)
        .unwrap();
    assert_eq!(
      feed.username.as_deref(),
      Some("alice")
    );
    assert!(
      !catalog::descriptors(&feed.home)
        .is_empty()
    );
  }
}
