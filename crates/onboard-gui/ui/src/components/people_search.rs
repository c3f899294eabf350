use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct PeopleSearchProps {
  pub on_pick: Callback<String>
}

/// Enter picks the typed username.
#[function_component(PeopleSearch)]
pub fn people_search(
  props: &PeopleSearchProps
) -> Html {
  let query = use_state(String::new);

  let oninput = {
    let query = query.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        query.set(input.value());
      }
    )
  };

  let onkeydown = {
    let query = query.clone();
    let on_pick = props.on_pick.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() != "Enter" {
          return;
        }
        let username =
          query.trim().to_string();
        if username.is_empty() {
          return;
        }
        on_pick.emit(username);
        query.set(String::new());
      }
    )
  };

  html! {
      <input
          class="people-search"
          type="text"
          placeholder="Search people"
          value={(*query).clone()}
          {oninput}
          {onkeydown}
      />
  }
}
