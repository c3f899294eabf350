use onboard_core::view::{
  ActionNode,
  ButtonNode
};
use onboard_shared::{
  ButtonMode,
  ButtonType
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::PeopleSearch;

#[derive(Properties, PartialEq)]
pub struct TaskActionsProps {
  pub actions:        Vec<ActionNode>,
  pub on_search_pick: Callback<String>
}

fn button_classes(
  button: &ButtonNode
) -> yew::Classes {
  let kind = match button.button_type {
    | ButtonType::Default => None,
    | ButtonType::Success => Some("ok"),
    | ButtonType::Danger => {
      Some("danger")
    }
    | ButtonType::Dim => Some("dim")
  };
  let mode = match button.mode {
    | ButtonMode::Primary => None,
    | ButtonMode::Secondary => {
      Some("secondary")
    }
  };
  classes!(
    "btn",
    button.small.then_some("small"),
    kind,
    mode
  )
}

#[function_component(TaskActions)]
pub fn task_actions(
  props: &TaskActionsProps
) -> Html {
  html! {
      <div class="task-actions">
          {
              for props.actions.iter().map(|action| match action {
                  | ActionNode::SearchBar => html! {
                      <PeopleSearch key="search" on_pick={props.on_search_pick.clone()} />
                  },
                  | ActionNode::Button(button) => {
                      let on_click = button.on_click.clone();
                      html! {
                          <button
                              key={button.key.clone()}
                              class={button_classes(button)}
                              onclick={Callback::from(move |_: MouseEvent| on_click.call())}
                          >
                              { &button.label }
                          </button>
                      }
                  }
              })
          }
      </div>
  }
}
