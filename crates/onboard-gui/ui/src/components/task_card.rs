use onboard_core::TaskNode;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::TaskActions;

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub node:           TaskNode,
  pub on_search_pick: Callback<String>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let node = &props.node;
  html! {
      <div class="people-item task">
          <div class="task-icon">
              <span class={classes!("icon", node.icon.clone())}></span>
              {
                  if node.badged {
                      html! { <span class="badge-dot"></span> }
                  } else {
                      html! {}
                  }
              }
          </div>
          <div class="task-body">
              <div class="task-instructions">{ &node.instructions }</div>
              {
                  if node.sub_text.trim().is_empty() {
                      html! {}
                  } else {
                      html! { <div class="task-subtitle">{ &node.sub_text }</div> }
                  }
              }
              <TaskActions
                  actions={node.actions.clone()}
                  on_search_pick={props.on_search_pick.clone()}
              />
          </div>
      </div>
  }
}
