//! Stateless layout of a single to-do card.
//!
//! [`render_task`] turns [`TaskProps`] into a [`TaskNode`] that front ends
//! draw: the text renderer prints it, the web front end maps it to HTML.

use onboard_shared::{ButtonMode, ButtonType};

use crate::effects::Handler;

pub const LATER_LABEL: &str = "Later";

#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub label: String,
    pub on_click: Handler,
    pub button_type: Option<ButtonType>,
    pub mode: Option<ButtonMode>,
}

impl ActionButton {
    pub fn new(label: impl Into<String>, on_click: Handler) -> Self {
        Self {
            label: label.into(),
            on_click,
            button_type: None,
            mode: None,
        }
    }

    pub fn with_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = Some(button_type);
        self
    }

    pub fn with_mode(mut self, mode: ButtonMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskProps {
    pub badged: bool,
    pub icon: String,
    pub instructions: String,
    pub sub_text: String,
    pub confirm_label: String,
    pub dismissable: bool,
    pub on_confirm: Handler,
    pub on_dismiss: Handler,
    pub show_search_bar: bool,
    pub buttons: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonNode {
    /// Stable key within the action row; the label.
    pub key: String,
    pub label: String,
    pub button_type: ButtonType,
    pub mode: ButtonMode,
    pub small: bool,
    pub on_click: Handler,
}

impl ButtonNode {
    pub fn press(&self) {
        self.on_click.call();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionNode {
    SearchBar,
    Button(ButtonNode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskNode {
    pub icon: String,
    pub badged: bool,
    pub instructions: String,
    pub sub_text: String,
    pub actions: Vec<ActionNode>,
}

impl TaskNode {
    pub fn buttons(&self) -> impl Iterator<Item = &ButtonNode> {
        self.actions.iter().filter_map(|action| match action {
            | ActionNode::Button(button) => Some(button),
            | ActionNode::SearchBar => None,
        })
    }

    pub fn button(&self, label: &str) -> Option<&ButtonNode> {
        self.buttons().find(|button| button.label == label)
    }

    pub fn has_search_bar(&self) -> bool {
        self.actions
            .iter()
            .any(|action| matches!(action, ActionNode::SearchBar))
    }
}

pub fn render_task(props: &TaskProps) -> TaskNode {
    let mut actions = Vec::new();

    if props.show_search_bar {
        actions.push(ActionNode::SearchBar);
    }

    if !props.confirm_label.is_empty() {
        actions.push(ActionNode::Button(ButtonNode {
            key: props.confirm_label.clone(),
            label: props.confirm_label.clone(),
            button_type: ButtonType::Default,
            mode: ButtonMode::Primary,
            small: true,
            on_click: props.on_confirm.clone(),
        }));
    }

    for button in &props.buttons {
        actions.push(ActionNode::Button(ButtonNode {
            key: button.label.clone(),
            label: button.label.clone(),
            button_type: button.button_type.unwrap_or_default(),
            mode: button.mode.unwrap_or_default(),
            small: true,
            on_click: button.on_click.clone(),
        }));
    }

    if props.dismissable {
        actions.push(ActionNode::Button(ButtonNode {
            key: LATER_LABEL.to_string(),
            label: LATER_LABEL.to_string(),
            button_type: ButtonType::Default,
            mode: ButtonMode::Secondary,
            small: true,
            on_click: props.on_dismiss.clone(),
        }));
    }

    TaskNode {
        icon: props.icon.clone(),
        badged: props.badged,
        instructions: props.instructions.clone(),
        sub_text: props.sub_text.clone(),
        actions,
    }
}
