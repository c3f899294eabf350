//! Per-type confirm/dismiss behaviour for to-do cards.
//!
//! Every [`TodoType`] maps to exactly one [`Binding`]. A binding is rebuilt
//! on each render and closes over the effect bus and the username that was
//! current at that moment.

use std::rc::Rc;

use onboard_shared::{Action, ButtonMode, ButtonType, PropValue, RouteSegment, Tab, TodoType};

use crate::effects::{EffectBus, Handler};
use crate::view::{ActionButton, LATER_LABEL};

pub const INSTALL_LINK_URL: &str = "https://keybase.io/download";

pub const PROFILE_SEARCH_ROUTE: &str = "profileSearch";
pub const NEW_TEAM_ROUTE: &str = "teamNewTeamDialog";
pub const DEVICE_ADD_ROUTE: &str = "deviceAdd";
pub const NEW_REPO_ROUTE: &str = "gitNewRepo";

pub const LEGACY_EMAIL_SUB_TEXT: &str = "Your email will never appear on your public profile.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

impl Platform {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            | "desktop" => Some(Platform::Desktop),
            | "mobile" | "ios" | "android" => Some(Platform::Mobile),
            | _ => None,
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Platform::Mobile
    }
}

/// Inputs a binding may close over.
pub struct BindingContext<'a> {
    pub bus: &'a Rc<dyn EffectBus>,
    pub username: &'a str,
    pub user_data: &'a str,
    pub platform: Platform,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub on_confirm: Handler,
    pub on_dismiss: Option<Handler>,
    /// Replaces the default-built button set when present.
    pub buttons: Option<Vec<ActionButton>>,
    pub instructions: Option<String>,
    pub sub_text: Option<String>,
    pub show_search_bar: bool,
}

impl Binding {
    fn new(on_confirm: Handler, on_dismiss: Option<Handler>) -> Self {
        Self {
            on_confirm,
            on_dismiss,
            buttons: None,
            instructions: None,
            sub_text: None,
            show_search_bar: false,
        }
    }
}

fn dispatch(bus: &Rc<dyn EffectBus>, action: Action) -> Handler {
    let bus = Rc::clone(bus);
    Handler::new(move || bus.dispatch(action.clone()))
}

fn dispatch_all(bus: &Rc<dyn EffectBus>, actions: Vec<Action>) -> Handler {
    let bus = Rc::clone(bus);
    Handler::new(move || {
        for action in &actions {
            bus.dispatch(action.clone());
        }
    })
}

fn skip_todo(bus: &Rc<dyn EffectBus>, todo_type: TodoType) -> Option<Handler> {
    Some(dispatch(bus, Action::SkipTodo { todo_type }))
}

fn switch_tab(tab: Tab) -> Action {
    Action::SwitchTab { tab }
}

/// Primary confirm button labelled `confirm_label`, then a secondary
/// dismiss button when there is a dismiss handler. An empty label means no
/// confirm button.
pub fn default_buttons(
    on_confirm: &Handler,
    confirm_label: &str,
    on_dismiss: Option<&Handler>,
    dismiss_label: Option<&str>,
) -> Vec<ActionButton> {
    let mut buttons = Vec::new();
    if !confirm_label.is_empty() {
        buttons.push(ActionButton::new(confirm_label, on_confirm.clone()));
    }
    if let Some(on_dismiss) = on_dismiss {
        buttons.push(
            ActionButton::new(dismiss_label.unwrap_or(LATER_LABEL), on_dismiss.clone())
                .with_mode(ButtonMode::Secondary),
        );
    }
    buttons
}

fn verify_buttons(on_confirm: &Handler, manage_label: &str) -> Vec<ActionButton> {
    // "Manage" has no effect.
    vec![
        ActionButton::new("Verify", on_confirm.clone()).with_type(ButtonType::Success),
        ActionButton::new(manage_label, Handler::noop())
            .with_type(ButtonType::Default)
            .with_mode(ButtonMode::Secondary),
    ]
}

pub fn binding_for(todo_type: TodoType, ctx: &BindingContext<'_>) -> Binding {
    let bus = ctx.bus;
    let me = ctx.username.to_string();

    match todo_type {
        | TodoType::AddEmail | TodoType::AddPhoneNumber => {
            Binding::new(dispatch(bus, Action::EditAvatar), skip_todo(bus, todo_type))
        }
        | TodoType::AvatarTeam => Binding::new(dispatch(bus, switch_tab(Tab::Teams)), None),
        | TodoType::AvatarUser => Binding::new(dispatch(bus, Action::EditAvatar), None),
        | TodoType::Bio => Binding::new(
            dispatch(
                bus,
                Action::ShowUser {
                    username: me,
                    as_tracker: false,
                },
            ),
            None,
        ),
        | TodoType::Proof => Binding::new(
            dispatch(bus, Action::ShowUserProfile { username: me }),
            skip_todo(bus, todo_type),
        ),
        | TodoType::Device => {
            let on_confirm = {
                let bus = Rc::clone(bus);
                Handler::new(move || bus.open_url(INSTALL_LINK_URL))
            };
            Binding::new(on_confirm, skip_todo(bus, todo_type))
        }
        | TodoType::Follow => {
            let mut binding = Binding::new(
                dispatch(
                    bus,
                    Action::NavigateAppend {
                        parent_path: Some(vec![RouteSegment::tab(Tab::People)]),
                        path: vec![RouteSegment::name(PROFILE_SEARCH_ROUTE)],
                    },
                ),
                skip_todo(bus, todo_type),
            );
            binding.show_search_bar = true;
            binding
        }
        | TodoType::Chat => Binding::new(
            dispatch(bus, switch_tab(Tab::Chat)),
            skip_todo(bus, todo_type),
        ),
        | TodoType::Paperkey => Binding::new(
            dispatch(
                bus,
                Action::NavigateAppend {
                    parent_path: None,
                    path: vec![RouteSegment::selected(
                        DEVICE_ADD_ROUTE,
                        [(
                            "highlight",
                            PropValue::List(vec!["paper key".to_string()]),
                        )],
                    )],
                },
            ),
            None,
        ),
        | TodoType::Team => Binding::new(
            dispatch_all(
                bus,
                vec![
                    Action::NavigateAppend {
                        parent_path: Some(vec![RouteSegment::tab(Tab::Teams)]),
                        path: vec![RouteSegment::name(NEW_TEAM_ROUTE)],
                    },
                    Action::SwitchTo {
                        path: vec![RouteSegment::tab(Tab::Teams)],
                    },
                ],
            ),
            skip_todo(bus, todo_type),
        ),
        | TodoType::Folder => Binding::new(
            dispatch(bus, switch_tab(Tab::Fs)),
            skip_todo(bus, todo_type),
        ),
        | TodoType::GitRepo => {
            let open_git = if ctx.platform.is_mobile() {
                Action::NavigateAppend {
                    parent_path: None,
                    path: vec![RouteSegment::tab(Tab::SettingsGit)],
                }
            } else {
                switch_tab(Tab::Git)
            };
            let new_repo = Action::NavigateAppend {
                parent_path: None,
                path: vec![RouteSegment::selected(
                    NEW_REPO_ROUTE,
                    [("isTeam", PropValue::Bool(false))],
                )],
            };
            Binding::new(
                dispatch_all(bus, vec![open_git, new_repo]),
                skip_todo(bus, todo_type),
            )
        }
        | TodoType::TeamShowcase => Binding::new(
            dispatch(bus, switch_tab(Tab::Teams)),
            skip_todo(bus, todo_type),
        ),
        | TodoType::VerifyAllEmail => {
            let mut binding = Binding::new(dispatch(bus, Action::EditAvatar), None);
            binding.buttons = Some(verify_buttons(&binding.on_confirm, "Manage email"));
            binding.instructions = Some(format!(
                "Your email address {} is unverified.",
                ctx.user_data
            ));
            binding
        }
        | TodoType::VerifyAllPhoneNumber => {
            let mut binding = Binding::new(dispatch(bus, Action::EditAvatar), None);
            binding.buttons = Some(verify_buttons(&binding.on_confirm, "Manage numbers"));
            binding.instructions = Some(format!("Your number {} is unverified.", ctx.user_data));
            binding
        }
        | TodoType::LegacyEmailVisibility => {
            let mut binding =
                Binding::new(dispatch(bus, Action::EditAvatar), skip_todo(bus, todo_type));
            binding.buttons = Some(vec![
                ActionButton::new("Make searchable", binding.on_confirm.clone())
                    .with_type(ButtonType::Success),
            ]);
            binding.instructions = Some(format!(
                "Allow friends to find you using {}",
                ctx.user_data
            ));
            binding.sub_text = Some(LEGACY_EMAIL_SUB_TEXT.to_string());
            binding
        }
    }
}
