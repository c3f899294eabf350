use std::rc::Rc;

use onboard_shared::{TodoDto, TodoType};
use tracing::trace;

use crate::binding::{Binding, BindingContext, Platform, binding_for, default_buttons};
use crate::effects::{CurrentUser, EffectBus, Handler};
use crate::view::{ActionButton, TaskNode, TaskProps, render_task};

/// Caller-supplied description of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDescriptor {
    pub badged: bool,
    pub icon: String,
    pub instructions: String,
    pub sub_text: String,
    pub confirm_label: String,
    pub dismissable: bool,
    pub user_data: String,
    /// Raw wire name; unknown names render nothing.
    pub todo_type: String,
    pub dismiss_label: Option<String>,
    pub buttons: Vec<ActionButton>,
}

impl From<TodoDto> for TodoDescriptor {
    fn from(dto: TodoDto) -> Self {
        Self {
            badged: dto.badged,
            icon: dto.icon,
            instructions: dto.instructions,
            sub_text: dto.sub_text,
            confirm_label: dto.confirm_label,
            dismissable: dto.dismissable,
            user_data: dto.user_data,
            todo_type: dto.todo_type,
            dismiss_label: dto.dismiss_label,
            buttons: vec![],
        }
    }
}

/// Combines a descriptor with its binding into view props.
///
/// Descriptor fields are the base. The computed button set always replaces
/// the descriptor's buttons; computed instructions and subtext replace the
/// descriptor's when the binding supplies them. Every button set carries its
/// own confirm, so `confirm_label` is cleared. Default-built sets carry the
/// dismiss button too and switch `dismissable` off; a binding's own set keeps
/// the descriptor's `dismissable` when the binding has a dismiss handler.
pub fn merge_props(descriptor: &TodoDescriptor, binding: Binding) -> TaskProps {
    let (buttons, dismissable) = match binding.buttons {
        | Some(buttons) => (
            buttons,
            descriptor.dismissable && binding.on_dismiss.is_some(),
        ),
        | None => (
            default_buttons(
                &binding.on_confirm,
                &descriptor.confirm_label,
                binding.on_dismiss.as_ref(),
                descriptor.dismiss_label.as_deref(),
            ),
            false,
        ),
    };

    TaskProps {
        badged: descriptor.badged,
        icon: descriptor.icon.clone(),
        instructions: binding
            .instructions
            .unwrap_or_else(|| descriptor.instructions.clone()),
        sub_text: binding
            .sub_text
            .unwrap_or_else(|| descriptor.sub_text.clone()),
        confirm_label: String::new(),
        dismissable,
        on_confirm: binding.on_confirm,
        on_dismiss: binding.on_dismiss.unwrap_or_else(Handler::noop),
        show_search_bar: binding.show_search_bar,
        buttons,
    }
}

/// Dispatch table from to-do type to a fully wired card.
#[derive(Clone)]
pub struct TaskChooser {
    bus: Rc<dyn EffectBus>,
    user: Rc<dyn CurrentUser>,
    platform: Platform,
}

impl TaskChooser {
    pub fn new(bus: Rc<dyn EffectBus>, user: Rc<dyn CurrentUser>, platform: Platform) -> Self {
        Self {
            bus,
            user,
            platform,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn task_props(&self, descriptor: &TodoDescriptor) -> Option<TaskProps> {
        let todo_type = TodoType::parse(&descriptor.todo_type)?;
        let username = self.user.username().unwrap_or_default();
        trace!(%todo_type, has_user = !username.is_empty(), "binding todo");

        let ctx = BindingContext {
            bus: &self.bus,
            username: &username,
            user_data: &descriptor.user_data,
            platform: self.platform,
        };
        Some(merge_props(descriptor, binding_for(todo_type, &ctx)))
    }

    pub fn choose_task(&self, descriptor: &TodoDescriptor) -> Option<TaskNode> {
        self.task_props(descriptor).map(|props| render_task(&props))
    }
}

#[cfg(test)]
mod tests {
    use onboard_shared::{Action, ButtonMode, ButtonType, PropValue, RouteSegment, Tab};

    use super::*;
    use crate::binding::{INSTALL_LINK_URL, LEGACY_EMAIL_SUB_TEXT};
    use crate::effects::{Effect, RecordingBus, StaticUser};
    use crate::view::ActionNode;

    fn chooser(platform: Platform, user: Option<&str>) -> (Rc<RecordingBus>, TaskChooser) {
        let recorder = Rc::new(RecordingBus::new());
        let chooser = TaskChooser::new(
            recorder.clone(),
            Rc::new(StaticUser(user.map(str::to_string))),
            platform,
        );
        (recorder, chooser)
    }

    fn descriptor(todo_type: &str) -> TodoDescriptor {
        TodoDescriptor::from(TodoDto {
            badged: true,
            icon: "icon-onboarding".to_string(),
            instructions: "Do the thing.".to_string(),
            sub_text: "caller subtext".to_string(),
            confirm_label: "Foo".to_string(),
            dismissable: true,
            user_data: "alice@example.com".to_string(),
            todo_type: todo_type.to_string(),
            dismiss_label: None,
        })
    }

    fn labels(node: &TaskNode) -> Vec<&str> {
        node.buttons().map(|b| b.label.as_str()).collect()
    }

    fn dispatched(effects: Vec<Effect>) -> Vec<Action> {
        effects
            .into_iter()
            .filter_map(|effect| match effect {
                | Effect::Dispatch(action) => Some(action),
                | Effect::OpenUrl(_) => None,
            })
            .collect()
    }

    #[test]
    fn every_known_type_renders() {
        let (_, chooser) = chooser(Platform::Desktop, Some("alice"));
        for todo_type in TodoType::ALL {
            assert!(
                chooser.choose_task(&descriptor(todo_type.as_str())).is_some(),
                "{todo_type} rendered nothing"
            );
        }
    }

    #[test]
    fn unknown_type_renders_nothing() {
        let (recorder, chooser) = chooser(Platform::Desktop, Some("alice"));
        assert!(chooser.choose_task(&descriptor("annoyingNewType")).is_none());
        assert!(chooser.choose_task(&descriptor("")).is_none());
        assert!(recorder.effects().is_empty());
    }

    #[test]
    fn default_builder_buttons_for_dismissable_type() {
        let (recorder, chooser) = chooser(Platform::Desktop, Some("alice"));
        let node = chooser.choose_task(&descriptor("addEmail")).unwrap();

        assert_eq!(labels(&node), vec!["Foo", "Later"]);
        let later = node.button("Later").unwrap();
        assert_eq!(later.mode, ButtonMode::Secondary);

        later.press();
        assert_eq!(
            dispatched(recorder.take()),
            vec![Action::SkipTodo {
                todo_type: TodoType::AddEmail
            }]
        );

        node.button("Foo").unwrap().press();
        assert_eq!(dispatched(recorder.take()), vec![Action::EditAvatar]);
    }

    #[test]
    fn no_later_button_without_dismiss_handler() {
        let (_, chooser) = chooser(Platform::Desktop, Some("alice"));
        for raw in ["avatarTeam", "avatarUser", "bio", "paperkey"] {
            let node = chooser.choose_task(&descriptor(raw)).unwrap();
            assert_eq!(labels(&node), vec!["Foo"], "{raw}");
        }
    }

    #[test]
    fn merged_props_override_descriptor() {
        let (_, chooser) = chooser(Platform::Desktop, Some("alice"));
        let mut d = descriptor("chat");
        d.buttons = vec![ActionButton::new("Caller", Handler::noop())];

        let props = chooser.task_props(&d).unwrap();
        assert_eq!(props.instructions, "Do the thing.");
        assert_eq!(props.sub_text, "caller subtext");
        assert_eq!(props.confirm_label, "");
        assert!(!props.dismissable);
        let labels: Vec<_> = props.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Foo", "Later"]);
    }

    #[test]
    fn verify_all_email_ignores_caller_buttons() {
        let (recorder, chooser) = chooser(Platform::Desktop, Some("alice"));
        let mut d = descriptor("verifyAllEmail");
        d.buttons = vec![ActionButton::new("Caller", Handler::noop())];
        d.instructions = "ignored".to_string();

        let node = chooser.choose_task(&d).unwrap();
        assert_eq!(labels(&node), vec!["Verify", "Manage email"]);
        assert_eq!(
            node.instructions,
            "Your email address alice@example.com is unverified."
        );

        let verify = node.button("Verify").unwrap();
        assert_eq!(verify.button_type, ButtonType::Success);
        let manage = node.button("Manage email").unwrap();
        assert_eq!(manage.mode, ButtonMode::Secondary);
        assert_eq!(manage.button_type, ButtonType::Default);

        manage.press();
        assert!(recorder.take().is_empty());
        verify.press();
        assert_eq!(dispatched(recorder.take()), vec![Action::EditAvatar]);
    }

    #[test]
    fn verify_all_phone_number_names_the_number() {
        let (_, chooser) = chooser(Platform::Desktop, Some("alice"));
        let mut d = descriptor("verifyAllPhoneNumber");
        d.user_data = "+15550100".to_string();

        let node = chooser.choose_task(&d).unwrap();
        assert_eq!(labels(&node), vec!["Verify", "Manage numbers"]);
        assert_eq!(node.instructions, "Your number +15550100 is unverified.");
    }

    #[test]
    fn legacy_email_visibility_overrides_sub_text() {
        let (_, chooser) = chooser(Platform::Desktop, Some("alice"));
        let node = chooser
            .choose_task(&descriptor("legacyEmailVisibility"))
            .unwrap();

        assert_eq!(labels(&node), vec!["Make searchable", "Later"]);
        assert_eq!(
            node.button("Make searchable").map(|b| b.button_type),
            Some(ButtonType::Success)
        );
        assert_eq!(node.sub_text, LEGACY_EMAIL_SUB_TEXT);
        assert_eq!(
            node.instructions,
            "Allow friends to find you using alice@example.com"
        );
    }

    #[test]
    fn legacy_email_visibility_can_be_skipped() {
        let (recorder, chooser) = chooser(Platform::Desktop, Some("alice"));
        let node = chooser
            .choose_task(&descriptor("legacyEmailVisibility"))
            .unwrap();

        let later = node.button("Later").unwrap();
        assert_eq!(later.mode, ButtonMode::Secondary);
        later.press();
        assert_eq!(
            dispatched(recorder.take()),
            vec![Action::SkipTodo {
                todo_type: TodoType::LegacyEmailVisibility
            }]
        );

        let mut d = descriptor("legacyEmailVisibility");
        d.dismissable = false;
        let node = chooser.choose_task(&d).unwrap();
        assert_eq!(labels(&node), vec!["Make searchable"]);
    }

    #[test]
    fn verify_cards_stay_without_later_when_dismissable() {
        let (_, chooser) = chooser(Platform::Desktop, Some("alice"));
        for raw in ["verifyAllEmail", "verifyAllPhoneNumber"] {
            let props = chooser.task_props(&descriptor(raw)).unwrap();
            assert!(!props.dismissable, "{raw}");
        }
    }

    #[test]
    fn unlabelled_confirm_draws_no_confirm_button() {
        let (recorder, chooser) = chooser(Platform::Desktop, Some("alice"));
        let mut d = descriptor("chat");
        d.confirm_label = String::new();

        let node = chooser.choose_task(&d).unwrap();
        assert_eq!(labels(&node), vec!["Later"]);
        node.button("Later").unwrap().press();
        assert_eq!(
            dispatched(recorder.take()),
            vec![Action::SkipTodo {
                todo_type: TodoType::Chat
            }]
        );
    }

    #[test]
    fn git_repo_on_mobile_appends_settings_tab_first() {
        let (recorder, chooser) = chooser(Platform::Mobile, Some("alice"));
        chooser
            .choose_task(&descriptor("gitRepo"))
            .unwrap()
            .button("Foo")
            .unwrap()
            .press();

        let new_repo = Action::NavigateAppend {
            parent_path: None,
            path: vec![RouteSegment::selected(
                "gitNewRepo",
                [("isTeam", PropValue::Bool(false))],
            )],
        };
        assert_eq!(
            dispatched(recorder.take()),
            vec![
                Action::NavigateAppend {
                    parent_path: None,
                    path: vec![RouteSegment::tab(Tab::SettingsGit)],
                },
                new_repo,
            ]
        );
    }

    #[test]
    fn git_repo_on_desktop_switches_tab_first() {
        let (recorder, chooser) = chooser(Platform::Desktop, Some("alice"));
        chooser
            .choose_task(&descriptor("gitRepo"))
            .unwrap()
            .button("Foo")
            .unwrap()
            .press();

        let actions = dispatched(recorder.take());
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], Action::SwitchTab { tab: Tab::Git });
        assert!(matches!(&actions[1], Action::NavigateAppend { parent_path: None, .. }));
    }

    #[test]
    fn team_appends_dialog_then_switches() {
        let (recorder, chooser) = chooser(Platform::Desktop, None);
        chooser.task_props(&descriptor("team")).unwrap().on_confirm.call();

        assert_eq!(
            dispatched(recorder.take()),
            vec![
                Action::NavigateAppend {
                    parent_path: Some(vec![RouteSegment::tab(Tab::Teams)]),
                    path: vec![RouteSegment::name("teamNewTeamDialog")],
                },
                Action::SwitchTo {
                    path: vec![RouteSegment::tab(Tab::Teams)],
                },
            ]
        );
    }

    #[test]
    fn self_profile_bindings_use_current_user() {
        let (recorder, chooser) = chooser(Platform::Desktop, Some("alice"));
        chooser.task_props(&descriptor("proof")).unwrap().on_confirm.call();
        chooser.task_props(&descriptor("bio")).unwrap().on_confirm.call();

        assert_eq!(
            dispatched(recorder.take()),
            vec![
                Action::ShowUserProfile {
                    username: "alice".to_string()
                },
                Action::ShowUser {
                    username: "alice".to_string(),
                    as_tracker: false,
                },
            ]
        );
    }

    #[test]
    fn missing_identity_becomes_empty_username() {
        let (recorder, chooser) = chooser(Platform::Desktop, None);
        chooser.task_props(&descriptor("proof")).unwrap().on_confirm.call();
        assert_eq!(
            dispatched(recorder.take()),
            vec![Action::ShowUserProfile {
                username: String::new()
            }]
        );
    }

    #[test]
    fn device_opens_install_link() {
        let (recorder, chooser) = chooser(Platform::Desktop, None);
        chooser.task_props(&descriptor("device")).unwrap().on_confirm.call();
        assert_eq!(
            recorder.take(),
            vec![Effect::OpenUrl(INSTALL_LINK_URL.to_string())]
        );
    }

    #[test]
    fn follow_shows_search_bar() {
        let (recorder, chooser) = chooser(Platform::Desktop, None);
        let node = chooser.choose_task(&descriptor("follow")).unwrap();
        assert!(matches!(node.actions[0], ActionNode::SearchBar));

        node.button("Foo").unwrap().press();
        assert_eq!(
            dispatched(recorder.take()),
            vec![Action::NavigateAppend {
                parent_path: Some(vec![RouteSegment::tab(Tab::People)]),
                path: vec![RouteSegment::name("profileSearch")],
            }]
        );
    }

    #[test]
    fn paperkey_highlights_paper_key() {
        let (recorder, chooser) = chooser(Platform::Desktop, None);
        chooser.task_props(&descriptor("paperkey")).unwrap().on_confirm.call();
        assert_eq!(
            dispatched(recorder.take()),
            vec![Action::NavigateAppend {
                parent_path: None,
                path: vec![RouteSegment::selected(
                    "deviceAdd",
                    [("highlight", PropValue::List(vec!["paper key".to_string()]))],
                )],
            }]
        );
    }

    #[test]
    fn tab_switching_types() {
        let (recorder, chooser) = chooser(Platform::Desktop, None);
        for (raw, tab) in [
            ("avatarTeam", Tab::Teams),
            ("chat", Tab::Chat),
            ("folder", Tab::Fs),
            ("teamShowcase", Tab::Teams),
        ] {
            chooser.task_props(&descriptor(raw)).unwrap().on_confirm.call();
            assert_eq!(
                dispatched(recorder.take()),
                vec![Action::SwitchTab { tab }],
                "{raw}"
            );
        }
    }

    #[test]
    fn identity_is_read_per_render() {
        use std::cell::RefCell;

        let name = Rc::new(RefCell::new(Some("alice".to_string())));
        let recorder = Rc::new(RecordingBus::new());
        let user = {
            let name = Rc::clone(&name);
            move || name.borrow().clone()
        };
        let chooser = TaskChooser::new(recorder.clone(), Rc::new(user), Platform::Desktop);

        let first = chooser.task_props(&descriptor("proof")).unwrap();
        *name.borrow_mut() = Some("bob".to_string());
        let second = chooser.task_props(&descriptor("proof")).unwrap();

        first.on_confirm.call();
        second.on_confirm.call();
        assert_eq!(
            dispatched(recorder.take()),
            vec![
                Action::ShowUserProfile {
                    username: "alice".to_string()
                },
                Action::ShowUserProfile {
                    username: "bob".to_string()
                },
            ]
        );
    }
}
