//! Display defaults for every to-do type, and the conversion from a filled
//! home screen into card descriptors.

use onboard_shared::{HomeScreen, HomeScreenItemData, TodoDto, TodoType};
use tracing::debug;

use crate::chooser::TodoDescriptor;

struct Display {
    icon: &'static str,
    instructions: &'static str,
    confirm_label: &'static str,
    /// Only read for types whose binding supplies its own buttons; the
    /// default builder adds Later from the dismiss handler alone.
    dismissable: bool,
}

fn display(todo_type: TodoType) -> Display {
    let (icon, instructions, confirm_label, dismissable) = match todo_type {
        | TodoType::AddEmail => (
            "icon-onboarding-email-48",
            "Add an email address for security purposes, and to get important notifications.",
            "Add email",
            true,
        ),
        | TodoType::AddPhoneNumber => (
            "icon-onboarding-phone-48",
            "Add your phone number so your friends can find you.",
            "Add number",
            true,
        ),
        | TodoType::AvatarTeam => (
            "icon-onboarding-team-avatar-48",
            "Change your team's avatar from within the app.",
            "Edit avatar",
            false,
        ),
        | TodoType::AvatarUser => (
            "icon-onboarding-avatar-48",
            "You don't have a profile picture or avatar.",
            "Edit avatar",
            false,
        ),
        | TodoType::Bio => (
            "icon-onboarding-bio-48",
            "Add your name, bio, and location to complete your profile.",
            "Edit profile",
            false,
        ),
        | TodoType::Proof => (
            "icon-onboarding-proofs-48",
            "Add some proofs to your profile. The more you have, the stronger your cryptographic identity.",
            "Prove your identities",
            true,
        ),
        | TodoType::Device => (
            "icon-onboarding-phone-48",
            "Install the app on your phone. Until you have at least 2 devices, you risk losing data.",
            "Get the download link",
            true,
        ),
        | TodoType::Follow => (
            "icon-onboarding-follow-48",
            "Follow at least one person. It's a cryptographically secure statement about who you know.",
            "Browse people",
            true,
        ),
        | TodoType::Chat => (
            "icon-onboarding-chat-48",
            "Start a chat! All conversations are end-to-end encrypted.",
            "Start a chat",
            true,
        ),
        | TodoType::Paperkey => (
            "icon-onboarding-paper-key-48",
            "Please make a paper key. Unlike your account password, paper keys can provision new devices and recover data.",
            "Create a paper key",
            false,
        ),
        | TodoType::Team => (
            "icon-onboarding-team-48",
            "Create a team! Teams share encrypted chat, files, and git repositories.",
            "Create a team",
            true,
        ),
        | TodoType::Folder => (
            "icon-onboarding-folder-48",
            "Open an encrypted private folder with someone! They'll only get notified once you drop files in it.",
            "Open a private folder",
            true,
        ),
        | TodoType::GitRepo => (
            "icon-onboarding-git-48",
            "Create an encrypted git repository! Only you will be able to decrypt any of it.",
            "Create a personal git repo",
            true,
        ),
        | TodoType::TeamShowcase => (
            "icon-onboarding-team-publicity-48",
            "Tip: Publish a team on your own profile, or make it publicly joinable.",
            "Publish team on your profile",
            true,
        ),
        | TodoType::VerifyAllEmail => (
            "icon-onboarding-email-verify-48",
            "Your email address is unverified.",
            "",
            false,
        ),
        | TodoType::VerifyAllPhoneNumber => (
            "icon-onboarding-number-verify-48",
            "Your number is unverified.",
            "",
            false,
        ),
        | TodoType::LegacyEmailVisibility => (
            "icon-onboarding-email-searchable-48",
            "Allow friends to find you using your email.",
            "",
            true,
        ),
    };

    Display {
        icon,
        instructions,
        confirm_label,
        dismissable,
    }
}

pub fn defaults(todo_type: TodoType) -> TodoDto {
    let d = display(todo_type);
    TodoDto {
        badged: false,
        icon: d.icon.to_string(),
        instructions: d.instructions.to_string(),
        sub_text: String::new(),
        confirm_label: d.confirm_label.to_string(),
        dismissable: d.dismissable,
        user_data: String::new(),
        todo_type: todo_type.as_str().to_string(),
        dismiss_label: None,
    }
}

/// One descriptor per todo item, in feed order. Unknown types keep only
/// their raw name so the chooser renders nothing for them.
pub fn descriptors(home: &HomeScreen) -> Vec<TodoDescriptor> {
    home.items
        .iter()
        .filter_map(|item| match &item.data {
            | HomeScreenItemData::Todo(todo) => Some((item.badged, todo)),
            | _ => None,
        })
        .map(|(badged, todo)| {
            let mut dto = match TodoType::parse(&todo.todo_type) {
                | Some(todo_type) => defaults(todo_type),
                | None => {
                    debug!(todo_type = %todo.todo_type, "no display defaults");
                    TodoDto {
                        todo_type: todo.todo_type.clone(),
                        ..TodoDto::default()
                    }
                }
            };
            dto.badged = badged;
            dto.user_data = todo.user_data.clone().unwrap_or_default();
            TodoDescriptor::from(dto)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use onboard_shared::{HomeScreenItem, HomeScreenTodo};

    use super::*;

    #[test]
    fn defaults_carry_the_wire_name() {
        for todo_type in TodoType::ALL {
            let dto = defaults(todo_type);
            assert_eq!(dto.todo_type, todo_type.as_str());
            assert!(!dto.icon.is_empty());
            assert!(!dto.instructions.is_empty());
        }
    }

    #[test]
    fn descriptors_skip_non_todo_items() {
        let home = HomeScreen {
            items: vec![
                HomeScreenItem {
                    badged: true,
                    data: HomeScreenItemData::Todo(HomeScreenTodo {
                        todo_type: "verifyAllEmail".to_string(),
                        user_data: Some("a@example.com".to_string()),
                    }),
                },
                HomeScreenItem {
                    badged: false,
                    data: HomeScreenItemData::Announcement {
                        text: "news".to_string(),
                    },
                },
                HomeScreenItem {
                    badged: false,
                    data: HomeScreenItemData::Todo(HomeScreenTodo {
                        todo_type: "somethingElse".to_string(),
                        user_data: None,
                    }),
                },
            ],
        };

        let list = descriptors(&home);
        assert_eq!(list.len(), 2);
        assert!(list[0].badged);
        assert_eq!(list[0].user_data, "a@example.com");
        assert_eq!(list[0].icon, "icon-onboarding-email-verify-48");
        assert_eq!(list[1].todo_type, "somethingElse");
        assert!(list[1].icon.is_empty());
    }
}
