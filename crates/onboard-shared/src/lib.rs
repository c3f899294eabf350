use std::collections::BTreeMap;
use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

/// Onboarding tasks a people-feed card can
/// represent. Wire names are the camelCase
/// strings the home screen sends.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum TodoType {
  AddEmail,
  AddPhoneNumber,
  AvatarTeam,
  AvatarUser,
  Bio,
  Proof,
  Device,
  Follow,
  Chat,
  Paperkey,
  Team,
  Folder,
  GitRepo,
  TeamShowcase,
  VerifyAllEmail,
  VerifyAllPhoneNumber,
  LegacyEmailVisibility
}

impl TodoType {
  pub const ALL: [TodoType; 17] = [
    TodoType::AddEmail,
    TodoType::AddPhoneNumber,
    TodoType::AvatarTeam,
    TodoType::AvatarUser,
    TodoType::Bio,
    TodoType::Proof,
    TodoType::Device,
    TodoType::Follow,
    TodoType::Chat,
    TodoType::Paperkey,
    TodoType::Team,
    TodoType::Folder,
    TodoType::GitRepo,
    TodoType::TeamShowcase,
    TodoType::VerifyAllEmail,
    TodoType::VerifyAllPhoneNumber,
    TodoType::LegacyEmailVisibility
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | TodoType::AddEmail => "addEmail",
      | TodoType::AddPhoneNumber => {
        "addPhoneNumber"
      }
      | TodoType::AvatarTeam => {
        "avatarTeam"
      }
      | TodoType::AvatarUser => {
        "avatarUser"
      }
      | TodoType::Bio => "bio",
      | TodoType::Proof => "proof",
      | TodoType::Device => "device",
      | TodoType::Follow => "follow",
      | TodoType::Chat => "chat",
      | TodoType::Paperkey => "paperkey",
      | TodoType::Team => "team",
      | TodoType::Folder => "folder",
      | TodoType::GitRepo => "gitRepo",
      | TodoType::TeamShowcase => {
        "teamShowcase"
      }
      | TodoType::VerifyAllEmail => {
        "verifyAllEmail"
      }
      | TodoType::VerifyAllPhoneNumber => {
        "verifyAllPhoneNumber"
      }
      | TodoType::LegacyEmailVisibility => {
        "legacyEmailVisibility"
      }
    }
  }

  /// Looks up a wire name. Unknown names
  /// are not an error, callers treat them
  /// as "render nothing".
  pub fn parse(
    raw: &str
  ) -> Option<TodoType> {
    TodoType::ALL
      .into_iter()
      .find(|todo| todo.as_str() == raw)
  }
}

impl fmt::Display for TodoType {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub enum Tab {
  #[serde(rename = "tabs.peopleTab")]
  People,
  #[serde(rename = "tabs.teamsTab")]
  Teams,
  #[serde(rename = "tabs.chatTab")]
  Chat,
  #[serde(rename = "tabs.fsTab")]
  Fs,
  #[serde(rename = "tabs.gitTab")]
  Git,
  #[serde(
    rename = "settingsTabs.gitTab"
  )]
  SettingsGit
}

impl Tab {
  pub fn as_str(self) -> &'static str {
    match self {
      | Tab::People => "tabs.peopleTab",
      | Tab::Teams => "tabs.teamsTab",
      | Tab::Chat => "tabs.chatTab",
      | Tab::Fs => "tabs.fsTab",
      | Tab::Git => "tabs.gitTab",
      | Tab::SettingsGit => {
        "settingsTabs.gitTab"
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(untagged)]
pub enum PropValue {
  Bool(bool),
  Text(String),
  List(Vec<String>)
}

/// One step of a navigation path: either a
/// bare route name or a route selected with
/// props.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(untagged)]
pub enum RouteSegment {
  Selected {
    selected: String,
    props:    BTreeMap<String, PropValue>
  },
  Name(String)
}

impl RouteSegment {
  pub fn name(
    name: impl Into<String>
  ) -> Self {
    RouteSegment::Name(name.into())
  }

  pub fn tab(tab: Tab) -> Self {
    RouteSegment::Name(
      tab.as_str().to_string()
    )
  }

  pub fn selected<I>(
    selected: impl Into<String>,
    props: I
  ) -> Self
  where
    I: IntoIterator<
      Item = (&'static str, PropValue)
    >
  {
    RouteSegment::Selected {
      selected: selected.into(),
      props:    props
        .into_iter()
        .map(|(k, v)| {
          (k.to_string(), v)
        })
        .collect()
    }
  }
}

/// Named action records handed to the
/// effect bus.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(
  tag = "type",
  rename_all = "camelCase",
  rename_all_fields = "camelCase"
)]
pub enum Action {
  SkipTodo {
    todo_type: TodoType
  },
  EditAvatar,
  ShowUserProfile {
    username: String
  },
  ShowUser {
    username:   String,
    as_tracker: bool
  },
  SwitchTab {
    tab: Tab
  },
  NavigateAppend {
    #[serde(
      default,
      skip_serializing_if = "Option::is_none"
    )]
    parent_path:
      Option<Vec<RouteSegment>>,
    path: Vec<RouteSegment>
  },
  SwitchTo {
    path: Vec<RouteSegment>
  },
  NavigateUp
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub enum ButtonType {
  #[default]
  Default,
  Success,
  Danger,
  Dim
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub enum ButtonMode {
  #[default]
  Primary,
  Secondary
}

/// Serializable part of a to-do card
/// descriptor.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
  #[serde(default)]
  pub badged:        bool,
  #[serde(default)]
  pub icon:          String,
  #[serde(default)]
  pub instructions:  String,
  #[serde(default)]
  pub sub_text:      String,
  #[serde(default)]
  pub confirm_label: String,
  #[serde(default)]
  pub dismissable:   bool,
  #[serde(default)]
  pub user_data:     String,
  pub todo_type:     String,
  #[serde(default)]
  pub dismiss_label: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct HomeScreenTodo {
  pub todo_type: String,
  #[serde(default)]
  pub user_data: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(
  tag = "t",
  rename_all = "camelCase"
)]
pub enum HomeScreenItemData {
  Todo(HomeScreenTodo),
  People,
  Announcement {
    #[serde(default)]
    text: String
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct HomeScreenItem {
  #[serde(default)]
  pub badged: bool,
  pub data:   HomeScreenItemData
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct HomeScreen {
  #[serde(default)]
  pub items: Vec<HomeScreenItem>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Email {
  pub email:       String,
  #[serde(default)]
  pub is_verified: bool,
  #[serde(default)]
  pub is_primary:  bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
  pub phone_number: String,
  #[serde(default)]
  pub verified:     bool,
  #[serde(default)]
  pub superseded:   bool
}
