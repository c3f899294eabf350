use std::fs;
use std::path::Path;

use anyhow::Context;
use onboard_shared::{Email, HomeScreen, PhoneNumber};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::userdata::UserDataSource;

/// A saved home screen plus the account details the fill step reads.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedFile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub home: HomeScreen,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
}

impl FeedFile {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("feed is not valid JSON")
    }

    #[instrument]
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read feed {}", path.display()))?;
        let feed = Self::from_json(&text)
            .with_context(|| format!("failed to parse feed {}", path.display()))?;
        debug!(items = feed.home.items.len(), "loaded feed");
        Ok(feed)
    }
}

impl UserDataSource for FeedFile {
    fn phone_numbers(&self) -> anyhow::Result<Vec<PhoneNumber>> {
        Ok(self.phone_numbers.clone())
    }

    fn emails(&self) -> anyhow::Result<Vec<Email>> {
        Ok(self.emails.clone())
    }
}
