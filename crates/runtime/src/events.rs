//! Event payloads delivered by the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub bot: bool,
}

/// A message posted in a guild channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    pub id: String,
    pub channel_id: String,
    pub guild_id: String,
    pub author: Author,
    pub content: String,
}

impl MessageEvent {
    /// True when the message was sent by a bot account.
    pub fn from_bot(&self) -> bool {
        self.author.bot
    }
}

/// A member joining or leaving a guild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEvent {
    pub guild_id: String,
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub bot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Warn,
    Timeout,
    Kick,
    Ban,
    Unban,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationEvent {
    pub guild_id: String,
    pub action: ModerationAction,
    pub target_id: String,
    pub moderator_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlashCommand {
    pub command_name: String,
    pub user_id: String,
    #[serde(default)]
    pub options: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonPress {
    pub custom_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectMenuChoice {
    pub custom_id: String,
    pub user_id: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Any interaction the host forwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Interaction {
    SlashCommand(SlashCommand),
    Button(ButtonPress),
    SelectMenu(SelectMenuChoice),
}

impl Interaction {
    pub fn user_id(&self) -> &str {
        match self {
            Self::SlashCommand(c) => &c.user_id,
            Self::Button(b) => &b.user_id,
            Self::SelectMenu(s) => &s.user_id,
        }
    }
}
