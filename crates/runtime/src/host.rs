//! Capabilities the host runtime injects into every integration.

use crate::error::{Result, RuntimeError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Settings as persisted by the host, keyed by setting name.
pub type SettingsMap = BTreeMap<String, Value>;

/// Bot client identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientHandle {
    pub user_id: String,
    pub application_id: String,
}

/// Guild the integration instance is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildHandle {
    pub id: String,
    pub name: String,
}

/// Handles supplied by the host at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostHandles {
    pub client: ClientHandle,
    pub guild: GuildHandle,
}

impl HostHandles {
    pub fn new(client: ClientHandle, guild: GuildHandle) -> Self {
        Self { client, guild }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A line in the guild's integration log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub integration_id: String,
    pub guild_id: String,
    pub level: LogLevel,
    pub message: String,
}

/// Host-provided capabilities.
///
/// Every call is scoped by integration and guild so a single host instance
/// can serve many integrations.
#[async_trait]
pub trait HostServices: Send + Sync {
    async fn get_stored_settings(&self, integration_id: &str, guild_id: &str)
        -> Result<SettingsMap>;

    async fn update_stored_settings(
        &self,
        integration_id: &str,
        guild_id: &str,
        settings: &SettingsMap,
    ) -> Result<()>;

    async fn create_log_entry(&self, entry: LogEntry) -> Result<()>;

    async fn send_webhook(&self, guild_id: &str, payload: Value) -> Result<()>;

    async fn get_server_config(&self, guild_id: &str) -> Result<Value>;

    async fn check_permissions(
        &self,
        guild_id: &str,
        user_id: &str,
        permission: &str,
    ) -> Result<bool>;
}

/// Host with no capabilities; every call fails with `Unimplemented`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnboundHost;

#[async_trait]
impl HostServices for UnboundHost {
    async fn get_stored_settings(&self, _: &str, _: &str) -> Result<SettingsMap> {
        Err(RuntimeError::Unimplemented("get_stored_settings"))
    }

    async fn update_stored_settings(&self, _: &str, _: &str, _: &SettingsMap) -> Result<()> {
        Err(RuntimeError::Unimplemented("update_stored_settings"))
    }

    async fn create_log_entry(&self, _: LogEntry) -> Result<()> {
        Err(RuntimeError::Unimplemented("create_log_entry"))
    }

    async fn send_webhook(&self, _: &str, _: Value) -> Result<()> {
        Err(RuntimeError::Unimplemented("send_webhook"))
    }

    async fn get_server_config(&self, _: &str) -> Result<Value> {
        Err(RuntimeError::Unimplemented("get_server_config"))
    }

    async fn check_permissions(&self, _: &str, _: &str, _: &str) -> Result<bool> {
        Err(RuntimeError::Unimplemented("check_permissions"))
    }
}
