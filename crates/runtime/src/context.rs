//! Per-instance state shared by every integration hook.

use crate::error::Result;
use crate::host::{HostHandles, HostServices, LogEntry, LogLevel, SettingsMap};
use mercy_integration_schema::IntegrationMetadata;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Metadata, host handles and the settings cache of one loaded integration.
///
/// The cache mirrors what the host has persisted for this guild; settings
/// never written fall back to the defaults declared in the metadata.
pub struct IntegrationContext {
    metadata: IntegrationMetadata,
    handles: HostHandles,
    host: Arc<dyn HostServices>,
    settings: RwLock<SettingsMap>,
    loaded: AtomicBool,
}

impl IntegrationContext {
    pub fn new(
        metadata: IntegrationMetadata,
        handles: HostHandles,
        host: Arc<dyn HostServices>,
    ) -> Self {
        Self {
            metadata,
            handles,
            host,
            settings: RwLock::new(SettingsMap::new()),
            loaded: AtomicBool::new(false),
        }
    }

    pub fn metadata(&self) -> &IntegrationMetadata {
        &self.metadata
    }

    pub fn handles(&self) -> &HostHandles {
        &self.handles
    }

    pub fn integration_id(&self) -> &str {
        &self.metadata.id
    }

    pub fn guild_id(&self) -> &str {
        &self.handles.guild.id
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    pub(crate) fn set_loaded(&self, loaded: bool) {
        self.loaded.store(loaded, Ordering::SeqCst);
    }

    /// Replace the cache with what the host has stored.
    pub async fn load_settings(&self) -> Result<()> {
        let stored = self
            .host
            .get_stored_settings(self.integration_id(), self.guild_id())
            .await?;
        debug!(
            "Loaded {} stored setting(s) for {}",
            stored.len(),
            self.integration_id()
        );
        *self.settings.write().await = stored;
        Ok(())
    }

    pub(crate) async fn clear_settings(&self) {
        self.settings.write().await.clear();
    }

    /// Cached value, else the metadata default.
    pub async fn get_setting(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.settings.read().await.get(key) {
            return Some(value.clone());
        }
        self.metadata.setting_default(key).cloned()
    }

    /// Update the cache, then persist the whole map through the host.
    ///
    /// The cache keeps the new value even if persisting fails.
    pub async fn set_setting(&self, key: impl Into<String>, value: Value) -> Result<()> {
        let snapshot = {
            let mut settings = self.settings.write().await;
            settings.insert(key.into(), value);
            settings.clone()
        };
        self.host
            .update_stored_settings(self.integration_id(), self.guild_id(), &snapshot)
            .await
    }

    /// Metadata defaults overlaid with cached values.
    pub async fn all_settings(&self) -> SettingsMap {
        let mut merged = self.metadata.default_settings();
        for (key, value) in self.settings.read().await.iter() {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    pub async fn log(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        let entry = LogEntry {
            integration_id: self.integration_id().to_string(),
            guild_id: self.guild_id().to_string(),
            level,
            message: message.into(),
        };
        debug!("[{}] {}: {}", entry.integration_id, level, entry.message);
        self.host.create_log_entry(entry).await
    }

    pub async fn send_webhook(&self, payload: Value) -> Result<()> {
        self.host.send_webhook(self.guild_id(), payload).await
    }

    pub async fn server_config(&self) -> Result<Value> {
        self.host.get_server_config(self.guild_id()).await
    }

    pub async fn has_permission(&self, user_id: &str, permission: &str) -> Result<bool> {
        self.host
            .check_permissions(self.guild_id(), user_id, permission)
            .await
    }
}

impl std::fmt::Debug for IntegrationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegrationContext")
            .field("integration_id", &self.metadata.id)
            .field("guild_id", &self.handles.guild.id)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}
