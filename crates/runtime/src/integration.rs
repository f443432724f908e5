//! The integration lifecycle and event hooks.

use crate::context::IntegrationContext;
use crate::error::Result;
use crate::events::{
    ButtonPress, Interaction, MemberEvent, MessageEvent, ModerationEvent, SelectMenuChoice,
    SlashCommand,
};
use async_trait::async_trait;
use tracing::{debug, info};

/// An integration driven by the host.
///
/// Only [`Integration::context`] is required. Every hook has a no-op default,
/// so implementors override just the events they handle. The host calls
/// hooks one at a time per instance.
#[async_trait]
pub trait Integration: Send + Sync {
    fn context(&self) -> &IntegrationContext;

    /// Runs after settings are loaded, before the instance is marked loaded.
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    /// Runs before the settings cache is dropped.
    async fn cleanup(&self) -> Result<()> {
        Ok(())
    }

    async fn on_load(&self) -> Result<()> {
        let ctx = self.context();
        ctx.load_settings().await?;
        self.initialize().await?;
        ctx.set_loaded(true);
        info!(
            "Integration {} loaded for guild {}",
            ctx.integration_id(),
            ctx.guild_id()
        );
        Ok(())
    }

    async fn on_unload(&self) -> Result<()> {
        let ctx = self.context();
        self.cleanup().await?;
        ctx.clear_settings().await;
        ctx.set_loaded(false);
        info!(
            "Integration {} unloaded for guild {}",
            ctx.integration_id(),
            ctx.guild_id()
        );
        Ok(())
    }

    async fn on_message(&self, _message: &MessageEvent) -> Result<()> {
        Ok(())
    }

    async fn on_member_join(&self, _member: &MemberEvent) -> Result<()> {
        Ok(())
    }

    async fn on_member_leave(&self, _member: &MemberEvent) -> Result<()> {
        Ok(())
    }

    async fn on_moderation_action(&self, _event: &ModerationEvent) -> Result<()> {
        Ok(())
    }

    /// Route an interaction to the matching sub-handler.
    async fn on_interaction(&self, interaction: &Interaction) -> Result<()> {
        debug!(
            "Interaction from {} for {}",
            interaction.user_id(),
            self.context().integration_id()
        );
        match interaction {
            Interaction::SlashCommand(command) => self.on_slash_command(command).await,
            Interaction::Button(button) => self.on_button(button).await,
            Interaction::SelectMenu(choice) => self.on_select_menu(choice).await,
        }
    }

    async fn on_slash_command(&self, _command: &SlashCommand) -> Result<()> {
        Ok(())
    }

    async fn on_button(&self, _button: &ButtonPress) -> Result<()> {
        Ok(())
    }

    async fn on_select_menu(&self, _choice: &SelectMenuChoice) -> Result<()> {
        Ok(())
    }
}
