//! Runtime side of a M.E.R.C.Y integration.
//!
//! The host constructs an [`IntegrationContext`] with its [`HostServices`]
//! and drives an [`Integration`] through its lifecycle and event hooks.
//! [`UnboundHost`] stands in when no host is attached.

pub mod context;
pub mod error;
pub mod events;
pub mod host;
pub mod integration;

pub use context::IntegrationContext;
pub use error::{Result, RuntimeError};
pub use events::{
    Author, ButtonPress, Interaction, MemberEvent, MessageEvent, ModerationAction,
    ModerationEvent, SelectMenuChoice, SlashCommand,
};
pub use host::{
    ClientHandle, GuildHandle, HostHandles, HostServices, LogEntry, LogLevel, SettingsMap,
    UnboundHost,
};
pub use integration::Integration;
