//! The seam between lock logic and the Discord API.
//!
//! Services only talk to Discord through `ChannelGateway`, which keeps them testable
//! with the recording mock and keeps Serenity types out of the core.

use serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        channel::{ChannelInfo, MemberOverride},
        notification::Notification,
    },
};

#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Resolves a guild channel.
    ///
    /// # Returns
    /// - `Ok(Some(ChannelInfo))` - Channel exists and is a guild channel
    /// - `Ok(None)` - Channel was deleted or is not a guild channel
    /// - `Err(AppError)` - Discord API error
    async fn channel(&self, channel_id: u64) -> Result<Option<ChannelInfo>, AppError>;

    /// Lists the text channels of a guild.
    async fn guild_text_channels(&self, guild_id: u64) -> Result<Vec<ChannelInfo>, AppError>;

    /// Whether a user is a member of a guild.
    async fn member_exists(&self, guild_id: u64, member_id: u64) -> Result<bool, AppError>;

    /// Writes the member overwrite of a channel, or deletes it when `None`.
    async fn set_member_override(
        &self,
        channel: &ChannelInfo,
        member_id: u64,
        permission: Option<MemberOverride>,
    ) -> Result<(), AppError>;

    async fn send_notification(
        &self,
        channel_id: u64,
        notification: &Notification,
    ) -> Result<(), AppError>;

    /// Titles of the first embed of the most recent messages, newest first.
    ///
    /// Messages without an embed yield `None` so callers can still count them.
    async fn recent_embed_titles(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<Option<String>>, AppError>;
}
