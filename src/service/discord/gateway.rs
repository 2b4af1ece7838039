//! `ChannelGateway` over the Serenity HTTP client.

use std::sync::Arc;

use serenity::{
    all::{
        Channel, ChannelId, ChannelType, GetMessages, GuildId, PermissionOverwrite,
        PermissionOverwriteType, UserId,
    },
    async_trait,
    http::{Http, HttpError},
};

use crate::{
    error::AppError,
    model::{
        channel::{ChannelInfo, MemberOverride},
        notification::Notification,
    },
    service::{discord::notification::build_message, gateway::ChannelGateway},
};

pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Whether a Serenity error is an HTTP 404 from Discord.
fn is_not_found(error: &serenity::Error) -> bool {
    matches!(
        error,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}

#[async_trait]
impl ChannelGateway for DiscordGateway {
    async fn channel(&self, channel_id: u64) -> Result<Option<ChannelInfo>, AppError> {
        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(Channel::Guild(channel)) => Ok(Some(ChannelInfo::from_guild_channel(&channel))),
            Ok(_) => Ok(None),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn guild_text_channels(&self, guild_id: u64) -> Result<Vec<ChannelInfo>, AppError> {
        let channels = self.http.get_channels(GuildId::new(guild_id)).await?;

        Ok(channels
            .iter()
            .filter(|c| c.kind == ChannelType::Text)
            .map(ChannelInfo::from_guild_channel)
            .collect())
    }

    async fn member_exists(&self, guild_id: u64, member_id: u64) -> Result<bool, AppError> {
        match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(member_id))
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_member_override(
        &self,
        channel: &ChannelInfo,
        member_id: u64,
        permission: Option<MemberOverride>,
    ) -> Result<(), AppError> {
        let channel_id = ChannelId::new(channel.id);
        let kind = PermissionOverwriteType::Member(UserId::new(member_id));

        match permission {
            Some(permission) => {
                channel_id
                    .create_permission(
                        &self.http,
                        PermissionOverwrite {
                            allow: permission.allow,
                            deny: permission.deny,
                            kind,
                        },
                    )
                    .await?
            }
            None => channel_id.delete_permission(&self.http, kind).await?,
        }

        Ok(())
    }

    async fn send_notification(
        &self,
        channel_id: u64,
        notification: &Notification,
    ) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, build_message(notification))
            .await?;

        Ok(())
    }

    async fn recent_embed_titles(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<Option<String>>, AppError> {
        let messages = ChannelId::new(channel_id)
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages
            .into_iter()
            .map(|m| m.embeds.into_iter().next().and_then(|e| e.title))
            .collect())
    }
}
