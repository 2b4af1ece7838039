//! Game bot access control on a single channel.
//!
//! Locking denies the game bot `VIEW_CHANNEL` and `SEND_MESSAGES` through its member
//! overwrite. Unlocking clears exactly those deny bits and removes the overwrite
//! when nothing else is left in it, so unrelated overwrite bits set by moderators
//! survive a lock cycle.
//!
//! An explicit allow of either locked permission is dropped when locking, since an
//! allow outranks a deny in the same overwrite. It is not recorded, so after unlock
//! the game bot's access to the channel comes from its roles and the category.

use std::sync::Arc;

use serenity::all::Permissions;

use crate::{
    error::AppError,
    model::channel::{ChannelInfo, MemberOverride},
    service::gateway::ChannelGateway,
};

/// Permissions taken away from the game bot while a channel is locked.
pub fn locked_permissions() -> Permissions {
    Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES
}

/// Overwrite to write when locking, given the current one.
///
/// Explicit `VIEW_CHANNEL`/`SEND_MESSAGES` allows are removed and not kept.
pub fn lock_override(member_id: u64, current: Option<MemberOverride>) -> MemberOverride {
    let (allow, deny) = current
        .map(|o| (o.allow, o.deny))
        .unwrap_or((Permissions::empty(), Permissions::empty()));

    MemberOverride {
        member_id,
        allow: allow - locked_permissions(),
        deny: deny | locked_permissions(),
    }
}

/// Overwrite to write when unlocking, `None` meaning delete it.
///
/// Only the deny bits are cleared; allows dropped by [`lock_override`] stay
/// dropped and access falls back to what the game bot inherits.
pub fn unlock_override(current: Option<MemberOverride>) -> Option<MemberOverride> {
    let current = current?;

    let restored = MemberOverride {
        deny: current.deny - locked_permissions(),
        ..current
    };

    if restored.is_empty() {
        None
    } else {
        Some(restored)
    }
}

/// Whether an overwrite shows the channel as locked for its member.
pub fn denies_access(current: &MemberOverride) -> bool {
    current.deny.intersects(locked_permissions())
}

/// Applies lock and unlock overwrites for the game bot.
pub struct PermissionAdapter {
    gateway: Arc<dyn ChannelGateway>,
    game_bot_id: u64,
}

impl PermissionAdapter {
    pub fn new(gateway: Arc<dyn ChannelGateway>, game_bot_id: u64) -> Self {
        Self {
            gateway,
            game_bot_id,
        }
    }

    /// Denies the game bot access to the channel.
    ///
    /// # Returns
    /// - `Ok(true)` - Overwrite written
    /// - `Ok(false)` - Game bot is not a member of the guild; nothing written
    /// - `Err(AppError)` - Discord API error
    pub async fn deny(&self, channel: &ChannelInfo) -> Result<bool, AppError> {
        if !self
            .gateway
            .member_exists(channel.guild_id, self.game_bot_id)
            .await?
        {
            return Ok(false);
        }

        let permission = lock_override(self.game_bot_id, channel.override_for(self.game_bot_id));
        self.gateway
            .set_member_override(channel, self.game_bot_id, Some(permission))
            .await?;

        Ok(true)
    }

    /// Restores the game bot's access to the channel.
    ///
    /// # Returns
    /// - `Ok(true)` - Overwrite cleared or removed
    /// - `Ok(false)` - Game bot is not a member of the guild; nothing written
    /// - `Err(AppError)` - Discord API error
    pub async fn restore(&self, channel: &ChannelInfo) -> Result<bool, AppError> {
        if !self
            .gateway
            .member_exists(channel.guild_id, self.game_bot_id)
            .await?
        {
            return Ok(false);
        }

        let permission = unlock_override(channel.override_for(self.game_bot_id));
        self.gateway
            .set_member_override(channel, self.game_bot_id, permission)
            .await?;

        Ok(true)
    }
}
