//! Lock and unlock orchestration.
//!
//! Every operation holds the channel guard for its whole duration: registry
//! mutation, permission write and notification happen as one unit per channel.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    model::{
        channel::ChannelInfo,
        lock::{LockActor, LockEntry, LockOutcome, LockRequest, UnlockOutcome},
        notification::Notification,
    },
    service::permission::PermissionAdapter,
    state::AppState,
};

pub struct LockService<'a> {
    state: &'a AppState,
}

impl<'a> LockService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn permissions(&self) -> PermissionAdapter {
        PermissionAdapter::new(self.state.gateway.clone(), self.state.settings.game_bot_id)
    }

    /// Locks a channel for the game bot.
    ///
    /// An already locked channel is left exactly as it is. If the game bot is not in
    /// the guild, or the permission write fails, the new entry is rolled back.
    ///
    /// # Returns
    /// - `Ok(LockOutcome::Locked)` - Entry created, access denied, notification sent
    /// - `Ok(LockOutcome::AlreadyLocked)` - Channel was already locked; nothing changed
    /// - `Err(AppError::NotFound)` - Channel or game bot not found; nothing changed
    /// - `Err(AppError)` - Store or Discord API error; nothing changed
    pub async fn lock(
        &self,
        request: LockRequest,
        now: DateTime<Utc>,
    ) -> Result<LockOutcome, AppError> {
        let registry = &self.state.registry;
        let _guard = registry.guard(request.channel_id).await;

        if let Some(existing) = registry.get(request.channel_id) {
            tracing::debug!("Channel {} is already locked", request.channel_id);
            return Ok(LockOutcome::AlreadyLocked(existing));
        }

        let channel = self
            .state
            .gateway
            .channel(request.channel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("❌ Channel not found.".to_string()))?;

        let entry = LockEntry::new(channel.id, channel.guild_id, request.hours, now);
        let outcome = registry.try_lock(entry).await?;
        if let LockOutcome::AlreadyLocked(_) = outcome {
            return Ok(outcome);
        }

        match self.permissions().deny(&channel).await {
            Ok(true) => {}
            Ok(false) => {
                registry.unlock(channel.id).await;
                tracing::warn!(
                    "Game bot {} is not in guild {}; lock of channel {} rolled back",
                    self.state.settings.game_bot_id,
                    channel.guild_id,
                    channel.id
                );
                return Err(AppError::NotFound(
                    "❌ The game bot is not in this server.".to_string(),
                ));
            }
            Err(e) => {
                registry.unlock(channel.id).await;
                tracing::error!("Failed to lock channel {}: {}", channel.id, e);
                return Err(e);
            }
        }

        tracing::info!(
            "Locked channel {} in guild {} for {} hours ({:?})",
            channel.id,
            channel.guild_id,
            request.hours,
            request.reason
        );

        let notification = Notification::Locked {
            hours: request.hours,
            reason: request.reason,
            ping_role_id: self.state.settings.ping_role_id,
        };
        self.notify(channel.id, &notification).await;

        Ok(outcome)
    }

    /// Unlocks a channel.
    ///
    /// A channel that no longer resolves has its entry dropped without touching
    /// permissions.
    ///
    /// # Returns
    /// - `Ok(UnlockOutcome::Unlocked)` - Entry removed
    /// - `Ok(UnlockOutcome::NotLocked)` - Channel was not locked; nothing changed
    /// - `Err(AppError)` - Entry removed but restoring permissions failed
    pub async fn unlock(
        &self,
        channel_id: u64,
        actor: LockActor,
    ) -> Result<UnlockOutcome, AppError> {
        let _guard = self.state.registry.guard(channel_id).await;

        self.release(channel_id, actor).await
    }

    /// Unlocks every expired entry, attributing the unlock to the bot.
    ///
    /// Expiry is re-checked under the channel guard, so a channel unlocked and
    /// re-locked after the snapshot keeps its new lock. One failing channel never
    /// stops the others.
    ///
    /// # Returns
    /// - `usize` - Number of channels unlocked
    pub async fn sweep(&self, now: DateTime<Utc>) -> usize {
        let mut unlocked = 0;

        for entry in self.state.registry.expired(now) {
            let _guard = self.state.registry.guard(entry.channel_id).await;

            let still_expired = self
                .state
                .registry
                .get(entry.channel_id)
                .is_some_and(|current| current.is_expired(now));
            if !still_expired {
                continue;
            }

            match self.release(entry.channel_id, LockActor::Bot).await {
                Ok(UnlockOutcome::Unlocked(_)) => unlocked += 1,
                Ok(UnlockOutcome::NotLocked) => {}
                Err(e) => {
                    tracing::error!(
                        "Failed to restore access to expired channel {}: {}",
                        entry.channel_id,
                        e
                    );
                }
            }
        }

        unlocked
    }

    /// Re-applies the deny overwrite for an entry restored by recovery.
    pub async fn reapply(&self, channel: &ChannelInfo) -> Result<bool, AppError> {
        self.permissions().deny(channel).await
    }

    /// Restores access for a channel that is not in the registry.
    pub async fn restore_access(&self, channel: &ChannelInfo) -> Result<bool, AppError> {
        self.permissions().restore(channel).await
    }

    /// Removes the entry and restores access. Caller holds the channel guard.
    async fn release(&self, channel_id: u64, actor: LockActor) -> Result<UnlockOutcome, AppError> {
        let outcome = self.state.registry.unlock(channel_id).await;
        if outcome == UnlockOutcome::NotLocked {
            return Ok(outcome);
        }

        let channel = match self.state.gateway.channel(channel_id).await {
            Ok(Some(channel)) => channel,
            Ok(None) => {
                tracing::debug!("Channel {} no longer exists; dropped its lock", channel_id);
                return Ok(outcome);
            }
            Err(e) => {
                tracing::warn!("Failed to resolve channel {}; dropped its lock: {}", channel_id, e);
                return Ok(outcome);
            }
        };

        if !self.permissions().restore(&channel).await? {
            tracing::warn!(
                "Game bot {} is not in guild {}; nothing to restore for channel {}",
                self.state.settings.game_bot_id,
                channel.guild_id,
                channel_id
            );
        }

        tracing::info!("Unlocked channel {} ({:?})", channel_id, actor);

        self.notify(channel_id, &Notification::Unlocked { actor }).await;

        Ok(outcome)
    }

    async fn notify(&self, channel_id: u64, notification: &Notification) {
        if let Err(e) = self
            .state
            .gateway
            .send_notification(channel_id, notification)
            .await
        {
            tracing::warn!("Failed to send notification to channel {}: {}", channel_id, e);
        }
    }
}
