//! Startup reconstruction of the lock registry.
//!
//! Recovery is best effort: a channel that cannot be read is logged, counted as
//! failed and skipped. It runs once before the expiry job starts.

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::AppError,
    model::{
        channel::ChannelInfo,
        lock::LockEntry,
        notification::{LOCKED_MARKER, UNLOCKED_MARKER},
        recovery::{LockMarker, RecoveryReport, RecoveryStrategy},
    },
    service::{
        blacklist::BlacklistService, lock::LockService, permission::denies_access,
        server_config::ServerConfigService,
    },
    state::AppState,
};

/// Most recent lock marker in a list of embed titles ordered newest first.
pub fn latest_marker(titles: &[Option<String>]) -> Option<LockMarker> {
    titles.iter().flatten().find_map(|title| {
        if title.contains(UNLOCKED_MARKER) {
            Some(LockMarker::Unlocked)
        } else if title.contains(LOCKED_MARKER) {
            Some(LockMarker::Locked)
        } else {
            None
        }
    })
}

pub struct RecoveryService<'a> {
    state: &'a AppState,
}

impl<'a> RecoveryService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Rebuilds the registry with the given strategy.
    ///
    /// # Arguments
    /// - `strategy` - Where lock state is read from
    /// - `guild_ids` - Guilds the bot is in; unused by the durable strategy
    /// - `now` - Reference time for expiry decisions
    ///
    /// # Returns
    /// - `Ok(RecoveryReport)` - Counts of restored, expired, dropped and failed entries
    /// - `Err(AppError)` - Persisted locks could not be loaded
    pub async fn run(
        &self,
        strategy: RecoveryStrategy,
        guild_ids: &[u64],
        now: DateTime<Utc>,
    ) -> Result<RecoveryReport, AppError> {
        tracing::info!("Recovering locks using the {} strategy", strategy);

        let report = match strategy {
            RecoveryStrategy::Durable => self.reload_persisted(now).await?,
            RecoveryStrategy::Permissions => self.infer_from_permissions(guild_ids, now).await,
            RecoveryStrategy::History => self.scan_history(guild_ids, now).await,
        };

        tracing::info!(
            "Recovery finished: {} restored, {} expired, {} dropped, {} failed",
            report.restored,
            report.expired,
            report.dropped,
            report.failed
        );

        Ok(report)
    }

    async fn reload_persisted(&self, now: DateTime<Utc>) -> Result<RecoveryReport, AppError> {
        let mut report = RecoveryReport::default();
        let registry = &self.state.registry;
        let locks = LockService::new(self.state);

        for entry in self.state.store.load_locks().await? {
            let _guard = registry.guard(entry.channel_id).await;

            let channel = match self.state.gateway.channel(entry.channel_id).await {
                Ok(Some(channel)) => channel,
                Ok(None) => {
                    tracing::debug!("Dropping lock of deleted channel {}", entry.channel_id);
                    self.discard(entry.channel_id).await;
                    report.dropped += 1;
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Failed to resolve locked channel {}: {}", entry.channel_id, e);
                    report.failed += 1;
                    continue;
                }
            };

            let expired = entry.is_expired(now);
            if expired || self.is_excluded(&channel).await {
                if let Err(e) = locks.restore_access(&channel).await {
                    tracing::warn!("Failed to restore access to channel {}: {}", channel.id, e);
                }
                self.discard(entry.channel_id).await;

                if expired {
                    report.expired += 1;
                } else {
                    report.dropped += 1;
                }
                continue;
            }

            registry.restore(entry.clone());
            if let Err(e) = locks.reapply(&channel).await {
                tracing::warn!("Failed to re-apply lock on channel {}: {}", channel.id, e);
            }
            report.restored += 1;
        }

        Ok(report)
    }

    async fn infer_from_permissions(&self, guild_ids: &[u64], now: DateTime<Utc>) -> RecoveryReport {
        let mut report = RecoveryReport::default();
        let game_bot_id = self.state.settings.game_bot_id;
        let fallback = Duration::minutes(self.state.settings.recovery_fallback_minutes);

        for channel in self.candidate_channels(guild_ids, &mut report).await {
            let locked = channel
                .override_for(game_bot_id)
                .is_some_and(|o| denies_access(&o));
            if !locked {
                continue;
            }

            let entry = LockEntry::expiring_in(channel.id, channel.guild_id, fallback, now);
            if self.adopt(entry).await {
                report.restored += 1;
            }
        }

        report
    }

    async fn scan_history(&self, guild_ids: &[u64], now: DateTime<Utc>) -> RecoveryReport {
        let mut report = RecoveryReport::default();
        let limit = self.state.settings.recovery_history_limit;
        let configs =
            ServerConfigService::new(self.state.store.as_ref(), self.state.settings.default_lock_hours);
        let locks = LockService::new(self.state);

        for channel in self.candidate_channels(guild_ids, &mut report).await {
            let titles = match self.state.gateway.recent_embed_titles(channel.id, limit).await {
                Ok(titles) => titles,
                Err(e) => {
                    tracing::warn!("Failed to read history of channel {}: {}", channel.id, e);
                    report.failed += 1;
                    continue;
                }
            };

            if latest_marker(&titles) != Some(LockMarker::Locked) {
                continue;
            }

            let lock_hours = match configs.get(channel.guild_id).await {
                Ok(config) => config.lock_hours,
                Err(e) => {
                    tracing::warn!("Failed to load config of guild {}: {}", channel.guild_id, e);
                    self.state.settings.default_lock_hours
                }
            };

            let entry = LockEntry::new(channel.id, channel.guild_id, lock_hours, now);
            if !self.adopt(entry).await {
                continue;
            }
            report.restored += 1;

            if let Err(e) = locks.reapply(&channel).await {
                tracing::warn!("Failed to re-apply lock on channel {}: {}", channel.id, e);
            }
        }

        report
    }

    /// Text channels of the given guilds that are neither locked nor blacklisted.
    async fn candidate_channels(
        &self,
        guild_ids: &[u64],
        report: &mut RecoveryReport,
    ) -> Vec<ChannelInfo> {
        let mut candidates = Vec::new();

        for &guild_id in guild_ids {
            let channels = match self.state.gateway.guild_text_channels(guild_id).await {
                Ok(channels) => channels,
                Err(e) => {
                    tracing::warn!("Failed to list channels of guild {}: {}", guild_id, e);
                    report.failed += 1;
                    continue;
                }
            };

            for channel in channels {
                if self.state.registry.is_locked(channel.id) || self.is_excluded(&channel).await {
                    continue;
                }
                candidates.push(channel);
            }
        }

        candidates
    }

    /// Restores a reconstructed entry and persists it. Returns `false` if the
    /// channel was locked in the meantime.
    async fn adopt(&self, entry: LockEntry) -> bool {
        let registry = &self.state.registry;
        let _guard = registry.guard(entry.channel_id).await;

        if !registry.restore(entry.clone()) {
            return false;
        }

        if let Err(e) = registry.persist(&entry).await {
            tracing::warn!("Failed to persist recovered lock of channel {}: {}", entry.channel_id, e);
        }

        tracing::info!(
            "Recovered lock of channel {} until {}",
            entry.channel_id,
            entry.unlock_at
        );

        true
    }

    async fn is_excluded(&self, channel: &ChannelInfo) -> bool {
        match BlacklistService::new(self.state.store.as_ref())
            .is_excluded(channel.id, channel.category_id)
            .await
        {
            Ok(excluded) => excluded,
            Err(e) => {
                tracing::warn!("Failed to check blacklist for channel {}: {}", channel.id, e);
                false
            }
        }
    }

    async fn discard(&self, channel_id: u64) {
        if let Err(e) = self.state.registry.discard_persisted(channel_id).await {
            tracing::warn!("Failed to delete persisted lock of channel {}: {}", channel_id, e);
        }
    }
}
