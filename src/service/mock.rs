//! Recording gateway for service tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use serenity::async_trait;

use crate::{
    data::store::{MemoryStore, Store},
    error::AppError,
    model::{
        channel::{ChannelInfo, MemberOverride},
        notification::Notification,
        recovery::RecoveryStrategy,
    },
    service::{authorization::UnlockPolicy, gateway::ChannelGateway},
    state::{AppState, Settings},
};

/// A permission write observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideCall {
    pub channel_id: u64,
    pub member_id: u64,
    pub permission: Option<MemberOverride>,
}

/// In-memory `ChannelGateway` recording every mutation.
///
/// Channels are held in a map and updated in place when overrides are written, so a
/// lock followed by an unlock can be checked against the resulting channel state.
#[derive(Default)]
pub struct MockGateway {
    channels: Mutex<HashMap<u64, ChannelInfo>>,
    members: Mutex<HashSet<(u64, u64)>>,
    history: Mutex<HashMap<u64, Vec<Option<String>>>>,
    failing_channels: Mutex<HashSet<u64>>,
    pub override_calls: Mutex<Vec<OverrideCall>>,
    pub notifications: Mutex<Vec<(u64, Notification)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text channel without overwrites.
    pub fn with_channel(self, guild_id: u64, channel_id: u64, category_id: Option<u64>) -> Self {
        self.insert_channel(ChannelInfo {
            id: channel_id,
            guild_id,
            category_id,
            name: format!("channel-{}", channel_id),
            member_overrides: Vec::new(),
        });
        self
    }

    pub fn with_member(self, guild_id: u64, member_id: u64) -> Self {
        self.members.lock().unwrap().insert((guild_id, member_id));
        self
    }

    /// Seeds recent embed titles for a channel, newest first.
    pub fn with_history(self, channel_id: u64, titles: Vec<Option<&str>>) -> Self {
        let titles = titles.into_iter().map(|t| t.map(str::to_string)).collect();
        self.history.lock().unwrap().insert(channel_id, titles);
        self
    }

    /// Makes permission writes and history reads for the channel fail.
    pub fn with_failing_channel(self, channel_id: u64) -> Self {
        self.failing_channels.lock().unwrap().insert(channel_id);
        self
    }

    pub fn insert_channel(&self, channel: ChannelInfo) {
        self.channels.lock().unwrap().insert(channel.id, channel);
    }

    pub fn remove_channel(&self, channel_id: u64) {
        self.channels.lock().unwrap().remove(&channel_id);
    }

    pub fn channel_state(&self, channel_id: u64) -> Option<ChannelInfo> {
        self.channels.lock().unwrap().get(&channel_id).cloned()
    }

    pub fn override_calls(&self) -> Vec<OverrideCall> {
        self.override_calls.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<(u64, Notification)> {
        self.notifications.lock().unwrap().clone()
    }

    fn check(&self, channel_id: u64) -> Result<(), AppError> {
        if self.failing_channels.lock().unwrap().contains(&channel_id) {
            return Err(AppError::NotFound(format!(
                "simulated failure for channel {}",
                channel_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ChannelGateway for MockGateway {
    async fn channel(&self, channel_id: u64) -> Result<Option<ChannelInfo>, AppError> {
        Ok(self.channel_state(channel_id))
    }

    async fn guild_text_channels(&self, guild_id: u64) -> Result<Vec<ChannelInfo>, AppError> {
        let mut channels: Vec<ChannelInfo> = self
            .channels
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.guild_id == guild_id)
            .cloned()
            .collect();
        channels.sort_by_key(|c| c.id);
        Ok(channels)
    }

    async fn member_exists(&self, guild_id: u64, member_id: u64) -> Result<bool, AppError> {
        Ok(self.members.lock().unwrap().contains(&(guild_id, member_id)))
    }

    async fn set_member_override(
        &self,
        channel: &ChannelInfo,
        member_id: u64,
        permission: Option<MemberOverride>,
    ) -> Result<(), AppError> {
        self.check(channel.id)?;

        self.override_calls.lock().unwrap().push(OverrideCall {
            channel_id: channel.id,
            member_id,
            permission,
        });

        if let Some(stored) = self.channels.lock().unwrap().get_mut(&channel.id) {
            stored.member_overrides.retain(|o| o.member_id != member_id);
            if let Some(permission) = permission {
                stored.member_overrides.push(permission);
            }
        }

        Ok(())
    }

    async fn send_notification(
        &self,
        channel_id: u64,
        notification: &Notification,
    ) -> Result<(), AppError> {
        self.notifications
            .lock()
            .unwrap()
            .push((channel_id, notification.clone()));
        Ok(())
    }

    async fn recent_embed_titles(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<Option<String>>, AppError> {
        self.check(channel_id)?;

        let history = self.history.lock().unwrap();
        let titles = history
            .get(&channel_id)
            .map(|titles| titles.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default();
        Ok(titles)
    }
}

/// Game bot id used by service tests.
pub const GAME_BOT_ID: u64 = 500;

/// Settings used by service tests.
pub fn test_settings(strategy: RecoveryStrategy) -> Settings {
    Settings {
        owner_id: 1,
        game_bot_id: GAME_BOT_ID,
        default_lock_hours: 12,
        recovery_strategy: strategy,
        recovery_history_limit: 30,
        recovery_fallback_minutes: 30,
        ping_role_id: None,
    }
}

/// Application state over a memory store and the given mock gateway.
pub fn test_state(gateway: Arc<MockGateway>) -> AppState {
    test_state_with_store(gateway, Arc::new(MemoryStore::new()))
}

pub fn test_state_with_store(gateway: Arc<MockGateway>, store: Arc<dyn Store>) -> AppState {
    let strategy = if store.is_durable() {
        RecoveryStrategy::Durable
    } else {
        RecoveryStrategy::History
    };

    AppState::new(
        store,
        gateway,
        Arc::new(UnlockPolicy::new(None)),
        test_settings(strategy),
    )
}

pub fn test_state_with_settings(gateway: Arc<MockGateway>, settings: Settings) -> AppState {
    AppState::new(
        Arc::new(MemoryStore::new()),
        gateway,
        Arc::new(UnlockPolicy::new(None)),
        settings,
    )
}
