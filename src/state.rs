//! Application state shared by commands, event handlers and scheduled jobs.
//!
//! `AppState` is built once in the framework setup hook, after the Discord HTTP
//! client exists, and handed to poise as its user data. Cloning is cheap: every
//! field is reference counted.

use std::sync::Arc;

use crate::{
    config::Config,
    data::store::Store,
    model::recovery::RecoveryStrategy,
    service::{
        authorization::AuthorizationPolicy, gateway::ChannelGateway, registry::LockRegistry,
    },
};

/// Immutable runtime settings derived from `Config`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub owner_id: u64,
    /// Member whose channel access is locked.
    pub game_bot_id: u64,
    /// Lock duration for guilds without a stored config.
    pub default_lock_hours: i32,
    pub recovery_strategy: RecoveryStrategy,
    pub recovery_history_limit: u8,
    pub recovery_fallback_minutes: i64,
    /// Role mentioned when a keyword lock fires.
    pub ping_role_id: Option<u64>,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            owner_id: config.owner_id,
            game_bot_id: config.game_bot_id,
            default_lock_hours: config.default_lock_hours,
            recovery_strategy: config.recovery_strategy,
            recovery_history_limit: config.recovery_history_limit,
            recovery_fallback_minutes: config.recovery_fallback_minutes,
            ping_role_id: config.ping_role_id,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    /// Persistence for locks, blacklists, guild configs and trigger phrases.
    pub store: Arc<dyn Store>,
    /// Active locks; the only writer of lock state.
    pub registry: Arc<LockRegistry>,
    /// Discord access used by every service.
    pub gateway: Arc<dyn ChannelGateway>,
    /// Decides who may lock and unlock channels.
    pub policy: Arc<dyn AuthorizationPolicy>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Creates the state with a fresh, empty registry over `store`.
    pub fn new(
        store: Arc<dyn Store>,
        gateway: Arc<dyn ChannelGateway>,
        policy: Arc<dyn AuthorizationPolicy>,
        settings: Settings,
    ) -> Self {
        Self {
            registry: Arc::new(LockRegistry::new(store.clone())),
            store,
            gateway,
            policy,
            settings: Arc::new(settings),
        }
    }
}
