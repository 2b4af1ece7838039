//! Pluggable persistence for bot state.
//!
//! Every service reads and writes through the `Store` trait so the same code runs
//! against sqlite (`DatabaseStore`) or in-process maps (`MemoryStore`). The store is
//! chosen once at startup by whether `DATABASE_URL` is set.

pub mod database;
pub mod memory;

use serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        blacklist::{Blacklist, BlacklistEntry, BlacklistScope},
        lock::LockEntry,
        server_config::ServerConfig,
        trigger::TriggerKeyword,
    },
};

pub use database::DatabaseStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Whether state survives a process restart.
    fn is_durable(&self) -> bool;

    async fn save_lock(&self, entry: &LockEntry) -> Result<(), AppError>;

    /// Removes a persisted lock. Removing a lock that does not exist is not an error.
    async fn delete_lock(&self, channel_id: u64) -> Result<(), AppError>;

    /// All persisted locks ordered by expiry.
    async fn load_locks(&self) -> Result<Vec<LockEntry>, AppError>;

    /// Returns `false` when the entry already existed.
    async fn add_blacklist(&self, entry: BlacklistEntry) -> Result<bool, AppError>;

    /// Returns `false` when the entry did not exist.
    async fn remove_blacklist(&self, entry: BlacklistEntry) -> Result<bool, AppError>;

    async fn is_blacklisted(&self, scope: BlacklistScope) -> Result<bool, AppError>;

    async fn blacklist(&self, guild_id: u64) -> Result<Blacklist, AppError>;

    async fn server_config(&self, guild_id: u64) -> Result<Option<ServerConfig>, AppError>;

    async fn save_server_config(&self, config: &ServerConfig) -> Result<(), AppError>;

    /// All trigger phrases, alphabetically.
    async fn triggers(&self) -> Result<Vec<TriggerKeyword>, AppError>;

    /// Returns `false` when the phrase already existed.
    async fn add_trigger(&self, keyword: &TriggerKeyword) -> Result<bool, AppError>;

    /// Returns `false` when the phrase did not exist.
    async fn remove_trigger(&self, phrase: &str) -> Result<bool, AppError>;

    /// Returns `false` when the phrase did not exist.
    async fn set_trigger_enabled(&self, phrase: &str, enabled: bool) -> Result<bool, AppError>;
}
