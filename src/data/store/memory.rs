//! In-process store used when no database is configured.
//!
//! Nothing here survives a restart, so recovery falls back to reading channel
//! history or live permissions.

use dashmap::DashMap;
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

use super::Store;

#[derive(Default)]
pub struct MemoryStore {
    locks: DashMap<u64, LockEntry>,
    /// Blacklisted id -> owning guild id.
    blacklist: DashMap<BlacklistScope, u64>,
    configs: DashMap<u64, ServerConfig>,
    triggers: DashMap<String, bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn is_durable(&self) -> bool {
        false
    }

    async fn save_lock(&self, entry: &LockEntry) -> Result<(), AppError> {
        self.locks.insert(entry.channel_id, entry.clone());
        Ok(())
    }

    async fn delete_lock(&self, channel_id: u64) -> Result<(), AppError> {
        self.locks.remove(&channel_id);
        Ok(())
    }

    async fn load_locks(&self) -> Result<Vec<LockEntry>, AppError> {
        let mut locks: Vec<LockEntry> = self.locks.iter().map(|e| e.value().clone()).collect();
        locks.sort_by_key(|entry| entry.unlock_at);
        Ok(locks)
    }

    async fn add_blacklist(&self, entry: BlacklistEntry) -> Result<bool, AppError> {
        if self.blacklist.contains_key(&entry.scope) {
            return Ok(false);
        }
        self.blacklist.insert(entry.scope, entry.guild_id);
        Ok(true)
    }

    async fn remove_blacklist(&self, entry: BlacklistEntry) -> Result<bool, AppError> {
        let removed = self
            .blacklist
            .remove_if(&entry.scope, |_, guild_id| *guild_id == entry.guild_id);
        Ok(removed.is_some())
    }

    async fn is_blacklisted(&self, scope: BlacklistScope) -> Result<bool, AppError> {
        Ok(self.blacklist.contains_key(&scope))
    }

    async fn blacklist(&self, guild_id: u64) -> Result<Blacklist, AppError> {
        let mut blacklist = Blacklist::default();

        for item in self.blacklist.iter().filter(|item| *item.value() == guild_id) {
            match *item.key() {
                BlacklistScope::Channel(id) => blacklist.channels.push(id),
                BlacklistScope::Category(id) => blacklist.categories.push(id),
            }
        }

        blacklist.channels.sort_unstable();
        blacklist.categories.sort_unstable();
        Ok(blacklist)
    }

    async fn server_config(&self, guild_id: u64) -> Result<Option<ServerConfig>, AppError> {
        Ok(self.configs.get(&guild_id).map(|c| c.value().clone()))
    }

    async fn save_server_config(&self, config: &ServerConfig) -> Result<(), AppError> {
        self.configs.insert(config.guild_id, config.clone());
        Ok(())
    }

    async fn triggers(&self) -> Result<Vec<TriggerKeyword>, AppError> {
        let mut triggers: Vec<TriggerKeyword> = self
            .triggers
            .iter()
            .map(|item| TriggerKeyword {
                phrase: item.key().clone(),
                enabled: *item.value(),
            })
            .collect();
        triggers.sort_by(|a, b| a.phrase.cmp(&b.phrase));
        Ok(triggers)
    }

    async fn add_trigger(&self, keyword: &TriggerKeyword) -> Result<bool, AppError> {
        if self.triggers.contains_key(&keyword.phrase) {
            return Ok(false);
        }
        self.triggers.insert(keyword.phrase.clone(), keyword.enabled);
        Ok(true)
    }

    async fn remove_trigger(&self, phrase: &str) -> Result<bool, AppError> {
        Ok(self.triggers.remove(phrase).is_some())
    }

    async fn set_trigger_enabled(&self, phrase: &str, enabled: bool) -> Result<bool, AppError> {
        match self.triggers.get_mut(phrase) {
            Some(mut value) => {
                *value = enabled;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
