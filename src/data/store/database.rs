//! Sqlite-backed store delegating to the repositories.

use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::{
    data::{
        blacklist::BlacklistRepository, lock::ChannelLockRepository,
        server_config::ServerConfigRepository, trigger_keyword::TriggerKeywordRepository,
    },
    error::AppError,
    model::{
        blacklist::{Blacklist, BlacklistEntry, BlacklistScope},
        lock::LockEntry,
        server_config::ServerConfig,
        trigger::TriggerKeyword,
    },
};

use super::Store;

pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Store for DatabaseStore {
    fn is_durable(&self) -> bool {
        true
    }

    async fn save_lock(&self, entry: &LockEntry) -> Result<(), AppError> {
        ChannelLockRepository::new(&self.db).create(entry).await?;
        Ok(())
    }

    async fn delete_lock(&self, channel_id: u64) -> Result<(), AppError> {
        ChannelLockRepository::new(&self.db).delete(channel_id).await?;
        Ok(())
    }

    async fn load_locks(&self) -> Result<Vec<LockEntry>, AppError> {
        ChannelLockRepository::new(&self.db).get_all().await
    }

    async fn add_blacklist(&self, entry: BlacklistEntry) -> Result<bool, AppError> {
        BlacklistRepository::new(&self.db).add(entry).await
    }

    async fn remove_blacklist(&self, entry: BlacklistEntry) -> Result<bool, AppError> {
        BlacklistRepository::new(&self.db).remove(entry).await
    }

    async fn is_blacklisted(&self, scope: BlacklistScope) -> Result<bool, AppError> {
        BlacklistRepository::new(&self.db).contains(scope).await
    }

    async fn blacklist(&self, guild_id: u64) -> Result<Blacklist, AppError> {
        BlacklistRepository::new(&self.db)
            .get_by_guild_id(guild_id)
            .await
    }

    async fn server_config(&self, guild_id: u64) -> Result<Option<ServerConfig>, AppError> {
        ServerConfigRepository::new(&self.db)
            .get_by_guild_id(guild_id)
            .await
    }

    async fn save_server_config(&self, config: &ServerConfig) -> Result<(), AppError> {
        ServerConfigRepository::new(&self.db).upsert(config).await?;
        Ok(())
    }

    async fn triggers(&self) -> Result<Vec<TriggerKeyword>, AppError> {
        Ok(TriggerKeywordRepository::new(&self.db).get_all().await?)
    }

    async fn add_trigger(&self, keyword: &TriggerKeyword) -> Result<bool, AppError> {
        Ok(TriggerKeywordRepository::new(&self.db).create(keyword).await?)
    }

    async fn remove_trigger(&self, phrase: &str) -> Result<bool, AppError> {
        Ok(TriggerKeywordRepository::new(&self.db).delete(phrase).await?)
    }

    async fn set_trigger_enabled(&self, phrase: &str, enabled: bool) -> Result<bool, AppError> {
        Ok(TriggerKeywordRepository::new(&self.db)
            .set_enabled(phrase, enabled)
            .await?)
    }
}
