//! Server config data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{error::AppError, model::server_config::ServerConfig};

/// Repository providing database operations for per-guild configuration.
pub struct ServerConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the configuration of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(ServerConfig))` - Guild has a stored configuration
    /// - `Ok(None)` - Guild has never been configured
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Option<ServerConfig>, AppError> {
        let entity = entity::prelude::ServerConfig::find()
            .filter(entity::server_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(ServerConfig::from_entity).transpose()
    }

    /// Creates or updates the configuration of a guild.
    ///
    /// # Arguments
    /// - `config` - Full configuration to store
    ///
    /// # Returns
    /// - `Ok(ServerConfig)` - The stored configuration
    /// - `Err(AppError)` - Database error
    pub async fn upsert(&self, config: &ServerConfig) -> Result<ServerConfig, AppError> {
        let existing = entity::prelude::ServerConfig::find()
            .filter(entity::server_config::Column::GuildId.eq(config.guild_id.to_string()))
            .one(self.db)
            .await?;

        let now = Utc::now();

        let entity = if let Some(existing) = existing {
            entity::server_config::ActiveModel {
                id: ActiveValue::Unchanged(existing.id),
                guild_id: ActiveValue::Unchanged(existing.guild_id),
                lock_hours: ActiveValue::Set(config.lock_hours),
                keywords_enabled: ActiveValue::Set(config.keywords_enabled),
                updated_at: ActiveValue::Set(now),
            }
            .update(self.db)
            .await?
        } else {
            entity::server_config::ActiveModel {
                id: ActiveValue::NotSet,
                guild_id: ActiveValue::Set(config.guild_id.to_string()),
                lock_hours: ActiveValue::Set(config.lock_hours),
                keywords_enabled: ActiveValue::Set(config.keywords_enabled),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.db)
            .await?
        };

        ServerConfig::from_entity(entity)
    }
}
