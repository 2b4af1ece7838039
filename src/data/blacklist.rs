//! Blacklist data repository.
//!
//! Channel and category blacklists live in separate tables. Both are keyed by the
//! Discord id, which is globally unique, and carry the guild for scoped listings.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::blacklist::{Blacklist, BlacklistEntry, BlacklistScope},
    util::parse::parse_u64_from_string,
};

pub struct BlacklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a blacklist entry.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry was inserted
    /// - `Ok(false)` - Entry already existed; nothing changed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(&self, entry: BlacklistEntry) -> Result<bool, AppError> {
        if self.contains(entry.scope).await? {
            return Ok(false);
        }

        let guild_id = ActiveValue::Set(entry.guild_id.to_string());
        let now = ActiveValue::Set(Utc::now());

        match entry.scope {
            BlacklistScope::Channel(channel_id) => {
                entity::blacklisted_channel::ActiveModel {
                    id: ActiveValue::NotSet,
                    channel_id: ActiveValue::Set(channel_id.to_string()),
                    guild_id,
                    created_at: now,
                }
                .insert(self.db)
                .await?;
            }
            BlacklistScope::Category(category_id) => {
                entity::blacklisted_category::ActiveModel {
                    id: ActiveValue::NotSet,
                    category_id: ActiveValue::Set(category_id.to_string()),
                    guild_id,
                    created_at: now,
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(true)
    }

    /// Removes a blacklist entry from the given guild.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry was deleted
    /// - `Ok(false)` - Entry did not exist in this guild
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, entry: BlacklistEntry) -> Result<bool, AppError> {
        let guild_id = entry.guild_id.to_string();

        let rows_affected = match entry.scope {
            BlacklistScope::Channel(channel_id) => {
                entity::prelude::BlacklistedChannel::delete_many()
                    .filter(entity::blacklisted_channel::Column::ChannelId.eq(channel_id.to_string()))
                    .filter(entity::blacklisted_channel::Column::GuildId.eq(guild_id))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
            BlacklistScope::Category(category_id) => {
                entity::prelude::BlacklistedCategory::delete_many()
                    .filter(
                        entity::blacklisted_category::Column::CategoryId.eq(category_id.to_string()),
                    )
                    .filter(entity::blacklisted_category::Column::GuildId.eq(guild_id))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
        };

        Ok(rows_affected > 0)
    }

    /// Checks whether a channel or category is blacklisted in any guild.
    pub async fn contains(&self, scope: BlacklistScope) -> Result<bool, AppError> {
        let found = match scope {
            BlacklistScope::Channel(channel_id) => entity::prelude::BlacklistedChannel::find()
                .filter(entity::blacklisted_channel::Column::ChannelId.eq(channel_id.to_string()))
                .one(self.db)
                .await?
                .is_some(),
            BlacklistScope::Category(category_id) => entity::prelude::BlacklistedCategory::find()
                .filter(
                    entity::blacklisted_category::Column::CategoryId.eq(category_id.to_string()),
                )
                .one(self.db)
                .await?
                .is_some(),
        };

        Ok(found)
    }

    /// Gets every blacklisted channel and category of a guild.
    ///
    /// # Returns
    /// - `Ok(Blacklist)` - Channel and category ids, possibly empty
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Blacklist, AppError> {
        let channels = entity::prelude::BlacklistedChannel::find()
            .filter(entity::blacklisted_channel::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| parse_u64_from_string(row.channel_id))
            .collect::<Result<Vec<_>, _>>()?;

        let categories = entity::prelude::BlacklistedCategory::find()
            .filter(entity::blacklisted_category::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| parse_u64_from_string(row.category_id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Blacklist {
            channels,
            categories,
        })
    }
}
