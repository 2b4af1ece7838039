//! Channel lock data repository for database operations.
//!
//! Persists active locks so the durable recovery path can reload them after a
//! restart. Rows are only ever inserted or deleted; a lock is never re-timed.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{error::AppError, model::lock::LockEntry};

/// Repository providing database operations for persisted channel locks.
pub struct ChannelLockRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelLockRepository<'a> {
    /// Creates a new ChannelLockRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ChannelLockRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a lock row.
    ///
    /// Channel ids are unique, so inserting a second lock for the same channel fails
    /// with a database constraint error. Callers check the registry first.
    ///
    /// # Arguments
    /// - `entry` - Lock to persist
    ///
    /// # Returns
    /// - `Ok(LockEntry)` - The persisted lock
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate channel
    pub async fn create(&self, entry: &LockEntry) -> Result<LockEntry, AppError> {
        let entity = entity::channel_lock::ActiveModel {
            id: ActiveValue::NotSet,
            channel_id: ActiveValue::Set(entry.channel_id.to_string()),
            guild_id: ActiveValue::Set(entry.guild_id.to_string()),
            unlock_at: ActiveValue::Set(entry.unlock_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        LockEntry::from_entity(entity)
    }

    /// Gets the lock for a channel.
    ///
    /// # Returns
    /// - `Ok(Some(LockEntry))` - Channel has a persisted lock
    /// - `Ok(None)` - No lock row exists for this channel
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn get_by_channel_id(&self, channel_id: u64) -> Result<Option<LockEntry>, AppError> {
        let entity = entity::prelude::ChannelLock::find()
            .filter(entity::channel_lock::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(LockEntry::from_entity).transpose()
    }

    /// Gets every persisted lock ordered by expiry, soonest first.
    ///
    /// # Returns
    /// - `Ok(Vec<LockEntry>)` - All lock rows
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn get_all(&self) -> Result<Vec<LockEntry>, AppError> {
        let entities = entity::prelude::ChannelLock::find()
            .order_by_asc(entity::channel_lock::Column::UnlockAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(LockEntry::from_entity).collect()
    }

    /// Deletes the lock for a channel.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No row existed for the channel
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, channel_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::ChannelLock::delete_many()
            .filter(entity::channel_lock::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
