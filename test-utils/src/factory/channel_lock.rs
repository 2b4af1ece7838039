//! Channel lock factory for creating test lock rows.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test channel locks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::channel_lock::ChannelLockFactory;
///
/// let lock = ChannelLockFactory::new(&db)
///     .channel_id(123)
///     .unlock_at(Utc::now() - Duration::minutes(5))
///     .build()
///     .await?;
/// ```
pub struct ChannelLockFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: u64,
    guild_id: u64,
    unlock_at: DateTime<Utc>,
}

impl<'a> ChannelLockFactory<'a> {
    /// Creates a new ChannelLockFactory with default values.
    ///
    /// Defaults:
    /// - channel_id / guild_id: unique auto-incremented values
    /// - unlock_at: 12 hours from now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            channel_id: next_id(),
            guild_id: next_id(),
            unlock_at: Utc::now() + Duration::hours(12),
        }
    }

    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn unlock_at(mut self, unlock_at: DateTime<Utc>) -> Self {
        self.unlock_at = unlock_at;
        self
    }

    /// Builds and inserts the lock row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::channel_lock::Model)` - Created lock row
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate channel_id)
    pub async fn build(self) -> Result<entity::channel_lock::Model, DbErr> {
        entity::channel_lock::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id.to_string()),
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            unlock_at: ActiveValue::Set(self.unlock_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel lock with default values.
///
/// Shorthand for `ChannelLockFactory::new(db).build().await`.
pub async fn create_lock(db: &DatabaseConnection) -> Result<entity::channel_lock::Model, DbErr> {
    ChannelLockFactory::new(db).build().await
}
