//! Server config factory for creating per-guild configuration rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test server configs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let config = ServerConfigFactory::new(&db)
///     .guild_id(42)
///     .keywords_enabled(false)
///     .build()
///     .await?;
/// ```
pub struct ServerConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    lock_hours: i32,
    keywords_enabled: bool,
}

impl<'a> ServerConfigFactory<'a> {
    /// Creates a new ServerConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: unique auto-incremented value
    /// - lock_hours: `12`
    /// - keywords_enabled: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            lock_hours: 12,
            keywords_enabled: true,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn lock_hours(mut self, lock_hours: i32) -> Self {
        self.lock_hours = lock_hours;
        self
    }

    pub fn keywords_enabled(mut self, keywords_enabled: bool) -> Self {
        self.keywords_enabled = keywords_enabled;
        self
    }

    /// Builds and inserts the server config row into the database.
    pub async fn build(self) -> Result<entity::server_config::Model, DbErr> {
        entity::server_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            lock_hours: ActiveValue::Set(self.lock_hours),
            keywords_enabled: ActiveValue::Set(self.keywords_enabled),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server config with default values.
pub async fn create_server_config(
    db: &DatabaseConnection,
) -> Result<entity::server_config::Model, DbErr> {
    ServerConfigFactory::new(db).build().await
}
