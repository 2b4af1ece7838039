//! Blacklist factories for channel and category blacklist rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a blacklisted channel row.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the channel belongs to
/// - `channel_id` - Channel to exclude from trigger evaluation
pub async fn create_blacklisted_channel(
    db: &DatabaseConnection,
    guild_id: u64,
    channel_id: u64,
) -> Result<entity::blacklisted_channel::Model, DbErr> {
    entity::blacklisted_channel::ActiveModel {
        channel_id: ActiveValue::Set(channel_id.to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a blacklisted category row.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the category belongs to
/// - `category_id` - Category whose channels are excluded from trigger evaluation
pub async fn create_blacklisted_category(
    db: &DatabaseConnection,
    guild_id: u64,
    category_id: u64,
) -> Result<entity::blacklisted_category::Model, DbErr> {
    entity::blacklisted_category::ActiveModel {
        category_id: ActiveValue::Set(category_id.to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
