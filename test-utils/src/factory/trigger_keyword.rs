//! Trigger keyword factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a trigger keyword row.
///
/// # Arguments
/// - `db` - Database connection
/// - `phrase` - Trigger phrase, stored as given
/// - `enabled` - Whether the phrase participates in matching
pub async fn create_trigger_keyword(
    db: &DatabaseConnection,
    phrase: &str,
    enabled: bool,
) -> Result<entity::trigger_keyword::Model, DbErr> {
    entity::trigger_keyword::ActiveModel {
        phrase: ActiveValue::Set(phrase.to_string()),
        enabled: ActiveValue::Set(enabled),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
