//! Trigger keyword data repository.
//!
//! Phrases are stored already normalized; lookups compare on the exact stored value.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::trigger::TriggerKeyword;

pub struct TriggerKeywordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TriggerKeywordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every trigger phrase, alphabetically.
    pub async fn get_all(&self) -> Result<Vec<TriggerKeyword>, DbErr> {
        let entities = entity::prelude::TriggerKeyword::find()
            .order_by_asc(entity::trigger_keyword::Column::Phrase)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TriggerKeyword::from_entity).collect())
    }

    /// Inserts a phrase.
    ///
    /// # Returns
    /// - `Ok(true)` - Phrase was inserted
    /// - `Ok(false)` - Phrase already exists; its enabled flag is left as is
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, keyword: &TriggerKeyword) -> Result<bool, DbErr> {
        if self.find(&keyword.phrase).await?.is_some() {
            return Ok(false);
        }

        entity::trigger_keyword::ActiveModel {
            id: ActiveValue::NotSet,
            phrase: ActiveValue::Set(keyword.phrase.clone()),
            enabled: ActiveValue::Set(keyword.enabled),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Deletes a phrase.
    ///
    /// # Returns
    /// - `Ok(true)` - Phrase was deleted
    /// - `Ok(false)` - Phrase did not exist
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, phrase: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::TriggerKeyword::delete_many()
            .filter(entity::trigger_keyword::Column::Phrase.eq(phrase))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the enabled flag of a phrase.
    ///
    /// # Returns
    /// - `Ok(true)` - Phrase exists and was updated
    /// - `Ok(false)` - Phrase does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn set_enabled(&self, phrase: &str, enabled: bool) -> Result<bool, DbErr> {
        let Some(existing) = self.find(phrase).await? else {
            return Ok(false);
        };

        let mut active: entity::trigger_keyword::ActiveModel = existing.into();
        active.enabled = ActiveValue::Set(enabled);
        active.update(self.db).await?;

        Ok(true)
    }

    async fn find(&self, phrase: &str) -> Result<Option<entity::trigger_keyword::Model>, DbErr> {
        entity::prelude::TriggerKeyword::find()
            .filter(entity::trigger_keyword::Column::Phrase.eq(phrase))
            .one(self.db)
            .await
    }
}
