use crate::{
    data::store::Store,
    error::AppError,
    model::blacklist::{Blacklist, BlacklistEntry, BlacklistScope},
};

pub struct BlacklistService<'a> {
    store: &'a dyn Store,
}

impl<'a> BlacklistService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Adds an entry. Returns `false` if it was already blacklisted.
    pub async fn add(&self, entry: BlacklistEntry) -> Result<bool, AppError> {
        let added = self.store.add_blacklist(entry).await?;

        if added {
            tracing::info!("Guild {} blacklisted {:?}", entry.guild_id, entry.scope);
        }

        Ok(added)
    }

    /// Removes an entry. Returns `false` if it was not blacklisted in that guild.
    pub async fn remove(&self, entry: BlacklistEntry) -> Result<bool, AppError> {
        let removed = self.store.remove_blacklist(entry).await?;

        if removed {
            tracing::info!("Guild {} removed {:?} from blacklist", entry.guild_id, entry.scope);
        }

        Ok(removed)
    }

    pub async fn list(&self, guild_id: u64) -> Result<Blacklist, AppError> {
        self.store.blacklist(guild_id).await
    }

    /// Whether trigger evaluation is disabled for a channel, either directly or
    /// through its category.
    pub async fn is_excluded(
        &self,
        channel_id: u64,
        category_id: Option<u64>,
    ) -> Result<bool, AppError> {
        if self
            .store
            .is_blacklisted(BlacklistScope::Channel(channel_id))
            .await?
        {
            return Ok(true);
        }

        match category_id {
            Some(category_id) => {
                self.store
                    .is_blacklisted(BlacklistScope::Category(category_id))
                    .await
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::store::MemoryStore;

    #[tokio::test]
    async fn category_blacklist_covers_nested_channels() -> Result<(), AppError> {
        let store = MemoryStore::new();
        let service = BlacklistService::new(&store);

        service
            .add(BlacklistEntry {
                guild_id: 1,
                scope: BlacklistScope::Category(20),
            })
            .await?;

        assert!(service.is_excluded(10, Some(20)).await?);
        assert!(!service.is_excluded(10, Some(21)).await?);
        assert!(!service.is_excluded(10, None).await?);

        Ok(())
    }

    #[tokio::test]
    async fn channel_blacklist_applies_without_category() -> Result<(), AppError> {
        let store = MemoryStore::new();
        let service = BlacklistService::new(&store);

        service
            .add(BlacklistEntry {
                guild_id: 1,
                scope: BlacklistScope::Channel(10),
            })
            .await?;

        assert!(service.is_excluded(10, None).await?);

        Ok(())
    }
}
