use crate::{
    data::store::Store,
    error::AppError,
    model::server_config::{validate_lock_hours, ServerConfig},
};

pub struct ServerConfigService<'a> {
    store: &'a dyn Store,
    default_lock_hours: i32,
}

impl<'a> ServerConfigService<'a> {
    pub fn new(store: &'a dyn Store, default_lock_hours: i32) -> Self {
        Self {
            store,
            default_lock_hours,
        }
    }

    /// Gets a guild's config, storing the defaults on first access.
    pub async fn get(&self, guild_id: u64) -> Result<ServerConfig, AppError> {
        if let Some(config) = self.store.server_config(guild_id).await? {
            return Ok(config);
        }

        let config = ServerConfig::new_default(guild_id, self.default_lock_hours);
        self.store.save_server_config(&config).await?;

        Ok(config)
    }

    /// Sets the lock duration of a guild.
    ///
    /// # Returns
    /// - `Ok(ServerConfig)` - Updated config
    /// - `Err(AppError::BadRequest)` - Hours outside 1..=72; nothing stored
    pub async fn set_lock_hours(&self, guild_id: u64, hours: i64) -> Result<ServerConfig, AppError> {
        let hours = validate_lock_hours(hours)?;

        let mut config = self.get(guild_id).await?;
        config.lock_hours = hours;
        self.store.save_server_config(&config).await?;

        tracing::info!("Guild {} lock duration set to {} hours", guild_id, hours);

        Ok(config)
    }

    /// Turns keyword detection on or off for a guild.
    pub async fn set_keywords_enabled(
        &self,
        guild_id: u64,
        enabled: bool,
    ) -> Result<ServerConfig, AppError> {
        let mut config = self.get(guild_id).await?;
        config.keywords_enabled = enabled;
        self.store.save_server_config(&config).await?;

        tracing::info!("Guild {} keyword detection enabled: {}", guild_id, enabled);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::store::MemoryStore;

    #[tokio::test]
    async fn first_access_stores_defaults() -> Result<(), AppError> {
        let store = MemoryStore::new();
        let service = ServerConfigService::new(&store, 12);

        let config = service.get(1).await?;

        assert_eq!(config, ServerConfig::new_default(1, 12));
        assert_eq!(store.server_config(1).await?, Some(config));

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_hours_leave_config_unchanged() -> Result<(), AppError> {
        let store = MemoryStore::new();
        let service = ServerConfigService::new(&store, 12);
        service.set_lock_hours(1, 24).await?;

        let result = service.set_lock_hours(1, 100).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(service.get(1).await?.lock_hours, 24);

        Ok(())
    }

    #[tokio::test]
    async fn toggles_keywords() -> Result<(), AppError> {
        let store = MemoryStore::new();
        let service = ServerConfigService::new(&store, 12);

        let config = service.set_keywords_enabled(1, false).await?;

        assert!(!config.keywords_enabled);
        assert_eq!(config.lock_hours, 12);

        Ok(())
    }
}
