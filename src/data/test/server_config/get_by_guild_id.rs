use super::*;

/// Tests retrieving a stored configuration.
///
/// Expected: Ok(Some(config)) with stored values
#[tokio::test]
async fn returns_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ServerConfigFactory::new(db)
        .guild_id(5)
        .lock_hours(24)
        .keywords_enabled(false)
        .build()
        .await?;

    let repo = ServerConfigRepository::new(db);
    let config = repo.get_by_guild_id(5).await?.unwrap();

    assert_eq!(config.lock_hours, 24);
    assert!(!config.keywords_enabled);

    Ok(())
}

/// Tests a guild that was never configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerConfigRepository::new(db);

    assert!(repo.get_by_guild_id(5).await?.is_none());

    Ok(())
}
