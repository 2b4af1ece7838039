use super::*;

/// Tests creating a configuration for a new guild.
///
/// Expected: Ok(config) and one row
#[tokio::test]
async fn creates_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerConfigRepository::new(db);
    let config = repo.upsert(&ServerConfig::new_default(5, 12)).await?;

    assert_eq!(config.guild_id, 5);
    assert_eq!(config.lock_hours, 12);
    assert!(config.keywords_enabled);
    assert_eq!(entity::prelude::ServerConfig::find().count(db).await?, 1);

    Ok(())
}

/// Tests updating an existing configuration in place.
///
/// Verifies that the existing row is updated rather than a second row inserted.
///
/// Expected: Ok(updated config) and still one row
#[tokio::test]
async fn updates_existing_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ServerConfigFactory::new(db).guild_id(5).build().await?;

    let repo = ServerConfigRepository::new(db);
    let config = repo
        .upsert(&ServerConfig {
            guild_id: 5,
            lock_hours: 48,
            keywords_enabled: false,
        })
        .await?;

    assert_eq!(config.lock_hours, 48);
    assert!(!config.keywords_enabled);
    assert_eq!(entity::prelude::ServerConfig::find().count(db).await?, 1);

    let stored = repo.get_by_guild_id(5).await?.unwrap();
    assert_eq!(stored, config);

    Ok(())
}
