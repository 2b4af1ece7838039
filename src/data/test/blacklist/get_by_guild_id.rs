use super::*;

/// Tests listing a guild's blacklist.
///
/// Verifies that entries of other guilds are excluded.
///
/// Expected: Ok with only guild 1 entries
#[tokio::test]
async fn returns_only_guild_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blacklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_channel(db, 1, 10).await?;
    factory::create_blacklisted_channel(db, 2, 11).await?;
    factory::create_blacklisted_category(db, 1, 20).await?;

    let repo = BlacklistRepository::new(db);
    let blacklist = repo.get_by_guild_id(1).await?;

    assert_eq!(blacklist.channels, vec![10]);
    assert_eq!(blacklist.categories, vec![20]);

    Ok(())
}

/// Tests a guild without entries.
///
/// Expected: Ok(empty blacklist)
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blacklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);

    assert!(repo.get_by_guild_id(1).await?.is_empty());

    Ok(())
}
