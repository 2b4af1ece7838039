use super::*;

/// Tests removing a blacklisted channel.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn removes_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blacklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_channel(db, 1, 10).await?;

    let repo = BlacklistRepository::new(db);
    let removed = repo
        .remove(BlacklistEntry {
            guild_id: 1,
            scope: BlacklistScope::Channel(10),
        })
        .await?;

    assert!(removed);
    assert!(!repo.contains(BlacklistScope::Channel(10)).await?);

    Ok(())
}

/// Tests that a guild cannot remove another guild's entry.
///
/// Expected: Ok(false) and the category stays blacklisted
#[tokio::test]
async fn ignores_entry_of_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blacklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_category(db, 1, 20).await?;

    let repo = BlacklistRepository::new(db);
    let removed = repo
        .remove(BlacklistEntry {
            guild_id: 2,
            scope: BlacklistScope::Category(20),
        })
        .await?;

    assert!(!removed);
    assert!(repo.contains(BlacklistScope::Category(20)).await?);

    Ok(())
}
