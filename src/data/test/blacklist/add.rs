use super::*;

/// Tests adding a channel and a category.
///
/// Expected: Ok(true) for each, one row in each table
#[tokio::test]
async fn adds_channel_and_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blacklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BlacklistRepository::new(db);

    let channel = repo
        .add(BlacklistEntry {
            guild_id: 1,
            scope: BlacklistScope::Channel(10),
        })
        .await?;
    let category = repo
        .add(BlacklistEntry {
            guild_id: 1,
            scope: BlacklistScope::Category(20),
        })
        .await?;

    assert!(channel);
    assert!(category);
    assert_eq!(entity::prelude::BlacklistedChannel::find().count(db).await?, 1);
    assert_eq!(entity::prelude::BlacklistedCategory::find().count(db).await?, 1);

    Ok(())
}

/// Tests adding an entry that already exists.
///
/// Expected: Ok(false) and no duplicate row
#[tokio::test]
async fn returns_false_for_existing_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blacklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_channel(db, 1, 10).await?;

    let repo = BlacklistRepository::new(db);
    let added = repo
        .add(BlacklistEntry {
            guild_id: 1,
            scope: BlacklistScope::Channel(10),
        })
        .await?;

    assert!(!added);
    assert_eq!(entity::prelude::BlacklistedChannel::find().count(db).await?, 1);

    Ok(())
}
