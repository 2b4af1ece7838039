use super::*;

/// Tests deleting an existing lock.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_lock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ChannelLockFactory::new(db).channel_id(42).build().await?;

    let repo = ChannelLockRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert!(deleted);
    assert!(repo.get_by_channel_id(42).await?.is_none());

    Ok(())
}

/// Tests deleting a lock that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_lock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelLockRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests that deleting one lock leaves other channels untouched.
///
/// Expected: Ok with one remaining row
#[tokio::test]
async fn leaves_other_channels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ChannelLockFactory::new(db).channel_id(1).build().await?;
    ChannelLockFactory::new(db).channel_id(2).build().await?;

    let repo = ChannelLockRepository::new(db);
    repo.delete(1).await?;

    assert_eq!(entity::prelude::ChannelLock::find().count(db).await?, 1);
    assert!(repo.get_by_channel_id(2).await?.is_some());

    Ok(())
}
