use super::*;

/// Tests retrieving a lock by channel id.
///
/// Expected: Ok(Some(entry)) with the stored guild and expiry
#[tokio::test]
async fn returns_lock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = ChannelLockFactory::new(db)
        .channel_id(111)
        .guild_id(222)
        .build()
        .await?;

    let repo = ChannelLockRepository::new(db);
    let entry = repo.get_by_channel_id(111).await?.unwrap();

    assert_eq!(entry.channel_id, 111);
    assert_eq!(entry.guild_id, 222);
    assert_eq!(entry.unlock_at, row.unlock_at);

    Ok(())
}

/// Tests retrieving a lock for an unlocked channel.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unlocked_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ChannelLockFactory::new(db).channel_id(111).build().await?;

    let repo = ChannelLockRepository::new(db);

    assert!(repo.get_by_channel_id(999).await?.is_none());

    Ok(())
}
