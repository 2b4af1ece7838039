use super::*;

/// Tests that all locks are returned soonest expiry first.
///
/// Expected: Ok with channels ordered by unlock_at
#[tokio::test]
async fn returns_locks_ordered_by_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    ChannelLockFactory::new(db)
        .channel_id(3)
        .unlock_at(now + Duration::hours(3))
        .build()
        .await?;
    ChannelLockFactory::new(db)
        .channel_id(1)
        .unlock_at(now + Duration::hours(1))
        .build()
        .await?;
    ChannelLockFactory::new(db)
        .channel_id(2)
        .unlock_at(now - Duration::hours(2))
        .build()
        .await?;

    let repo = ChannelLockRepository::new(db);
    let locks = repo.get_all().await?;

    let channels: Vec<u64> = locks.iter().map(|l| l.channel_id).collect();
    assert_eq!(channels, vec![2, 1, 3]);

    Ok(())
}

/// Tests an empty table.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_when_no_locks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelLockRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
