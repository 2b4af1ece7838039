use super::*;

/// Tests persisting a new lock.
///
/// Verifies that the repository inserts the row and returns the stored entry with
/// ids and expiry intact.
///
/// Expected: Ok with one row in the table
#[tokio::test]
async fn creates_lock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entry = LockEntry::new(123456789, 987654321, 12, Utc::now());

    let repo = ChannelLockRepository::new(db);
    let created = repo.create(&entry).await?;

    assert_eq!(created.channel_id, entry.channel_id);
    assert_eq!(created.guild_id, entry.guild_id);
    assert!((created.unlock_at - entry.unlock_at).num_seconds().abs() < 1);
    assert_eq!(entity::prelude::ChannelLock::find().count(db).await?, 1);

    Ok(())
}

/// Tests the unique constraint on channel id.
///
/// Verifies that a second lock row for the same channel is rejected by the database
/// instead of silently replacing the first.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelLock)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = ChannelLockRepository::new(db);
    repo.create(&LockEntry::new(1, 2, 12, now)).await?;

    let result = repo.create(&LockEntry::new(1, 2, 24, now)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
