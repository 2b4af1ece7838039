use super::*;

/// Tests lookup of blacklisted channels and categories.
///
/// Verifies that channel and category ids live in separate namespaces, so a category
/// id is not reported as a blacklisted channel.
///
/// Expected: Ok(true) only for the matching scope
#[tokio::test]
async fn distinguishes_channel_and_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blacklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blacklisted_category(db, 1, 20).await?;

    let repo = BlacklistRepository::new(db);

    assert!(repo.contains(BlacklistScope::Category(20)).await?);
    assert!(!repo.contains(BlacklistScope::Channel(20)).await?);

    Ok(())
}
