use super::*;

/// Tests inserting a new phrase.
///
/// Expected: Ok(true)
#[tokio::test]
async fn creates_phrase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TriggerKeyword)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TriggerKeywordRepository::new(db);
    let created = repo.create(&TriggerKeyword::new("rare ping", true)).await?;

    assert!(created);
    assert_eq!(repo.get_all().await?, vec![TriggerKeyword::new("rare ping", true)]);

    Ok(())
}

/// Tests inserting a phrase that already exists.
///
/// Verifies that the existing enabled flag is not overwritten.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_existing_phrase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TriggerKeyword)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_trigger_keyword(db, "rare ping", false).await?;

    let repo = TriggerKeywordRepository::new(db);
    let created = repo.create(&TriggerKeyword::new("rare ping", true)).await?;

    assert!(!created);
    assert!(!repo.get_all().await?[0].enabled);

    Ok(())
}
