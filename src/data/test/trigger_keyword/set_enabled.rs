use super::*;

/// Tests disabling a phrase.
///
/// Expected: Ok(true) and the stored flag flips
#[tokio::test]
async fn disables_phrase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TriggerKeyword)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_trigger_keyword(db, "rare ping", true).await?;

    let repo = TriggerKeywordRepository::new(db);
    let updated = repo.set_enabled("rare ping", false).await?;

    assert!(updated);
    assert!(!repo.get_all().await?[0].enabled);

    Ok(())
}

/// Tests toggling an unknown phrase.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_phrase() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TriggerKeyword)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TriggerKeywordRepository::new(db);

    assert!(!repo.set_enabled("rare ping", false).await?);

    Ok(())
}
