use super::*;

/// Tests deleting a phrase.
///
/// Expected: Ok(true) then Ok(false) on a second delete
#[tokio::test]
async fn deletes_phrase_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TriggerKeyword)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_trigger_keyword(db, "rare ping", true).await?;

    let repo = TriggerKeywordRepository::new(db);

    assert!(repo.delete("rare ping").await?);
    assert!(!repo.delete("rare ping").await?);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
