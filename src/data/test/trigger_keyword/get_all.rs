use super::*;

/// Tests listing phrases alphabetically.
///
/// Expected: Ok with phrases sorted and flags preserved
#[tokio::test]
async fn returns_phrases_sorted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TriggerKeyword)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_trigger_keyword(db, "shiny hunt pings", true).await?;
    factory::create_trigger_keyword(db, "collection pings", false).await?;

    let repo = TriggerKeywordRepository::new(db);
    let phrases = repo.get_all().await?;

    assert_eq!(
        phrases,
        vec![
            TriggerKeyword::new("collection pings", false),
            TriggerKeyword::new("shiny hunt pings", true),
        ]
    );

    Ok(())
}
