use sea_orm_migration::prelude::*;

const DEFAULT_PHRASES: [&str; 3] = ["shiny hunt pings", "collection pings", "rare ping"];

/// RFC 3339 in UTC, the format `DateTimeUtc` columns are read back from.
const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%SZ', 'now')";

/// Seeds the default trigger phrases once, so phrases removed later stay removed.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(TriggerKeyword::Table)
            .columns([
                TriggerKeyword::Phrase,
                TriggerKeyword::Enabled,
                TriggerKeyword::CreatedAt,
            ])
            .on_conflict(
                OnConflict::column(TriggerKeyword::Phrase)
                    .do_nothing()
                    .to_owned(),
            );

        for phrase in DEFAULT_PHRASES {
            insert
                .values([phrase.into(), true.into(), Expr::cust(NOW).into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(TriggerKeyword::Table)
                    .and_where(Expr::col(TriggerKeyword::Phrase).is_in(DEFAULT_PHRASES))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum TriggerKeyword {
    Table,
    Phrase,
    Enabled,
    CreatedAt,
}
