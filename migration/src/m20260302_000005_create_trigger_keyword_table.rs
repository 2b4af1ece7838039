use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TriggerKeyword::Table)
                    .if_not_exists()
                    .col(pk_auto(TriggerKeyword::Id))
                    .col(string_uniq(TriggerKeyword::Phrase))
                    .col(boolean(TriggerKeyword::Enabled).default(true))
                    .col(timestamp(TriggerKeyword::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TriggerKeyword::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TriggerKeyword {
    Table,
    Id,
    Phrase,
    Enabled,
    CreatedAt,
}
