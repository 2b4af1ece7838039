use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistedCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(BlacklistedCategory::Id))
                    .col(string_uniq(BlacklistedCategory::CategoryId))
                    .col(string(BlacklistedCategory::GuildId))
                    .col(timestamp(BlacklistedCategory::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlacklistedCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlacklistedCategory {
    Table,
    Id,
    CategoryId,
    GuildId,
    CreatedAt,
}
