use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerConfig::Id))
                    .col(string_uniq(ServerConfig::GuildId))
                    .col(integer(ServerConfig::LockHours))
                    .col(boolean(ServerConfig::KeywordsEnabled).default(true))
                    .col(timestamp(ServerConfig::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServerConfig {
    Table,
    Id,
    GuildId,
    LockHours,
    KeywordsEnabled,
    UpdatedAt,
}
