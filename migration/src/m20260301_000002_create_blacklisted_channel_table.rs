use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistedChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(BlacklistedChannel::Id))
                    .col(string_uniq(BlacklistedChannel::ChannelId))
                    .col(string(BlacklistedChannel::GuildId))
                    .col(timestamp(BlacklistedChannel::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlacklistedChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlacklistedChannel {
    Table,
    Id,
    ChannelId,
    GuildId,
    CreatedAt,
}
