use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChannelLock::Table)
                    .if_not_exists()
                    .col(pk_auto(ChannelLock::Id))
                    .col(string_uniq(ChannelLock::ChannelId))
                    .col(string(ChannelLock::GuildId))
                    .col(timestamp(ChannelLock::UnlockAt))
                    .col(timestamp(ChannelLock::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // The sweeper filters on unlock_at every minute
        manager
            .create_index(
                Index::create()
                    .name("idx_channel_lock_unlock_at")
                    .table(ChannelLock::Table)
                    .col(ChannelLock::UnlockAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_channel_lock_unlock_at")
                    .table(ChannelLock::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChannelLock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ChannelLock {
    Table,
    Id,
    ChannelId,
    GuildId,
    UnlockAt,
    CreatedAt,
}
