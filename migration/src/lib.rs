pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_channel_lock_table;
mod m20260301_000002_create_blacklisted_channel_table;
mod m20260301_000003_create_blacklisted_category_table;
mod m20260301_000004_create_server_config_table;
mod m20260302_000005_create_trigger_keyword_table;
mod m20260303_000006_seed_trigger_keyword;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_channel_lock_table::Migration),
            Box::new(m20260301_000002_create_blacklisted_channel_table::Migration),
            Box::new(m20260301_000003_create_blacklisted_category_table::Migration),
            Box::new(m20260301_000004_create_server_config_table::Migration),
            Box::new(m20260302_000005_create_trigger_keyword_table::Migration),
            Box::new(m20260303_000006_seed_trigger_keyword::Migration),
        ]
    }
}
