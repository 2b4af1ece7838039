use std::sync::Arc;

use serenity::http::Http;

use crate::{
    config::Config,
    data::store::{DatabaseStore, MemoryStore, Store},
    error::AppError,
    service::{
        authorization::UnlockPolicy, discord::DiscordGateway, recovery::RecoveryService,
        trigger::TriggerService,
    },
    state::{AppState, Settings},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `database_url` - SeaORM connection string, e.g. `sqlite://lockbot.db?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Selects the store: sqlite when `DATABASE_URL` is set, memory otherwise.
pub async fn build_store(config: &Config) -> Result<Arc<dyn Store>, AppError> {
    match &config.database_url {
        Some(url) => {
            let db = connect_to_database(url).await?;
            tracing::info!("Using durable sqlite store");
            Ok(Arc::new(DatabaseStore::new(db)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, locks will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Seeds the default trigger phrases into a fresh memory store.
///
/// The sqlite store is seeded once by migration; phrases the owner removes
/// are not restored on the next start.
pub async fn seed_triggers(store: &dyn Store) -> Result<(), AppError> {
    if store.is_durable() {
        tracing::debug!("Trigger phrases are seeded by migration");
        return Ok(());
    }

    TriggerService::new(store).seed_defaults().await?;
    Ok(())
}

/// Builds application state once the Discord HTTP client is available.
pub fn build_state(config: &Config, store: Arc<dyn Store>, http: Arc<Http>) -> AppState {
    AppState::new(
        store,
        Arc::new(DiscordGateway::new(http)),
        Arc::new(UnlockPolicy::new(config.unlock_role.clone())),
        Settings::from(config),
    )
}

/// Rebuilds the lock registry. Failures are logged; startup continues regardless.
pub async fn recover_locks(state: &AppState, guild_ids: &[u64]) {
    let strategy = state.settings.recovery_strategy;

    if let Err(e) = RecoveryService::new(state)
        .run(strategy, guild_ids, chrono::Utc::now())
        .await
    {
        tracing::error!("Lock recovery failed: {}", e);
    }
}
