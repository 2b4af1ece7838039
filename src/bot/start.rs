use std::collections::HashSet;
use std::sync::Arc;

use poise::FrameworkError;
use serenity::all::{Client, GatewayIntents, UserId};

use crate::{
    bot::{command, handler},
    config::Config,
    data::store::Store,
    error::AppError,
    scheduler, startup,
    state::AppState,
};

/// Command context passed to every poise command.
pub type Context<'a> = poise::Context<'a, AppState, AppError>;

/// Starts the Discord bot in a blocking manner
///
/// Application state is built in the framework setup hook, once the HTTP client
/// exists. Setup then rebuilds the lock registry for the guilds in the ready
/// payload and starts the expiry sweeper before any command or message is handled.
///
/// # Arguments
/// - `config` - Application configuration
/// - `store` - Persistence selected at startup
///
/// # Returns
/// - `Ok(())` if the bot runs until shutdown
/// - `Err(AppError)` if client creation or the gateway connection fails
pub async fn start_bot(config: Config, store: Arc<dyn Store>) -> Result<(), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = config.bot_token.clone();
    let options = poise::FrameworkOptions {
        commands: command::commands(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(config.command_prefix.clone()),
            ..Default::default()
        },
        owners: HashSet::from([UserId::new(config.owner_id)]),
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, state| {
            Box::pin(handler::handle_event(ctx, event, framework, state))
        },
        ..Default::default()
    };

    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                let state = startup::build_state(&config, store, ctx.http.clone());

                let guild_ids: Vec<u64> = ready.guilds.iter().map(|guild| guild.id.get()).collect();
                startup::recover_locks(&state, &guild_ids).await;

                scheduler::lock_expiry::start_scheduler(state.clone()).await?;

                Ok(state)
            })
        })
        .build();

    let mut client = Client::builder(&token, intents)
        .framework(framework)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}

/// Turns framework errors into chat replies and log lines.
async fn on_error(error: FrameworkError<'_, AppState, AppError>) {
    match error {
        FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to set up bot: {}", error);
        }
        FrameworkError::Command { error, ctx, .. } => {
            if !error.is_user_error() {
                tracing::error!(
                    "Command {} failed: {}",
                    ctx.command().qualified_name,
                    error
                );
            }
            if let Err(e) = command::reply(ctx, error.user_message()).await {
                tracing::warn!("Failed to send error reply: {}", e);
            }
        }
        FrameworkError::CommandCheckFailed {
            error: Some(error),
            ctx,
            ..
        } => {
            if let Err(e) = command::reply(ctx, error.user_message()).await {
                tracing::warn!("Failed to send check failure reply: {}", e);
            }
        }
        FrameworkError::EventHandler { error, event, .. } => {
            tracing::error!(
                "Event handler for {} failed: {}",
                event.snake_case_name(),
                error
            );
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Failed to handle framework error: {}", e);
            }
        }
    }
}
