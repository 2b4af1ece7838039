use serenity::all::CreateEmbed;

use crate::{
    bot::{
        command::{format, guild_id, reply, reply_embed},
        start::Context,
    },
    error::AppError,
    service::{discord::notification::COLOR_INFO, server_config::ServerConfigService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum Toggle {
    #[name = "on"]
    On,
    #[name = "off"]
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}

/// Set how long keyword locks last
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD"
)]
pub async fn setlockhours(
    ctx: Context<'_>,
    #[description = "Lock duration in hours (1-72)"] hours: i64,
) -> Result<(), AppError> {
    let state = ctx.data();
    let config = ServerConfigService::new(state.store.as_ref(), state.settings.default_lock_hours)
        .set_lock_hours(guild_id(ctx)?, hours)
        .await?;

    reply(
        ctx,
        format!("🔧 Lock duration set to **{} hours**", config.lock_hours),
    )
    .await
}

/// Turn keyword detection on or off
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD"
)]
pub async fn keywords(
    ctx: Context<'_>,
    #[description = "on or off"] state: Toggle,
) -> Result<(), AppError> {
    let app = ctx.data();
    let config = ServerConfigService::new(app.store.as_ref(), app.settings.default_lock_hours)
        .set_keywords_enabled(guild_id(ctx)?, state.into())
        .await?;

    reply(
        ctx,
        format!(
            "🔑 Keyword detection **{}**",
            format::on_off(config.keywords_enabled)
        ),
    )
    .await
}

/// Show this server's settings
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn config(ctx: Context<'_>) -> Result<(), AppError> {
    let state = ctx.data();
    let config = ServerConfigService::new(state.store.as_ref(), state.settings.default_lock_hours)
        .get(guild_id(ctx)?)
        .await?;

    let embed = CreateEmbed::new()
        .title("Server Config")
        .color(COLOR_INFO)
        .fields(
            format::config_fields(&config)
                .into_iter()
                .map(|(name, value)| (name, value, true)),
        );

    reply_embed(ctx, embed).await
}
