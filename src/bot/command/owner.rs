use serenity::all::GuildId;

use crate::{
    bot::{
        command::{format, reply},
        start::Context,
    },
    error::AppError,
};

/// Who runs this bot
#[poise::command(prefix_command, slash_command)]
pub async fn owner(ctx: Context<'_>) -> Result<(), AppError> {
    let owner_id = ctx.data().settings.owner_id;

    reply(ctx, format!("Made by Buddy | <@{}>", owner_id)).await
}

/// List the servers this bot is in
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn servers(ctx: Context<'_>) -> Result<(), AppError> {
    let lines: Vec<String> = ctx
        .cache()
        .guilds()
        .into_iter()
        .filter_map(|guild_id| {
            let guild = ctx.cache().guild(guild_id)?;
            Some(format::server_line(
                &guild.name,
                guild_id.get(),
                guild.member_count,
            ))
        })
        .collect();

    if lines.is_empty() {
        return reply(ctx, "No servers found.").await;
    }

    for chunk in format::chunk_lines(&lines, "\n", format::MESSAGE_LIMIT) {
        reply(ctx, chunk).await?;
    }

    Ok(())
}

/// Make the bot leave a server
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn leave(
    ctx: Context<'_>,
    #[description = "ID of the server to leave"] guild_id: u64,
) -> Result<(), AppError> {
    if guild_id == 0 {
        return Err(AppError::BadRequest("❌ Invalid server ID.".to_string()));
    }

    GuildId::new(guild_id).leave(ctx.http()).await?;
    tracing::info!("Left guild {} on owner request", guild_id);

    reply(ctx, format!("👋 Left server {}", guild_id)).await
}

/// Shut the bot down
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn shutdown(ctx: Context<'_>) -> Result<(), AppError> {
    reply(ctx, "⚡ Shutting down...").await?;

    tracing::info!("Shutdown requested by {}", ctx.author().id);
    ctx.framework().shard_manager().shutdown_all().await;

    Ok(())
}
