use chrono::Utc;

use crate::{
    bot::{
        command::{check::can_manage_locks, format, guild_id, reply, reply_paged},
        start::Context,
    },
    error::AppError,
    model::{
        lock::{LockActor, LockReason, LockRequest},
        server_config::validate_lock_hours,
    },
    service::{
        discord::notification::COLOR_LOCKED, lock::LockService,
        server_config::ServerConfigService,
    },
};

/// Lock this channel for the game bot
#[poise::command(prefix_command, slash_command, guild_only, check = "can_manage_locks")]
pub async fn lock(
    ctx: Context<'_>,
    #[description = "Hours to lock for (1-72)"] hours: Option<i64>,
) -> Result<(), AppError> {
    let state = ctx.data();
    let guild_id = guild_id(ctx)?;

    let hours = match hours {
        Some(hours) => validate_lock_hours(hours)?,
        None => {
            ServerConfigService::new(state.store.as_ref(), state.settings.default_lock_hours)
                .get(guild_id)
                .await?
                .lock_hours
        }
    };

    let request = LockRequest {
        channel_id: ctx.channel_id().get(),
        guild_id,
        hours,
        reason: LockReason::Manual {
            user_id: ctx.author().id.get(),
        },
    };

    let now = Utc::now();
    let outcome = LockService::new(state).lock(request, now).await?;

    reply(ctx, format::lock_reply(&outcome, hours, now)).await
}

/// Unlock this channel
#[poise::command(prefix_command, slash_command, guild_only, check = "can_manage_locks")]
pub async fn unlock(ctx: Context<'_>) -> Result<(), AppError> {
    let outcome = LockService::new(ctx.data())
        .unlock(
            ctx.channel_id().get(),
            LockActor::User(ctx.author().id.get()),
        )
        .await?;

    reply(ctx, format::unlock_reply(&outcome)).await
}

/// List locked channels in this server
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn locked(ctx: Context<'_>) -> Result<(), AppError> {
    let entries = ctx.data().registry.list_locked_in(guild_id(ctx)?);

    if entries.is_empty() {
        return reply(ctx, "🔓 No channels are locked.").await;
    }

    reply_paged(
        ctx,
        "🔒 Locked Channels",
        COLOR_LOCKED,
        &format::locked_lines(&entries, Utc::now()),
        "\n\n",
    )
    .await
}

/// Time left on this channel's lock
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn check_timer(ctx: Context<'_>) -> Result<(), AppError> {
    let entry = ctx.data().registry.get(ctx.channel_id().get());

    reply(ctx, format::timer_reply(entry.as_ref(), Utc::now())).await
}
