//! Channel and category exclusions from keyword detection.

use serenity::all::{Channel, ChannelType, GuildChannel, GuildId};

use crate::{
    bot::{
        command::{format, guild_id, reply, reply_paged},
        start::Context,
    },
    error::AppError,
    model::blacklist::{BlacklistEntry, BlacklistScope},
    service::{blacklist::BlacklistService, discord::notification::COLOR_INFO},
};

/// Manage channels and categories ignored by keyword detection
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    subcommands("add", "remove", "addcategory", "removecategory", "list"),
    subcommand_required
)]
pub async fn blacklist(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Blacklist a channel (defaults to this one)
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD"
)]
pub async fn add(
    ctx: Context<'_>,
    #[description = "Channel to blacklist"] channel: Option<Channel>,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let channel_id = target_channel(channel, guild_id, ctx.channel_id().get())?;
    let entry = BlacklistEntry {
        guild_id,
        scope: BlacklistScope::Channel(channel_id),
    };

    let message = if BlacklistService::new(ctx.data().store.as_ref()).add(entry).await? {
        format!("🚫 <#{}> blacklisted", channel_id)
    } else {
        format!("<#{}> is already blacklisted", channel_id)
    };

    reply(ctx, message).await
}

/// Remove a channel from the blacklist (defaults to this one)
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD"
)]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "Channel to remove"] channel: Option<Channel>,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let channel_id = target_channel(channel, guild_id, ctx.channel_id().get())?;
    let entry = BlacklistEntry {
        guild_id,
        scope: BlacklistScope::Channel(channel_id),
    };

    let message = if BlacklistService::new(ctx.data().store.as_ref())
        .remove(entry)
        .await?
    {
        format!("✅ <#{}> removed from blacklist", channel_id)
    } else {
        format!("<#{}> is not blacklisted", channel_id)
    };

    reply(ctx, message).await
}

/// Blacklist a category by name
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD"
)]
pub async fn addcategory(
    ctx: Context<'_>,
    #[description = "Category name"]
    #[rest]
    name: String,
) -> Result<(), AppError> {
    let category = resolve_category(ctx, &name).await?;
    let entry = BlacklistEntry {
        guild_id: category.guild_id.get(),
        scope: BlacklistScope::Category(category.id.get()),
    };

    let message = if BlacklistService::new(ctx.data().store.as_ref()).add(entry).await? {
        format!("🚫 Category **{}** blacklisted", category.name)
    } else {
        format!("Category **{}** is already blacklisted", category.name)
    };

    reply(ctx, message).await
}

/// Remove a category from the blacklist by name
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD"
)]
pub async fn removecategory(
    ctx: Context<'_>,
    #[description = "Category name"]
    #[rest]
    name: String,
) -> Result<(), AppError> {
    let category = resolve_category(ctx, &name).await?;
    let entry = BlacklistEntry {
        guild_id: category.guild_id.get(),
        scope: BlacklistScope::Category(category.id.get()),
    };

    let message = if BlacklistService::new(ctx.data().store.as_ref())
        .remove(entry)
        .await?
    {
        format!("✅ Category **{}** removed from blacklist", category.name)
    } else {
        format!("Category **{}** is not blacklisted", category.name)
    };

    reply(ctx, message).await
}

/// Show blacklisted channels and categories
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    let blacklist = BlacklistService::new(ctx.data().store.as_ref())
        .list(guild_id(ctx)?)
        .await?;

    if blacklist.is_empty() {
        return reply(ctx, "No blacklists set").await;
    }

    reply_paged(
        ctx,
        "🚫 Blacklist",
        COLOR_INFO,
        &format::blacklist_lines(&blacklist),
        "\n",
    )
    .await
}

/// Picks the channel a blacklist command acts on, defaulting to the current one.
///
/// A channel argument must belong to the invoking guild.
fn target_channel(channel: Option<Channel>, guild_id: u64, current: u64) -> Result<u64, AppError> {
    let Some(channel) = channel else {
        return Ok(current);
    };

    match channel.guild() {
        Some(channel) if channel.guild_id.get() == guild_id => Ok(channel.id.get()),
        _ => Err(AppError::BadRequest(
            "❌ That channel is not in this server.".to_string(),
        )),
    }
}

async fn resolve_category(ctx: Context<'_>, name: &str) -> Result<GuildChannel, AppError> {
    let guild_id = GuildId::new(guild_id(ctx)?);
    let channels = guild_id.channels(ctx.http()).await?;

    find_category(channels.into_values(), name)
        .ok_or_else(|| AppError::NotFound(format!("❌ Category **{}** not found.", name.trim())))
}

/// Finds a category by name, ignoring case and surrounding whitespace.
fn find_category(
    channels: impl IntoIterator<Item = GuildChannel>,
    name: &str,
) -> Option<GuildChannel> {
    let name = name.trim();

    channels
        .into_iter()
        .filter(|channel| channel.kind == ChannelType::Category)
        .find(|channel| channel.name.eq_ignore_ascii_case(name))
}
