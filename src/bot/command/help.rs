use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::{
    bot::{
        command::{format, reply_embed},
        start::Context,
    },
    error::AppError,
    service::discord::notification::COLOR_INFO,
};

/// List the bot's commands
#[poise::command(prefix_command, slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), AppError> {
    let prefix = ctx
        .framework()
        .options()
        .prefix_options
        .prefix
        .clone()
        .unwrap_or_default();

    let embed = CreateEmbed::new()
        .title("Bot Commands")
        .color(COLOR_INFO)
        .fields(
            format::help_fields(&prefix)
                .into_iter()
                .map(|(name, value)| (name, value, false)),
        )
        .footer(CreateEmbedFooter::new("Every command is also available as a slash command"));

    reply_embed(ctx, embed).await
}
