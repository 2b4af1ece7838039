//! Prefix and slash commands.
//!
//! Every command is registered in both forms. Replies are ephemeral where the
//! invocation allows it; prefix replies are plain messages.

use poise::CreateReply;
use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::{bot::start::Context, error::AppError, state::AppState};

pub mod blacklist;
pub mod check;
pub mod config;
pub mod format;
pub mod help;
pub mod lock;
pub mod owner;
pub mod trigger;

/// All commands registered with the framework.
pub fn commands() -> Vec<poise::Command<AppState, AppError>> {
    vec![
        lock::lock(),
        lock::unlock(),
        lock::locked(),
        lock::check_timer(),
        blacklist::blacklist(),
        config::setlockhours(),
        config::keywords(),
        config::config(),
        trigger::triggers(),
        owner::owner(),
        owner::servers(),
        owner::leave(),
        owner::shutdown(),
        help::help(),
    ]
}

/// Sends a text reply.
pub async fn reply(ctx: Context<'_>, content: impl Into<String>) -> Result<(), AppError> {
    ctx.send(CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

/// Sends an embed reply.
pub async fn reply_embed(ctx: Context<'_>, embed: CreateEmbed) -> Result<(), AppError> {
    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}

/// Sends `lines` as embeds titled `title`, one per page of description text.
pub async fn reply_paged(
    ctx: Context<'_>,
    title: &str,
    color: u32,
    lines: &[String],
    separator: &str,
) -> Result<(), AppError> {
    for embed in paged_embeds(title, color, lines, separator) {
        reply_embed(ctx, embed).await?;
    }
    Ok(())
}

fn paged_embeds(title: &str, color: u32, lines: &[String], separator: &str) -> Vec<CreateEmbed> {
    let pages = format::chunk_lines(lines, separator, format::EMBED_DESCRIPTION_LIMIT);
    let total = pages.len();

    pages
        .into_iter()
        .enumerate()
        .map(|(index, page)| {
            let embed = CreateEmbed::new().title(title).color(color).description(page);
            match format::page_footer(index + 1, total) {
                Some(footer) => embed.footer(CreateEmbedFooter::new(footer)),
                None => embed,
            }
        })
        .collect()
}

/// Guild of the invocation. Commands using this are declared `guild_only`.
pub fn guild_id(ctx: Context<'_>) -> Result<u64, AppError> {
    ctx.guild_id()
        .map(|id| id.get())
        .ok_or_else(|| AppError::BadRequest("❌ This command only works in a server.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_listing_splits_into_footed_pages() {
        let lines: Vec<String> = (0..300)
            .map(|i| format!("Channel: <#{}>", 1_234_567_890_123_456_000u64 + i))
            .collect();

        let embeds = paged_embeds("🚫 Blacklist", 0x3498db, &lines, "\n");

        assert!(embeds.len() > 1);
        for (index, embed) in embeds.iter().enumerate() {
            let json = serde_json::to_value(embed).unwrap();
            let description = json["description"].as_str().unwrap();
            assert!(description.chars().count() <= format::EMBED_DESCRIPTION_LIMIT);
            assert_eq!(json["title"], "🚫 Blacklist");
            assert_eq!(
                json["footer"]["text"],
                format!("Page {}/{}", index + 1, embeds.len())
            );
        }
    }

    #[test]
    fn short_listing_is_one_page_without_footer() {
        let lines = vec!["Channel: <#1>".to_string()];

        let embeds = paged_embeds("🚫 Blacklist", 0x3498db, &lines, "\n");

        assert_eq!(embeds.len(), 1);
        let json = serde_json::to_value(&embeds[0]).unwrap();
        assert!(json["footer"].is_null());
    }
}
