//! Owner management of the global trigger phrases.

use crate::{
    bot::{
        command::{format, reply, reply_paged},
        start::Context,
    },
    error::AppError,
    model::trigger::normalize_phrase,
    service::{discord::notification::COLOR_INFO, trigger::TriggerService},
};

/// Manage the phrases that trigger a lock
#[poise::command(
    prefix_command,
    slash_command,
    owners_only,
    subcommands("list", "add", "remove", "enable", "disable"),
    subcommand_required
)]
pub async fn triggers(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Show all trigger phrases
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    let triggers = TriggerService::new(ctx.data().store.as_ref()).list().await?;

    if triggers.is_empty() {
        return reply(ctx, "No trigger phrases set").await;
    }

    reply_paged(
        ctx,
        "Trigger Phrases",
        COLOR_INFO,
        &format::trigger_lines(&triggers),
        "\n",
    )
    .await
}

/// Add a trigger phrase
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn add(
    ctx: Context<'_>,
    #[description = "Phrase to match"]
    #[rest]
    phrase: String,
) -> Result<(), AppError> {
    let added = TriggerService::new(ctx.data().store.as_ref())
        .add(&phrase)
        .await?;
    let phrase = normalize_phrase(&phrase);

    let message = if added {
        format!("✅ Added trigger `{}`", phrase)
    } else {
        format!("Trigger `{}` already exists", phrase)
    };

    reply(ctx, message).await
}

/// Remove a trigger phrase
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "Phrase to remove"]
    #[rest]
    phrase: String,
) -> Result<(), AppError> {
    let removed = TriggerService::new(ctx.data().store.as_ref())
        .remove(&phrase)
        .await?;

    reply(ctx, toggle_message(removed, &phrase, "🗑️ Removed")).await
}

/// Enable a trigger phrase
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn enable(
    ctx: Context<'_>,
    #[description = "Phrase to enable"]
    #[rest]
    phrase: String,
) -> Result<(), AppError> {
    let changed = TriggerService::new(ctx.data().store.as_ref())
        .set_enabled(&phrase, true)
        .await?;

    reply(ctx, toggle_message(changed, &phrase, "✅ Enabled")).await
}

/// Disable a trigger phrase
#[poise::command(prefix_command, slash_command, owners_only)]
pub async fn disable(
    ctx: Context<'_>,
    #[description = "Phrase to disable"]
    #[rest]
    phrase: String,
) -> Result<(), AppError> {
    let changed = TriggerService::new(ctx.data().store.as_ref())
        .set_enabled(&phrase, false)
        .await?;

    reply(ctx, toggle_message(changed, &phrase, "⛔ Disabled")).await
}

fn toggle_message(found: bool, phrase: &str, action: &str) -> String {
    let phrase = normalize_phrase(phrase);

    if found {
        format!("{} trigger `{}`", action, phrase)
    } else {
        format!("❌ No trigger `{}`", phrase)
    }
}
