//! Ready event handler.
//!
//! Fired after every successful gateway handshake, including reconnects. State
//! setup and lock recovery happen once in the framework setup hook instead.

use serenity::all::{ActivityData, Context, Ready};

/// Logs the connection and sets the bot's activity.
pub async fn handle_ready(ctx: &Context, ready: &Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("for ping messages")));
}
