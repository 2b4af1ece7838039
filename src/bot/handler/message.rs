use chrono::Utc;
use serenity::all::{Context, Message};

use crate::{
    model::message::{IncomingMessage, RouteOutcome},
    service::router::MessageRouter,
    state::AppState,
};

/// Handle message creation in a channel
pub async fn handle_message(ctx: &Context, state: &AppState, message: &Message) {
    // Only route messages in guild channels (not DMs)
    if message.guild_id.is_none() {
        return;
    }

    let category_id = category_of(ctx, state, message).await;
    let self_id = ctx.cache.current_user().id.get();

    let Some(incoming) = IncomingMessage::from_message(message, category_id, self_id) else {
        return;
    };

    match MessageRouter::new(state).route(&incoming, Utc::now()).await {
        Ok(RouteOutcome::Locked) => {
            tracing::debug!("Message {} locked channel {}", message.id, incoming.channel_id);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!(
                "Failed to route message {} in channel {}: {}",
                message.id,
                incoming.channel_id,
                e
            );
        }
    }
}

/// Category of the message's channel, from cache or the API as a fallback.
async fn category_of(ctx: &Context, state: &AppState, message: &Message) -> Option<u64> {
    if let Some(channel) = ctx.cache.channel(message.channel_id) {
        return channel.parent_id.map(|id| id.get());
    }

    match state.gateway.channel(message.channel_id.get()).await {
        Ok(channel) => channel.and_then(|channel| channel.category_id),
        Err(e) => {
            tracing::warn!(
                "Failed to resolve category of channel {}: {}",
                message.channel_id,
                e
            );
            None
        }
    }
}
