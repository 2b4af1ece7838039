use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Interaction,
};

use crate::{
    bot::{authorization::build_actor, command::format},
    model::lock::LockActor,
    service::{discord::notification::UNLOCK_BUTTON_ID, lock::LockService},
    state::AppState,
};

/// Handles component interactions; only the unlock button is recognised.
pub async fn handle_interaction(ctx: &Context, state: &AppState, interaction: &Interaction) {
    let Interaction::Component(component) = interaction else {
        return;
    };

    if component.data.custom_id != UNLOCK_BUTTON_ID {
        return;
    }

    // Interactions must be answered within three seconds.
    if let Err(e) = component.create_response(&ctx.http, deferred_ack()).await {
        tracing::warn!(
            "Failed to acknowledge unlock button in channel {}: {}",
            component.channel_id,
            e
        );
        return;
    }

    let reply = unlock_from_button(ctx, state, component).await;

    if let Err(e) = component
        .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
        .await
    {
        tracing::warn!(
            "Failed to answer unlock button in channel {}: {}",
            component.channel_id,
            e
        );
    }
}

/// Ephemeral "thinking" response sent before the unlock runs.
fn deferred_ack() -> CreateInteractionResponse {
    CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true))
}

/// Authorizes the presser and unlocks the channel, returning the reply text.
async fn unlock_from_button(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> String {
    let (Some(guild_id), Some(member)) = (component.guild_id, component.member.as_ref()) else {
        return "❌ This only works in a server.".to_string();
    };

    let actor = build_actor(&ctx.cache, guild_id, component.channel_id, member);
    if !state.policy.authorize(&actor) {
        tracing::debug!(
            "User {} may not unlock channel {}",
            actor.user_id,
            component.channel_id
        );
        return format!("❌ {}", state.policy.describe());
    }

    match LockService::new(state)
        .unlock(component.channel_id.get(), LockActor::User(actor.user_id))
        .await
    {
        Ok(outcome) => format::unlock_reply(&outcome).to_string(),
        Err(e) => {
            if !e.is_user_error() {
                tracing::error!(
                    "Failed to unlock channel {} from button: {}",
                    component.channel_id,
                    e
                );
            }
            e.user_message()
        }
    }
}
