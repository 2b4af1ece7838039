use poise::FrameworkContext;
use serenity::all::{Context, FullEvent};

use crate::{error::AppError, state::AppState};

pub mod interaction;
pub mod message;
pub mod ready;

/// Dispatches gateway events to their handlers.
///
/// Handlers log their own failures, so one bad event never reaches the framework
/// error hook.
pub async fn handle_event(
    ctx: &Context,
    event: &FullEvent,
    _framework: FrameworkContext<'_, AppState, AppError>,
    state: &AppState,
) -> Result<(), AppError> {
    match event {
        FullEvent::Ready { data_about_bot } => {
            ready::handle_ready(ctx, data_about_bot).await;
        }
        FullEvent::Message { new_message } => {
            message::handle_message(ctx, state, new_message).await;
        }
        FullEvent::InteractionCreate { interaction } => {
            interaction::handle_interaction(ctx, state, interaction).await;
        }
        _ => {}
    }

    Ok(())
}
