//! Routing of inbound guild messages to lock decisions.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    model::{
        lock::{LockOutcome, LockReason, LockRequest},
        message::{IncomingMessage, RouteOutcome},
        notification::Notification,
    },
    service::{
        blacklist::BlacklistService,
        lock::LockService,
        server_config::ServerConfigService,
        trigger::{find_match, TriggerService},
    },
    state::AppState,
};

/// Text the game bot posts when a shiny is caught.
pub const CELEBRATION_PHRASE: &str = "these colors seem unusual";

pub struct MessageRouter<'a> {
    state: &'a AppState,
}

impl<'a> MessageRouter<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Decides what to do with a guild message and does it.
    ///
    /// Only bot authors are evaluated for trigger phrases. The game bot's shiny
    /// announcement is celebrated regardless of blacklists or keyword settings.
    pub async fn route(
        &self,
        message: &IncomingMessage,
        now: DateTime<Utc>,
    ) -> Result<RouteOutcome, AppError> {
        if message.from_self {
            return Ok(RouteOutcome::Ignored);
        }

        if message.author_id == self.state.settings.game_bot_id
            && message.content.to_lowercase().contains(CELEBRATION_PHRASE)
        {
            if let Err(e) = self
                .state
                .gateway
                .send_notification(message.channel_id, &Notification::Celebration)
                .await
            {
                tracing::warn!(
                    "Failed to send celebration to channel {}: {}",
                    message.channel_id,
                    e
                );
            }
            return Ok(RouteOutcome::Celebrated);
        }

        if !message.author_is_bot {
            return Ok(RouteOutcome::Ignored);
        }

        let store = self.state.store.as_ref();

        if BlacklistService::new(store)
            .is_excluded(message.channel_id, message.category_id)
            .await?
        {
            tracing::debug!("Skipping blacklisted channel {}", message.channel_id);
            return Ok(RouteOutcome::Blacklisted);
        }

        let config = ServerConfigService::new(store, self.state.settings.default_lock_hours)
            .get(message.guild_id)
            .await?;
        if !config.keywords_enabled {
            return Ok(RouteOutcome::KeywordsDisabled);
        }

        let triggers = TriggerService::new(store).enabled().await?;
        let Some(trigger) = find_match(&message.content, &triggers) else {
            return Ok(RouteOutcome::NoMatch);
        };

        tracing::debug!(
            "Trigger '{}' matched in channel {}",
            trigger.phrase,
            message.channel_id
        );

        let request = LockRequest {
            channel_id: message.channel_id,
            guild_id: message.guild_id,
            hours: config.lock_hours,
            reason: LockReason::Keyword,
        };

        match LockService::new(self.state).lock(request, now).await? {
            LockOutcome::Locked(_) => Ok(RouteOutcome::Locked),
            LockOutcome::AlreadyLocked(_) => Ok(RouteOutcome::AlreadyLocked),
        }
    }
}
