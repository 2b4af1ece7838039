//! Error types for the bot.
//!
//! `AppError` is the top-level error type returned by services, repositories and
//! command handlers. Domain-specific errors (`ConfigError`, `InternalError`) convert
//! into it with `?`. Command failures are turned into chat replies by
//! `AppError::user_message`, which keeps internal details out of the channel.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal: the process refuses to start.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Unexpected internal state such as a corrupt stored id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error, e.g. binding the health endpoint listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found (channel deleted, game bot not in guild, ...).
    ///
    /// The message is shown to the user as-is.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or out-of-range input.
    ///
    /// The message is shown to the user as-is.
    #[error("{0}")]
    BadRequest(String),

    /// The acting user may not perform the operation.
    ///
    /// The message is shown to the user as-is.
    #[error("{0}")]
    Forbidden(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message to show in chat for this error.
    ///
    /// User-facing variants surface their own message; everything else gets a
    /// generic reply so API or database details are never posted to a channel.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Forbidden(msg) => msg.clone(),
            _ => "❌ Something went wrong, please try again later.".to_string(),
        }
    }

    /// Whether this error is the user's fault rather than ours.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::BadRequest(_) | Self::Forbidden(_)
        )
    }
}
