//! Environment-based configuration.

use std::str::FromStr;

use crate::{
    error::{config::ConfigError, AppError},
    model::{
        recovery::RecoveryStrategy,
        server_config::{MAX_LOCK_HOURS, MIN_LOCK_HOURS},
    },
};

/// Pokétwo's user id.
const DEFAULT_GAME_BOT_ID: u64 = 716390085896962058;
const DEFAULT_COMMAND_PREFIX: &str = ".";
const DEFAULT_LOCK_HOURS: i32 = 12;
const DEFAULT_RECOVERY_HISTORY_LIMIT: u8 = 30;
const DEFAULT_RECOVERY_FALLBACK_MINUTES: i64 = 30;
const DEFAULT_HEALTH_PORT: u16 = 8080;

pub struct Config {
    pub bot_token: String,
    pub owner_id: u64,
    /// Sqlite URL; unset selects the in-memory store.
    pub database_url: Option<String>,

    pub game_bot_id: u64,
    pub command_prefix: String,
    pub default_lock_hours: i32,
    pub unlock_role: Option<String>,
    /// Role mentioned in the alert posted with keyword locks.
    pub ping_role_id: Option<u64>,

    pub recovery_strategy: RecoveryStrategy,
    pub recovery_history_limit: u8,
    pub recovery_fallback_minutes: i64,

    pub health_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let bot_token = require("BOT_TOKEN")?;
        let owner_id = parse_id("OWNER_ID", require("OWNER_ID")?)?;
        let database_url = get("DATABASE_URL");

        let game_bot_id = get("GAME_BOT_ID")
            .map(|v| parse_id("GAME_BOT_ID", v))
            .transpose()?
            .unwrap_or(DEFAULT_GAME_BOT_ID);

        let command_prefix =
            get("COMMAND_PREFIX").unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());

        let default_lock_hours = match get("DEFAULT_LOCK_HOURS") {
            Some(value) => {
                let hours: i64 = parse("DEFAULT_LOCK_HOURS", value.clone())?;
                if !(MIN_LOCK_HOURS..=MAX_LOCK_HOURS).contains(&hours) {
                    return Err(invalid(
                        "DEFAULT_LOCK_HOURS",
                        value,
                        format!("must be between {} and {}", MIN_LOCK_HOURS, MAX_LOCK_HOURS),
                    )
                    .into());
                }
                hours as i32
            }
            None => DEFAULT_LOCK_HOURS,
        };

        let recovery_strategy = match get("RECOVERY_STRATEGY") {
            Some(value) => RecoveryStrategy::from_str(&value)
                .map_err(|reason| invalid("RECOVERY_STRATEGY", value, reason))?,
            None if database_url.is_some() => RecoveryStrategy::Durable,
            None => RecoveryStrategy::History,
        };

        let recovery_history_limit = match get("RECOVERY_HISTORY_LIMIT") {
            Some(value) => {
                let limit: u8 = parse("RECOVERY_HISTORY_LIMIT", value.clone())?;
                if !(1..=100).contains(&limit) {
                    return Err(invalid(
                        "RECOVERY_HISTORY_LIMIT",
                        value,
                        "must be between 1 and 100".to_string(),
                    )
                    .into());
                }
                limit
            }
            None => DEFAULT_RECOVERY_HISTORY_LIMIT,
        };

        let recovery_fallback_minutes = match get("RECOVERY_FALLBACK_MINUTES") {
            Some(value) => {
                let minutes: i64 = parse("RECOVERY_FALLBACK_MINUTES", value.clone())?;
                if minutes < 1 {
                    return Err(invalid(
                        "RECOVERY_FALLBACK_MINUTES",
                        value,
                        "must be at least 1".to_string(),
                    )
                    .into());
                }
                minutes
            }
            None => DEFAULT_RECOVERY_FALLBACK_MINUTES,
        };

        let ping_role_id = get("PING_ROLE_ID")
            .map(|v| parse_id("PING_ROLE_ID", v))
            .transpose()?;

        let health_port = get("HEALTH_PORT")
            .map(|v| parse("HEALTH_PORT", v))
            .transpose()?
            .unwrap_or(DEFAULT_HEALTH_PORT);

        Ok(Self {
            bot_token,
            owner_id,
            database_url,
            game_bot_id,
            command_prefix,
            default_lock_hours,
            unlock_role: get("UNLOCK_ROLE"),
            ping_role_id,
            recovery_strategy,
            recovery_history_limit,
            recovery_fallback_minutes,
            health_port,
        })
    }
}

fn parse<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| invalid(name, value.clone(), e.to_string()))
}

/// Parses a Discord snowflake; zero is not a valid id.
fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    let id: u64 = parse(name, value.clone())?;
    if id == 0 {
        return Err(invalid(name, value, "must be a non-zero Discord id".to_string()));
    }
    Ok(id)
}

fn invalid(name: &str, value: String, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason,
    }
}
