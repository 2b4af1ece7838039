//! Domain models for per-guild configuration.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Shortest lock a guild may configure, in hours.
pub const MIN_LOCK_HOURS: i64 = 1;
/// Longest lock a guild may configure, in hours.
pub const MAX_LOCK_HOURS: i64 = 72;

/// Per-guild configuration, created with defaults on first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub guild_id: u64,
    /// Lock duration applied by keyword locks and argument-less manual locks.
    pub lock_hours: i32,
    /// Whether trigger phrases are evaluated in this guild at all.
    pub keywords_enabled: bool,
}

impl ServerConfig {
    pub fn new_default(guild_id: u64, default_lock_hours: i32) -> Self {
        Self {
            guild_id,
            lock_hours: default_lock_hours,
            keywords_enabled: true,
        }
    }

    /// Converts an entity model to a server config at the repository boundary.
    pub fn from_entity(entity: entity::server_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            lock_hours: entity.lock_hours,
            keywords_enabled: entity.keywords_enabled,
        })
    }
}

/// Validates a requested lock duration.
///
/// # Returns
/// - `Ok(i32)` - Hours within `[MIN_LOCK_HOURS, MAX_LOCK_HOURS]`
/// - `Err(AppError::BadRequest)` - Hours out of range
pub fn validate_lock_hours(hours: i64) -> Result<i32, AppError> {
    if !(MIN_LOCK_HOURS..=MAX_LOCK_HOURS).contains(&hours) {
        return Err(AppError::BadRequest(format!(
            "Lock hours must be between {} and {}",
            MIN_LOCK_HOURS, MAX_LOCK_HOURS
        )));
    }

    Ok(hours as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(validate_lock_hours(1).unwrap(), 1);
        assert_eq!(validate_lock_hours(72).unwrap(), 72);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(validate_lock_hours(0), Err(AppError::BadRequest(_))));
        assert!(matches!(validate_lock_hours(100), Err(AppError::BadRequest(_))));
        assert!(matches!(validate_lock_hours(-3), Err(AppError::BadRequest(_))));
    }
}
