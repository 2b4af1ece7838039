//! Domain models for channel locks.

use chrono::{DateTime, Duration, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// An active lock on a channel.
///
/// At most one entry exists per `channel_id`. Entries are never re-timed; they are
/// removed by the expiry sweeper or an explicit unlock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEntry {
    /// Discord channel the game bot is locked out of.
    pub channel_id: u64,
    /// Guild the channel belongs to.
    pub guild_id: u64,
    /// When the sweeper should restore access.
    pub unlock_at: DateTime<Utc>,
}

impl LockEntry {
    /// Creates an entry expiring `hours` after `now`.
    pub fn new(channel_id: u64, guild_id: u64, hours: i32, now: DateTime<Utc>) -> Self {
        Self::expiring_in(channel_id, guild_id, Duration::hours(hours as i64), now)
    }

    /// Creates an entry expiring `duration` after `now`.
    pub fn expiring_in(
        channel_id: u64,
        guild_id: u64,
        duration: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            channel_id,
            guild_id,
            unlock_at: now + duration,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.unlock_at <= now
    }

    /// Whole minutes until the lock expires, never negative.
    pub fn minutes_remaining(&self, now: DateTime<Utc>) -> i64 {
        (self.unlock_at - now).num_minutes().max(0)
    }

    /// Converts an entity model to a lock entry at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(LockEntry)` - Converted entry
    /// - `Err(AppError::InternalErr)` - Stored channel or guild id is not a valid u64
    pub fn from_entity(entity: entity::channel_lock::Model) -> Result<Self, AppError> {
        Ok(Self {
            channel_id: parse_u64_from_string(entity.channel_id)?,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            unlock_at: entity.unlock_at,
        })
    }
}

/// Result of attempting to lock a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    /// A new entry was created.
    Locked(LockEntry),
    /// The channel was already locked; carries the untouched existing entry.
    AlreadyLocked(LockEntry),
}

/// Result of attempting to unlock a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// The entry was removed.
    Unlocked(LockEntry),
    /// No entry existed for the channel.
    NotLocked,
}

/// Who ended a lock, for attribution in the unlock notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockActor {
    /// A member pressed the unlock button or ran the unlock command.
    User(u64),
    /// The expiry sweeper.
    Bot,
}

/// Why a channel was locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    /// A trigger phrase was detected in a bot message.
    Keyword,
    /// A member ran the lock command.
    Manual { user_id: u64 },
}

/// Parameters for locking a channel.
#[derive(Debug, Clone)]
pub struct LockRequest {
    pub channel_id: u64,
    pub guild_id: u64,
    pub hours: i32,
    pub reason: LockReason,
}
