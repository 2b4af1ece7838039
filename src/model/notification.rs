//! Messages the bot posts into channels on lock state changes.

use super::lock::{LockActor, LockReason};

/// Embed title of the lock marker message. History recovery searches for it.
pub const LOCKED_TITLE: &str = "🔒 Channel Locked";
/// Embed title of the unlock marker message. History recovery searches for it.
pub const UNLOCKED_TITLE: &str = "🔓 Channel Unlocked";

/// Substring identifying a lock marker regardless of emoji rendering.
pub const LOCKED_MARKER: &str = "Channel Locked";
/// Substring identifying an unlock marker regardless of emoji rendering.
pub const UNLOCKED_MARKER: &str = "Channel Unlocked";

/// A notification to post in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The channel was locked; carries an unlock button. Keyword locks also
    /// alert hunters, mentioning `ping_role_id` when one is configured.
    Locked {
        hours: i32,
        reason: LockReason,
        ping_role_id: Option<u64>,
    },
    /// The channel was unlocked by a member or by expiry.
    Unlocked { actor: LockActor },
    /// The game bot announced a shiny catch.
    Celebration,
}
