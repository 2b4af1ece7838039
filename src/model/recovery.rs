//! Startup recovery strategy and report.

use std::{fmt, str::FromStr};

/// How lock state is reconstructed after a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStrategy {
    /// Reload persisted lock rows.
    Durable,
    /// Infer locks from the game bot's live deny overwrites.
    Permissions,
    /// Scan recent channel history for lock/unlock marker embeds.
    History,
}

impl FromStr for RecoveryStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "durable" => Ok(Self::Durable),
            "permissions" => Ok(Self::Permissions),
            "history" => Ok(Self::History),
            other => Err(format!(
                "unknown recovery strategy '{}', expected durable, permissions or history",
                other
            )),
        }
    }
}

impl fmt::Display for RecoveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Durable => "durable",
            Self::Permissions => "permissions",
            Self::History => "history",
        };
        f.write_str(name)
    }
}

/// Lock state announced by one of our own marker embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMarker {
    Locked,
    Unlocked,
}

/// Counters describing what a recovery run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryReport {
    /// Entries placed back into the registry.
    pub restored: usize,
    /// Persisted entries that expired while offline and were released.
    pub expired: usize,
    /// Entries dropped because the channel no longer resolves or is blacklisted.
    pub dropped: usize,
    /// Channels whose scan failed and were skipped.
    pub failed: usize,
}
