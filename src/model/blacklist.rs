//! Domain models for trigger blacklists.

/// What a blacklist entry excludes from trigger evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlacklistScope {
    /// A single channel.
    Channel(u64),
    /// Every channel nested under a category.
    Category(u64),
}

/// A blacklist entry together with the guild it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlacklistEntry {
    pub guild_id: u64,
    pub scope: BlacklistScope,
}

/// All blacklist entries of one guild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    pub channels: Vec<u64>,
    pub categories: Vec<u64>,
}

impl Blacklist {
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() && self.categories.is_empty()
    }
}
