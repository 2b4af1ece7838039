//! Domain view of a guild channel, as far as locking is concerned.

use serenity::all::{GuildChannel, PermissionOverwriteType, Permissions};

/// A member-targeted permission overwrite on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberOverride {
    pub member_id: u64,
    pub allow: Permissions,
    pub deny: Permissions,
}

impl MemberOverride {
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}

/// A guild text channel with the member overwrites needed to compute lock state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: u64,
    pub guild_id: u64,
    /// Category the channel is nested under.
    pub category_id: Option<u64>,
    pub name: String,
    /// Member overwrites only; role overwrites never matter for the game bot lock.
    pub member_overrides: Vec<MemberOverride>,
}

impl ChannelInfo {
    /// Converts a Serenity guild channel at the gateway boundary.
    pub fn from_guild_channel(channel: &GuildChannel) -> Self {
        let member_overrides = channel
            .permission_overwrites
            .iter()
            .filter_map(|overwrite| match overwrite.kind {
                PermissionOverwriteType::Member(user_id) => Some(MemberOverride {
                    member_id: user_id.get(),
                    allow: overwrite.allow,
                    deny: overwrite.deny,
                }),
                _ => None,
            })
            .collect();

        Self {
            id: channel.id.get(),
            guild_id: channel.guild_id.get(),
            category_id: channel.parent_id.map(|id| id.get()),
            name: channel.name.clone(),
            member_overrides,
        }
    }

    /// The overwrite targeting `member_id`, if any.
    pub fn override_for(&self, member_id: u64) -> Option<MemberOverride> {
        self.member_overrides
            .iter()
            .find(|o| o.member_id == member_id)
            .copied()
    }
}
