//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

/// Member or role permission overwrite used to seed a test channel.
#[derive(Debug, Clone, Copy)]
pub struct TestOverwrite {
    /// User or role id the overwrite targets.
    pub id: u64,
    /// Discord overwrite type: `0` for role, `1` for member.
    pub kind: u8,
    /// Allowed permission bits.
    pub allow: u64,
    /// Denied permission bits.
    pub deny: u64,
}

impl TestOverwrite {
    /// Creates a member overwrite with the given allow and deny bits.
    pub fn member(id: u64, allow: u64, deny: u64) -> Self {
        Self {
            id,
            kind: 1,
            allow,
            deny,
        }
    }

    /// Creates a role overwrite with the given allow and deny bits.
    pub fn role(id: u64, allow: u64, deny: u64) -> Self {
        Self {
            id,
            kind: 0,
            allow,
            deny,
        }
    }

    fn to_json(self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id.to_string(),
            "type": self.kind,
            "allow": self.allow.to_string(),
            "deny": self.deny.to_string(),
        })
    }
}

/// Creates a test Serenity text channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the channel belongs to
/// - `name` - Channel name
/// - `parent_id` - Category the channel is nested under, if any
/// - `overwrites` - Permission overwrites present on the channel
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    parent_id: Option<u64>,
    overwrites: &[TestOverwrite],
) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, 0, parent_id, overwrites)
}

/// Creates a test Serenity category channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_category(category_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    create_test_channel(category_id, guild_id, name, 4, None, &[])
}

fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    parent_id: Option<u64>,
    overwrites: &[TestOverwrite],
) -> GuildChannel {
    let overwrites: Vec<serde_json::Value> = overwrites.iter().map(|o| o.to_json()).collect();

    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": kind,
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": 0,
        "nsfw": false,
        "parent_id": parent_id.map(|id| id.to_string()),
        "permission_overwrites": overwrites,
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
