//! Builds an `Actor` for the authorization policy from cached guild data.

use serenity::all::{Cache, ChannelId, GuildId, Member, Permissions};

use crate::model::actor::Actor;

/// Resolves the member's effective permissions and role names.
///
/// Interaction payloads carry precomputed permissions, which take precedence.
/// Otherwise permissions are computed from the cached guild, including the
/// channel's overwrites when the channel is cached. A guild missing from cache
/// yields no permissions and no roles, so only explicit grants pass.
pub fn build_actor(
    cache: &Cache,
    guild_id: GuildId,
    channel_id: ChannelId,
    member: &Member,
) -> Actor {
    let (permissions, role_names) = match cache.guild(guild_id) {
        Some(guild) => {
            let permissions = member.permissions.unwrap_or_else(|| {
                match guild.channels.get(&channel_id) {
                    Some(channel) => guild.user_permissions_in(channel, member),
                    None => guild.member_permissions(member),
                }
            });
            let role_names = member
                .roles
                .iter()
                .filter_map(|role_id| guild.roles.get(role_id))
                .map(|role| role.name.clone())
                .collect();

            (permissions, role_names)
        }
        None => {
            tracing::debug!("Guild {} not cached while authorizing", guild_id);
            (member.permissions.unwrap_or_else(Permissions::empty), Vec::new())
        }
    };

    Actor {
        user_id: member.user.id.get(),
        permissions,
        role_names,
    }
}
