use crate::{bot::authorization::build_actor, bot::start::Context, error::AppError};

/// Command check gating manual lock and unlock on the authorization policy.
///
/// A rejection is returned as `Forbidden` so the error hook can explain what is
/// missing.
pub async fn can_manage_locks(ctx: Context<'_>) -> Result<bool, AppError> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(false);
    };
    let Some(member) = ctx.author_member().await else {
        return Ok(false);
    };

    let actor = build_actor(ctx.cache(), guild_id, ctx.channel_id(), &member);
    let policy = &ctx.data().policy;

    if policy.authorize(&actor) {
        return Ok(true);
    }

    tracing::debug!(
        "User {} rejected for {}",
        actor.user_id,
        ctx.command().qualified_name
    );
    Err(AppError::Forbidden(format!("❌ {}", policy.describe())))
}
