//! Who may lock and unlock channels.

use serenity::all::Permissions;

use crate::model::actor::Actor;

pub trait AuthorizationPolicy: Send + Sync {
    fn authorize(&self, actor: &Actor) -> bool;

    /// Human-readable requirement, used in rejection replies.
    fn describe(&self) -> String;
}

/// Grants lock control to channel managers, administrators and, when configured,
/// holders of a named role.
pub struct UnlockPolicy {
    role_name: Option<String>,
}

impl UnlockPolicy {
    pub fn new(role_name: Option<String>) -> Self {
        Self { role_name }
    }
}

impl AuthorizationPolicy for UnlockPolicy {
    fn authorize(&self, actor: &Actor) -> bool {
        if actor
            .permissions
            .intersects(Permissions::MANAGE_CHANNELS | Permissions::ADMINISTRATOR)
        {
            return true;
        }

        match &self.role_name {
            Some(role_name) => actor
                .role_names
                .iter()
                .any(|name| name.eq_ignore_ascii_case(role_name)),
            None => false,
        }
    }

    fn describe(&self) -> String {
        match &self.role_name {
            Some(role_name) => format!(
                "You need the Manage Channels permission or the `{}` role to do that.",
                role_name
            ),
            None => "You need the Manage Channels permission to do that.".to_string(),
        }
    }
}
