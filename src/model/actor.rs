use serenity::all::Permissions;

/// A guild member attempting a privileged action, as seen by authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: u64,
    /// Effective permissions in the channel the action targets.
    pub permissions: Permissions,
    /// Names of the roles the member holds.
    pub role_names: Vec<String>,
}
