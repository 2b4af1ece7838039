pub use super::blacklisted_category::Entity as BlacklistedCategory;
pub use super::blacklisted_channel::Entity as BlacklistedChannel;
pub use super::channel_lock::Entity as ChannelLock;
pub use super::server_config::Entity as ServerConfig;
pub use super::trigger_keyword::Entity as TriggerKeyword;
