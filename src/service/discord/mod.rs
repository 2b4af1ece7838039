//! Serenity-backed implementations of the gateway seam.

pub mod gateway;
pub mod notification;

pub use gateway::DiscordGateway;
