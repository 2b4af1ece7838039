//! Service layer for lock logic and orchestration.
//!
//! Services sit between Discord-facing handlers and the store. They hold the
//! business rules (who may lock, when a message triggers a lock, how recovery
//! rebuilds state) and talk to Discord only through `ChannelGateway`.

pub mod authorization;
pub mod blacklist;
pub mod discord;
pub mod gateway;
pub mod lock;
pub mod permission;
pub mod recovery;
pub mod registry;
pub mod router;
pub mod server_config;
pub mod trigger;

#[cfg(test)]
pub mod mock;
