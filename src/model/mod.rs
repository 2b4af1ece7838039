//! Domain models and operation parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and from
//! Serenity objects at the gateway boundary, so services never touch either directly.

pub mod actor;
pub mod blacklist;
pub mod channel;
pub mod lock;
pub mod message;
pub mod notification;
pub mod recovery;
pub mod server_config;
pub mod trigger;
