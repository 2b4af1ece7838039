//! SeaORM entity models for the lockbot sqlite store.
//!
//! Discord snowflakes are stored as strings since sqlite has no unsigned 64-bit
//! integer column; the data layer parses them back at the repository boundary.

pub mod prelude;

pub mod blacklisted_category;
pub mod blacklisted_channel;
pub mod channel_lock;
pub mod server_config;
pub mod trigger_keyword;
