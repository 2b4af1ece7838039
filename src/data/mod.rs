//! Database repository layer and the pluggable lock store.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and convert SeaORM entity models
//! into domain models at the boundary, so services never see entity types. The
//! `store` module sits on top and exposes a single `Store` trait backed either by
//! these repositories (sqlite) or by in-process maps.

pub mod blacklist;
pub mod lock;
pub mod server_config;
pub mod store;
pub mod trigger_keyword;

#[cfg(test)]
mod test;
