//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests. Each table has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let lock = factory::create_lock(&db).await?;
//!     let config = factory::server_config::ServerConfigFactory::new(&db)
//!         .lock_hours(24)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod blacklist;
pub mod channel_lock;
pub mod helpers;
pub mod server_config;
pub mod trigger_keyword;

pub use blacklist::{create_blacklisted_category, create_blacklisted_channel};
pub use channel_lock::create_lock;
pub use server_config::create_server_config;
pub use trigger_keyword::create_trigger_keyword;
