//! Lockbot Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the lockbot
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, entity factories, and Serenity object
//! factories.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert lock, blacklist and server config rows with defaults
//! - **serenity**: Build Serenity model objects from JSON
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::ChannelLock;
//!
//! #[tokio::test]
//! async fn test_lock_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(ChannelLock)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
