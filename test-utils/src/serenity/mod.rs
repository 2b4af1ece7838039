//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::channel::{create_test_text_channel, TestOverwrite};
//!
//! let channel = create_test_text_channel(10, 1, "spawns", Some(20), &[
//!     TestOverwrite::member(716390085896962058, 0, 1024),
//! ]);
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_text_channel` - Create text `GuildChannel` objects
//! - `channel::create_test_category` - Create category `GuildChannel` objects

pub mod channel;

pub use channel::{create_test_category, create_test_text_channel, TestOverwrite};
