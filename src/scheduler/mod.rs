//! Cron jobs.

pub mod lock_expiry;
