pub mod authorization;
pub mod command;
pub mod handler;
pub mod start;
