use crate::{data::lock::ChannelLockRepository, error::AppError, model::lock::LockEntry};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::channel_lock::ChannelLockFactory};

mod create;
mod delete;
mod get_all;
mod get_by_channel_id;
