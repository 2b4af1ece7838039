use crate::{
    data::blacklist::BlacklistRepository,
    error::AppError,
    model::blacklist::{BlacklistEntry, BlacklistScope},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod contains;
mod get_by_guild_id;
mod remove;
