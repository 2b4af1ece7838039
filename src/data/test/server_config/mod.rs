use crate::{
    data::server_config::ServerConfigRepository, error::AppError,
    model::server_config::ServerConfig,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::server_config::ServerConfigFactory};

mod get_by_guild_id;
mod upsert;
