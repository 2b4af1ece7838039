use crate::{
    data::trigger_keyword::TriggerKeywordRepository, error::AppError,
    model::trigger::TriggerKeyword,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod set_enabled;
