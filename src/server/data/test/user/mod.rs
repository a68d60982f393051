use crate::server::{data::user::UserRepository, model::user::Role};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_group_ids;
mod is_member;
