use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
