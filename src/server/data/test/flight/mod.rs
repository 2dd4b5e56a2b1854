use crate::server::{data::flight::FlightRepository, model::flight::CreateFlightParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
