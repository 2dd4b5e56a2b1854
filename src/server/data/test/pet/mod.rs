use crate::server::{
    data::pet::PetRepository,
    model::{pet::CreatePetParam, search::PetFilter},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod count_by_route;
mod create;
mod find_by_id;
mod get_all;
mod search;
mod search_with_owner;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
