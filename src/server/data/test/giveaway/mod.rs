use crate::server::{
    data::giveaway::GiveawayRepository,
    model::giveaway::{CreateGiveawayParam, GiveawayItemParam, UpdateGiveawayParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn item(name: &str, key: Option<&str>) -> GiveawayItemParam {
    GiveawayItemParam {
        name: name.to_string(),
        key: key.map(str::to_string),
    }
}
