use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_details;
mod set_level;
mod set_profile;
mod set_settings;
mod update;
mod upsert;

fn create_param(id: &str, name: &str) -> CreateUserParam {
    CreateUserParam {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: None,
    }
}
