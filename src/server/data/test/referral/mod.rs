use crate::server::{data::referral::ReferralRepository, model::referral::ReferralParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_details;
mod update;
