use chrono::{DateTime, Utc};

use crate::{
    model::referral::{CreateReferralDto, ReferralDetailsDto, ReferralDto, UpdateReferralDto},
    server::model::{guild::Guild, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Referral {
    pub id: i32,
    pub user_id: String,
    pub guild_id: String,
    pub date_created: DateTime<Utc>,
}

impl Referral {
    pub fn from_entity(entity: entity::referral::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            guild_id: entity.guild_id,
            date_created: entity.date_created,
        }
    }

    pub fn into_dto(self) -> ReferralDto {
        ReferralDto {
            id: self.id,
            user_id: self.user_id,
            guild_id: self.guild_id,
            date_created: self.date_created,
        }
    }
}

/// Referral joined with its user and guild.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferralDetails {
    pub referral: Referral,
    pub user: Option<User>,
    pub guild: Option<Guild>,
}

impl ReferralDetails {
    pub fn into_dto(self) -> ReferralDetailsDto {
        ReferralDetailsDto {
            referral: self.referral.into_dto(),
            user: self.user.map(User::into_dto),
            guild: self.guild.map(Guild::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReferralParam {
    pub user_id: String,
    pub guild_id: String,
}

impl ReferralParam {
    pub fn from_create_dto(dto: CreateReferralDto) -> Self {
        Self {
            user_id: dto.user_id,
            guild_id: dto.guild_id,
        }
    }

    pub fn from_update_dto(dto: UpdateReferralDto) -> Self {
        Self {
            user_id: dto.user_id,
            guild_id: dto.guild_id,
        }
    }
}
