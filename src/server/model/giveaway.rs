use chrono::{DateTime, Utc};

use crate::model::giveaway::{
    CreateGiveawayDto, GiveawayDto, GiveawayItemDto, GiveawayItemInputDto, UpdateGiveawayDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Giveaway {
    pub id: i32,
    pub guild_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    pub items: Vec<GiveawayItem>,
}

impl Giveaway {
    pub fn from_entity(
        entity: entity::giveaway::Model,
        items: Vec<entity::giveaway_item::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            title: entity.title,
            description: entity.description,
            date_created: entity.date_created,
            date_end: entity.date_end,
            items: items.into_iter().map(GiveawayItem::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> GiveawayDto {
        GiveawayDto {
            id: self.id,
            guild_id: self.guild_id,
            title: self.title,
            description: self.description,
            date_created: self.date_created,
            date_end: self.date_end,
            items: self.items.into_iter().map(GiveawayItem::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GiveawayItem {
    pub id: i32,
    pub name: String,
    pub key: Option<String>,
}

impl GiveawayItem {
    pub fn from_entity(entity: entity::giveaway_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            key: entity.key,
        }
    }

    pub fn into_dto(self) -> GiveawayItemDto {
        GiveawayItemDto {
            id: self.id,
            name: self.name,
            key: self.key,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GiveawayItemParam {
    pub name: String,
    pub key: Option<String>,
}

impl GiveawayItemParam {
    pub fn from_dto(dto: GiveawayItemInputDto) -> Self {
        Self {
            name: dto.name,
            key: dto.key,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGiveawayParam {
    pub guild_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date_end: DateTime<Utc>,
    pub items: Vec<GiveawayItemParam>,
}

impl CreateGiveawayParam {
    pub fn from_dto(dto: CreateGiveawayDto) -> Self {
        Self {
            guild_id: dto.guild_id,
            title: dto.title,
            description: dto.description,
            date_end: dto.date_end,
            items: dto.items.into_iter().map(GiveawayItemParam::from_dto).collect(),
        }
    }
}

/// Replaces every field and the full item list of a giveaway.
#[derive(Debug, Clone)]
pub struct UpdateGiveawayParam {
    pub title: String,
    pub description: Option<String>,
    pub date_end: DateTime<Utc>,
    pub items: Vec<GiveawayItemParam>,
}

impl UpdateGiveawayParam {
    pub fn from_dto(dto: UpdateGiveawayDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            date_end: dto.date_end,
            items: dto.items.into_iter().map(GiveawayItemParam::from_dto).collect(),
        }
    }
}
