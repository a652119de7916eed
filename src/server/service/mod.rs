//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input,
//! turn missing records into `AppError::NotFound` and work with domain models
//! rather than DTOs or entities. Balance mutations are owned by the transfer
//! engine; everything published to socket clients goes through `notification`.

pub mod auth;
pub mod giveaway;
pub mod guild;
pub mod notification;
pub mod referral;
pub mod transfer;
pub mod user;
