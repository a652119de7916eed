//! Serializable request and response bodies of the HTTP and socket API.

pub mod api;
pub mod giveaway;
pub mod guild;
pub mod referral;
pub mod transfer;
pub mod user;
