//! HTTP request handlers.
//!
//! Controllers convert DTOs into parameters, call the service layer and convert
//! the resulting domain models back into DTOs. CRUD handlers publish their socket
//! events after the service call succeeded; balance events come from the
//! transfer engine.

pub mod auth;
pub mod giveaway;
pub mod guild;
pub mod referral;
pub mod socket;
pub mod transfer;
pub mod user;
