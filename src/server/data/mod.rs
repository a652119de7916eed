//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`. The ledger store is the only repository hidden behind a trait,
//! since the transfer engine is exercised against other implementations in tests.

pub mod giveaway;
pub mod guild;
pub mod ledger;
pub mod referral;
pub mod user;

#[cfg(test)]
mod test;
