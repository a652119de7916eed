//! Factories for inserting test rows with sensible defaults.
//!
//! Each entity has a `*Factory` builder for overriding fields and a `create_*`
//! shorthand for the common case.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let alice = factory::create_user(&db).await?;
//! let account = factory::UserBalanceFactory::new(&db, &alice.id)
//!     .balance(500)
//!     .build()
//!     .await?;
//!
//! let (user, account) = factory::create_funded_user(&db, 100).await?;
//! ```

pub mod giveaway;
pub mod guild;
pub mod helpers;
pub mod user;
pub mod user_balance;

pub use giveaway::{create_giveaway, GiveawayFactory};
pub use guild::{create_guild, GuildFactory};
pub use helpers::{create_funded_user, next_id};
pub use user::{create_user, UserFactory};
pub use user_balance::{create_balance, UserBalanceFactory};
