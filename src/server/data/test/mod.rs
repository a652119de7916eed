mod giveaway;
mod guild;
mod ledger;
mod referral;
mod user;
