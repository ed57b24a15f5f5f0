//! Single-seller auction of numbered lots
//!
//! The core state machine only: entering lots, bidding, removing and
//! closing. Presenting any of it to a user is up to the caller, every
//! operation returns plain data.
pub mod auction;
pub mod locked;
pub mod report;

pub use self::{
    auction::{Amount, Auction, AuctionError, Bid, BidOutcome, Lot, LotNumber, Person},
    locked::{LockedAuction, SharedAuction},
    report::{ClosingReport, LotReport, LotStatus},
};
