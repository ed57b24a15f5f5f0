use super::bid::Bid;
use serde::Serialize;
use tracing::debug;

pub type LotNumber = u64;

/// A single numbered item up for bidding
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Lot {
    number: LotNumber,
    description: String,
    highest_bid: Option<Bid>,
}

impl Lot {
    pub(crate) fn new(number: LotNumber, description: String) -> Self {
        Self {
            number,
            description,
            highest_bid: None,
        }
    }

    pub fn number(&self) -> LotNumber {
        self.number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn highest_bid(&self) -> Option<&Bid> {
        self.highest_bid.as_ref()
    }

    pub fn has_bid(&self) -> bool {
        self.highest_bid.is_some()
    }

    /// Record `bid` if it beats the current highest one
    ///
    /// Returns `false` and keeps the old highest bid when `bid` is
    /// not strictly higher.
    pub fn bid_for(&mut self, bid: Bid) -> bool {
        self.place(bid).is_ok()
    }

    /// Like [`Lot::bid_for`], handing back the bid that stood in the way
    pub(crate) fn place(&mut self, bid: Bid) -> Result<(), Bid> {
        match self.highest_bid {
            Some(ref highest) if !highest.is_outbidded_by(bid.value()) => {
                debug!(lot = self.number, value = bid.value(), "bid too low");
                Err(highest.clone())
            }
            _ => {
                debug!(lot = self.number, value = bid.value(), "new highest bid");
                self.highest_bid = Some(bid);
                Ok(())
            }
        }
    }
}
