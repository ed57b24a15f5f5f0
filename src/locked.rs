//! An [`Auction`] that can be shared between threads
//!
//! Every call takes the one lock guarding the auction for its whole
//! duration, so the numbering and highest-bid invariants hold no matter
//! how callers interleave. Queries hand out owned copies.
use crate::{
    auction::{Auction, AuctionError, BidOutcome, Lot, LotNumber, Person},
    report::ClosingReport,
};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

pub type SharedAuction = Arc<LockedAuction>;

#[derive(Debug, Default)]
pub struct LockedAuction {
    inner: Mutex<Auction>,
}

impl From<Auction> for LockedAuction {
    fn from(auction: Auction) -> Self {
        Self {
            inner: Mutex::new(auction),
        }
    }
}

impl LockedAuction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> SharedAuction {
        Arc::new(Self::new())
    }

    /// Follow-up of `previous`, see [`Auction::carry_forward`]
    pub fn carry_forward(previous: &LockedAuction) -> Self {
        let previous = previous.lock();
        Auction::carry_forward(Some(&*previous)).into()
    }

    pub fn lock(&self) -> MutexGuard<'_, Auction> {
        self.inner.lock()
    }

    pub fn into_inner(self) -> Auction {
        self.inner.into_inner()
    }

    pub fn enter_lot(&self, description: Option<&str>) -> Result<LotNumber, AuctionError> {
        self.lock().try_enter_lot(description)
    }

    pub fn bid_for(
        &self,
        number: LotNumber,
        bidder: Option<&Person>,
        value: i64,
    ) -> Result<BidOutcome, AuctionError> {
        self.lock().try_bid_for(number, bidder, value)
    }

    pub fn get_lot(&self, number: LotNumber) -> Result<Lot, AuctionError> {
        self.lock().try_get_lot(number).map(Clone::clone)
    }

    pub fn remove_lot(&self, number: LotNumber) -> Result<Lot, AuctionError> {
        self.lock().try_remove_lot(number)
    }

    pub fn close(&self) -> Result<ClosingReport, AuctionError> {
        self.lock().try_close()
    }

    pub fn get_no_bids(&self) -> Vec<Lot> {
        self.lock().get_no_bids().into_iter().cloned().collect()
    }

    pub fn snapshot(&self) -> Auction {
        self.lock().clone()
    }
}
