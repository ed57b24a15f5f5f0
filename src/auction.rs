//! Auction
//!
//! A single-seller auction: a collection of numbered lots, each
//! collecting increasing bids until the auction closes.
//!
//! Every operation comes in two flavours. The `try_*` ones return the
//! reason of a failure (or the structured outcome of a success), the
//! plain ones collapse that into a `bool`/`Option`. A failed call never
//! changes any state.
mod bid;
mod lot;

pub use self::{bid::*, lot::*};

use crate::report::ClosingReport;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuctionError {
    #[error("auction already closed")]
    AlreadyClosed,
    #[error("lot description is missing")]
    MissingDescription,
    #[error("lot number {0} is invalid")]
    InvalidLotNumber(LotNumber),
    #[error("lot number {0} does not exist")]
    NoSuchLot(LotNumber),
    #[error("bidder is missing")]
    MissingBidder,
    #[error("bid of {0} is negative")]
    NegativeBid(i64),
    #[error("lot number {0} already has a bid")]
    LotHasBid(LotNumber),
}

/// What happened to a valid bid request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BidOutcome {
    /// `bid` is now the highest bid of `lot`
    Accepted { lot: LotNumber, bid: Bid },
    /// `highest` was already at least as high, nothing changed
    Rejected { lot: LotNumber, highest: Bid },
}

impl BidOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BidOutcome::Accepted { .. })
    }

    pub fn lot(&self) -> LotNumber {
        match self {
            BidOutcome::Accepted { lot, .. } | BidOutcome::Rejected { lot, .. } => *lot,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Auction {
    /// In insertion order, not necessarily sorted by number
    lots: Vec<Lot>,
    /// Never decremented: numbers of removed lots are not reused
    next_lot_number: LotNumber,
    open: bool,
}

impl Default for Auction {
    fn default() -> Self {
        Self::new()
    }
}

impl Auction {
    pub fn new() -> Self {
        Self {
            lots: Vec::new(),
            next_lot_number: 1,
            open: true,
        }
    }

    /// Start a follow-up auction of the lots `previous` did not sell
    ///
    /// Only a closed `previous` passes its unsold lots (with their
    /// original numbers) and its lot counter on. An open or absent one
    /// gives a fresh auction.
    pub fn carry_forward(previous: Option<&Auction>) -> Self {
        match previous {
            Some(previous) if !previous.open => {
                let lots: Vec<Lot> = previous.get_no_bids().into_iter().cloned().collect();
                info!(
                    carried = lots.len(),
                    next_lot_number = previous.next_lot_number,
                    "carrying unsold lots forward"
                );
                Self {
                    lots,
                    next_lot_number: previous.next_lot_number,
                    open: true,
                }
            }
            _ => Self::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn next_lot_number(&self) -> LotNumber {
        self.next_lot_number
    }

    /// All lots, in storage order
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    fn ensure_open(&self) -> Result<(), AuctionError> {
        if self.open {
            Ok(())
        } else {
            Err(AuctionError::AlreadyClosed)
        }
    }

    fn ensure_valid_number(&self, number: LotNumber) -> Result<(), AuctionError> {
        if 1 <= number && number < self.next_lot_number {
            Ok(())
        } else {
            Err(AuctionError::InvalidLotNumber(number))
        }
    }

    fn position(&self, number: LotNumber) -> Result<usize, AuctionError> {
        self.ensure_valid_number(number)?;
        self.lots
            .iter()
            .position(|lot| lot.number() == number)
            .ok_or(AuctionError::NoSuchLot(number))
    }

    pub fn try_enter_lot(&mut self, description: Option<&str>) -> Result<LotNumber, AuctionError> {
        self.ensure_open()?;
        let description = description.ok_or(AuctionError::MissingDescription)?;

        let number = self.next_lot_number;
        self.lots.push(Lot::new(number, description.to_owned()));
        self.next_lot_number += 1;
        debug!(lot = number, description, "lot entered");
        Ok(number)
    }

    /// Enter a new lot under the next free number
    pub fn enter_lot(&mut self, description: Option<&str>) -> bool {
        self.try_enter_lot(description).is_ok()
    }

    pub fn try_get_lot(&self, number: LotNumber) -> Result<&Lot, AuctionError> {
        let i = self.position(number)?;
        Ok(&self.lots[i])
    }

    pub fn get_lot(&self, number: LotNumber) -> Option<&Lot> {
        self.try_get_lot(number).ok()
    }

    pub fn try_bid_for(
        &mut self,
        number: LotNumber,
        bidder: Option<&Person>,
        value: i64,
    ) -> Result<BidOutcome, AuctionError> {
        let i = self.position(number)?;
        self.ensure_open()?;
        let value = Amount::try_from(value).map_err(|_| AuctionError::NegativeBid(value))?;
        let bidder = bidder.ok_or(AuctionError::MissingBidder)?;

        let bid = Bid::new(bidder.clone(), value);
        match self.lots[i].place(bid.clone()) {
            Ok(()) => Ok(BidOutcome::Accepted { lot: number, bid }),
            Err(highest) => Ok(BidOutcome::Rejected {
                lot: number,
                highest,
            }),
        }
    }

    /// Place a bid on a lot
    ///
    /// `true` means the request itself was valid, not that the bid won:
    /// a too-low bid on an open auction still returns `true`. Inspect the
    /// lot's highest bid (or use [`Auction::try_bid_for`]) to tell.
    pub fn bid_for(&mut self, number: LotNumber, bidder: Option<&Person>, value: i64) -> bool {
        self.try_bid_for(number, bidder, value).is_ok()
    }

    pub fn try_close(&mut self) -> Result<ClosingReport, AuctionError> {
        self.ensure_open()?;
        self.open = false;

        let report = self.report();
        info!(
            sold = report.sold().count(),
            unsold = report.unsold().count(),
            "auction closed"
        );
        Ok(report)
    }

    pub fn close(&mut self) -> bool {
        self.try_close().is_ok()
    }

    /// Sold/unsold state of every lot as it stands now
    pub fn report(&self) -> ClosingReport {
        self.lots.iter().collect()
    }

    /// Lots without any bid, in storage order
    pub fn get_no_bids(&self) -> Vec<&Lot> {
        self.lots.iter().filter(|lot| !lot.has_bid()).collect()
    }

    pub fn try_remove_lot(&mut self, number: LotNumber) -> Result<Lot, AuctionError> {
        self.ensure_open()?;
        let i = self.position(number)?;
        if self.lots[i].has_bid() {
            return Err(AuctionError::LotHasBid(number));
        }

        debug!(lot = number, "lot removed");
        Ok(self.lots.remove(i))
    }

    /// Remove a lot that has not received any bid yet
    pub fn remove_lot(&mut self, number: LotNumber) -> bool {
        self.try_remove_lot(number).is_ok()
    }
}
