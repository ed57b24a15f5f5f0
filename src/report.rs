//! Closing report
//!
//! What each lot of an auction ended up as. Derived purely from
//! whether a lot holds a highest bid; rendering is left to the caller.
use crate::auction::{Amount, Lot, LotNumber, Person};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LotStatus {
    Sold { bidder: Person, value: Amount },
    Unsold,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LotReport {
    pub number: LotNumber,
    pub description: String,
    #[serde(flatten)]
    pub status: LotStatus,
}

impl LotReport {
    pub fn is_sold(&self) -> bool {
        matches!(self.status, LotStatus::Sold { .. })
    }
}

impl From<&Lot> for LotReport {
    fn from(lot: &Lot) -> Self {
        Self {
            number: lot.number(),
            description: lot.description().to_owned(),
            status: match lot.highest_bid() {
                Some(bid) => LotStatus::Sold {
                    bidder: bid.bidder().clone(),
                    value: bid.value(),
                },
                None => LotStatus::Unsold,
            },
        }
    }
}

/// Per-lot outcome, in the auction's storage order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClosingReport {
    pub lots: Vec<LotReport>,
}

impl ClosingReport {
    pub fn sold(&self) -> impl Iterator<Item = &LotReport> {
        self.lots.iter().filter(|lot| lot.is_sold())
    }

    pub fn unsold(&self) -> impl Iterator<Item = &LotReport> {
        self.lots.iter().filter(|lot| !lot.is_sold())
    }
}

impl<'a> FromIterator<&'a Lot> for ClosingReport {
    fn from_iter<I: IntoIterator<Item = &'a Lot>>(iter: I) -> Self {
        Self {
            lots: iter.into_iter().map(LotReport::from).collect(),
        }
    }
}
