use serde::Serialize;

pub type Amount = u64;

/// Someone taking part in an auction
///
/// Only carries a name; two people with the same name are
/// indistinguishable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A bid of some `value` placed by `bidder`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Bid {
    bidder: Person,
    value: Amount,
}

impl Bid {
    pub fn new(bidder: Person, value: Amount) -> Self {
        Self { bidder, value }
    }

    pub fn bidder(&self) -> &Person {
        &self.bidder
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub(crate) fn is_outbidded_by(&self, other: Amount) -> bool {
        self.value < other
    }
}
