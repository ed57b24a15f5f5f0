use crate::{AuctionError, LockedAuction, Person};
use anyhow::{format_err, Result};
use std::{sync::Arc, thread};

#[test]
fn concurrent_entries_get_distinct_sequential_numbers() -> Result<()> {
    let auction = LockedAuction::new_shared();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let auction = auction.clone();
            thread::spawn(move || -> Result<Vec<u64>, AuctionError> {
                (0..25)
                    .map(|i| auction.enter_lot(Some(format!("lot {t}/{i}").as_str())))
                    .collect()
            })
        })
        .collect();

    let mut numbers = vec![];
    for handle in handles {
        numbers.extend(
            handle
                .join()
                .map_err(|e| format_err!("join failed: {:?}", e))??,
        );
    }
    numbers.sort_unstable();

    assert_eq!(numbers, (1..=200).collect::<Vec<_>>());
    assert_eq!(auction.snapshot().next_lot_number(), 201);
    Ok(())
}

#[test]
fn concurrent_bids_keep_the_maximum() -> Result<()> {
    let auction = LockedAuction::new_shared();
    auction.enter_lot(Some("Vase"))?;

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let auction = auction.clone();
            thread::spawn(move || -> Result<(), AuctionError> {
                let bidder = Person::new(format!("bidder {t}"));
                for value in (0..100).map(|v| v * 4 + t) {
                    auction.bid_for(1, Some(&bidder), value)?;
                }
                Ok(())
            })
        })
        .collect();
    for handle in handles {
        handle
            .join()
            .map_err(|e| format_err!("join failed: {:?}", e))??;
    }

    let lot = auction.get_lot(1)?;
    let highest = lot.highest_bid().ok_or_else(|| format_err!("no bid"))?;
    assert_eq!(highest.value(), 399);
    assert_eq!(highest.bidder().name(), "bidder 3");
    Ok(())
}

#[test]
fn carry_forward_from_locked_auction() -> Result<()> {
    let first = LockedAuction::new();
    first.enter_lot(Some("Vase"))?;
    first.enter_lot(Some("Chair"))?;
    first.bid_for(1, Some(&Person::new("alice")), 10)?;
    assert_eq!(first.remove_lot(1), Err(AuctionError::LotHasBid(1)));
    first.close()?;
    assert_eq!(first.close(), Err(AuctionError::AlreadyClosed));

    let second = Arc::new(LockedAuction::carry_forward(&first));
    assert_eq!(
        second
            .get_no_bids()
            .iter()
            .map(|lot| lot.number())
            .collect::<Vec<_>>(),
        vec![2]
    );
    assert_eq!(second.enter_lot(Some("Lamp"))?, 3);
    assert_eq!(second.remove_lot(2)?.description(), "Chair");
    assert!(first.into_inner().get_lot(2).is_some());
    Ok(())
}
