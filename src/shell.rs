//! Line-oriented text front-end
//!
//! Parses one command per line, runs it against the current auction and
//! renders the result as text.
use anyhow::Result;
use lot_auction::{Auction, AuctionError, BidOutcome, Lot, LotNumber, LotStatus, Person};
use std::{num::ParseIntError, str::FromStr};
use thiserror::Error;
use tracing::debug;

pub const HELP: &str = "\
commands:
  enter <description>          enter a new lot
  bid <lot> <bidder> <value>   bid for a lot
  lot <lot>                    show a single lot
  show                         show all lots
  unsold                       show lots without bids
  remove <lot>                 remove a lot without bids
  close                        close the auction
  report                       print the closing report as JSON
  next                         start a new auction with the unsold lots
  help                         this text
  quit                         exit";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("not a number: {value}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Enter(Option<String>),
    Bid {
        lot: LotNumber,
        bidder: String,
        value: i64,
    },
    Lot(LotNumber),
    Show,
    Unsold,
    Remove(LotNumber),
    Close,
    Report,
    Next,
    Help,
    Quit,
}

fn parse_number<T>(arg: Option<&str>, name: &'static str) -> Result<T, ShellError>
where
    T: FromStr<Err = ParseIntError>,
{
    let arg = arg.ok_or(ShellError::MissingArgument(name))?;
    arg.parse().map_err(|source| ShellError::InvalidNumber {
        value: arg.to_owned(),
        source,
    })
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        Ok(match name {
            "enter" => Command::Enter(Some(rest).filter(|d| !d.is_empty()).map(str::to_owned)),
            "bid" => Command::Bid {
                lot: parse_number(args.next(), "lot")?,
                bidder: args
                    .next()
                    .ok_or(ShellError::MissingArgument("bidder"))?
                    .to_owned(),
                value: parse_number(args.next(), "value")?,
            },
            "lot" => Command::Lot(parse_number(args.next(), "lot")?),
            "show" => Command::Show,
            "unsold" => Command::Unsold,
            "remove" => Command::Remove(parse_number(args.next(), "lot")?),
            "close" => Command::Close,
            "report" => Command::Report,
            "next" => Command::Next,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_owned())),
        })
    }
}

pub enum Step {
    Continue(Vec<String>),
    Quit,
}

fn render_lot(lot: &Lot) -> String {
    match lot.highest_bid() {
        Some(bid) => format!(
            "{}: {}    Bid: {} by {}",
            lot.number(),
            lot.description(),
            bid.value(),
            bid.bidder().name()
        ),
        None => format!("{}: {}    (No bid)", lot.number(), lot.description()),
    }
}

fn render_error(err: AuctionError) -> String {
    match err {
        AuctionError::InvalidLotNumber(n) => format!("Lot number: {n} is invalid"),
        AuctionError::NoSuchLot(n) => format!("Lot number: {n} does not exist."),
        other => format!("Error: {other}"),
    }
}

#[derive(Default)]
pub struct Shell {
    auction: Auction,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auction(&self) -> &Auction {
        &self.auction
    }

    pub fn execute(&mut self, command: Command) -> Result<Step> {
        debug!(?command, "command");
        let lines = match command {
            Command::Enter(description) => {
                match self.auction.try_enter_lot(description.as_deref()) {
                    Ok(number) => vec![format!(
                        "Lot {number} entered: {}",
                        description.unwrap_or_default()
                    )],
                    Err(e) => vec![render_error(e)],
                }
            }
            Command::Bid { lot, bidder, value } => {
                let bidder = Person::new(bidder);
                match self.auction.try_bid_for(lot, Some(&bidder), value) {
                    Ok(BidOutcome::Accepted { lot, bid }) => vec![
                        format!("The bid for lot number {lot} was successful."),
                        format!(
                            "Lot number: {lot}, highest bidder: {}, bid value: {}",
                            bid.bidder().name(),
                            bid.value()
                        ),
                    ],
                    Ok(BidOutcome::Rejected { lot, highest }) => vec![format!(
                        "Lot number: {lot} already has a bid of: {}",
                        highest.value()
                    )],
                    Err(e) => vec![render_error(e)],
                }
            }
            Command::Lot(number) => match self.auction.try_get_lot(number) {
                Ok(lot) => vec![render_lot(lot)],
                Err(e) => vec![render_error(e)],
            },
            Command::Show => {
                if self.auction.lots().is_empty() {
                    vec!["No lots have been entered yet".to_owned()]
                } else {
                    self.auction.lots().iter().map(render_lot).collect()
                }
            }
            Command::Unsold => {
                let unsold = self.auction.get_no_bids();
                if unsold.is_empty() {
                    vec!["Every lot has a bid".to_owned()]
                } else {
                    unsold.into_iter().map(render_lot).collect()
                }
            }
            Command::Remove(number) => match self.auction.try_remove_lot(number) {
                Ok(lot) => vec![format!("Lot {} removed: {}", lot.number(), lot.description())],
                Err(e) => vec![render_error(e)],
            },
            Command::Close => match self.auction.try_close() {
                Ok(report) => report
                    .lots
                    .iter()
                    .map(|lot| match &lot.status {
                        LotStatus::Sold { bidder, value } => format!(
                            "{} sold for {} to {}",
                            lot.description,
                            value,
                            bidder.name()
                        ),
                        LotStatus::Unsold => format!("{} has not been sold", lot.description),
                    })
                    .collect(),
                Err(e) => vec![render_error(e)],
            },
            Command::Report => vec![serde_json::to_string_pretty(&self.auction.report())?],
            Command::Next => {
                if self.auction.is_open() {
                    vec!["Error: auction must be closed before starting the next one".to_owned()]
                } else {
                    self.auction = Auction::carry_forward(Some(&self.auction));
                    vec![format!(
                        "New auction started with {} unsold lot(s)",
                        self.auction.lots().len()
                    )]
                }
            }
            Command::Help => vec![HELP.to_owned()],
            Command::Quit => return Ok(Step::Quit),
        };
        Ok(Step::Continue(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(shell: &mut Shell, line: &str) -> Result<Vec<String>> {
        match shell.execute(line.parse()?)? {
            Step::Continue(lines) => Ok(lines),
            Step::Quit => Ok(vec![]),
        }
    }

    #[test]
    fn parses_commands() -> Result<()> {
        assert_eq!(
            "enter  Antique vase ".parse::<Command>()?,
            Command::Enter(Some("Antique vase".to_owned()))
        );
        assert_eq!("enter".parse::<Command>()?, Command::Enter(None));
        assert_eq!(
            "bid 1 alice 50".parse::<Command>()?,
            Command::Bid {
                lot: 1,
                bidder: "alice".to_owned(),
                value: 50
            }
        );
        assert_eq!(
            "bid 1 alice -5".parse::<Command>()?,
            Command::Bid {
                lot: 1,
                bidder: "alice".to_owned(),
                value: -5
            }
        );
        assert_eq!("exit".parse::<Command>()?, Command::Quit);
        Ok(())
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(matches!(
            "sell 1".parse::<Command>(),
            Err(ShellError::UnknownCommand(c)) if c == "sell"
        ));
        assert!(matches!(
            "bid 1".parse::<Command>(),
            Err(ShellError::MissingArgument("bidder"))
        ));
        assert!(matches!(
            "lot one".parse::<Command>(),
            Err(ShellError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn renders_a_whole_auction() -> Result<()> {
        let mut shell = Shell::new();

        assert_eq!(run(&mut shell, "show")?, vec!["No lots have been entered yet"]);
        assert_eq!(run(&mut shell, "enter Vase")?, vec!["Lot 1 entered: Vase"]);
        assert_eq!(run(&mut shell, "enter Chair")?, vec!["Lot 2 entered: Chair"]);
        assert_eq!(
            run(&mut shell, "bid 1 alice 50")?,
            vec![
                "The bid for lot number 1 was successful.",
                "Lot number: 1, highest bidder: alice, bid value: 50",
            ]
        );
        assert_eq!(
            run(&mut shell, "bid 1 bob 40")?,
            vec!["Lot number: 1 already has a bid of: 50"]
        );
        assert_eq!(run(&mut shell, "lot 7")?, vec!["Lot number: 7 is invalid"]);
        assert_eq!(
            run(&mut shell, "show")?,
            vec!["1: Vase    Bid: 50 by alice", "2: Chair    (No bid)"]
        );
        assert_eq!(
            run(&mut shell, "close")?,
            vec!["Vase sold for 50 to alice", "Chair has not been sold"]
        );
        assert_eq!(
            run(&mut shell, "close")?,
            vec!["Error: auction already closed"]
        );
        assert_eq!(
            run(&mut shell, "next")?,
            vec!["New auction started with 1 unsold lot(s)"]
        );
        assert_eq!(run(&mut shell, "show")?, vec!["2: Chair    (No bid)"]);
        assert_eq!(run(&mut shell, "enter Lamp")?, vec!["Lot 3 entered: Lamp"]);
        Ok(())
    }

    #[test]
    fn next_requires_a_closed_auction() -> Result<()> {
        let mut shell = Shell::new();
        run(&mut shell, "enter Vase")?;

        assert_eq!(
            run(&mut shell, "next")?,
            vec!["Error: auction must be closed before starting the next one"]
        );
        assert_eq!(shell.auction().lots().len(), 1);
        Ok(())
    }

    #[test]
    fn report_is_json() -> Result<()> {
        let mut shell = Shell::new();
        run(&mut shell, "enter Vase")?;

        let lines = run(&mut shell, "report")?;
        let value: serde_json::Value = serde_json::from_str(&lines[0])?;
        assert_eq!(
            value,
            serde_json::json!({
                "lots": [{ "number": 1, "description": "Vase", "status": "unsold" }]
            })
        );
        Ok(())
    }
}
