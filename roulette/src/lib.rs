pub mod labels;
pub mod simulation;
pub mod statistics;
pub mod strategy;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use thiserror::Error;

pub use simulation::table::{Bet, Table};
pub use simulation::wheel::{Bin, Outcome, Wheel};
pub use simulation::Game;
pub use strategy::{Gambler, Player};

/// Raised when the bets pending on a table break its limit rules. The table
/// rejects the whole pending set for that attempt; nothing is silently
/// truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidBet {
    #[error("bet of {amount} is below the table minimum of {minimum}")]
    BelowMinimum { amount: u32, minimum: u32 },
    #[error("bets totalling {total} exceed the table limit of {limit}")]
    OverLimit { total: u32, limit: u32 },
}

/// The betting strategies a driver can ask for by name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize_enum_str, Deserialize_enum_str)]
pub enum StrategyKind {
    Flat,
    Random,
    Martingale,
    OneThreeTwoSix,
}
