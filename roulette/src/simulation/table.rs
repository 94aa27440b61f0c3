use std::fmt;

use crate::InvalidBet;

use super::wheel::Outcome;

/// An amount wagered on one outcome. Immutable once placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    amount: u32,
    outcome: Outcome,
}

impl Bet {
    pub fn new(amount: u32, outcome: Outcome) -> Self {
        Bet { amount, outcome }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// What the player receives when this bet wins: the winnings at the
    /// outcome's odds plus the stake back.
    pub fn win_amount(&self) -> u32 {
        self.outcome.win_amount(self.amount) + self.amount
    }

    /// What the player forfeits when this bet loses.
    pub fn lose_amount(&self) -> u32 {
        self.amount
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.amount, self.outcome)
    }
}

/// Holds the bets of the current round and enforces the table's limit rules:
/// every bet is at least the minimum, and the bets together stay within the
/// limit. The whole pending collection is re-validated on every placement.
#[derive(Debug)]
pub struct Table {
    bets: Vec<Bet>,
    minimum: u32,
    limit: u32,
}

impl Table {
    pub fn new(minimum: u32, limit: u32) -> Self {
        Table {
            bets: Vec::new(),
            minimum,
            limit,
        }
    }

    pub fn minimum(&self) -> u32 {
        self.minimum
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Appends the bet, then re-validates the whole pending collection. If the
    /// rules no longer hold the append is undone and the table is exactly as
    /// it was before the call.
    pub fn place_bet(&mut self, bet: Bet) -> Result<(), InvalidBet> {
        self.bets.push(bet);
        if let Err(invalid) = self.validate() {
            self.bets.pop();
            return Err(invalid);
        }
        Ok(())
    }

    /// Checks the table-limit rules over all pending bets, reporting the first
    /// violation found.
    pub fn validate(&self) -> Result<(), InvalidBet> {
        for bet in &self.bets {
            if bet.amount() < self.minimum {
                return Err(InvalidBet::BelowMinimum {
                    amount: bet.amount(),
                    minimum: self.minimum,
                });
            }
        }

        let total: u32 = self.bets.iter().map(Bet::amount).sum();
        if total > self.limit {
            return Err(InvalidBet::OverLimit {
                total,
                limit: self.limit,
            });
        }

        Ok(())
    }

    /// The pending bets in placement order.
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Removes and returns all pending bets in placement order, leaving the
    /// table empty for the next round.
    pub fn take_bets(&mut self) -> Vec<Bet> {
        std::mem::take(&mut self.bets)
    }

    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, odds: u32) -> Outcome {
        Outcome::new(name, odds)
    }

    #[test]
    fn bet_win_amount_returns_stake_plus_winnings() {
        let bet = Bet::new(5, outcome("Black", 1));
        assert_eq!(bet.win_amount(), 10);
        assert_eq!(bet.lose_amount(), 5);

        let bet = Bet::new(2, outcome("17", 35));
        assert_eq!(bet.win_amount(), 72);
        assert_eq!(bet.lose_amount(), 2);
    }

    #[test]
    fn bet_below_minimum_is_rejected_without_mutation() {
        let mut table = Table::new(1, 100);
        let result = table.place_bet(Bet::new(0, outcome("Black", 1)));

        assert_eq!(
            result,
            Err(InvalidBet::BelowMinimum {
                amount: 0,
                minimum: 1
            })
        );
        assert!(table.is_empty());
    }

    #[test]
    fn bets_over_the_limit_are_rejected_without_mutation() {
        let mut table = Table::new(1, 10);
        table.place_bet(Bet::new(6, outcome("Black", 1))).unwrap();

        let result = table.place_bet(Bet::new(5, outcome("Red", 1)));
        assert_eq!(result, Err(InvalidBet::OverLimit { total: 11, limit: 10 }));

        // The earlier valid bet is untouched.
        assert_eq!(table.bets(), &[Bet::new(6, outcome("Black", 1))]);
    }

    #[test]
    fn bet_exactly_at_the_limit_is_accepted() {
        let mut table = Table::new(1, 10);
        table.place_bet(Bet::new(6, outcome("Black", 1))).unwrap();
        table.place_bet(Bet::new(4, outcome("Red", 1))).unwrap();
        assert_eq!(table.bets().len(), 2);
    }

    #[test]
    fn take_bets_preserves_placement_order_and_empties_the_table() {
        let mut table = Table::new(1, 100);
        table.place_bet(Bet::new(1, outcome("Black", 1))).unwrap();
        table.place_bet(Bet::new(2, outcome("17", 35))).unwrap();
        table.place_bet(Bet::new(3, outcome("Dozen 1", 2))).unwrap();

        let bets = table.take_bets();
        let amounts: Vec<u32> = bets.iter().map(Bet::amount).collect();
        assert_eq!(amounts, vec![1, 2, 3]);
        assert!(table.is_empty());
    }
}
