pub mod builder;
pub mod table;
pub mod wheel;

use crate::strategy::Player;
use crate::InvalidBet;

use self::table::{Bet, Table};
use self::wheel::Wheel;

/// Runs the round cycle of Roulette: ask the player to bet, spin the wheel,
/// split the table's bets into winners and losers, notify the player, and
/// count the round against the player's budget.
pub struct Game {
    wheel: Wheel,
    table: Table,
}

impl Game {
    pub fn new(wheel: Wheel, table: Table) -> Self {
        Game { wheel, table }
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Executes one round of play with the given player.
    ///
    /// A player that is not playing skips the round entirely. An invalid bet
    /// aborts the round before the wheel is spun, leaves the round budget
    /// untouched and surfaces to the caller; it is never retried here.
    ///
    /// Bets are resolved in placement order, and every win notification is
    /// delivered before any loss notification. Progression strategies depend
    /// on that ordering when more than one bet is outstanding.
    pub fn cycle<P: Player>(&mut self, player: &mut P) -> Result<(), InvalidBet> {
        if !player.playing() {
            return Ok(());
        }

        player.place_bets(&mut self.table)?;

        let winning_bin = self.wheel.next();

        let mut winning_bets: Vec<Bet> = Vec::new();
        let mut losing_bets: Vec<Bet> = Vec::new();
        for bet in self.table.take_bets() {
            if winning_bin.contains(bet.outcome()) {
                winning_bets.push(bet);
            } else {
                losing_bets.push(bet);
            }
        }
        log::debug!(
            "round resolved: {} winning, {} losing",
            winning_bets.len(),
            losing_bets.len()
        );

        for bet in &winning_bets {
            player.win(bet);
        }
        for bet in &losing_bets {
            player.lose(bet);
        }

        player.update_winners(winning_bin);
        player.end_round();

        Ok(())
    }
}
