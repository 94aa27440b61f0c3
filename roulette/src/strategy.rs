use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum_macros::EnumIter;

use crate::labels::Labels;
use crate::simulation::table::{Bet, Table};
use crate::simulation::wheel::{Bin, Outcome, Wheel};
use crate::{InvalidBet, StrategyKind};

/// The interface the game drives a player through.
pub trait Player {
    /// Whether the player will take part in the next round.
    fn playing(&self) -> bool;

    /// Places this round's bets on the table.
    fn place_bets(&mut self, table: &mut Table) -> Result<(), InvalidBet>;

    /// Notification that the bet paid out.
    fn win(&mut self, bet: &Bet);

    /// Notification that the bet lost.
    fn lose(&mut self, bet: &Bet);

    /// Notification of every outcome the winning bin pays, including ones the
    /// player did not bet on. Strategies that follow trends hook in here.
    fn update_winners(&mut self, winners: &Bin) {
        let _ = winners;
    }

    /// Called once at the end of every resolved round; implementations count
    /// the round against their budget here.
    fn end_round(&mut self);
}

/// The four states of the 1-3-2-6 progression. Pure values: two players in
/// `OneWin` are in the same state, there is no per-state identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Progression {
    NoWins,
    OneWin,
    TwoWins,
    ThreeWins,
}

impl Progression {
    pub fn multiplier(self) -> u32 {
        match self {
            Progression::NoWins => 1,
            Progression::OneWin => 3,
            Progression::TwoWins => 2,
            Progression::ThreeWins => 6,
        }
    }

    pub fn next_won(self) -> Self {
        match self {
            Progression::NoWins => Progression::OneWin,
            Progression::OneWin => Progression::TwoWins,
            Progression::TwoWins => Progression::ThreeWins,
            Progression::ThreeWins => Progression::NoWins,
        }
    }

    pub fn next_lost(self) -> Self {
        Progression::NoWins
    }
}

/// The per-strategy decision state. Fixed-outcome strategies carry the
/// outcome they always back; the random bettor carries the whole catalogue
/// and its own generator.
#[derive(Debug)]
pub enum BettingStrategy {
    /// The same amount on the same outcome, round after round.
    Flat { outcome: Outcome },
    /// The base amount on a uniformly chosen catalogue outcome.
    Random {
        outcomes: Vec<Outcome>,
        rng: StdRng,
    },
    /// Double after every loss, reset after a win. No cap: the bankroll is
    /// the only thing that stops the doubling.
    Martingale {
        outcome: Outcome,
        loss_count: u32,
        bet_multiple: u32,
    },
    /// The 1-3-2-6 progression against one even-money outcome.
    OneThreeTwoSix {
        outcome: Outcome,
        state: Progression,
    },
}

/// A player session: a stake, a round budget and a betting strategy. The
/// stake is debited when a bet is placed and credited with stake plus
/// winnings when the bet wins; a lost bet costs nothing further.
#[derive(Debug)]
pub struct Gambler {
    pub stake: u32,
    pub rounds_to_go: u32,
    base_bet: u32,
    strategy: BettingStrategy,
}

impl Gambler {
    /// Builds a player of the given kind. Fixed-outcome strategies back the
    /// "black" proposition resolved through the labels; the random bettor
    /// takes the wheel's whole catalogue. Panics if the wheel was not built
    /// with the named outcome.
    pub fn new(
        kind: StrategyKind,
        wheel: &Wheel,
        labels: &Labels,
        base_bet: u32,
        stake: u32,
        rounds_to_go: u32,
    ) -> Self {
        let strategy = match kind {
            StrategyKind::Flat => BettingStrategy::Flat {
                outcome: fixed_outcome(wheel, labels),
            },
            StrategyKind::Random => BettingStrategy::Random {
                outcomes: wheel.outcomes().cloned().collect(),
                rng: StdRng::from_entropy(),
            },
            StrategyKind::Martingale => BettingStrategy::Martingale {
                outcome: fixed_outcome(wheel, labels),
                loss_count: 0,
                bet_multiple: 1,
            },
            StrategyKind::OneThreeTwoSix => BettingStrategy::OneThreeTwoSix {
                outcome: fixed_outcome(wheel, labels),
                state: Progression::NoWins,
            },
        };
        Self::with_strategy(strategy, base_bet, stake, rounds_to_go)
    }

    pub fn with_strategy(
        strategy: BettingStrategy,
        base_bet: u32,
        stake: u32,
        rounds_to_go: u32,
    ) -> Self {
        Gambler {
            stake,
            rounds_to_go,
            base_bet,
            strategy,
        }
    }

    pub fn strategy(&self) -> &BettingStrategy {
        &self.strategy
    }

    pub fn base_bet(&self) -> u32 {
        self.base_bet
    }

    /// The amount the strategy will wager next round.
    pub fn next_bet_amount(&self) -> u32 {
        match &self.strategy {
            BettingStrategy::Flat { .. } | BettingStrategy::Random { .. } => self.base_bet,
            BettingStrategy::Martingale { bet_multiple, .. } => self.base_bet * bet_multiple,
            BettingStrategy::OneThreeTwoSix { state, .. } => self.base_bet * state.multiplier(),
        }
    }
}

impl Player for Gambler {
    /// Stops before a bet would be unaffordable, and when the round budget
    /// runs out.
    fn playing(&self) -> bool {
        self.rounds_to_go > 0 && self.next_bet_amount() <= self.stake
    }

    fn place_bets(&mut self, table: &mut Table) -> Result<(), InvalidBet> {
        let amount = self.next_bet_amount();
        let outcome = match &mut self.strategy {
            BettingStrategy::Flat { outcome }
            | BettingStrategy::Martingale { outcome, .. }
            | BettingStrategy::OneThreeTwoSix { outcome, .. } => outcome.clone(),
            BettingStrategy::Random { outcomes, rng } => {
                outcomes[rng.gen_range(0..outcomes.len())].clone()
            }
        };

        table.place_bet(Bet::new(amount, outcome))?;
        self.stake -= amount;
        Ok(())
    }

    fn win(&mut self, bet: &Bet) {
        self.stake += bet.win_amount();
        match &mut self.strategy {
            BettingStrategy::Martingale {
                loss_count,
                bet_multiple,
                ..
            } => {
                *loss_count = 0;
                *bet_multiple = 1;
            }
            BettingStrategy::OneThreeTwoSix { state, .. } => *state = state.next_won(),
            _ => {}
        }
        log::debug!("won {}, stake is now {}", bet, self.stake);
    }

    fn lose(&mut self, bet: &Bet) {
        match &mut self.strategy {
            BettingStrategy::Martingale {
                loss_count,
                bet_multiple,
                ..
            } => {
                *loss_count += 1;
                *bet_multiple *= 2;
            }
            BettingStrategy::OneThreeTwoSix { state, .. } => *state = state.next_lost(),
            _ => {}
        }
        log::debug!("lost {}, stake is now {}", bet, self.stake);
    }

    fn end_round(&mut self) {
        self.rounds_to_go = self.rounds_to_go.saturating_sub(1);
    }
}

fn fixed_outcome(wheel: &Wheel, labels: &Labels) -> Outcome {
    let name = labels.get("black");
    wheel
        .outcome(name)
        .cloned()
        .unwrap_or_else(|| panic!("wheel has no outcome named {:?}", name))
}
