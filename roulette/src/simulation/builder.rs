use crate::labels::Labels;

use super::wheel::{Outcome, Wheel, DOUBLE_ZERO};

// Inside bet payouts.
pub const STRAIGHT_BET_PAYOUT: u32 = 35;
pub const SPLIT_BET_PAYOUT: u32 = 17;
pub const STREET_BET_PAYOUT: u32 = 11;
pub const CORNER_BET_PAYOUT: u32 = 8;
pub const FIVE_BET_PAYOUT: u32 = 6;
pub const LINE_BET_PAYOUT: u32 = 5;

// Outside bet payouts.
pub const DOZEN_BET_PAYOUT: u32 = 2;
pub const COLUMN_BET_PAYOUT: u32 = 2;
pub const EVEN_MONEY_BET_PAYOUT: u32 = 1;

/// The red numbers of a standard American layout. Every other number from 1 to
/// 36 is black; 0 and 00 are neither.
const RED_NUMBERS: [usize; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Populates a wheel's 38 bins with the complete catalogue of Roulette
/// outcomes: straight, split, street, corner, five bet, line, dozen, column
/// and the even-money propositions. Display names are drawn from the injected
/// label mapping, so a localized mapping produces a localized catalogue.
pub struct BinBuilder<'a> {
    labels: &'a Labels,
}

impl<'a> BinBuilder<'a> {
    pub fn new(labels: &'a Labels) -> Self {
        BinBuilder { labels }
    }

    /// Creates every outcome and places it in the appropriate bins. Must run
    /// exactly once before the wheel is spun or searched.
    pub fn build_bins(&self, wheel: &mut Wheel) {
        self.build_straight_bets(wheel);
        self.build_split_bets(wheel);
        self.build_street_bets(wheel);
        self.build_corner_bets(wheel);
        self.build_five_bet(wheel);
        self.build_line_bets(wheel);
        self.build_dozen_bets(wheel);
        self.build_column_bets(wheel);
        self.build_even_money_bets(wheel);
    }

    fn build_straight_bets(&self, wheel: &mut Wheel) {
        wheel.add_outcome(0, Outcome::new("0", STRAIGHT_BET_PAYOUT));
        for number in 1..=36 {
            wheel.add_outcome(number, Outcome::new(number.to_string(), STRAIGHT_BET_PAYOUT));
        }
        wheel.add_outcome(DOUBLE_ZERO, Outcome::new("00", STRAIGHT_BET_PAYOUT));
    }

    fn build_split_bets(&self, wheel: &mut Wheel) {
        // Left-right pairs within a row of the layout.
        for row in 0..12 {
            for column in 0..2 {
                let number = 3 * row + column + 1;
                self.add_split(wheel, number, number + 1);
            }
        }
        // Up-down pairs between adjacent rows.
        for number in 1..=33 {
            self.add_split(wheel, number, number + 3);
        }
    }

    fn add_split(&self, wheel: &mut Wheel, first: usize, second: usize) {
        let name = format!("{} {}-{}", self.labels.get("split"), first, second);
        wheel.add_outcome(first, Outcome::new(name.clone(), SPLIT_BET_PAYOUT));
        wheel.add_outcome(second, Outcome::new(name, SPLIT_BET_PAYOUT));
    }

    fn build_street_bets(&self, wheel: &mut Wheel) {
        for row in 0..12 {
            let first = 3 * row + 1;
            let name = format!(
                "{} {}",
                self.labels.get("street"),
                join_numbers(first..first + 3)
            );
            for number in first..first + 3 {
                wheel.add_outcome(number, Outcome::new(name.clone(), STREET_BET_PAYOUT));
            }
        }
    }

    fn build_corner_bets(&self, wheel: &mut Wheel) {
        for row in 0..11 {
            for column in 0..2 {
                let number = 3 * row + column + 1;
                let corner = [number, number + 1, number + 3, number + 4];
                let name = format!(
                    "{} {}",
                    self.labels.get("corner"),
                    join_numbers(corner.into_iter())
                );
                for number in corner {
                    wheel.add_outcome(number, Outcome::new(name.clone(), CORNER_BET_PAYOUT));
                }
            }
        }
    }

    fn build_five_bet(&self, wheel: &mut Wheel) {
        let name = self.labels.get("five").to_string();
        for bin in [0, DOUBLE_ZERO, 1, 2, 3] {
            wheel.add_outcome(bin, Outcome::new(name.clone(), FIVE_BET_PAYOUT));
        }
    }

    fn build_line_bets(&self, wheel: &mut Wheel) {
        for row in 0..11 {
            let first = 3 * row + 1;
            let name = format!(
                "{} {}",
                self.labels.get("line"),
                join_numbers(first..first + 6)
            );
            for number in first..first + 6 {
                wheel.add_outcome(number, Outcome::new(name.clone(), LINE_BET_PAYOUT));
            }
        }
    }

    fn build_dozen_bets(&self, wheel: &mut Wheel) {
        for dozen in 0..3 {
            let name = format!("{} {}", self.labels.get("dozen"), dozen + 1);
            for offset in 1..=12 {
                wheel.add_outcome(12 * dozen + offset, Outcome::new(name.clone(), DOZEN_BET_PAYOUT));
            }
        }
    }

    fn build_column_bets(&self, wheel: &mut Wheel) {
        for column in 0..3 {
            let name = format!("{} {}", self.labels.get("column"), column + 1);
            for row in 0..12 {
                wheel.add_outcome(3 * row + column + 1, Outcome::new(name.clone(), COLUMN_BET_PAYOUT));
            }
        }
    }

    fn build_even_money_bets(&self, wheel: &mut Wheel) {
        let red = Outcome::new(self.labels.get("red"), EVEN_MONEY_BET_PAYOUT);
        let black = Outcome::new(self.labels.get("black"), EVEN_MONEY_BET_PAYOUT);
        let even = Outcome::new(self.labels.get("even"), EVEN_MONEY_BET_PAYOUT);
        let odd = Outcome::new(self.labels.get("odd"), EVEN_MONEY_BET_PAYOUT);
        let low = Outcome::new(self.labels.get("low"), EVEN_MONEY_BET_PAYOUT);
        let high = Outcome::new(self.labels.get("high"), EVEN_MONEY_BET_PAYOUT);

        for number in 1..=36 {
            if number < 19 {
                wheel.add_outcome(number, low.clone());
            } else {
                wheel.add_outcome(number, high.clone());
            }

            if number % 2 == 0 {
                wheel.add_outcome(number, even.clone());
            } else {
                wheel.add_outcome(number, odd.clone());
            }

            if RED_NUMBERS.contains(&number) {
                wheel.add_outcome(number, red.clone());
            } else {
                wheel.add_outcome(number, black.clone());
            }
        }
    }
}

fn join_numbers(numbers: impl Iterator<Item = usize>) -> String {
    numbers
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("-")
}
