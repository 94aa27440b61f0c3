use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single-zero plus double-zero wheel: 0, 1 through 36, and 00.
pub const NUMBER_OF_BINS: usize = 38;

/// The bin index of 00, by convention the last one.
pub const DOUBLE_ZERO: usize = 37;

/// A single proposition on which a bet can be placed, such as "1", "Red" or
/// "Split 1-2", together with its payout odds. Odds keep only the numerator;
/// the denominator is always 1.
///
/// Two outcomes are equal when their names are equal, regardless of odds.
#[derive(Debug, Clone, Eq)]
pub struct Outcome {
    name: String,
    odds: u32,
}

impl Outcome {
    pub fn new(name: impl Into<String>, odds: u32) -> Self {
        Outcome {
            name: name.into(),
            odds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn odds(&self) -> u32 {
        self.odds
    }

    /// The winnings for the given amount at these odds, excluding the stake.
    pub fn win_amount(&self, amount: u32) -> u32 {
        self.odds * amount
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Hash for Outcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:1)", self.name, self.odds)
    }
}

/// The set of outcomes that pay out together when the ball lands on one wheel
/// position. Bins are filled once during setup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bin {
    outcomes: HashSet<Outcome>,
}

impl Bin {
    pub fn new() -> Self {
        Bin::default()
    }

    /// Adds an outcome to this bin. Returns false if an equal-named outcome is
    /// already present; the first insertion wins and later odds are dropped.
    pub fn add(&mut self, outcome: Outcome) -> bool {
        self.outcomes.insert(outcome)
    }

    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.contains(outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// The 38 bins of a Roulette wheel plus the random number generator that
/// selects one of them per spin.
///
/// The wheel itself knows nothing about Roulette rules. Which outcomes live in
/// which bin is entirely decided by the builder that populates it, so the same
/// wheel works for any discrete random-outcome selection with a different
/// catalogue.
#[derive(Debug)]
pub struct Wheel {
    bins: Vec<Bin>,
    all_outcomes: BTreeMap<String, Outcome>,
    rng: StdRng,
}

impl Wheel {
    /// Creates a wheel with 38 empty bins, seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a wheel with 38 empty bins and the given generator. Tests pass
    /// a seeded generator here to make spins reproducible.
    pub fn with_rng(rng: StdRng) -> Self {
        Wheel {
            bins: vec![Bin::new(); NUMBER_OF_BINS],
            all_outcomes: BTreeMap::new(),
            rng,
        }
    }

    /// Adds the outcome to the bin with the given number and records it in the
    /// catalogue of known outcomes. Panics if the bin number is out of range;
    /// callers addressing a bin outside the wheel is a programming error.
    pub fn add_outcome(&mut self, bin: usize, outcome: Outcome) {
        assert!(
            bin < NUMBER_OF_BINS,
            "bin number {} out of range 0..{}",
            bin,
            NUMBER_OF_BINS
        );
        self.all_outcomes
            .entry(outcome.name().to_string())
            .or_insert_with(|| outcome.clone());
        self.bins[bin].add(outcome);
    }

    /// Spins the wheel: draws a uniform bin number and returns that bin.
    pub fn next(&mut self) -> &Bin {
        let bin = self.rng.gen_range(0..NUMBER_OF_BINS);
        log::trace!("wheel stopped on bin {}", bin);
        &self.bins[bin]
    }

    /// Returns the bin with the given number. Same range contract as
    /// [`Wheel::add_outcome`].
    pub fn get(&self, bin: usize) -> &Bin {
        assert!(
            bin < NUMBER_OF_BINS,
            "bin number {} out of range 0..{}",
            bin,
            NUMBER_OF_BINS
        );
        &self.bins[bin]
    }

    /// Looks up a previously added outcome by its display name.
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.all_outcomes.get(name)
    }

    /// All distinct outcomes added to this wheel, in name order.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.all_outcomes.values()
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Wheel::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_with_equal_names_are_equal() {
        let one = Outcome::new("Name 1", 1);
        let same_name = Outcome::new("Name 1", 35);
        let other = Outcome::new("Name 2", 1);

        assert_eq!(one, same_name);
        assert_ne!(one, other);
        assert_ne!(same_name, other);
    }

    #[test]
    fn win_amount_multiplies_odds() {
        let outcome = Outcome::new("Name", 2);
        assert_eq!(outcome.win_amount(2), 4);
        assert_eq!(outcome.win_amount(0), 0);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::new("Red", 1).to_string(), "Red (1:1)");
        assert_eq!(Outcome::new("17", 35).to_string(), "17 (35:1)");
    }

    #[test]
    fn bin_keeps_first_insertion_on_duplicate_name() {
        let mut bin = Bin::new();
        assert!(bin.add(Outcome::new("Red", 1)));
        assert!(!bin.add(Outcome::new("Red", 99)));

        assert_eq!(bin.len(), 1);
        let kept = bin.iter().next().unwrap();
        assert_eq!(kept.odds(), 1);
    }

    #[test]
    fn bin_contains_uses_name_equality() {
        let mut bin = Bin::new();
        bin.add(Outcome::new("Red", 1));
        assert!(bin.contains(&Outcome::new("Red", 17)));
        assert!(!bin.contains(&Outcome::new("Black", 1)));
    }

    #[test]
    fn wheel_routes_outcomes_to_addressed_bins() {
        let mut wheel = Wheel::with_rng(StdRng::seed_from_u64(0));
        wheel.add_outcome(3, Outcome::new("3", 35));
        wheel.add_outcome(DOUBLE_ZERO, Outcome::new("00", 35));

        assert!(wheel.get(3).contains(&Outcome::new("3", 35)));
        assert!(wheel.get(DOUBLE_ZERO).contains(&Outcome::new("00", 35)));
        assert!(wheel.get(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn adding_outcome_past_last_bin_panics() {
        let mut wheel = Wheel::with_rng(StdRng::seed_from_u64(0));
        wheel.add_outcome(NUMBER_OF_BINS, Outcome::new("38", 35));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn getting_bin_past_last_bin_panics() {
        let wheel = Wheel::with_rng(StdRng::seed_from_u64(0));
        wheel.get(NUMBER_OF_BINS);
    }

    #[test]
    fn get_is_read_only() {
        let mut wheel = Wheel::with_rng(StdRng::seed_from_u64(0));
        wheel.add_outcome(7, Outcome::new("7", 35));
        wheel.add_outcome(7, Outcome::new("Red", 1));

        let first: Vec<String> = {
            let mut names: Vec<String> =
                wheel.get(7).iter().map(|o| o.name().to_string()).collect();
            names.sort();
            names
        };
        let second: Vec<String> = {
            let mut names: Vec<String> =
                wheel.get(7).iter().map(|o| o.name().to_string()).collect();
            names.sort();
            names
        };
        assert_eq!(first, second);
    }

    #[test]
    fn same_seed_spins_the_same_sequence() {
        let mut left = Wheel::with_rng(StdRng::seed_from_u64(42));
        let mut right = Wheel::with_rng(StdRng::seed_from_u64(42));
        for bin in 0..NUMBER_OF_BINS {
            left.add_outcome(bin, Outcome::new(bin.to_string(), 35));
            right.add_outcome(bin, Outcome::new(bin.to_string(), 35));
        }

        for _ in 0..20 {
            let a: Vec<&str> = left.next().iter().map(Outcome::name).collect();
            let b: Vec<&str> = right.next().iter().map(Outcome::name).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn wheel_catalogue_tracks_added_outcomes() {
        let mut wheel = Wheel::with_rng(StdRng::seed_from_u64(0));
        wheel.add_outcome(1, Outcome::new("Red", 1));
        wheel.add_outcome(3, Outcome::new("Red", 1));
        wheel.add_outcome(1, Outcome::new("1", 35));

        assert_eq!(wheel.outcome("Red"), Some(&Outcome::new("Red", 1)));
        assert_eq!(wheel.outcome("Black"), None);
        assert_eq!(wheel.outcomes().count(), 2);
    }
}
