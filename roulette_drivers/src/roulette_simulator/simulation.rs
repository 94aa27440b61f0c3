use roulette::labels::Labels;
use roulette::simulation::builder::BinBuilder;
use roulette::statistics;
use roulette::{Game, Gambler, Player, StrategyKind, Table, Wheel};
use roulette_drivers::Config;

/// Runs the configured number of independent sessions and prints how the
/// player's stake fared across them.
pub fn simulate_sessions(config: &Config) {
    let kind: StrategyKind = config
        .roulette_simulator
        .clone()
        .try_into()
        .expect("Unknown player type in config");
    let labels = Labels::default();

    let mut final_stakes: Vec<i64> = Vec::with_capacity(config.roulette_simulator.sessions as usize);
    for session in 0..config.roulette_simulator.sessions {
        let stake = simulate_session(config, kind, &labels);
        log::info!("session {} ended with a stake of {}", session, stake);
        final_stakes.push(stake as i64);
    }

    if final_stakes.is_empty() {
        println!("No sessions were run");
        return;
    }

    println!("Player type: {:?}", kind);
    println!("Sessions: {}", final_stakes.len());
    println!(
        "Final stakes: min {}, max {}",
        final_stakes.iter().min().unwrap(),
        final_stakes.iter().max().unwrap(),
    );
    println!("Mean final stake: {:.2}", statistics::mean(&final_stakes));
    if final_stakes.len() > 1 {
        println!("Std deviation: {:.2}", statistics::std(&final_stakes));
    }
}

/// Plays one session to the end of its round budget, its bankroll, or the
/// first bet the table refuses. Returns the final stake.
fn simulate_session(config: &Config, kind: StrategyKind, labels: &Labels) -> u32 {
    let mut wheel = Wheel::new();
    BinBuilder::new(labels).build_bins(&mut wheel);
    let table = Table::new(config.table.minimum, config.table.limit);

    let mut player = Gambler::new(
        kind,
        &wheel,
        labels,
        config.roulette_simulator.base_bet,
        config.roulette_simulator.initial_stake,
        config.roulette_simulator.rounds_per_session,
    );
    let mut game = Game::new(wheel, table);

    while player.playing() {
        if let Err(invalid) = game.cycle(&mut player) {
            // A doubling strategy can outgrow the table limit before it
            // exhausts the bankroll; the session ends there.
            log::warn!("session ended early: {}", invalid);
            break;
        }
    }

    player.stake
}
