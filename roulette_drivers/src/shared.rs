use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub table: ConfigTable,
    pub roulette_simulator: ConfigRouletteSimulator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigTable {
    pub minimum: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRouletteSimulator {
    pub sessions: u32,
    pub rounds_per_session: u32,
    pub initial_stake: u32,
    pub base_bet: u32,
    pub player_type: String,
}

impl TryInto<roulette::StrategyKind> for ConfigRouletteSimulator {
    type Error = serde::de::value::Error;

    fn try_into(self) -> Result<roulette::StrategyKind, Self::Error> {
        self.player_type.parse()
    }
}

/// Reads the content of a given config file and parses it to a Config.
///
/// Panics if any error occurs.
pub fn parse_config_from_file(filename: &str) -> Config {
    let file_content = fs::read_to_string(filename).unwrap();
    serde_yaml::from_str(&file_content).unwrap()
}
