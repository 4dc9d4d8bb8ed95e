use crate::game::{MAX_PLAYERS, MIN_PLAYERS};
use anyhow::{bail, Context};
use std::str::FromStr;

/// Runtime configuration, read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// How many games to play.
    pub num_games: usize,
    /// How many players sit at each table.
    pub num_players: usize,
    /// Seed for the first game; later games use the following seeds.
    pub seed: Option<u64>,
    /// Pause between computer actions, in milliseconds.
    pub cpu_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let config = Config {
            num_games: parse(&lookup, "SH_NUM_GAMES")?.unwrap_or(1),
            num_players: parse(&lookup, "SH_NUM_PLAYERS")?.unwrap_or(MIN_PLAYERS),
            seed: parse(&lookup, "SH_SEED")?,
            cpu_delay_ms: parse(&lookup, "SH_CPU_DELAY_MS")?.unwrap_or(0),
        };
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&config.num_players) {
            bail!("SH_NUM_PLAYERS must be between {} and {}", MIN_PLAYERS, MAX_PLAYERS);
        }
        Ok(config)
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|value| value.parse::<T>().with_context(|| format!("{} is invalid: {:?}", key, value)))
        .transpose()
}
