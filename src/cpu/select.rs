use super::{CpuAgent, MAX_REPUTATION};
use crate::game::{Game, Role};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Weights below this are treated as zero, and never chosen.
const MIN_WEIGHT: f32 = 0.000001;

/// How strongly to prefer each kind of player when choosing one at random.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
pub struct Weights {
    /// Weight of known or suspected fascists.
    pub fascist: f32,
    /// Weight of Hitler; only used when Hitler's identity is known.
    pub hitler: f32,
    /// Weight of known or suspected liberals.
    pub liberal: f32,
    /// Added to the weight of human players.
    pub human_bias: f32,
}

impl Weights {
    pub const fn new(fascist: f32, hitler: f32, liberal: f32, human_bias: f32) -> Self {
        Self { fascist, hitler, liberal, human_bias }
    }
}

impl CpuAgent {
    /// Gets the weight of a single candidate. Ourselves and dead players always weigh zero.
    ///
    /// If the candidate's role is unknown, the weight is interpolated between the liberal and
    /// fascist weights by their reputation, so a player with the best possible reputation is
    /// weighted as a liberal and one with the worst as a fascist.
    pub fn player_weight(&self, game: &Game, player: usize, weights: Weights) -> f32 {
        let Some(candidate) = game.players().get(player) else {
            return 0.0;
        };
        if player == self.seat || !candidate.alive {
            return 0.0;
        }

        let mut weight = match self.known_role(player) {
            Some(Role::Fascist) => weights.fascist,
            Some(Role::Hitler) => weights.hitler,
            Some(Role::Liberal) => weights.liberal,
            Some(Role::Unassigned) | None => {
                let max = MAX_REPUTATION as f32;
                let t = (self.reputation(player) as f32 + max) / (2.0 * max);
                t * weights.liberal + (1.0 - t) * weights.fascist
            }
        };
        if !candidate.cpu {
            weight += weights.human_bias;
        }

        if weight < MIN_WEIGHT {
            0.0
        } else {
            weight
        }
    }

    /// Chooses a player from `pool` by weighted random.
    /// Returns `None` if no player in the pool has a positive weight.
    pub fn choose_player_weighted(&mut self, game: &Game, pool: &[usize], weights: Weights) -> Option<usize> {
        let player_weights: Vec<f32> = pool
            .iter()
            .map(|player| self.player_weight(game, *player, weights))
            .collect();
        let distribution = WeightedIndex::new(&player_weights).ok()?;
        Some(pool[distribution.sample(&mut self.rng)])
    }

    /// Chooses a player from `pool` by weighted random, or uniformly among the living players
    /// of the pool other than ourselves if every weight is zero.
    ///
    /// Only in that fallback may a zero-weight player be chosen. Every decision that calls this
    /// must produce a target, so an all-zero pool picks uniformly rather than stalling the game.
    /// Use `choose_player_weighted` where zero weights must exclude a player strictly.
    pub(super) fn choose_player(&mut self, game: &Game, pool: &[usize], weights: Weights) -> Option<usize> {
        if let Some(player) = self.choose_player_weighted(game, pool, weights) {
            return Some(player);
        }
        let fallback: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|p| *p != self.seat && game.players().get(*p).map(|p| p.alive).unwrap_or(false))
            .collect();
        if fallback.is_empty() {
            return None;
        }
        Some(fallback[self.rng.gen_range(0..fallback.len())])
    }
}
