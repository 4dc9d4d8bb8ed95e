use super::player::{Player, MAX_PLAYERS};
use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// Tracks the vote of each living player.
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct Votes {
    eligible: [bool; MAX_PLAYERS],
    votes: [Option<bool>; MAX_PLAYERS],
}

impl Votes {
    /// Creates a new `Votes`, in which only the living players may vote.
    pub fn new(players: &[Player]) -> Self {
        Self {
            eligible: core::array::from_fn(|i| players.get(i).map(|p| p.alive).unwrap_or(false)),
            votes: [None; MAX_PLAYERS],
        }
    }

    /// Returns whether the given player has cast their vote.
    pub fn has_cast(&self, player_idx: usize) -> bool {
        self.votes[player_idx].is_some()
    }

    /// Records the vote of a player.
    pub fn vote(&mut self, player_idx: usize, vote: bool) -> Result<(), GameError> {
        if !self.eligible[player_idx] {
            return Err(GameError::PlayerDead);
        }
        if self.has_cast(player_idx) {
            return Err(GameError::AlreadyVoted);
        }
        self.votes[player_idx] = Some(vote);
        Ok(())
    }

    /// If all votes are counted, returns the outcome, otherwise returns `None`.
    /// A strict majority of yes votes is needed to pass.
    pub fn outcome(&self) -> Option<bool> {
        let voters = self.eligible.iter().filter(|e| **e).count();
        let yes = self.votes.iter().filter(|v| **v == Some(true)).count();
        let no = self.votes.iter().filter(|v| **v == Some(false)).count();
        (yes + no >= voters).then(|| 2 * yes > voters)
    }

    /// Gets the votes of each player.
    pub fn votes(&self, num_players: usize) -> &[Option<bool>] {
        &self.votes[..num_players]
    }
}
