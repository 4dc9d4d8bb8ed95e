use super::{government::Government, player::Player, player::MAX_PLAYERS, rotation::num_alive};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct EligiblePlayers {
    eligible: [bool; MAX_PLAYERS],
}

impl EligiblePlayers {
    pub fn includes(&self, player: usize) -> bool {
        self.eligible.get(player).copied().unwrap_or(false)
    }

    /// The indices of the eligible players, in seat order.
    pub fn indices(&self) -> Vec<usize> {
        (0..MAX_PLAYERS).filter(|i| self.eligible[*i]).collect()
    }
}

/// Narrows down a set of players, starting from those alive in a roster snapshot.
pub struct EligiblePlayersBuilder<'a> {
    players: &'a [Player],
    eligible: [bool; MAX_PLAYERS],
}

impl<'a> EligiblePlayersBuilder<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        Self {
            players,
            eligible: core::array::from_fn(|i| players.get(i).map(|p| p.alive).unwrap_or(false)),
        }
    }

    pub fn exclude(mut self, player: usize) -> Self {
        if let Some(eligible) = self.eligible.get_mut(player) {
            *eligible = false;
        }
        self
    }

    pub fn not_investigated(mut self) -> Self {
        for (idx, player) in self.players.iter().enumerate() {
            self.eligible[idx] &= !player.investigated;
        }
        self
    }

    /// Applies the term limits of the last elected government.
    /// The last president is only term-limited while more than five players are alive.
    pub fn term_limited(mut self, last_government: Option<Government>) -> Self {
        if let Some(government) = last_government {
            self = self.exclude(government.chancellor);
            if num_alive(self.players) > 5 {
                self = self.exclude(government.president);
            }
        }
        self
    }

    pub fn make(self) -> EligiblePlayers {
        EligiblePlayers { eligible: self.eligible }
    }
}

/// Determines which players may be nominated as chancellor by the given president.
pub fn eligible_chancellors(players: &[Player], president: usize, last_government: Option<Government>) -> EligiblePlayers {
    EligiblePlayersBuilder::new(players)
        .exclude(president)
        .term_limited(last_government)
        .make()
}
