use super::{executive_power::ExecutiveAction, party::Party};
use crate::error::GameError;
use serde::{Deserialize, Serialize};

pub const MAX_LIBERAL_CARDS: usize = 5;
pub const MAX_FASCIST_CARDS: usize = 6;

/// Fascist policies needed before electing Hitler chancellor wins the game.
const HITLER_ELECTION_THRESHOLD: usize = 3;
/// Fascist policies needed before the chancellor may request a veto.
const VETO_THRESHOLD: usize = 5;

/// The board layout, which depends on the number of players.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum BoardVariant {
    /// 5-6 players
    Small,
    /// 7-8 players
    Medium,
    /// 9-10 players
    Large,
}

impl BoardVariant {
    pub fn for_players(num_players: usize) -> Self {
        match num_players {
            0..=6 => BoardVariant::Small,
            7..=8 => BoardVariant::Medium,
            _ => BoardVariant::Large,
        }
    }
}

/// Gets the executive action unlocked on the given board by the `fascist_cards`th fascist policy.
pub fn activated_power(variant: BoardVariant, fascist_cards: usize) -> Option<ExecutiveAction> {
    use BoardVariant::*;
    use ExecutiveAction::*;
    match (variant, fascist_cards) {
        (Large, 1..=2) => Some(InvestigatePlayer),
        (Medium, 2) => Some(InvestigatePlayer),
        (Small, 3) => Some(PolicyPeek),
        (Medium | Large, 3) => Some(SpecialElection),
        (_, 4..=5) => Some(Execution),
        _ => None,
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Board {
    pub variant: BoardVariant,
    pub liberal_cards: usize,
    pub fascist_cards: usize,
    pub last_enacted: Option<Party>,
}

impl Board {
    /// Creates a new board.
    pub fn new(num_players: usize) -> Self {
        Board {
            variant: BoardVariant::for_players(num_players),
            liberal_cards: 0,
            fascist_cards: 0,
            last_enacted: None,
        }
    }

    /// Plays a card onto its track.
    pub fn enact_policy(&mut self, party: Party) -> Result<(), GameError> {
        if self.check_tracks().is_some() {
            return Err(GameError::GameOver);
        }
        match party {
            Party::Liberal => self.liberal_cards += 1,
            Party::Fascist => self.fascist_cards += 1,
        }
        self.last_enacted = Some(party);
        Ok(())
    }

    /// Gets the executive action unlocked by the last played card, if there is any.
    pub fn get_executive_power(&self) -> Option<ExecutiveAction> {
        match self.last_enacted {
            Some(Party::Fascist) => activated_power(self.variant, self.fascist_cards),
            _ => None,
        }
    }

    /// Checks whether either party has completed their policy track.
    pub fn check_tracks(&self) -> Option<Party> {
        if self.fascist_cards >= MAX_FASCIST_CARDS {
            return Some(Party::Fascist);
        }
        if self.liberal_cards >= MAX_LIBERAL_CARDS {
            return Some(Party::Liberal);
        }
        None
    }

    /// Checks whether electing Hitler as chancellor now wins the game.
    pub fn fascists_can_win_by_election(&self) -> bool {
        self.fascist_cards >= HITLER_ELECTION_THRESHOLD
    }

    /// Checks whether veto power is unlocked.
    pub fn veto_unlocked(&self) -> bool {
        self.fascist_cards >= VETO_THRESHOLD
    }
}
