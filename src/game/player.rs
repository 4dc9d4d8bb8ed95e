use super::party::Party;
use crate::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 5;
pub const MAX_PLAYERS: usize = 10;

/// Number of ordinary fascists for 5, 6, ..., 10 players.
const FASCISTS_FOR_PLAYERS: [usize; 6] = [1, 1, 2, 2, 3, 3];

/// A game player.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub alive: bool,
    pub not_hitler: bool,
    pub investigated: bool,
    /// The president who investigated this player, if any
    pub investigated_by: Option<usize>,
    pub cpu: bool,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub enum Role {
    Unassigned,
    Liberal,
    Fascist,
    Hitler,
}

impl Role {
    /// The party this role belongs to; `None` before roles are dealt.
    pub fn party(&self) -> Option<Party> {
        match self {
            Role::Unassigned => None,
            Role::Liberal => Some(Party::Liberal),
            Role::Fascist | Role::Hitler => Some(Party::Fascist),
        }
    }

    /// Whether this role is on the fascist team.
    pub fn is_fascist(&self) -> bool {
        matches!(self, Role::Fascist | Role::Hitler)
    }
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            role: Role::Unassigned,
            alive: true,
            not_hitler: false,
            investigated: false,
            investigated_by: None,
            cpu: false,
        }
    }

    /// The result of investigating this player.
    pub fn party(&self) -> Party {
        match self.role {
            Role::Fascist | Role::Hitler => Party::Fascist,
            Role::Liberal | Role::Unassigned => Party::Liberal,
        }
    }
}

/// Gets the number of ordinary fascists for a game of the given size.
pub fn num_fascists(num_players: usize) -> Result<usize, GameError> {
    if num_players < MIN_PLAYERS {
        return Err(GameError::TooFewPlayers);
    }
    if num_players > MAX_PLAYERS {
        return Err(GameError::TooManyPlayers);
    }
    Ok(FASCISTS_FOR_PLAYERS[num_players - MIN_PLAYERS])
}

/// Deals a role to each of `num_players` seats: one Hitler, chosen uniformly,
/// then the ordinary fascists, chosen uniformly among the remaining seats.
pub fn assign_roles(num_players: usize, rng: &mut impl Rng) -> Result<Vec<Role>, GameError> {
    let mut fascists = num_fascists(num_players)?;
    let mut roles = vec![Role::Liberal; num_players];
    roles[rng.gen_range(0..num_players)] = Role::Hitler;
    while fascists > 0 {
        let index = rng.gen_range(0..num_players);
        if roles[index] == Role::Liberal {
            roles[index] = Role::Fascist;
            fascists -= 1;
        }
    }
    Ok(roles)
}
