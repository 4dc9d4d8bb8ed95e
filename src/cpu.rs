//! Computer-controlled players.
//!
//! A [CpuAgent] plays one seat using only what that seat is allowed to know: its own role,
//! the roles revealed to it at the start of the game, the results of its own investigations
//! and a reputation score for every other player built up from the policies they enact.

use crate::error::GameError;
use crate::game::{Game, Party, Phase, Role, TermOutcome};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub use self::select::Weights;

mod select;
mod test;

/// Reputation ranges from `-MAX_REPUTATION` (surely fascist) to `MAX_REPUTATION` (surely liberal).
pub const MAX_REPUTATION: i8 = 5;

/// The number of cards the president draws.
const PRESIDENT_DRAW_SIZE: usize = 3;

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CpuAgent {
    name: String,
    seat: usize,
    role: Role,
    reputation: Vec<i8>,
    known_roles: Vec<Option<Role>>,
    /// The hand we passed to the chancellor when we were last president
    chancellor_choices: Option<[Party; 2]>,
    last_updated_round: usize,
    rng: ChaCha8Rng,
}

impl CpuAgent {
    pub fn new(name: &str, rng: ChaCha8Rng) -> Self {
        Self {
            name: name.to_string(),
            seat: 0,
            role: Role::Unassigned,
            reputation: vec![],
            known_roles: vec![],
            chancellor_choices: None,
            last_updated_round: 0,
            rng,
        }
    }

    /// Binds this agent to its seat in a started game, and learns whichever roles its seat may see.
    pub fn initialize(&mut self, game: &Game) -> Result<(), GameError> {
        self.seat = game.find_player(&self.name)?;
        self.role = game.players()[self.seat].role;
        self.reputation = vec![0; game.num_players()];
        self.known_roles = game
            .players()
            .iter()
            .enumerate()
            .map(|(idx, player)| game.can_view_role(self.seat, idx).then_some(player.role))
            .collect();
        self.chancellor_choices = None;
        self.last_updated_round = 0;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn reputation(&self, player: usize) -> i8 {
        self.reputation.get(player).copied().unwrap_or(0)
    }

    pub fn known_role(&self, player: usize) -> Option<Role> {
        self.known_roles.get(player).copied().flatten()
    }

    /// Revises our opinion of other players once a term has concluded. Only acts once per round.
    pub fn update(&mut self, game: &Game) {
        if game.phase() != Phase::PostLegislative || game.round() <= self.last_updated_round {
            return;
        }
        self.last_updated_round = game.round();
        let choices = self.chancellor_choices.take();

        let Some(TermOutcome::Enacted { government, policy }) = game.term_outcome() else {
            return;
        };

        if government.president == self.seat {
            // We tested the chancellor with a mixed hand; did they pass?
            if let Some([a, b]) = choices {
                if a != b {
                    let delta = if policy == Party::Fascist { -3 } else { 3 };
                    self.update_reputation(government.chancellor, delta);
                }
            }
        } else if !government.includes(self.seat) {
            let delta = if policy == Party::Liberal { 1 } else { -1 };
            self.update_reputation(government.president, delta);
            self.update_reputation(government.chancellor, delta);
        }
    }

    /// Performs the action the game is waiting on from this agent, if any.
    /// Returns `true` if the game state was changed.
    pub fn act(&mut self, game: &mut Game) -> Result<bool, GameError> {
        if !game.awaiting(self.seat) {
            return Ok(false);
        }

        match game.phase() {
            Phase::ChancellorNomination => self.nominate_chancellor(game)?,
            Phase::ChancellorVoting => self.vote(game)?,
            Phase::LegislativePresident => self.president_discard(game)?,
            Phase::LegislativeChancellor => self.chancellor_enact(game)?,
            Phase::LegislativePresidentVeto => self.president_veto(game)?,
            Phase::PresidentialPowerPeek => {
                let cards = game.get_peek()?;
                log::trace!("{} peeked at {:?}", self.name, cards);
            }
            Phase::PresidentialPowerInvestigate => self.investigate(game)?,
            Phase::PresidentialPowerExecution => self.execute(game)?,
            Phase::PresidentialPowerElection => self.special_election(game)?,
            Phase::PostLegislative => game.end_presidential_term()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn update_reputation(&mut self, player: usize, delta: i8) {
        if let Some(reputation) = self.reputation.get_mut(player) {
            *reputation = (*reputation + delta).clamp(-MAX_REPUTATION, MAX_REPUTATION);
        }
    }

    /// Gets a player's reputation, pinned to an extreme if we know their role.
    fn reputation_with_identity(&self, player: usize) -> i8 {
        match self.known_role(player) {
            Some(Role::Fascist | Role::Hitler) => -MAX_REPUTATION,
            Some(Role::Liberal) => MAX_REPUTATION,
            _ => self.reputation(player),
        }
    }

    fn fascists_in_danger(game: &Game) -> bool {
        game.num_liberal_policies() >= 4
    }

    fn liberals_in_danger(game: &Game) -> bool {
        game.num_fascist_policies() >= 5
    }

    fn hitler_can_win_by_election(game: &Game) -> bool {
        game.num_fascist_policies() >= 3
    }

    /// Living players other than ourselves.
    fn others(&self, game: &Game) -> Vec<usize> {
        game.players()
            .iter()
            .enumerate()
            .filter(|(idx, player)| *idx != self.seat && player.alive)
            .map(|(idx, _)| idx)
            .collect()
    }

    fn nominate_chancellor(&mut self, game: &mut Game) -> Result<(), GameError> {
        let pool = game.eligible_chancellors().indices();
        let weights = match self.role {
            Role::Fascist if Self::hitler_can_win_by_election(game) => Weights::new(0.35, 1.5, 0.15, 0.05),
            Role::Fascist => Weights::new(1.0, 0.25, 0.5, 0.25),
            // Build trust by picking liberals
            Role::Hitler => Weights::new(0.5, 0.0, 1.0, 0.25),
            _ if Self::hitler_can_win_by_election(game) => Weights::new(0.01, 0.0, 1.0, 0.05),
            _ => Weights::new(0.01, 0.0, 1.0, 0.1),
        };
        let chancellor = self.choose_player(game, &pool, weights).ok_or(GameError::InvalidPlayerChoice)?;
        log::trace!("{} nominates {}", self.name, game.players()[chancellor].name);
        game.nominate_chancellor(chancellor)
    }

    fn vote(&mut self, game: &mut Game) -> Result<(), GameError> {
        let (Some(president), Some(chancellor)) = (game.current_president(), game.current_chancellor()) else {
            return Err(GameError::InvalidAction);
        };

        let mut president_rep = self.reputation_with_identity(president);
        let mut chancellor_rep = self.reputation_with_identity(chancellor);
        // Hitler treats themselves as a liberal
        if self.role == Role::Hitler {
            if president == self.seat {
                president_rep = MAX_REPUTATION;
            } else if chancellor == self.seat {
                chancellor_rep = MAX_REPUTATION;
            }
        }
        let combined_rep = president_rep + chancellor_rep;
        let max = MAX_REPUTATION as f32;
        let t = (combined_rep as f32 + 2.0 * max) / (4.0 * max);

        let probability = if self.role.is_fascist()
            && Self::hitler_can_win_by_election(game)
            && self.known_role(chancellor) == Some(Role::Hitler)
        {
            0.99
        } else if self.role == Role::Fascist || (self.role == Role::Hitler && Self::fascists_in_danger(game)) {
            // Fascists know everyone, so t is 0, 0.5 or 1; lean towards fascist governments
            let (fascist_prob, liberal_prob) = if Self::fascists_in_danger(game) {
                (0.9, 0.25)
            } else {
                (0.8, 0.6)
            };
            t * liberal_prob + (1.0 - t) * fascist_prob
        } else {
            let (min_individual, min_combined) = if Self::hitler_can_win_by_election(game) {
                (-2, -1)
            } else {
                (-3, -2)
            };
            if president_rep < min_individual || chancellor_rep < min_individual || combined_rep < min_combined {
                0.05
            } else {
                // f(0) = 0, f(0.5) = 0.75, f(1) = 1
                2.0 * t - t * t
            }
        };

        let vote = self.rng.gen_bool(probability.clamp(0.0, 1.0) as f64);
        log::trace!("{} votes {}", self.name, if vote { "ja" } else { "nein" });
        game.cast_vote(self.seat, vote)
    }

    fn president_discard(&mut self, game: &mut Game) -> Result<(), GameError> {
        let cards = game.legislative_choices()?.to_vec();
        let num_fascist = cards.iter().filter(|c| **c == Party::Fascist).count();
        let mixed = num_fascist != 0 && num_fascist != PRESIDENT_DRAW_SIZE;

        let discard = if !mixed {
            0
        } else {
            match self.role {
                Role::Fascist => index_of(&cards, Party::Liberal),
                Role::Hitler if Self::fascists_in_danger(game) => index_of(&cards, Party::Liberal),
                Role::Hitler => self.rng.gen_range(0..PRESIDENT_DRAW_SIZE),
                _ if num_fascist == 2 || Self::liberals_in_danger(game) => index_of(&cards, Party::Fascist),
                // Two liberals: any discard still leaves a liberal, and a mixed hand tests the chancellor
                _ => self.rng.gen_range(0..PRESIDENT_DRAW_SIZE),
            }
        };

        let mut remaining = cards;
        remaining.remove(discard);
        self.chancellor_choices = Some([remaining[0], remaining[1]]);
        game.president_discard_policy(discard)
    }

    fn chancellor_enact(&mut self, game: &mut Game) -> Result<(), GameError> {
        let cards = game.legislative_choices()?.to_vec();

        if cards[0] == cards[1] {
            if game.can_veto() && self.wants_veto(game, cards[0]) {
                log::trace!("{} requests a veto", self.name);
                return game.chancellor_veto();
            }
            return game.chancellor_enact_policy(0);
        }

        let keep = match self.role {
            Role::Fascist => Party::Fascist,
            Role::Hitler if Self::fascists_in_danger(game) => Party::Fascist,
            // Hitler passes liberal policies to gain trust
            _ => Party::Liberal,
        };
        game.chancellor_enact_policy(index_of(&cards, keep))
    }

    /// Whether to request a veto on a hand of two `policy` cards.
    fn wants_veto(&self, game: &Game, policy: Party) -> bool {
        match (policy, self.role.is_fascist()) {
            (Party::Fascist, false) => true,
            (Party::Liberal, true) => game
                .current_president()
                .and_then(|p| self.known_role(p))
                .map(|role| role.is_fascist())
                .unwrap_or(false),
            _ => false,
        }
    }

    fn president_veto(&mut self, game: &mut Game) -> Result<(), GameError> {
        let cards = game.legislative_choices()?.to_vec();
        let chancellor = game.current_chancellor().ok_or(GameError::InvalidAction)?;

        if cards[0] != cards[1] {
            // The chancellor had a real choice, so a veto is suspicious
            self.update_reputation(chancellor, -1);
            return game.presidential_veto(false);
        }

        if self.role == Role::Liberal {
            let accept = cards[0] == Party::Fascist;
            self.update_reputation(chancellor, if accept { 4 } else { -4 });
            game.presidential_veto(accept)
        } else {
            game.presidential_veto(cards[0] == Party::Liberal)
        }
    }

    fn investigate(&mut self, game: &mut Game) -> Result<(), GameError> {
        let weights = match self.role {
            Role::Liberal => Weights::new(1.0, 0.0, -0.4, 0.5),
            _ => Weights::new(1.0, 1.0, 1.0, 0.5),
        };
        let target = self
            .choose_legal_player(game, weights, |game, _, player| !game.players()[player].investigated)
            .ok_or(GameError::InvalidPlayerChoice)?;

        let party = game.investigate_player(target)?;
        log::trace!("{} investigated {}: {}", self.name, game.players()[target].name, party.to_string());
        if let Some(known) = self.known_roles.get_mut(target) {
            known.get_or_insert(match party {
                Party::Liberal => Role::Liberal,
                Party::Fascist => Role::Fascist,
            });
        }
        Ok(())
    }

    fn execute(&mut self, game: &mut Game) -> Result<(), GameError> {
        let liberal = self.role == Role::Liberal;
        let weights = if liberal {
            Weights::new(1.0, 1.0, -0.4, 0.0)
        } else {
            Weights::new(0.5, 0.0, 1.0, 0.0)
        };
        let target = self
            .choose_legal_player(game, weights, |game, agent, player| {
                game.players()[player].alive && (liberal || agent.known_role(player) != Some(Role::Hitler))
            })
            .ok_or(GameError::InvalidPlayerChoice)?;
        game.execute_player(target)
    }

    fn special_election(&mut self, game: &mut Game) -> Result<(), GameError> {
        let pool = self.others(game);
        let weights = match self.role {
            Role::Liberal => Weights::new(-0.8, 0.0, 1.0, 0.5),
            _ => Weights::new(1.0, 1.0, 0.5, 0.5),
        };
        let target = self.choose_player(game, &pool, weights).ok_or(GameError::InvalidPlayerChoice)?;
        game.elect_next_president(target)
    }

    /// Draws players until one satisfies `legal`, dropping each rejected player from the pool.
    fn choose_legal_player<F>(&mut self, game: &Game, weights: Weights, legal: F) -> Option<usize>
    where
        F: Fn(&Game, &Self, usize) -> bool,
    {
        let mut pool = self.others(game);
        while let Some(player) = self.choose_player(game, &pool, weights) {
            if legal(game, self, player) {
                return Some(player);
            }
            pool.retain(|p| *p != player);
        }
        None
    }
}

/// Gets the index of the first card of the given type; there must be one.
fn index_of(cards: &[Party], party: Party) -> usize {
    cards.iter().position(|c| *c == party).unwrap_or(0)
}
