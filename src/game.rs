use self::board::Board;
use self::deck::Deck;
use self::eligible::{eligible_chancellors, EligiblePlayers, EligiblePlayersBuilder};
pub use self::executive_power::ExecutiveAction;
pub use self::government::Government;
pub use self::party::Party;
use self::player::assign_roles;
pub use self::player::{Player, Role, MAX_PLAYERS, MIN_PLAYERS};
use self::rotation::{first_alive_from, next_alive, num_alive};
pub use self::view::{BoardView, PlayerView};
use self::votes::Votes;
use crate::error::GameError;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

mod board;
mod deck;
mod eligible;
mod executive_power;
mod government;
mod party;
mod player;
mod rotation;
mod test;
mod view;
mod votes;

/// A game of Secret Hitler.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Game {
    players: Vec<Player>,
    board: Board,
    deck: Deck,
    state: GameState,
    election_tracker: usize,
    last_government: Option<Government>,
    /// The player chosen by a special election, who presides over the next term
    elected_president: Option<usize>,
    /// The player who resumes the normal rotation after a special election
    next_president: Option<usize>,
    round: usize,
    rng: rand_chacha::ChaCha8Rng,
}

/// Represents the current phase in the game loop.
#[derive(Clone, Serialize, Deserialize, Debug)]
enum GameState {
    Setup,
    Nomination {
        president: usize,
    },
    Election {
        president: usize,
        chancellor: usize,
        votes: Votes,
    },
    LegislativeSession {
        president: usize,
        chancellor: usize,
        turn: LegislativeSessionTurn,
    },
    ExecutiveAction {
        president: usize,
        action: ExecutiveAction,
        outcome: TermOutcome,
    },
    PostLegislative {
        president: usize,
        outcome: TermOutcome,
    },
    GameOver(WinCondition),
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
enum LegislativeSessionTurn {
    /// President must discard a card.
    President { cards: [Party; 3] },
    /// Chancellor must enact a card.
    Chancellor { cards: [Party; 2], veto: VetoStatus },
    /// Chancellor has called for a veto.
    VetoRequested { cards: [Party; 2] },
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
enum VetoStatus {
    CannotVeto,
    CanVeto,
    VetoDenied,
}

/// How a presidential term came to an end.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum TermOutcome {
    /// The elected government enacted a policy.
    Enacted { government: Government, policy: Party },
    /// The nominated government was voted down.
    Rejected { government: Government },
    /// The elected government vetoed its agenda.
    Vetoed { government: Government },
    /// The election tracker ran out and the top policy was enacted.
    Forced { policy: Party },
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum WinCondition {
    /// The liberals completed their policy track.
    LiberalPolicyTrack,
    /// The fascists completed their policy track.
    FascistPolicyTrack,
    /// Hitler was elected chancellor
    HitlerChancellor,
    /// Hitler was executed
    HitlerExecuted,
}

impl ToString for WinCondition {
    fn to_string(&self) -> String {
        match self {
            WinCondition::LiberalPolicyTrack => "LiberalPolicyTrack",
            WinCondition::FascistPolicyTrack => "FascistPolicyTrack",
            WinCondition::HitlerChancellor => "HitlerChancellor",
            WinCondition::HitlerExecuted => "HitlerExecuted",
        }
        .to_string()
    }
}

impl WinCondition {
    /// The party that wins under this condition.
    pub fn winner(&self) -> Party {
        match self {
            WinCondition::LiberalPolicyTrack | WinCondition::HitlerExecuted => Party::Liberal,
            WinCondition::FascistPolicyTrack | WinCondition::HitlerChancellor => Party::Fascist,
        }
    }
}

/// The observable phase of the game.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Setup,
    ChancellorNomination,
    ChancellorVoting,
    LegislativePresident,
    LegislativeChancellor,
    LegislativePresidentVeto,
    PresidentialPowerPeek,
    PresidentialPowerInvestigate,
    PresidentialPowerExecution,
    PresidentialPowerElection,
    PostLegislative,
    LiberalVictoryPolicy,
    LiberalVictoryExecution,
    FascistVictoryPolicy,
    FascistVictoryElection,
}

impl Phase {
    /// Returns true for the four phases that end the game.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Phase::LiberalVictoryPolicy
                | Phase::LiberalVictoryExecution
                | Phase::FascistVictoryPolicy
                | Phase::FascistVictoryElection
        )
    }
}

impl From<WinCondition> for Phase {
    fn from(outcome: WinCondition) -> Self {
        match outcome {
            WinCondition::LiberalPolicyTrack => Phase::LiberalVictoryPolicy,
            WinCondition::FascistPolicyTrack => Phase::FascistVictoryPolicy,
            WinCondition::HitlerChancellor => Phase::FascistVictoryElection,
            WinCondition::HitlerExecuted => Phase::LiberalVictoryExecution,
        }
    }
}

impl Game {
    /// Creates a new game of Secret Hitler in the setup phase.
    pub fn new(player_names: &[String], seed: u64) -> Result<Self, GameError> {
        let num_players = player_names.len();
        player::num_fascists(num_players)?;
        for (i, name) in player_names.iter().enumerate() {
            if player_names[..i].contains(name) {
                return Err(GameError::DuplicatePlayer);
            }
        }

        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(rand_chacha::ChaCha8Rng::seed_from_u64(rng.gen()));
        let players = player_names.iter().map(|name| Player::new(name.clone())).collect();

        Ok(Game {
            players,
            board: Board::new(num_players),
            deck,
            state: GameState::Setup,
            election_tracker: 0,
            last_government: None,
            elected_president: None,
            next_president: None,
            round: 0,
            rng,
        })
    }

    /// Deals the roles, shuffles the deck and hands the presidency to the first player.
    pub fn start(&mut self) -> Result<(), GameError> {
        let GameState::Setup = self.state else {
            return Err(GameError::GameAlreadyStarted);
        };

        let roles = assign_roles(self.num_players(), &mut self.rng)?;
        for (player, role) in self.players.iter_mut().zip(roles) {
            player.role = role;
        }
        self.board = Board::new(self.num_players());
        self.deck.reset();
        self.election_tracker = 0;
        self.last_government = None;
        self.round = 1;
        self.state = GameState::Nomination { president: 0 };
        log::debug!("game started with {} players", self.num_players());
        Ok(())
    }

    /// Marks whether a player is controlled by the computer.
    pub fn set_cpu(&mut self, player: usize, cpu: bool) -> Result<(), GameError> {
        self.check_player_index(player)?;
        self.players[player].cpu = cpu;
        Ok(())
    }

    /// Called when the president nominates a chancellor.
    pub fn nominate_chancellor(&mut self, chancellor: usize) -> Result<(), GameError> {
        let GameState::Nomination { president } = self.state else {
            return Err(GameError::InvalidAction);
        };
        self.check_player_index(chancellor)?;
        if !self.players[chancellor].alive {
            return Err(GameError::PlayerDead);
        }
        if chancellor == president {
            return Err(GameError::InvalidPlayerChoice);
        }
        if !eligible_chancellors(&self.players, president, self.last_government).includes(chancellor) {
            return Err(GameError::IneligibleChancellor);
        }

        log::debug!("{} nominated {}", self.players[president].name, self.players[chancellor].name);
        self.state = GameState::Election {
            president,
            chancellor,
            votes: Votes::new(&self.players),
        };
        Ok(())
    }

    /// Called when a player casts their vote. The election resolves once every living player has voted.
    pub fn cast_vote(&mut self, player: usize, vote: bool) -> Result<(), GameError> {
        let GameState::Election { president, chancellor, votes } = &mut self.state else {
            return Err(GameError::InvalidAction);
        };
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayerIndex);
        }
        votes.vote(player, vote)?;

        let Some(passed) = votes.outcome() else {
            return Ok(());
        };
        let government = Government {
            president: *president,
            chancellor: *chancellor,
        };
        if passed {
            self.start_legislative_session(government)
        } else {
            log::debug!("election failed");
            self.advance_election_tracker(government.president, TermOutcome::Rejected { government })
        }
    }

    /// Called when the president discards one of the three policies they drew.
    pub fn president_discard_policy(&mut self, card_idx: usize) -> Result<(), GameError> {
        let GameState::LegislativeSession { turn, .. } = &mut self.state else {
            return Err(GameError::InvalidAction);
        };
        let LegislativeSessionTurn::President { cards } = *turn else {
            return Err(GameError::InvalidAction);
        };
        let (discarded, cards) = match card_idx {
            0 => (cards[0], [cards[1], cards[2]]),
            1 => (cards[1], [cards[0], cards[2]]),
            2 => (cards[2], [cards[0], cards[1]]),
            _ => return Err(GameError::InvalidCard),
        };
        *turn = LegislativeSessionTurn::Chancellor {
            cards,
            veto: if self.board.veto_unlocked() {
                VetoStatus::CanVeto
            } else {
                VetoStatus::CannotVeto
            },
        };
        self.deck.discard(discarded);
        Ok(())
    }

    /// Called when the chancellor enacts one of the two policies passed to them, discarding the other.
    pub fn chancellor_enact_policy(&mut self, card_idx: usize) -> Result<(), GameError> {
        let GameState::LegislativeSession { president, chancellor, turn } = self.state else {
            return Err(GameError::InvalidAction);
        };
        let LegislativeSessionTurn::Chancellor { cards, .. } = turn else {
            return Err(GameError::InvalidAction);
        };
        let (policy, discarded) = match card_idx {
            0 => (cards[0], cards[1]),
            1 => (cards[1], cards[0]),
            _ => return Err(GameError::InvalidCard),
        };
        self.deck.discard(discarded);
        let government = Government { president, chancellor };
        self.enact_policy(president, policy, TermOutcome::Enacted { government, policy })
    }

    /// Called when the chancellor proposes a veto.
    pub fn chancellor_veto(&mut self) -> Result<(), GameError> {
        let GameState::LegislativeSession { turn, .. } = &mut self.state else {
            return Err(GameError::InvalidAction);
        };
        match *turn {
            LegislativeSessionTurn::Chancellor { cards, veto: VetoStatus::CanVeto } => {
                *turn = LegislativeSessionTurn::VetoRequested { cards };
                Ok(())
            }
            LegislativeSessionTurn::Chancellor { .. } => Err(GameError::VetoUnavailable),
            _ => Err(GameError::InvalidAction),
        }
    }

    /// Called when the president accepts or rejects a proposed veto.
    pub fn presidential_veto(&mut self, accept: bool) -> Result<(), GameError> {
        let GameState::LegislativeSession { president, chancellor, turn } = &mut self.state else {
            return Err(GameError::InvalidAction);
        };
        let LegislativeSessionTurn::VetoRequested { cards } = *turn else {
            return Err(GameError::InvalidAction);
        };

        if !accept {
            *turn = LegislativeSessionTurn::Chancellor {
                cards,
                veto: VetoStatus::VetoDenied,
            };
            return Ok(());
        }

        let government = Government {
            president: *president,
            chancellor: *chancellor,
        };
        for card in cards {
            self.deck.discard(card);
        }
        self.deck.check_shuffle();
        log::debug!("agenda vetoed");
        self.advance_election_tracker(government.president, TermOutcome::Vetoed { government })
    }

    /// Called when the president hands over the presidency to the next player.
    pub fn end_presidential_term(&mut self) -> Result<(), GameError> {
        let GameState::PostLegislative { president, .. } = self.state else {
            return Err(GameError::InvalidAction);
        };

        let successor = if let Some(elected) = self.elected_president.take() {
            first_alive_from(&self.players, elected)
        } else if let Some(next) = self.next_president.take() {
            first_alive_from(&self.players, next)
        } else {
            next_alive(&self.players, president)
        };

        self.round += 1;
        self.state = GameState::Nomination {
            president: successor.unwrap_or(president),
        };
        Ok(())
    }

    /// Gets the current phase of the game. A completed policy track overrides any other phase.
    pub fn phase(&self) -> Phase {
        use LegislativeSessionTurn::*;
        match self.board.check_tracks() {
            Some(Party::Liberal) => return Phase::LiberalVictoryPolicy,
            Some(Party::Fascist) => return Phase::FascistVictoryPolicy,
            None => {}
        }
        match &self.state {
            GameState::Setup => Phase::Setup,
            GameState::Nomination { .. } => Phase::ChancellorNomination,
            GameState::Election { .. } => Phase::ChancellorVoting,
            GameState::LegislativeSession { turn, .. } => match turn {
                President { .. } => Phase::LegislativePresident,
                Chancellor { .. } => Phase::LegislativeChancellor,
                VetoRequested { .. } => Phase::LegislativePresidentVeto,
            },
            GameState::ExecutiveAction { action, .. } => match action {
                ExecutiveAction::PolicyPeek => Phase::PresidentialPowerPeek,
                ExecutiveAction::InvestigatePlayer => Phase::PresidentialPowerInvestigate,
                ExecutiveAction::Execution => Phase::PresidentialPowerExecution,
                ExecutiveAction::SpecialElection => Phase::PresidentialPowerElection,
            },
            GameState::PostLegislative { .. } => Phase::PostLegislative,
            GameState::GameOver(outcome) => (*outcome).into(),
        }
    }

    /// Returns true if the game is over.
    pub fn game_over(&self) -> bool {
        self.phase().is_terminal()
    }

    /// Gets the way the game was won, if it is over.
    pub fn outcome(&self) -> Option<WinCondition> {
        match self.phase() {
            Phase::LiberalVictoryPolicy => Some(WinCondition::LiberalPolicyTrack),
            Phase::LiberalVictoryExecution => Some(WinCondition::HitlerExecuted),
            Phase::FascistVictoryPolicy => Some(WinCondition::FascistPolicyTrack),
            Phase::FascistVictoryElection => Some(WinCondition::HitlerChancellor),
            _ => None,
        }
    }

    /// Gets the seats of the winning team, once the game is over.
    pub fn winners(&self) -> Vec<usize> {
        (0..self.num_players()).filter(|p| self.player_has_won(*p)).collect()
    }

    /// Returns whether a particular player has won.
    pub fn player_has_won(&self, player: usize) -> bool {
        let (Some(outcome), Some(player)) = (self.outcome(), self.players.get(player)) else {
            return false;
        };
        player.role.party() == Some(outcome.winner())
    }

    /// Gets the players, in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Gets the player names.
    pub fn player_names(&self) -> impl Iterator<Item = &'_ str> {
        self.players.iter().map(|p| &p.name[..])
    }

    /// Finds a player with the given name.
    pub fn find_player(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or(GameError::PlayerNotFound)
    }

    /// Gets the number of players in the game.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Gets the number of players in the game that are alive.
    pub fn num_players_alive(&self) -> usize {
        num_alive(&self.players)
    }

    pub fn current_president(&self) -> Option<usize> {
        match &self.state {
            GameState::Nomination { president }
            | GameState::Election { president, .. }
            | GameState::LegislativeSession { president, .. }
            | GameState::ExecutiveAction { president, .. }
            | GameState::PostLegislative { president, .. } => Some(*president),
            GameState::Setup | GameState::GameOver(_) => None,
        }
    }

    pub fn current_chancellor(&self) -> Option<usize> {
        match &self.state {
            GameState::Election { chancellor, .. } | GameState::LegislativeSession { chancellor, .. } => {
                Some(*chancellor)
            }
            GameState::ExecutiveAction { outcome, .. } | GameState::PostLegislative { outcome, .. } => {
                outcome.government().map(|g| g.chancellor)
            }
            _ => None,
        }
    }

    /// The president of the last elected government.
    pub fn last_president(&self) -> Option<usize> {
        self.last_government.map(|g| g.president)
    }

    /// The chancellor of the last elected government.
    pub fn last_chancellor(&self) -> Option<usize> {
        self.last_government.map(|g| g.chancellor)
    }

    pub fn election_tracker(&self) -> usize {
        self.election_tracker
    }

    pub fn draw_size(&self) -> usize {
        self.deck.count()
    }

    pub fn discard_size(&self) -> usize {
        self.deck.discard_count()
    }

    pub fn num_fascist_policies(&self) -> usize {
        self.board.fascist_cards
    }

    pub fn num_liberal_policies(&self) -> usize {
        self.board.liberal_cards
    }

    /// The type of the most recently enacted policy.
    pub fn last_enacted(&self) -> Option<Party> {
        self.board.last_enacted
    }

    /// The number of completed presidential terms, plus one.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Gets the votes of each player, while a vote is taking place.
    pub fn votes(&self) -> Option<&[Option<bool>]> {
        match &self.state {
            GameState::Election { votes, .. } => Some(votes.votes(self.num_players())),
            _ => None,
        }
    }

    /// Returns whether the given player has voted in the current election.
    pub fn has_voted(&self, player: usize) -> bool {
        match &self.state {
            GameState::Election { votes, .. } => player < MAX_PLAYERS && votes.has_cast(player),
            _ => false,
        }
    }

    /// Gets the policies held by the officer whose turn it is in the legislative session.
    pub fn legislative_choices(&self) -> Result<&[Party], GameError> {
        use LegislativeSessionTurn::*;
        match &self.state {
            GameState::LegislativeSession { turn, .. } => match turn {
                President { cards } => Ok(&cards[..]),
                Chancellor { cards, .. } | VetoRequested { cards } => Ok(&cards[..]),
            },
            _ => Err(GameError::InvalidAction),
        }
    }

    /// The number of cards currently held by the government, outside the deck and the board.
    pub fn cards_in_hand(&self) -> usize {
        self.legislative_choices().map(|cards| cards.len()).unwrap_or(0)
    }

    /// Returns whether the chancellor may currently request a veto.
    pub fn can_veto(&self) -> bool {
        matches!(
            self.state,
            GameState::LegislativeSession {
                turn: LegislativeSessionTurn::Chancellor { veto: VetoStatus::CanVeto, .. },
                ..
            }
        )
    }

    /// Returns whether a veto has been requested during the current legislative session.
    pub fn veto_occurred(&self) -> bool {
        matches!(
            self.state,
            GameState::LegislativeSession {
                turn: LegislativeSessionTurn::VetoRequested { .. }
                    | LegislativeSessionTurn::Chancellor { veto: VetoStatus::VetoDenied, .. },
                ..
            }
        )
    }

    /// Gets how the current term ended, once it has.
    pub fn term_outcome(&self) -> Option<TermOutcome> {
        match &self.state {
            GameState::ExecutiveAction { outcome, .. } | GameState::PostLegislative { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// Returns whether the current term ended without an elected government enacting a policy.
    pub fn election_tracker_advanced(&self) -> bool {
        matches!(
            self.term_outcome(),
            Some(TermOutcome::Rejected { .. } | TermOutcome::Vetoed { .. } | TermOutcome::Forced { .. })
        )
    }

    /// Determines which players the current president may nominate as chancellor.
    pub fn eligible_chancellors(&self) -> EligiblePlayers {
        match self.state {
            GameState::Nomination { president } => eligible_chancellors(&self.players, president, self.last_government),
            _ => EligiblePlayersBuilder::new(&[]).make(),
        }
    }

    /// Returns whether the given player is required to act in the current phase.
    pub fn awaiting(&self, player: usize) -> bool {
        use LegislativeSessionTurn::*;
        if !self.players.get(player).map(|p| p.alive).unwrap_or(false) || self.game_over() {
            return false;
        }
        match &self.state {
            GameState::Setup | GameState::GameOver(_) => false,
            GameState::Election { votes, .. } => !votes.has_cast(player),
            GameState::LegislativeSession { president, chancellor, turn } => match turn {
                President { .. } | VetoRequested { .. } => player == *president,
                Chancellor { .. } => player == *chancellor,
            },
            GameState::Nomination { president }
            | GameState::ExecutiveAction { president, .. }
            | GameState::PostLegislative { president, .. } => player == *president,
        }
    }

    fn start_legislative_session(&mut self, government: Government) -> Result<(), GameError> {
        if self.deck.count() < 3 {
            return Err(GameError::NotEnoughCards);
        }
        self.last_government = Some(government);

        if self.board.fascists_can_win_by_election() {
            let chancellor = &mut self.players[government.chancellor];
            if chancellor.role == Role::Hitler {
                log::info!("Hitler was elected chancellor");
                self.state = GameState::GameOver(WinCondition::HitlerChancellor);
                return Ok(());
            }
            chancellor.not_hitler = true;
        }

        let cards = self.deck.draw_three()?;

        log::debug!(
            "government elected: {} and {}",
            self.players[government.president].name,
            self.players[government.chancellor].name
        );
        self.state = GameState::LegislativeSession {
            president: government.president,
            chancellor: government.chancellor,
            turn: LegislativeSessionTurn::President { cards },
        };
        Ok(())
    }

    /// Moves the election tracker along; the third failure enacts the top policy of the deck.
    fn advance_election_tracker(&mut self, president: usize, outcome: TermOutcome) -> Result<(), GameError> {
        self.election_tracker += 1;
        if self.election_tracker < 3 {
            self.state = GameState::PostLegislative { president, outcome };
            return Ok(());
        }

        let policy = self.deck.remove()?;
        log::debug!("election tracker enacted a {} policy", policy.to_string());
        self.last_government = None;
        self.enact_policy(president, policy, TermOutcome::Forced { policy })
    }

    fn enact_policy(&mut self, president: usize, policy: Party, outcome: TermOutcome) -> Result<(), GameError> {
        self.board.enact_policy(policy)?;
        self.election_tracker = 0;
        log::debug!(
            "{} policy enacted ({} liberal, {} fascist)",
            policy.to_string(),
            self.board.liberal_cards,
            self.board.fascist_cards
        );

        if let Some(party) = self.board.check_tracks() {
            let outcome = match party {
                Party::Liberal => WinCondition::LiberalPolicyTrack,
                Party::Fascist => WinCondition::FascistPolicyTrack,
            };
            log::info!("game over: {}", outcome.to_string());
            self.state = GameState::GameOver(outcome);
            return Ok(());
        }

        self.deck.check_shuffle();
        self.state = match self.board.get_executive_power() {
            Some(action) => GameState::ExecutiveAction { president, action, outcome },
            None => GameState::PostLegislative { president, outcome },
        };
        Ok(())
    }

    /// Returns `Ok` if the given player index is valid, and an `Err` otherwise.
    fn check_player_index(&self, player: usize) -> Result<(), GameError> {
        if player < self.num_players() {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerIndex)
        }
    }
}

impl TermOutcome {
    /// The government that served this term, if one was nominated.
    pub fn government(&self) -> Option<Government> {
        match self {
            TermOutcome::Enacted { government, .. }
            | TermOutcome::Rejected { government }
            | TermOutcome::Vetoed { government } => Some(*government),
            TermOutcome::Forced { .. } => None,
        }
    }

    /// The policy enacted this term, if any.
    pub fn policy(&self) -> Option<Party> {
        match self {
            TermOutcome::Enacted { policy, .. } | TermOutcome::Forced { policy } => Some(*policy),
            TermOutcome::Rejected { .. } | TermOutcome::Vetoed { .. } => None,
        }
    }
}

#[cfg(test)]
impl Game {
    /// Overrides the dealt roles, seat by seat.
    pub(crate) fn set_roles(&mut self, roles: &[Role]) {
        for (player, role) in self.players.iter_mut().zip(roles) {
            player.role = *role;
        }
    }

    /// Places cards on top of the draw pile, listed topmost first.
    pub(crate) fn stack_deck(&mut self, cards: &[Party]) {
        for card in cards.iter().rev() {
            self.deck.add(*card);
        }
    }

    /// Overrides the number of policies on each track.
    pub(crate) fn set_policies(&mut self, liberal: usize, fascist: usize) {
        self.board.liberal_cards = liberal;
        self.board.fascist_cards = fascist;
    }

    pub(crate) fn kill(&mut self, player: usize) {
        self.players[player].alive = false;
    }
}
