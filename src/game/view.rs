use super::{party::Party, player::Role, Game, Phase, WinCondition};
use serde::Serialize;

/// The public state of the game, as shown on the shared board.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub phase: Phase,
    pub round: usize,
    pub players: Vec<PublicPlayer>,
    pub election_tracker: usize,
    pub liberal_cards: usize,
    pub fascist_cards: usize,
    pub draw_pile: usize,
    pub discard_pile: usize,
    pub president: Option<usize>,
    pub chancellor: Option<usize>,
    pub last_president: Option<usize>,
    pub last_chancellor: Option<usize>,
    /// Which players have voted; the votes themselves stay secret until the election resolves
    pub has_voted: Option<Vec<bool>>,
    pub outcome: Option<WinCondition>,
}

#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublicPlayer {
    pub name: String,
    pub is_dead: bool,
    pub is_confirmed_not_hitler: bool,
    pub has_been_investigated: bool,
    pub is_cpu: bool,
    pub role: Option<Role>,
    /// The party membership found by the viewer's investigation
    pub party: Option<Party>,
}

/// The state of the game as seen by a single player.
#[derive(Clone, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub name: String,
    pub role: Role,
    pub is_dead: bool,
    /// Whether the game is waiting on this player
    pub awaiting: bool,
    pub players: Vec<PublicPlayer>,
    /// The policies this player must choose between, if it is their legislative turn
    pub hand: Option<Vec<Party>>,
    /// The players this player may currently choose from
    pub choices: Vec<usize>,
    pub can_veto: bool,
    pub board: BoardView,
}

impl Game {
    /// Returns whether `viewer` is allowed to see the role of the player in seat `other`.
    pub fn can_view_role(&self, viewer: usize, other: usize) -> bool {
        if viewer == other || self.game_over() {
            return true;
        }
        match self.players.get(viewer).map(|p| p.role) {
            Some(Role::Fascist) => true,
            Some(Role::Hitler) => self.num_players() <= 6,
            _ => false,
        }
    }

    pub fn board_view(&self) -> BoardView {
        BoardView {
            phase: self.phase(),
            round: self.round,
            players: self.public_players(None),
            election_tracker: self.election_tracker,
            liberal_cards: self.board.liberal_cards,
            fascist_cards: self.board.fascist_cards,
            draw_pile: self.deck.count(),
            discard_pile: self.deck.discard_count(),
            president: self.current_president(),
            chancellor: self.current_chancellor(),
            last_president: self.last_president(),
            last_chancellor: self.last_chancellor(),
            has_voted: self.votes().map(|votes| votes.iter().map(Option::is_some).collect()),
            outcome: self.outcome(),
        }
    }

    pub fn player_view(&self, player: usize) -> Option<PlayerView> {
        let me = self.players.get(player)?;
        let awaiting = self.awaiting(player);

        let hand = match self.phase() {
            Phase::LegislativePresident | Phase::LegislativeChancellor if awaiting => {
                self.legislative_choices().ok().map(|cards| cards.to_vec())
            }
            _ => None,
        };
        let choices = match self.phase() {
            Phase::ChancellorNomination if awaiting => self.eligible_chancellors().indices(),
            Phase::PresidentialPowerInvestigate | Phase::PresidentialPowerExecution | Phase::PresidentialPowerElection
                if awaiting =>
            {
                self.eligible_targets().indices()
            }
            _ => vec![],
        };

        Some(PlayerView {
            name: me.name.clone(),
            role: me.role,
            is_dead: !me.alive,
            awaiting,
            players: self.public_players(Some(player)),
            hand,
            choices,
            can_veto: awaiting && self.can_veto(),
            board: self.board_view(),
        })
    }

    fn public_players(&self, viewer: Option<usize>) -> Vec<PublicPlayer> {
        self.players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let view_role = match viewer {
                    Some(i) => self.can_view_role(i, index),
                    None => self.game_over(),
                };
                PublicPlayer {
                    name: player.name.clone(),
                    is_dead: !player.alive,
                    is_confirmed_not_hitler: player.not_hitler,
                    has_been_investigated: player.investigated,
                    is_cpu: player.cpu,
                    role: view_role.then_some(player.role),
                    party: viewer
                        .filter(|v| player.investigated_by == Some(*v))
                        .map(|_| player.party()),
                }
            })
            .collect()
    }
}
