use crate::cpu::CpuAgent;
use crate::error::GameError;
use crate::game::{Game, Phase, WinCondition};
use chrono::{DateTime, Utc};
use dashmap::{mapref::entry::Entry, DashMap};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use tokio::sync::watch;

/// Manages all the game sessions running in this process.
#[derive(Default)]
pub struct SessionManager {
    sessions: DashMap<String, SessionHandle>,
}

/// A single game session: the game, the computer players seated in it, and the channels
/// through which every change to the game is published.
pub struct Session {
    /// The game ID.
    id: String,
    /// The game itself.
    game: Game,
    /// The computer-controlled players.
    cpus: Vec<CpuAgent>,
    /// Channel for sending game state updates to boards.
    board_state: watch::Sender<Value>,
    /// Channels for sending game state updates to players.
    player_states: Vec<watch::Sender<Value>>,
    /// Every phase the game has passed through, in order.
    history: Vec<Phase>,
    /// Timestamp that the game was started.
    started_ts: Option<SystemTime>,
}

pub type SessionHandle = Arc<Mutex<Session>>;

/// A summary of a finished game.
#[derive(Clone, Serialize, Debug)]
pub struct GameSummary {
    pub game_id: String,
    pub players: Vec<String>,
    pub started: Option<String>,
    pub finished: String,
    pub outcome: Option<WinCondition>,
    pub winners: Vec<String>,
    pub liberal_cards: usize,
    pub fascist_cards: usize,
    pub rounds: usize,
    pub phases: Vec<Phase>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game session, seating a computer player in every seat for which `cpu` is true.
    pub fn create_game(&self, players: &[String], cpu: &[bool], seed: u64) -> Result<SessionHandle, GameError> {
        loop {
            let id = Self::random_id();
            let entry = self.sessions.entry(id);
            if let Entry::Occupied(_) = entry {
                continue;
            }
            let session = Session::new(entry.key().clone(), players, cpu, seed)?;
            let session = Arc::new(Mutex::new(session));
            entry.or_insert(session.clone());
            break Ok(session);
        }
    }

    pub fn find_game(&self, game_id: &str) -> Result<SessionHandle, GameError> {
        self.sessions
            .get(game_id)
            .map(|session| session.clone())
            .ok_or(GameError::GameNotFound)
    }

    pub fn num_games(&self) -> usize {
        self.sessions.len()
    }

    /// Removes all sessions whose game is over, or whose lock was poisoned.
    pub fn purge_games(&self) {
        self.sessions.retain(|game_id, session| match session.lock() {
            Ok(session) => !session.game.game_over(),
            Err(_) => {
                log::error!("Found poisoned session: {}", game_id);
                false
            }
        });
    }

    fn random_id() -> String {
        let mut rng = rand::thread_rng();
        (0..4).map(|_| rng.gen_range('A'..='Z')).collect()
    }
}

impl Session {
    pub fn new(id: String, players: &[String], cpu: &[bool], seed: u64) -> Result<Self, GameError> {
        let mut game = Game::new(players, seed)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(1);
        let mut cpus = vec![];
        for (idx, name) in players.iter().enumerate() {
            if cpu.get(idx).copied().unwrap_or(false) {
                game.set_cpu(idx, true)?;
                cpus.push(CpuAgent::new(name, ChaCha8Rng::seed_from_u64(rng.gen())));
            }
        }
        let player_states = players.iter().map(|_| watch::channel(Value::Null).0).collect();

        let mut session = Self {
            id,
            game,
            cpus,
            board_state: watch::channel(Value::Null).0,
            player_states,
            history: vec![],
            started_ts: None,
        };
        session.record_phase();
        Ok(session)
    }

    /// Gets the unique game ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Every phase the game has passed through, in order.
    pub fn history(&self) -> &[Phase] {
        &self.history
    }

    /// Returns a stream of updates for the game board.
    pub fn join_board(&mut self) -> watch::Receiver<Value> {
        let rx = self.board_state.subscribe();
        self.notify();
        rx
    }

    /// Returns a stream of updates for a player.
    pub fn join_player(&mut self, player: usize) -> Result<watch::Receiver<Value>, GameError> {
        let rx = self
            .player_states
            .get(player)
            .ok_or(GameError::InvalidPlayerIndex)?
            .subscribe();
        self.notify();
        Ok(rx)
    }

    /// Starts the game and seats the computer players.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.game.start()?;
        for cpu in self.cpus.iter_mut() {
            cpu.initialize(&self.game)?;
        }
        self.started_ts = Some(SystemTime::now());
        self.changed();
        Ok(())
    }

    /// Performs an action on behalf of a human player, then lets the computer players respond.
    pub fn mutate_game<F, T>(&mut self, player: usize, mutation: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut Game) -> Result<T, GameError>,
    {
        if !self.game.awaiting(player) {
            return Err(GameError::InvalidAction);
        }
        let result = mutation(&mut self.game)?;
        self.changed();
        self.run_cpus();
        Ok(result)
    }

    /// Lets every computer player revise its beliefs, then lets the first one that can act do so.
    /// Returns whether any computer player changed the game.
    pub fn step_cpus(&mut self) -> bool {
        if self.game.game_over() {
            return false;
        }
        for cpu in self.cpus.iter_mut() {
            cpu.update(&self.game);
        }
        let mut acted = false;
        for cpu in self.cpus.iter_mut() {
            match cpu.act(&mut self.game) {
                Ok(true) => {
                    acted = true;
                    break;
                }
                Ok(false) => {}
                Err(err) => log::error!(
                    "CPU {} failed to act in game {} ({:?}): {}",
                    cpu.name(),
                    self.id,
                    err.kind(),
                    err
                ),
            }
        }
        if acted {
            self.changed();
        }
        acted
    }

    /// Runs the computer players until none of them can act.
    pub fn run_cpus(&mut self) {
        while self.step_cpus() {}
    }

    /// Summarises the game, once it is over.
    pub fn summary(&self) -> Option<GameSummary> {
        let outcome = self.game.outcome()?;
        Some(GameSummary {
            game_id: self.id.clone(),
            players: self.game.player_names().map(|s| s.to_string()).collect(),
            started: self.started_ts.map(timestamp),
            finished: timestamp(SystemTime::now()),
            outcome: Some(outcome),
            winners: self
                .game
                .winners()
                .into_iter()
                .map(|p| self.game.players()[p].name.clone())
                .collect(),
            liberal_cards: self.game.num_liberal_policies(),
            fascist_cards: self.game.num_fascist_policies(),
            rounds: self.game.round(),
            phases: self.history.clone(),
        })
    }

    fn changed(&mut self) {
        self.record_phase();
        self.notify();
    }

    fn record_phase(&mut self) {
        let phase = self.game.phase();
        if self.history.last() == Some(&phase) {
            return;
        }
        log::debug!("game {}: {:?}", self.id, phase);
        self.history.push(phase);
    }

    /// Notifies all connected clients of the new game state.
    fn notify(&mut self) {
        match serde_json::to_value(self.game.board_view()) {
            Ok(state) => {
                self.board_state.send_replace(state);
            }
            Err(err) => log::error!("Could not serialise board for game {}: {}", self.id, err),
        }
        for (idx, player_state) in self.player_states.iter().enumerate() {
            let Some(view) = self.game.player_view(idx) else {
                continue;
            };
            match serde_json::to_value(view) {
                Ok(state) => {
                    player_state.send_replace(state);
                }
                Err(err) => log::error!("Could not serialise player view for game {}: {}", self.id, err),
            }
        }
    }
}

/// Formats a time as an RFC 3339 timestamp in UTC.
fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339()
}
