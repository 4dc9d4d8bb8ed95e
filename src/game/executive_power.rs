use super::{eligible::EligiblePlayers, eligible::EligiblePlayersBuilder, party::Party, player::Role};
use super::{Game, GameState, TermOutcome, WinCondition};
use crate::error::GameError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum ExecutiveAction {
    /// The president must investigate a player's loyalty.
    InvestigatePlayer,
    /// The president must call a special election.
    SpecialElection,
    /// The president must peek at the top three cards on the deck.
    PolicyPeek,
    /// The president must execute a player.
    Execution,
}

impl Game {
    /// Called when the president looks at the top three policies of the draw pile.
    pub fn get_peek(&mut self) -> Result<[Party; 3], GameError> {
        let (president, outcome) = self.executive_action(ExecutiveAction::PolicyPeek)?;
        let cards = self.deck.peek_three()?;
        self.state = GameState::PostLegislative { president, outcome };
        Ok(cards)
    }

    /// Called when the president investigates another player's party membership.
    pub fn investigate_player(&mut self, other: usize) -> Result<Party, GameError> {
        let (president, outcome) = self.executive_action(ExecutiveAction::InvestigatePlayer)?;
        self.check_player_index(other)?;
        self.check_target(president, other)?;
        if self.players[other].investigated {
            return Err(GameError::AlreadyInvestigated);
        }

        self.players[other].investigated = true;
        self.players[other].investigated_by = Some(president);
        log::debug!("{} investigated {}", self.players[president].name, self.players[other].name);
        self.state = GameState::PostLegislative { president, outcome };
        Ok(self.players[other].party())
    }

    /// Called when the president executes another player.
    pub fn execute_player(&mut self, other: usize) -> Result<(), GameError> {
        let (president, outcome) = self.executive_action(ExecutiveAction::Execution)?;
        self.check_player_index(other)?;
        self.check_target(president, other)?;

        let player = &mut self.players[other];
        player.alive = false;
        if player.role == Role::Hitler {
            log::info!("Hitler was executed");
            self.state = GameState::GameOver(WinCondition::HitlerExecuted);
        } else {
            log::debug!("{} was executed", player.name);
            self.state = GameState::PostLegislative { president, outcome };
        }
        Ok(())
    }

    /// Called when the president chooses the next president in a special election.
    /// The normal rotation resumes from the player after the current president afterwards.
    pub fn elect_next_president(&mut self, other: usize) -> Result<(), GameError> {
        let (president, outcome) = self.executive_action(ExecutiveAction::SpecialElection)?;
        self.check_player_index(other)?;
        self.check_target(president, other)?;

        self.next_president = super::rotation::next_alive(&self.players, president);
        self.elected_president = Some(other);
        self.state = GameState::PostLegislative { president, outcome };
        Ok(())
    }

    /// Gets the executive action the president must currently perform, if any.
    pub fn executive_power(&self) -> Option<ExecutiveAction> {
        match self.state {
            GameState::ExecutiveAction { action, .. } => Some(action),
            _ => None,
        }
    }

    /// Determines which players may be chosen by the current executive action.
    pub fn eligible_targets(&self) -> EligiblePlayers {
        match self.state {
            GameState::ExecutiveAction { president, action, .. } => {
                let builder = EligiblePlayersBuilder::new(&self.players).exclude(president);
                match action {
                    ExecutiveAction::InvestigatePlayer => builder.not_investigated().make(),
                    ExecutiveAction::Execution | ExecutiveAction::SpecialElection => builder.make(),
                    ExecutiveAction::PolicyPeek => EligiblePlayersBuilder::new(&[]).make(),
                }
            }
            _ => EligiblePlayersBuilder::new(&[]).make(),
        }
    }

    /// Returns the president and term outcome if the game is waiting on the given action.
    fn executive_action(&self, expected: ExecutiveAction) -> Result<(usize, TermOutcome), GameError> {
        match self.state {
            GameState::ExecutiveAction { president, action, outcome } if action == expected => Ok((president, outcome)),
            _ => Err(GameError::InvalidAction),
        }
    }

    /// Executive actions may only target living players other than the president.
    fn check_target(&self, president: usize, other: usize) -> Result<(), GameError> {
        if !self.players[other].alive {
            return Err(GameError::PlayerDead);
        }
        if other == president {
            return Err(GameError::InvalidPlayerChoice);
        }
        Ok(())
    }
}
