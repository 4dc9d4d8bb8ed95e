use thiserror::Error;

/// The result of attempting to perform an invalid operation on a [Game](crate::game::Game) or [Session](crate::session::Session).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("this action cannot be performed during this phase of the game")]
    InvalidAction,
    #[error("the game has already started")]
    GameAlreadyStarted,
    #[error("veto power is not available")]
    VetoUnavailable,
    #[error("the game is already over")]
    GameOver,
    #[error("game does not exist")]
    GameNotFound,
    #[error("too few players in the game")]
    TooFewPlayers,
    #[error("too many players in the game")]
    TooManyPlayers,
    #[error("two players cannot share a name")]
    DuplicatePlayer,
    #[error("no player exists with the given name")]
    PlayerNotFound,
    #[error("invalid player index")]
    InvalidPlayerIndex,
    #[error("this player is dead")]
    PlayerDead,
    #[error("this player is term-limited and cannot be chancellor")]
    IneligibleChancellor,
    #[error("this player cannot be chosen for this action")]
    InvalidPlayerChoice,
    #[error("this player has already voted")]
    AlreadyVoted,
    #[error("an invalid card was chosen")]
    InvalidCard,
    #[error("this player has already been investigated")]
    AlreadyInvestigated,
    #[error("the draw pile is empty")]
    EmptyDeck,
    #[error("not enough cards in the draw pile")]
    NotEnoughCards,
}

/// Broad classes of [GameError].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The command was issued outside of the phase in which it is legal.
    IllegalState,
    /// The command named an unknown, dead or ineligible target, or a bad index.
    IllegalArgument,
    /// The target or the deck is not in a state that allows the command.
    PreconditionUnmet,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        use GameError::*;
        match self {
            InvalidAction | GameAlreadyStarted | VetoUnavailable | GameOver => ErrorKind::IllegalState,
            GameNotFound | TooFewPlayers | TooManyPlayers | DuplicatePlayer | PlayerNotFound
            | InvalidPlayerIndex | PlayerDead | IneligibleChancellor | InvalidPlayerChoice
            | AlreadyVoted | InvalidCard => ErrorKind::IllegalArgument,
            AlreadyInvestigated | EmptyDeck | NotEnoughCards => ErrorKind::PreconditionUnmet,
        }
    }
}
