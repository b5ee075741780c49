//! Game error types.

use thiserror::Error;

/// Errors raised while assembling or validating a game
#[derive(Debug, Error)]
pub enum GameError {
    /// `max_rounds` outside `1..=MAX_HANDS`
    #[error("Invalid max rounds: {requested} (must be between 1 and {max})")]
    InvalidMaxRounds { requested: usize, max: usize },

    /// Too few participants to resolve the game
    #[error("Not enough participants: need {needed}, have {current}")]
    NotEnoughParticipants { needed: usize, current: usize },

    /// A hand name that isn't rock, scissors or paper
    #[error("Unknown hand: {0:?}")]
    UnknownHand(String),
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
