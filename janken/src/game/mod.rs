//! Game data model: hand symbols, participants and the game aggregate.
//!
//! A [`Game`] is assembled while players join and pick their hands, then
//! resolved once into a ranked list of [`Participant`]s.

pub mod constants;
pub mod entities;
pub mod errors;
pub mod models;

pub use entities::{Hand, Participant};
pub use errors::{GameError, GameResult};
pub use models::{Game, GameId, GameType};
