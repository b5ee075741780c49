//! # Janken
//!
//! Rock-paper-scissors elimination tournaments for chat integrations.
//!
//! Players join a [`Game`] and pick a hand for each round up front. When the
//! creator asks for the result, the game is resolved round by round: groups
//! that draw replay the next round together, and groups that are split into
//! winners and losers keep playing separately for the ranks they can still
//! reach. Anyone left tied when the rounds run out shares a rank.
//!
//! ## Core Modules
//!
//! - [`game`]: hand symbols, participants and the game aggregate
//! - [`tournament`]: single-round resolution and the elimination bracket
//! - [`store`]: expiring key-value persistence for games
//! - [`settings`]: host settings (command trigger, default language)
//!
//! ## Example
//!
//! ```
//! use janken::{Game, GameType, Hand};
//!
//! let mut game = Game::new(GameType::Elimination).with_creator("alice");
//! game.add_or_update_hands("alice", &[Some(Hand::Rock), Some(Hand::Paper)]);
//! game.add_or_update_hands("bob", &[Some(Hand::Scissors)]);
//! game.ensure_resolvable().expect("two participants");
//!
//! let ranked = game.resolve();
//! assert_eq!(ranked[0].user_id, "alice");
//! assert_eq!(ranked[0].rank(), 1);
//! assert_eq!(ranked[1].rank(), 2);
//! ```

/// Game data model.
pub mod game;
pub use game::{
    Game, GameError, GameId, GameResult, GameType, Hand, Participant,
    constants::{self, DEFAULT_MAX_ROUNDS, MAX_HANDS},
};

/// Host settings.
pub mod settings;
pub use settings::{Settings, SettingsCell};

/// Game persistence.
pub mod store;
pub use store::{GameStore, KvStore, MemoryKvStore, StoreConfig, StoreError};

/// Round and bracket resolution.
pub mod tournament;
