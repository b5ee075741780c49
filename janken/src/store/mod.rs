//! Game persistence: one expiring key-value record per game.
//!
//! This module provides:
//! - The [`KvStore`] backend trait and an in-memory backend
//! - [`GameStore`], which encodes games and writes them under a prefixed key
//! - Store configuration and errors
//!
//! ## Example
//!
//! ```
//! use janken::game::{Game, GameType, Hand};
//! use janken::store::{GameStore, MemoryKvStore, StoreError};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), StoreError> {
//! let store = GameStore::new(Arc::new(MemoryKvStore::new()));
//!
//! let mut game = Game::new(GameType::Elimination).with_creator("owner");
//! game.add_or_update_hands("alice", &[Some(Hand::Rock)]);
//! store.save(&game)?;
//!
//! let loaded = store.get(&game.id)?;
//! assert_eq!(loaded, game);
//!
//! store.delete(&game.id)?;
//! assert!(matches!(store.get(&game.id), Err(StoreError::NotFound(_))));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod games;
pub mod kv;

pub use config::StoreConfig;
pub use errors::{KvError, KvResult, StoreError, StoreResult};
pub use games::GameStore;
pub use kv::{Clock, KvStore, MemoryKvStore};
