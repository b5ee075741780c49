//! Game persistence on top of a [`KvStore`].

use std::sync::Arc;

use super::{
    config::StoreConfig,
    errors::{StoreError, StoreResult},
    kv::KvStore,
};
use crate::game::Game;

/// Serialize a game into its stored record.
pub fn encode(game: &Game) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(game).map_err(StoreError::Encode)
}

/// Parse a stored record back into a game.
pub fn decode(bytes: &[u8]) -> StoreResult<Game> {
    serde_json::from_slice(bytes).map_err(StoreError::Decode)
}

/// Reads and writes whole games, one expiring record per game id.
///
/// There is no locking across a get-modify-save sequence: two requests
/// racing on the same game both succeed and the last save wins.
#[derive(Clone)]
pub struct GameStore {
    kv: Arc<dyn KvStore>,
    config: StoreConfig,
}

impl GameStore {
    /// Create a game store with the default key prefix and expiry
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self::with_config(kv, StoreConfig::default())
    }

    pub fn with_config(kv: Arc<dyn KvStore>, config: StoreConfig) -> Self {
        Self { kv, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load the game stored under `id`.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no live record for `id`
    /// * `StoreError::Decode` - the record isn't a well-formed game
    /// * `StoreError::Backend` - the read itself failed
    pub fn get(&self, id: &str) -> StoreResult<Game> {
        let bytes = self
            .kv
            .get(&self.config.key_for(id))?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        decode(&bytes)
    }

    /// Write `game` under its id, restarting the expiry window.
    pub fn save(&self, game: &Game) -> StoreResult<()> {
        let bytes = encode(game)?;
        self.kv
            .set_with_expiry(&self.config.key_for(&game.id), &bytes, self.config.expiry())?;
        log::debug!(
            "saved game {} ({} participants, max_rounds={})",
            game.id,
            game.participants().len(),
            game.max_rounds()
        );
        Ok(())
    }

    /// Remove the game stored under `id`. Deleting a missing game succeeds.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.kv.delete(&self.config.key_for(id))?;
        log::debug!("deleted game {id}");
        Ok(())
    }

    /// Load the game under `id` and remove its record, as done right before
    /// showing a result.
    pub fn take(&self, id: &str) -> StoreResult<Game> {
        let game = self.get(id)?;
        self.delete(id)?;
        Ok(game)
    }
}
