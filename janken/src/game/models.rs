//! Game aggregate: one tournament instance and its participants.

use chrono::{DateTime, SubsecRound, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::collections::HashSet;
use uuid::Uuid;

use super::{
    constants::{DEFAULT_LANGUAGE, DEFAULT_MAX_ROUNDS, MAX_HANDS, MIN_PARTICIPANTS, SHORT_ID_LEN},
    entities::{Hand, Participant},
    errors::{GameError, GameResult},
};
use crate::tournament::bracket;

/// Game ID type
pub type GameId = String;

/// Rule set used to rank a game's participants.
///
/// Stored in every record as the `game_type` tag. Decoding a record whose
/// tag is missing or not listed here fails.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    /// Round-by-round elimination bracket
    #[default]
    #[serde(alias = "JankenGameImpl1")]
    Elimination,
}

impl GameType {
    pub fn name(self) -> &'static str {
        match self {
            GameType::Elimination => "elimination",
        }
    }

    /// Ranks `participants`, best first.
    pub fn resolve<R: Rng + ?Sized>(
        self,
        participants: &mut [Participant],
        max_rounds: usize,
        rng: &mut R,
    ) -> Vec<Participant> {
        match self {
            GameType::Elimination => bracket::resolve(participants, max_rounds, rng),
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn validate_max_rounds(requested: usize) -> GameResult<usize> {
    if (1..=MAX_HANDS).contains(&requested) {
        Ok(requested)
    } else {
        Err(GameError::InvalidMaxRounds {
            requested,
            max: MAX_HANDS,
        })
    }
}

fn max_rounds_in_range<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let requested = usize::deserialize(deserializer)?;
    validate_max_rounds(requested).map_err(de::Error::custom)
}

fn unique_participants<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Participant>, D::Error> {
    let participants = Vec::<Participant>::deserialize(deserializer)?;
    let mut seen = HashSet::with_capacity(participants.len());
    for participant in &participants {
        if !seen.insert(participant.user_id.as_str()) {
            return Err(de::Error::custom(format!(
                "duplicate participant: {}",
                participant.user_id
            )));
        }
    }
    Ok(participants)
}

/// One tournament, from creation until its result is shown.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Game {
    pub id: GameId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Chat message the game is attached to.
    pub post_id: String,
    /// Owner of the game; only they (or an admin) may configure or finish it.
    pub creator: String,
    #[serde(deserialize_with = "max_rounds_in_range")]
    max_rounds: usize,
    #[serde(deserialize_with = "unique_participants")]
    participants: Vec<Participant>,
    pub language: String,
    pub game_type: GameType,
}

impl Game {
    /// Creates an empty game with a fresh id.
    ///
    /// The timestamp is truncated to milliseconds, the precision records
    /// are stored with.
    pub fn new(game_type: GameType) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            created_at: Utc::now().trunc_subsecs(3),
            post_id: String::new(),
            creator: String::new(),
            max_rounds: DEFAULT_MAX_ROUNDS,
            participants: Vec::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            game_type,
        }
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn with_post(mut self, post_id: impl Into<String>) -> Self {
        self.post_id = post_id.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// First characters of the id, for display only. Not unique.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    pub fn set_max_rounds(&mut self, max_rounds: usize) -> GameResult<()> {
        self.max_rounds = validate_max_rounds(max_rounds)?;
        Ok(())
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, user_id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.user_id == user_id)
    }

    /// Records `hands` for `user_id`, adding them as a participant if they
    /// haven't joined yet. Joining again replaces the earlier picks.
    pub fn add_or_update_hands(&mut self, user_id: &str, hands: &[Option<Hand>]) {
        match self.participants.iter_mut().find(|p| p.user_id == user_id) {
            Some(participant) => participant.set_hands(hands),
            None => {
                let mut participant = Participant::new(user_id);
                participant.set_hands(hands);
                self.participants.push(participant);
            }
        }
    }

    /// Drops `user_id` from the game. Unknown ids are ignored.
    pub fn remove_participant(&mut self, user_id: &str) {
        self.participants.retain(|p| p.user_id != user_id);
    }

    pub fn is_creator(&self, user_id: &str) -> bool {
        !self.creator.is_empty() && self.creator == user_id
    }

    /// Checks the participant minimum the result action requires.
    pub fn ensure_resolvable(&self) -> GameResult<()> {
        if self.participants.len() < MIN_PARTICIPANTS {
            return Err(GameError::NotEnoughParticipants {
                needed: MIN_PARTICIPANTS,
                current: self.participants.len(),
            });
        }
        Ok(())
    }

    /// Ranks the participants, auto-picking any hand that was left unset.
    pub fn resolve(&mut self) -> Vec<Participant> {
        self.resolve_with(&mut rand::rng())
    }

    pub fn resolve_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Participant> {
        self.game_type
            .resolve(&mut self.participants, self.max_rounds, rng)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameType::default())
    }
}
