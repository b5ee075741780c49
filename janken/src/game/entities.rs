use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{constants::MAX_HANDS, errors::GameError};

/// A hand symbol.
///
/// Variants are declared in lexical order of their names, so the derived
/// `Ord` agrees with comparing the names as strings.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Hand {
    Paper,
    Rock,
    Scissors,
}

impl Hand {
    /// Every symbol, in the order players are shown them.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    /// Name used in stored records and dialog submissions.
    pub fn name(self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Rock => "rock",
            Self::Scissors => "scissors",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Paper => "Paper",
            Self::Rock => "Rock",
            Self::Scissors => "Scissors",
        }
    }

    /// Emoji shortcode used when rendering result tables.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Paper => ":hand:",
            Self::Rock => ":fist_raised:",
            Self::Scissors => ":v:",
        }
    }

    /// Rock beats scissors, scissors beats paper, paper beats rock.
    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Scissors, Self::Paper) | (Self::Paper, Self::Rock)
        )
    }

    /// Picks a symbol uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Hand {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paper" => Ok(Self::Paper),
            "rock" => Ok(Self::Rock),
            "scissors" => Ok(Self::Scissors),
            other => Err(GameError::UnknownHand(other.to_string())),
        }
    }
}

/// Pads or truncates a hand sequence to exactly [`MAX_HANDS`] slots.
pub fn normalize_hands(hands: &[Option<Hand>]) -> Vec<Option<Hand>> {
    let mut buffer: Vec<Option<Hand>> = hands.iter().copied().take(MAX_HANDS).collect();
    buffer.resize(MAX_HANDS, None);
    buffer
}

/// Stored form of a hand buffer: one string per slot, `""` when unset.
mod slots {
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{Hand, normalize_hands};

    pub fn serialize<S: Serializer>(hands: &[Option<Hand>], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(hands.iter().map(|hand| hand.map_or("", Hand::name)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Option<Hand>>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        let hands = raw
            .iter()
            .map(|slot| {
                if slot.is_empty() {
                    Ok(None)
                } else {
                    slot.parse().map(Some).map_err(de::Error::custom)
                }
            })
            .collect::<Result<Vec<_>, D::Error>>()?;
        Ok(normalize_hands(&hands))
    }
}

/// A player in one game, with the hands they picked for each round.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Participant {
    pub user_id: String,
    #[serde(with = "slots")]
    hands: Vec<Option<Hand>>,
    /// 0 until the game is resolved.
    rank: usize,
}

impl Participant {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            hands: vec![None; MAX_HANDS],
            rank: 0,
        }
    }

    /// Creates a participant whose first rounds are already picked.
    pub fn with_hands(user_id: impl Into<String>, hands: &[Hand]) -> Self {
        let mut participant = Self::new(user_id);
        let slots: Vec<Option<Hand>> = hands.iter().copied().map(Some).collect();
        participant.set_hands(&slots);
        participant
    }

    /// Replaces the whole hand buffer. Slots past the end of `hands` are
    /// cleared and anything beyond [`MAX_HANDS`] is dropped.
    pub fn set_hands(&mut self, hands: &[Option<Hand>]) {
        self.hands = normalize_hands(hands);
    }

    pub fn hands(&self) -> &[Option<Hand>] {
        &self.hands
    }

    /// The hand recorded for `round`, without auto-picking.
    pub fn hand_at(&self, round: usize) -> Option<Hand> {
        self.hands.get(round).copied().flatten()
    }

    /// The hand played in `round`.
    ///
    /// An unset slot gets a random symbol, which is stored so later reads
    /// (and the rendered result) agree with what was played.
    pub fn hand<R: Rng + ?Sized>(&mut self, round: usize, rng: &mut R) -> Hand {
        if let Some(hand) = self.hand_at(round) {
            return hand;
        }

        let hand = Hand::random(rng);
        log::trace!("auto-picked {hand} for {} in round {round}", self.user_id);
        if let Some(slot) = self.hands.get_mut(round) {
            *slot = Some(hand);
        }
        hand
    }

    /// Clears every slot from `round` onwards.
    pub fn clear_hands_from(&mut self, round: usize) {
        for slot in self.hands.iter_mut().skip(round) {
            *slot = None;
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn is_ranked(&self) -> bool {
        self.rank != 0
    }

    pub(crate) fn assign_rank(&mut self, rank: usize) {
        self.rank = rank;
    }
}
