/// Capacity of every participant's hand buffer, and the upper bound for
/// `max_rounds`.
pub const MAX_HANDS: usize = 10;

/// Rounds played when the creator doesn't configure anything.
pub const DEFAULT_MAX_ROUNDS: usize = 5;

/// Fewest participants a game needs before it can be resolved.
pub const MIN_PARTICIPANTS: usize = 2;

/// Length of the cosmetic id shown in chat messages.
pub const SHORT_ID_LEN: usize = 7;

/// Locale assigned to new games.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Locales the message catalog ships with.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "ja"];
