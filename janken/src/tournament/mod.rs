//! Tournament resolution.
//!
//! - [`round`]: decides a single round between a group of participants
//! - [`bracket`]: replays rounds on each surviving group and assigns ranks
//!
//! ## Example
//!
//! ```
//! use janken::game::{Hand, Participant};
//! use janken::tournament::bracket;
//!
//! let mut players = vec![
//!     Participant::with_hands("alice", &[Hand::Rock]),
//!     Participant::with_hands("bob", &[Hand::Scissors]),
//! ];
//!
//! let ranked = bracket::resolve(&mut players, 1, &mut rand::rng());
//! assert_eq!(ranked[0].user_id, "alice");
//! assert_eq!(ranked[0].rank(), 1);
//! assert_eq!(ranked[1].rank(), 2);
//! ```

pub mod bracket;
pub mod round;

pub use round::{RoundOutcome, resolve_round};
