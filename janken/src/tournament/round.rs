//! Single round of hand resolution.

use rand::Rng;
use std::collections::BTreeMap;

use crate::game::{Hand, Participant, constants::MAX_HANDS};

/// Outcome of one round, as indices into the participant slice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoundOutcome {
    /// One symbol or all three were played; everyone goes again.
    Draw(Vec<usize>),
    /// Exactly two symbols were played.
    Decided {
        winners: Vec<usize>,
        losers: Vec<usize>,
    },
}

impl RoundOutcome {
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundOutcome::Draw(_))
    }
}

/// Plays `round` between every participant in `participants`.
///
/// Unset hands are auto-picked and stored. Indices keep the slice order
/// within each group. A `round` past the hand buffer has nothing to play
/// and is a draw for everyone.
pub fn resolve_round<R: Rng + ?Sized>(
    participants: &mut [Participant],
    round: usize,
    rng: &mut R,
) -> RoundOutcome {
    let members: Vec<usize> = (0..participants.len()).collect();
    play(participants, &members, round, rng)
}

/// Plays `round` between the participants at `members`.
pub(crate) fn play<R: Rng + ?Sized>(
    pool: &mut [Participant],
    members: &[usize],
    round: usize,
    rng: &mut R,
) -> RoundOutcome {
    if round >= MAX_HANDS {
        log::debug!("round {round}: past the hand buffer, no hands played");
        return RoundOutcome::Draw(members.to_vec());
    }

    // Keys iterate in name order, so the pairing below never depends on
    // which hand happened to be seen first.
    let mut groups: BTreeMap<Hand, Vec<usize>> = BTreeMap::new();
    for &idx in members {
        let hand = pool[idx].hand(round, rng);
        groups.entry(hand).or_default().push(idx);
    }

    let mut groups = groups.into_iter();
    let outcome = match (groups.next(), groups.next(), groups.next()) {
        (Some((first, first_group)), Some((second, second_group)), None) => {
            if first.beats(second) {
                RoundOutcome::Decided {
                    winners: first_group,
                    losers: second_group,
                }
            } else {
                RoundOutcome::Decided {
                    winners: second_group,
                    losers: first_group,
                }
            }
        }
        _ => RoundOutcome::Draw(members.to_vec()),
    };

    log::debug!(
        "round {round}: {} participants, draw={}",
        members.len(),
        outcome.is_draw()
    );
    outcome
}
