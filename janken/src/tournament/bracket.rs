//! Elimination bracket: ranks a whole field by replaying rounds on each
//! surviving group until it is down to one player or out of rounds.

use rand::Rng;

use super::round::{self, RoundOutcome};
use crate::game::{Participant, constants::MAX_HANDS};

/// Ranks `participants` starting from round 0 and rank 1.
///
/// Ranks and auto-picked hands are written back into `participants`; the
/// returned copies are ordered best rank first.
pub fn resolve<R: Rng + ?Sized>(
    participants: &mut [Participant],
    max_rounds: usize,
    rng: &mut R,
) -> Vec<Participant> {
    resolve_from(participants, max_rounds, 0, 1, rng)
}

/// Ranks `participants` as if they were a group still contesting `rank`
/// when `round` starts.
///
/// `max_rounds` is capped at [`MAX_HANDS`]; a round past the hand buffer
/// could not record its auto-picked hands.
pub fn resolve_from<R: Rng + ?Sized>(
    participants: &mut [Participant],
    max_rounds: usize,
    round: usize,
    rank: usize,
    rng: &mut R,
) -> Vec<Participant> {
    let members: Vec<usize> = (0..participants.len()).collect();
    let mut bracket = Bracket {
        pool: participants,
        max_rounds: max_rounds.min(MAX_HANDS),
        rng,
        ranked: Vec::with_capacity(members.len()),
    };
    bracket.next_round(members, round, rank);

    let Bracket { pool, ranked, .. } = bracket;
    ranked.into_iter().map(|idx| pool[idx].clone()).collect()
}

struct Bracket<'a, R: Rng + ?Sized> {
    pool: &'a mut [Participant],
    max_rounds: usize,
    rng: &'a mut R,
    /// Pool indices in final order.
    ranked: Vec<usize>,
}

impl<R: Rng + ?Sized> Bracket<'_, R> {
    fn next_round(&mut self, members: Vec<usize>, round: usize, rank: usize) {
        if let [last] = members[..] {
            let participant = &mut self.pool[last];
            participant.assign_rank(rank);
            participant.clear_hands_from(round);
            self.ranked.push(last);
            return;
        }

        if members.is_empty() {
            return;
        }

        if round >= self.max_rounds {
            for &idx in &members {
                self.pool[idx].assign_rank(rank);
            }
            self.ranked.extend(members);
            return;
        }

        match round::play(&mut *self.pool, &members, round, &mut *self.rng) {
            RoundOutcome::Draw(drawers) => self.next_round(drawers, round + 1, rank),
            RoundOutcome::Decided { winners, losers } => {
                let losers_rank = rank + winners.len();
                self.next_round(winners, round + 1, rank);
                self.next_round(losers, round + 1, losers_rank);
            }
        }
    }
}
