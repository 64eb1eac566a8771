//! Phase builder - one complete round-robin
//!
//! Level 2 - Phases
//!
//! Odd rosters rotate every team around the ring. Even rosters hold the last
//! team out as the pivot, rotate the remaining (odd) ring and pair the pivot
//! with whichever team the ring leaves out. Either way the ring size `k` is
//! odd, and `k` rotations meet every pair exactly once.

use std::fmt;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::alternator::Alternator;
use crate::round::{build_round, Match, Round};
use crate::rotator::Rotator;

/// Seed handed to the round builder for every round of the ring.
///
/// Must stay constant across rounds. Pair flips alternate by fold position
/// and rotation moves each team one position per round; alternating the seed
/// as well lets a team repeat a venue three times in a row.
const PAIR_SEED: bool = false;

/// First flip of the pivot's own alternator
const PIVOT_SEED: bool = false;

/// Rounds needed for every pair to meet once: `N - 1` for even `N`, `N` for odd
pub fn rounds_per_phase(team_count: usize) -> usize {
    team_count.saturating_sub(1) + team_count % 2
}

/// Matches in each round: `⌊N/2⌋`
pub fn matches_per_round(team_count: usize) -> usize {
    team_count / 2
}

/// Matches in one phase: `N(N-1)/2`
pub fn matches_per_phase(team_count: usize) -> usize {
    rounds_per_phase(team_count) * matches_per_round(team_count)
}

// ============================================================================
// Round stream
// ============================================================================

/// Infinite stream of rounds, continuing the rotation indefinitely.
///
/// The stream repeats with period [`rounds_per_phase`]; a phase is its first
/// period.
#[derive(Clone, Debug)]
pub struct Rounds<T> {
    ring: Rotator<T>,
    pivot: Option<(T, Alternator)>,
    seed: bool,
}

impl<T: Clone> Rounds<T> {
    pub fn new(teams: &[T]) -> Self {
        match teams.split_last() {
            Some((pivot, ring)) if teams.len() % 2 == 0 => Self {
                ring: Rotator::new(ring),
                pivot: Some((pivot.clone(), Alternator::new(PIVOT_SEED))),
                seed: PAIR_SEED,
            },
            _ => Self {
                ring: Rotator::new(teams),
                pivot: None,
                seed: PAIR_SEED,
            },
        }
    }
}

impl<T: Clone> Iterator for Rounds<T> {
    type Item = Round<T>;

    fn next(&mut self) -> Option<Round<T>> {
        let ordering = self.ring.next()?;
        let round = build_round(&ordering, self.seed);

        Some(match &mut self.pivot {
            Some((pivot, flips)) => round.with_pivot(pivot.clone(), flips.advance()),
            None => round,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone> FusedIterator for Rounds<T> {}

// ============================================================================
// Phase
// ============================================================================

/// One complete round-robin: every pair of teams meets exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase<T> {
    rounds: Vec<Round<T>>,
}

impl<T: Clone> Phase<T> {
    /// Build the phase for `teams` by taking one rotation period of rounds.
    pub fn build(teams: &[T]) -> Self {
        let rounds = Rounds::new(teams)
            .take(rounds_per_phase(teams.len()))
            .collect();
        Self { rounds }
    }

    /// The reverse fixture: rounds in reverse order, every venue swapped.
    pub fn reverse_fixture(&self) -> Self {
        let rounds = self
            .rounds
            .iter()
            .rev()
            .cloned()
            .map(Round::reversed)
            .collect();
        Self { rounds }
    }
}

impl<T> Phase<T> {
    pub fn rounds(&self) -> &[Round<T>] {
        &self.rounds
    }

    pub fn round(&self, index: usize) -> Option<&Round<T>> {
        self.rounds.get(index)
    }

    /// Number of rounds
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// All matches of the phase in round order
    pub fn matches(&self) -> impl Iterator<Item = &Match<T>> + '_ {
        self.rounds.iter().flat_map(|r| r.matches().iter())
    }

    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }

    pub fn into_rounds(self) -> Vec<Round<T>> {
        self.rounds
    }
}

impl<T: fmt::Display> fmt::Display for Phase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, round) in self.rounds.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", round)?;
        }
        Ok(())
    }
}
