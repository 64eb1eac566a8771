//! Schedule driver - repeated phases, lazily produced
//!
//! Level 1 - Orchestration
//!
//! The phase is built once when the generator is constructed. Phase `p` of
//! the schedule is that phase for even `p` and its reverse fixture for odd
//! `p`, so a team that hosts the last round of one phase travels for the
//! first round of the next. Rounds are computed on demand from the phase and
//! a position counter; nothing beyond the single phase is ever stored.

use std::fmt;
use std::iter::FusedIterator;

use crate::config::{FixtureConfig, Games};
use crate::error::{FixtureError, Result};
use crate::phase::{matches_per_round, Phase};
use crate::round::{Match, Round};

/// Validated roster and game count, ready to produce fixtures.
#[derive(Clone, Debug)]
pub struct FixtureGenerator<T> {
    teams: Vec<T>,
    games: Games,
    phase: Phase<T>,
}

impl<T: Clone> FixtureGenerator<T> {
    /// Validate `config` and build the phase.
    ///
    /// Fails with [`FixtureError::TooFewTeams`] for rosters under two teams.
    pub fn new(config: FixtureConfig<T>) -> Result<Self> {
        let FixtureConfig { teams, games } = config;
        if teams.len() < 2 {
            return Err(FixtureError::TooFewTeams { count: teams.len() });
        }

        let phase = Phase::build(&teams);

        tracing::debug!(
            teams = teams.len(),
            games = ?games,
            rounds_per_phase = phase.len(),
            "Built fixture generator"
        );

        Ok(Self { teams, games, phase })
    }

    /// Every phase of the schedule, reverse fixtures on odd indices
    pub fn phases(&self) -> Phases<'_, T> {
        Phases {
            phase: &self.phase,
            index: 0,
            end: self.games.count(),
        }
    }

    /// Every round of the schedule in order
    pub fn rounds(&self) -> ScheduleRounds<'_, T> {
        ScheduleRounds {
            phase: &self.phase,
            position: 0,
            end: self.total_rounds(),
        }
    }

    /// Every match of the schedule in order, ignoring round boundaries
    pub fn matches(&self) -> Matches<'_, T> {
        Matches {
            rounds: self.rounds(),
            current: Vec::new().into_iter(),
        }
    }
}

impl<T> FixtureGenerator<T> {
    pub fn teams(&self) -> &[T] {
        &self.teams
    }

    pub fn games(&self) -> Games {
        self.games
    }

    /// The first phase, as built
    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn rounds_per_phase(&self) -> usize {
        self.phase.len()
    }

    pub fn matches_per_round(&self) -> usize {
        matches_per_round(self.teams.len())
    }

    /// Rounds in the whole schedule.
    ///
    /// `None` when unbounded, or when the count does not fit in a `usize`;
    /// either way iteration never reaches an end.
    pub fn total_rounds(&self) -> Option<usize> {
        self.games
            .count()
            .and_then(|g| g.checked_mul(self.rounds_per_phase()))
    }

    /// Matches in the whole schedule, `None` under the same conditions as
    /// [`total_rounds`](Self::total_rounds)
    pub fn total_matches(&self) -> Option<usize> {
        self.total_rounds()
            .and_then(|r| r.checked_mul(self.matches_per_round()))
    }
}

// ============================================================================
// Scheduled rounds
// ============================================================================

/// A round together with where it falls in the schedule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledRound<T> {
    /// Phase index, starting at 0; odd phases are reverse fixtures
    pub phase: usize,
    /// Round index across the whole schedule, starting at 0
    pub number: usize,
    pub round: Round<T>,
}

impl<T> ScheduledRound<T> {
    pub fn is_reverse_fixture(&self) -> bool {
        self.phase % 2 == 1
    }

    pub fn into_round(self) -> Round<T> {
        self.round
    }
}

impl<T: fmt::Display> fmt::Display for ScheduledRound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.round)
    }
}

/// Round `position` of the schedule, derived from the stored phase
fn round_at<T: Clone>(phase: &Phase<T>, position: usize) -> ScheduledRound<T> {
    let per_phase = phase.len();
    let phase_index = position / per_phase;
    let offset = position % per_phase;

    let round = if phase_index % 2 == 0 {
        phase.rounds()[offset].clone()
    } else {
        phase.rounds()[per_phase - 1 - offset].clone().reversed()
    };

    ScheduledRound {
        phase: phase_index,
        number: position,
        round,
    }
}

/// Iterator over the rounds of a schedule.
///
/// Cloning the iterator restarts nothing: the clone resumes from the same
/// position. Call [`FixtureGenerator::rounds`] again to start over.
#[derive(Clone, Debug)]
pub struct ScheduleRounds<'a, T> {
    phase: &'a Phase<T>,
    position: usize,
    end: Option<usize>,
}

impl<T> ScheduleRounds<'_, T> {
    fn remaining(&self) -> Option<usize> {
        self.end.map(|end| end.saturating_sub(self.position))
    }
}

impl<T: Clone> Iterator for ScheduleRounds<'_, T> {
    type Item = ScheduledRound<T>;

    fn next(&mut self) -> Option<ScheduledRound<T>> {
        if self.remaining() == Some(0) {
            return None;
        }
        let round = round_at(self.phase, self.position);
        self.position = self.position.saturating_add(1);
        Some(round)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<ScheduledRound<T>> {
        self.position = match self.end {
            Some(end) => self.position.saturating_add(n).min(end),
            None => self.position.saturating_add(n),
        };
        self.next()
    }
}

impl<T: Clone> FusedIterator for ScheduleRounds<'_, T> {}

// ============================================================================
// Matches
// ============================================================================

/// Iterator over the matches of a schedule, in round order
#[derive(Clone, Debug)]
pub struct Matches<'a, T> {
    rounds: ScheduleRounds<'a, T>,
    current: std::vec::IntoIter<Match<T>>,
}

impl<T: Clone> Iterator for Matches<'_, T> {
    type Item = Match<T>;

    fn next(&mut self) -> Option<Match<T>> {
        loop {
            if let Some(m) = self.current.next() {
                return Some(m);
            }
            let scheduled = self.rounds.next()?;
            self.current = scheduled.round.into_matches().into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.current.len();
        let per_round = self.rounds.phase.rounds().first().map_or(0, Round::len);
        let remaining = self
            .rounds
            .remaining()
            .and_then(|rounds| rounds.checked_mul(per_round))
            .and_then(|n| n.checked_add(buffered));
        match remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Matches<'_, T> {}

// ============================================================================
// Phases
// ============================================================================

/// Iterator over whole phases of a schedule
#[derive(Clone, Debug)]
pub struct Phases<'a, T> {
    phase: &'a Phase<T>,
    index: usize,
    end: Option<usize>,
}

impl<T: Clone> Iterator for Phases<'_, T> {
    type Item = Phase<T>;

    fn next(&mut self) -> Option<Phase<T>> {
        if self.end.is_some_and(|end| self.index >= end) {
            return None;
        }
        let phase = if self.index % 2 == 0 {
            self.phase.clone()
        } else {
            self.phase.reverse_fixture()
        };
        self.index += 1;
        Some(phase)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end {
            Some(end) => {
                let n = end.saturating_sub(self.index);
                (n, Some(n))
            }
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Phases<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(n: u32, games: Games) -> FixtureGenerator<u32> {
        FixtureConfig::new(1..=n).with_games(games).build().unwrap()
    }

    #[test]
    fn test_rejects_small_rosters() {
        let err = FixtureConfig::new(Vec::<u32>::new()).build().unwrap_err();
        assert_eq!(err, FixtureError::TooFewTeams { count: 0 });

        let err = FixtureConfig::new(vec!["only"]).build().unwrap_err();
        assert_eq!(err, FixtureError::TooFewTeams { count: 1 });
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_zero_games_is_empty() {
        let fixtures = generator(6, Games::Fixed(0));
        assert_eq!(fixtures.rounds().count(), 0);
        assert_eq!(fixtures.matches().count(), 0);
        assert_eq!(fixtures.phases().count(), 0);
        assert_eq!(fixtures.total_matches(), Some(0));
    }

    #[test]
    fn test_single_game_is_the_phase() {
        let fixtures = generator(6, Games::Fixed(1));
        let rounds: Vec<Round<u32>> = fixtures.rounds().map(ScheduledRound::into_round).collect();
        assert_eq!(rounds, fixtures.phase().rounds());
        assert!(fixtures.rounds().all(|r| r.phase == 0 && !r.is_reverse_fixture()));
    }

    #[test]
    fn test_second_game_is_reverse_fixture() {
        let fixtures = generator(4, Games::Fixed(2));
        let phases: Vec<Phase<u32>> = fixtures.phases().collect();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[1], phases[0].reverse_fixture());

        let rounds: Vec<ScheduledRound<u32>> = fixtures.rounds().collect();
        assert_eq!(rounds.len(), 6);
        assert_eq!(rounds[3].phase, 1);
        assert_eq!(rounds[3].number, 3);
        assert_eq!(rounds[3].round, phases[1].rounds()[0]);
        assert_eq!(rounds[5].round, rounds[0].round.clone().reversed());
    }

    #[test]
    fn test_third_game_repeats_first() {
        let fixtures = generator(5, Games::Fixed(3));
        let phases: Vec<Phase<u32>> = fixtures.phases().collect();
        assert_eq!(phases[0], phases[2]);
        assert_eq!(fixtures.rounds().count(), 15);
        assert_eq!(fixtures.matches().count(), 30);
    }

    #[test]
    fn test_size_hints() {
        let fixtures = generator(6, Games::Fixed(2));
        assert_eq!(fixtures.rounds().size_hint(), (10, Some(10)));
        assert_eq!(fixtures.matches().size_hint(), (30, Some(30)));
        assert_eq!(fixtures.phases().size_hint(), (2, Some(2)));

        let mut matches = fixtures.matches();
        matches.next();
        assert_eq!(matches.size_hint(), (29, Some(29)));

        let fixtures = generator(6, Games::Unbounded);
        assert_eq!(fixtures.rounds().size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_nth_skips_directly() {
        let fixtures = generator(7, Games::Fixed(2));
        let stepped: Vec<ScheduledRound<u32>> = fixtures.rounds().collect();
        for n in 0..stepped.len() {
            assert_eq!(fixtures.rounds().nth(n).as_ref(), Some(&stepped[n]));
        }
        assert!(fixtures.rounds().nth(stepped.len()).is_none());
        assert!(fixtures.rounds().nth(usize::MAX).is_none());
    }

    #[test]
    fn test_unbounded_prefix() {
        let fixtures = generator(5, Games::Unbounded);
        assert_eq!(fixtures.total_rounds(), None);
        assert_eq!(fixtures.matches().take(500).count(), 500);

        let far = fixtures.rounds().nth(1_000_000).unwrap();
        assert_eq!(far.phase, 200_000);
        assert_eq!(far.round, fixtures.phase().rounds()[0]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_huge_game_counts_do_not_overflow() {
        let fixtures = generator(6, Games::Fixed(usize::MAX));
        assert_eq!(fixtures.total_rounds(), None);
        assert_eq!(fixtures.total_matches(), None);
        assert_eq!(fixtures.rounds().size_hint(), (usize::MAX, None));
        assert_eq!(fixtures.matches().size_hint(), (usize::MAX, None));
        assert_eq!(fixtures.matches().take(3).count(), 3);

        let games = Games::from_count(i64::MAX).unwrap();
        let fixtures = generator(6, games);
        assert_eq!(fixtures.matches().take(3).count(), 3);
        assert_eq!(fixtures.phases().take(2).count(), 2);

        // Wraps to a single round when multiplied unchecked
        let fixtures = generator(4, Games::Fixed(0xAAAA_AAAA_AAAA_AAAB));
        assert_eq!(fixtures.total_rounds(), None);
        assert_eq!(fixtures.rounds().take(10).count(), 10);

        // Rounds fit, matches do not
        let fixtures = generator(7, Games::Fixed(usize::MAX / 7));
        assert_eq!(fixtures.total_rounds(), Some(usize::MAX / 7 * 7));
        assert_eq!(fixtures.total_matches(), None);
        assert_eq!(fixtures.matches().size_hint(), (usize::MAX, None));
        assert_eq!(fixtures.rounds().take(10).count(), 10);
    }

    #[test]
    fn test_unbounded_nth_at_the_last_position() {
        let fixtures = generator(5, Games::Unbounded);
        let mut rounds = fixtures.rounds();
        let last = rounds.nth(usize::MAX).unwrap();
        assert_eq!(last.number, usize::MAX);
        assert_eq!(last.phase, usize::MAX / 5);
        assert!(rounds.next().is_some());
    }

    #[test]
    fn test_restartable() {
        let fixtures = generator(8, Games::Unbounded);
        let first: Vec<Match<u32>> = fixtures.matches().take(50).collect();
        let second: Vec<Match<u32>> = fixtures.matches().take(50).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_accessors() {
        let fixtures = generator(6, Games::Fixed(2));
        assert_eq!(fixtures.teams(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(fixtures.games(), Games::Fixed(2));
        assert_eq!(fixtures.rounds_per_phase(), 5);
        assert_eq!(fixtures.matches_per_round(), 3);
        assert_eq!(fixtures.total_rounds(), Some(10));
        assert_eq!(fixtures.total_matches(), Some(30));
    }
}
