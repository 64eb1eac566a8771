//! Matches, rounds and the round builder
//!
//! Level 3 - Steps
//!
//! A round is built by folding one ordering of the ring in half: position
//! `i` meets position `k - 1 - i`, and the middle position of an odd ring
//! sits out. For an even roster the held-out pivot then plays that middle
//! team, so the round has no bye.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alternator::alternating;

// ============================================================================
// Match
// ============================================================================

/// A single fixture: `home` hosts `away`.
///
/// `Match::new(a, b)` and `Match::new(b, a)` are the same pairing played at
/// different venues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match<T> {
    home: T,
    away: T,
}

impl<T> Match<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    /// Build `(t1, t2)`, or `(t2, t1)` when `flip` is set.
    pub fn oriented(t1: T, t2: T, flip: bool) -> Self {
        if flip {
            Self::new(t2, t1)
        } else {
            Self::new(t1, t2)
        }
    }

    pub fn home(&self) -> &T {
        &self.home
    }

    pub fn away(&self) -> &T {
        &self.away
    }

    /// Same pairing with home and away swapped
    pub fn reversed(self) -> Self {
        Self::new(self.away, self.home)
    }

    pub fn into_pair(self) -> (T, T) {
        (self.home, self.away)
    }
}

impl<T: PartialEq> Match<T> {
    /// Whether `team` plays in this match
    pub fn involves(&self, team: &T) -> bool {
        self.home == *team || self.away == *team
    }

    /// Whether this match pairs `a` with `b`, regardless of venue
    pub fn is_pairing(&self, a: &T, b: &T) -> bool {
        (self.home == *a && self.away == *b) || (self.home == *b && self.away == *a)
    }

    /// The team `team` plays against, if it plays in this match
    pub fn opponent_of(&self, team: &T) -> Option<&T> {
        if self.home == *team {
            Some(&self.away)
        } else if self.away == *team {
            Some(&self.home)
        } else {
            None
        }
    }
}

impl<T: fmt::Display> fmt::Display for Match<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v {}", self.home, self.away)
    }
}

// ============================================================================
// Round
// ============================================================================

/// Matches played in one scheduling step.
///
/// Holds `⌊N/2⌋` matches; `bye` is set only when the roster size is odd.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round<T> {
    matches: Vec<Match<T>>,
    bye: Option<T>,
}

impl<T> Round<T> {
    pub fn new(matches: Vec<Match<T>>, bye: Option<T>) -> Self {
        Self { matches, bye }
    }

    pub fn matches(&self) -> &[Match<T>] {
        &self.matches
    }

    /// Team sitting out this round (odd rosters only)
    pub fn bye(&self) -> Option<&T> {
        self.bye.as_ref()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn into_matches(self) -> Vec<Match<T>> {
        self.matches
    }

    pub fn into_parts(self) -> (Vec<Match<T>>, Option<T>) {
        (self.matches, self.bye)
    }

    /// Same round with every match's venue swapped
    pub fn reversed(self) -> Self {
        Self {
            matches: self.matches.into_iter().map(Match::reversed).collect(),
            bye: self.bye,
        }
    }

    /// Pair the held-out pivot against this round's bye.
    ///
    /// The pivot is home unless `flip` is set. A round without a bye is
    /// returned unchanged.
    pub fn with_pivot(self, pivot: T, flip: bool) -> Self {
        let Self { mut matches, bye } = self;
        match bye {
            Some(bye) => {
                matches.push(Match::oriented(pivot, bye, flip));
                Self { matches, bye: None }
            }
            None => Self { matches, bye: None },
        }
    }
}

impl<T: PartialEq> Round<T> {
    /// Whether `team` plays or sits out in this round
    pub fn contains(&self, team: &T) -> bool {
        self.bye.as_ref() == Some(team) || self.matches.iter().any(|m| m.involves(team))
    }

    /// The match `team` plays in this round, if any
    pub fn match_for(&self, team: &T) -> Option<&Match<T>> {
        self.matches.iter().find(|m| m.involves(team))
    }
}

impl<T: fmt::Display> fmt::Display for Round<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for m in &self.matches {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", m)?;
            first = false;
        }
        if let Some(bye) = &self.bye {
            if !first {
                writeln!(f)?;
            }
            write!(f, "Bye: {}", bye)?;
        }
        Ok(())
    }
}

// ============================================================================
// Round builder
// ============================================================================

/// Fold one ordering of the ring into a round.
///
/// Position `i` from the front meets the mirrored position from the back for
/// `i < k / 2`. The front team hosts unless the pair's alternator value,
/// seeded with `seed`, flips it. For odd `k` the middle team is the bye.
pub fn build_round<T: Clone>(ordering: &[T], seed: bool) -> Round<T> {
    let k = ordering.len();
    let half = k / 2;

    let matches = ordering[..half]
        .iter()
        .zip(ordering[k - half..].iter().rev())
        .zip(alternating(seed))
        .map(|((front, back), flip)| Match::oriented(front.clone(), back.clone(), flip))
        .collect();

    let bye = if k % 2 == 1 {
        Some(ordering[half].clone())
    } else {
        None
    };

    Round::new(matches, bye)
}
