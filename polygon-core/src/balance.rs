//! Home/away balance accounting
//!
//! Level 3 - Steps
//!
//! Tallies venues per team over any sequence of matches, in the order given,
//! so a schedule can be checked for fairness: how often each team hosts, and
//! the longest run of consecutive home or away matches.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::round::Match;

/// A streak this long or longer counts as unbalanced
pub const UNBALANCED_STREAK: usize = 3;

/// Venue counts for one team
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBalance {
    pub played: usize,
    pub home: usize,
    pub away: usize,
    pub longest_home_streak: usize,
    pub longest_away_streak: usize,
}

impl TeamBalance {
    /// Absolute difference between home and away matches
    pub fn spread(&self) -> usize {
        self.home.abs_diff(self.away)
    }

    pub fn longest_streak(&self) -> usize {
        self.longest_home_streak.max(self.longest_away_streak)
    }
}

/// Balance entry for one team of the report
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry<T> {
    pub team: T,
    #[serde(flatten)]
    pub balance: TeamBalance,
}

/// Per-team balance over a sequence of matches.
///
/// Teams are listed in the order they first appear.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport<T> {
    teams: Vec<TeamEntry<T>>,
}

/// Running state while tallying: the current streak per team
#[derive(Clone, Copy, Default)]
struct Run {
    at_home: bool,
    length: usize,
}

impl<T: Clone + Eq + Hash> BalanceReport<T> {
    pub fn from_matches<I, M>(matches: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Borrow<Match<T>>,
    {
        let mut index: FxHashMap<T, usize> = FxHashMap::default();
        let mut teams: Vec<TeamEntry<T>> = Vec::new();
        let mut runs: Vec<Run> = Vec::new();

        for m in matches {
            let m = m.borrow();
            for (team, at_home) in [(m.home(), true), (m.away(), false)] {
                let slot = *index.entry(team.clone()).or_insert_with(|| {
                    teams.push(TeamEntry {
                        team: team.clone(),
                        balance: TeamBalance::default(),
                    });
                    runs.push(Run::default());
                    teams.len() - 1
                });
                record(&mut teams[slot].balance, &mut runs[slot], at_home);
            }
        }

        Self { teams }
    }
}

/// Count one match for a team and extend or restart its streak
fn record(balance: &mut TeamBalance, run: &mut Run, at_home: bool) {
    balance.played += 1;

    if run.length > 0 && run.at_home == at_home {
        run.length += 1;
    } else {
        *run = Run { at_home, length: 1 };
    }

    if at_home {
        balance.home += 1;
        balance.longest_home_streak = balance.longest_home_streak.max(run.length);
    } else {
        balance.away += 1;
        balance.longest_away_streak = balance.longest_away_streak.max(run.length);
    }
}

impl<T> BalanceReport<T> {
    pub fn entries(&self) -> &[TeamEntry<T>] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Longest home or away streak of any team
    pub fn max_streak(&self) -> usize {
        self.teams
            .iter()
            .map(|e| e.balance.longest_streak())
            .max()
            .unwrap_or(0)
    }

    /// Largest home/away difference of any team
    pub fn max_spread(&self) -> usize {
        self.teams
            .iter()
            .map(|e| e.balance.spread())
            .max()
            .unwrap_or(0)
    }

    /// No team plays three or more consecutive matches at the same venue
    pub fn is_balanced(&self) -> bool {
        self.max_streak() < UNBALANCED_STREAK
    }
}

impl<T: PartialEq> BalanceReport<T> {
    pub fn get(&self, team: &T) -> Option<&TeamBalance> {
        self.teams
            .iter()
            .find(|e| e.team == *team)
            .map(|e| &e.balance)
    }
}
