//! Configuration types for fixture generation
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};
use crate::schedule::FixtureGenerator;

/// How many times the full round-robin is played
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Games {
    /// A fixed number of phases; zero yields an empty schedule
    Fixed(usize),
    /// Phases keep coming for as long as the caller iterates
    Unbounded,
}

impl Default for Games {
    fn default() -> Self {
        Games::Fixed(1)
    }
}

impl Games {
    /// Convert a signed count, rejecting negative values
    pub fn from_count(count: i64) -> Result<Self> {
        usize::try_from(count)
            .map(Games::Fixed)
            .map_err(|_| FixtureError::NegativeGames(count))
    }

    /// Fixed count, or `None` when unbounded
    pub fn count(&self) -> Option<usize> {
        match self {
            Games::Fixed(n) => Some(*n),
            Games::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Games::Unbounded)
    }
}

/// Roster and game count, fixed once and handed to the generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureConfig<T> {
    /// Participants in roster order
    pub teams: Vec<T>,
    /// Number of phases to generate
    pub games: Games,
}

impl<T> FixtureConfig<T> {
    /// Create config for a roster, playing a single phase
    pub fn new(teams: impl IntoIterator<Item = T>) -> Self {
        Self {
            teams: teams.into_iter().collect(),
            games: Games::default(),
        }
    }

    /// Set the game count
    pub fn with_games(mut self, games: Games) -> Self {
        self.games = games;
        self
    }

    /// Play the round-robin indefinitely
    pub fn unbounded(self) -> Self {
        self.with_games(Games::Unbounded)
    }

    /// Replace the roster, keeping the game count
    pub fn with_teams<U>(self, teams: impl IntoIterator<Item = U>) -> FixtureConfig<U> {
        FixtureConfig {
            teams: teams.into_iter().collect(),
            games: self.games,
        }
    }
}

impl<T: Clone> FixtureConfig<T> {
    /// Validate and build the generator
    pub fn build(self) -> Result<FixtureGenerator<T>> {
        FixtureGenerator::new(self)
    }
}

impl FixtureConfig<String> {
    /// Roster of `count` generated names: "Team 1" through "Team {count}"
    pub fn team_count(count: usize) -> Self {
        Self::new(team_names(count))
    }
}

/// Generated team names, numbered from 1
pub fn team_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Team {}", i)).collect()
}
