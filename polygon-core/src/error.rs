//! Error types for fixture generation
//!
//! Level 4 - Utilities and configuration

/// Errors raised while validating a fixture configuration.
///
/// Validation happens once, when a generator is built. Producing rounds and
/// matches from a built generator cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("invalid input: at least 2 teams are required, got {count}")]
    TooFewTeams { count: usize },

    #[error("invalid input: game count must not be negative, got {0}")]
    NegativeGames(i64),
}

impl FixtureError {
    /// Whether the error was caused by caller-supplied input.
    ///
    /// Every variant currently is; callers matching on this stay correct if
    /// other failure classes are added later.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FixtureError::TooFewTeams { .. } | FixtureError::NegativeGames(_)
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FixtureError>;
