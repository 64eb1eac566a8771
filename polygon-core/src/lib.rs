//! POLYGON Core - Round-robin fixture generation
//!
//! This crate builds balanced round-robin schedules for any roster of teams:
//! - Circle ("polygon") construction with a rotating bye for odd rosters
//! - Home/away alternation so no team plays three in a row at one venue
//! - Repeated phases alternating with their reverse fixture
//! - Lazy, unbounded schedules consumed one round or match at a time
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: FixtureGenerator (schedule driver)
//! - Level 2: Phase (one complete round-robin)
//! - Level 3: build_round, Rotator, BalanceReport (steps)
//! - Level 4: Alternator, configuration, errors
//!
//! ```
//! use polygon_core::{FixtureConfig, Games};
//!
//! let fixtures = FixtureConfig::team_count(4)
//!     .with_games(Games::Fixed(2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fixtures.rounds().count(), 6);
//! assert_eq!(fixtures.matches().count(), 12);
//! ```

pub mod alternator;
pub mod balance;
pub mod config;
pub mod error;
pub mod phase;
pub mod rotator;
pub mod round;
pub mod schedule;

// Re-exports for convenient access
pub use alternator::{alternating, Alternator};
pub use balance::{BalanceReport, TeamBalance, TeamEntry, UNBALANCED_STREAK};
pub use config::{team_names, FixtureConfig, Games};
pub use error::{FixtureError, Result};
pub use phase::{matches_per_phase, matches_per_round, rounds_per_phase, Phase, Rounds};
pub use rotator::{rotate, Rotator};
pub use round::{build_round, Match, Round};
pub use schedule::{FixtureGenerator, Matches, Phases, ScheduleRounds, ScheduledRound};
