//! Core tables for Gridiron Quiz: the league, the quarterback roster, and the
//! pure oracle queries and scoring the game modes are built on.
//!
//! Everything here is read-only or pure. The league table is a constant; the
//! quarterback roster is loaded once from a snapshot and passed by reference.

/// Image URLs for logos and headshots.
pub mod assets;
/// Error types used throughout the crate.
pub mod error;
/// Teams, divisions, and conferences.
pub mod league;
/// Lookup, random selection, and shuffling over the league table.
pub mod oracle;
/// The quarterback snapshot and its queries.
pub mod roster;
/// Assignment scoring.
pub mod scoring;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export league types.
pub use league::{Conference, Division, TEAMS_PER_DIVISION, TOTAL_TEAMS, Team};
/// Re-export oracle functions.
pub use oracle::{all_teams, division_of, random_team, shuffle};
/// Re-export roster types.
pub use roster::{QbRoster, QbSnapshot, Quarterback};
/// Re-export scoring.
pub use scoring::{Score, percentage, score};
