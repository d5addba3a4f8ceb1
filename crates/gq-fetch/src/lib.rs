//! Offline collection of the starting quarterback snapshot.
//!
//! Walks the 32 teams one at a time, reads each depth chart from the sports
//! data API, resolves the listed starter, and writes the snapshot file that
//! the quiz loads at startup. A team that fails is logged and left out.

pub mod client;
pub mod collect;
pub mod error;
pub mod espn;
pub mod team_ids;

pub use client::{DEFAULT_BASE_URL, EspnClient, SportsApi};
pub use collect::{collect_starters, starter_for, write_snapshot};
pub use error::{FetchError, FetchResult};
