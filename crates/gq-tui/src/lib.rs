//! Terminal UI for the NFL grid quiz.
//!
//! One ratatui tab per game mode. Every board can be played with the keyboard
//! (move a cursor, tap to select, tap a target) or with the mouse (press on an
//! item, release over a target).

pub mod app;
pub mod shared;
pub mod tabs;
pub mod terminal;
