//! Game mode state machines for Gridiron Quiz.
//!
//! Three independent sessions drive the core oracle: guessing one team's
//! division at a time, assigning all teams to divisions, and matching starting
//! quarterbacks to teams. The batch modes share one [`AssignmentBoard`] model
//! and accept the same [`Command`]s from either input modality
//! (drag-and-drop or tap-to-select).

pub mod assign;
pub mod board;
pub mod command;
pub mod config;
pub mod error;
pub mod guess;
pub mod phase;
pub mod qb_picker;
pub mod share;

pub use assign::{AssignCommand, AssignSession, DivisionResult, Placement};
pub use board::AssignmentBoard;
pub use command::{Command, DragGesture, DropTarget, TapSelector};
pub use config::QuizConfig;
pub use error::{ModeError, ModeResult};
pub use guess::{GuessFeedback, GuessSession};
pub use phase::Phase;
pub use qb_picker::{QbCommand, QbPickerSession, TeamResult};
pub use share::{FileShare, NoShare, PickStatus, ShareSurface, WriterShare};
