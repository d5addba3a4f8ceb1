//! Top-level application state holding one tab per game mode.

use gq_core::QbRoster;
use gq_modes::{QuizConfig, ShareSurface};

use crate::tabs::assign::AssignTab;
use crate::tabs::guess::GuessTab;
use crate::tabs::qb_picker::QbTab;
use crate::tabs::{Tab, TabId};

/// Main application state for the quiz TUI.
///
/// The quarterback tab borrows the roster, so the app lives no longer than it.
pub struct TuiApp<'r> {
    /// Currently active tab.
    pub active_tab: TabId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Division guessing tab.
    pub guess: GuessTab,
    /// Division assignment tab.
    pub assign: AssignTab,
    /// Quarterback picker tab.
    pub qb: QbTab<'r>,
}

impl<'r> TuiApp<'r> {
    /// Create the app with every mode ready to play.
    pub fn new(
        roster: &'r QbRoster,
        start_tab: TabId,
        config: &QuizConfig,
        surface: Box<dyn ShareSurface>,
    ) -> Self {
        Self {
            active_tab: start_tab,
            show_help: false,
            should_quit: false,
            guess: GuessTab::new(config),
            assign: AssignTab::new(config),
            qb: QbTab::new(roster, config, surface),
        }
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        match self.active_tab {
            TabId::Guess => &self.guess,
            TabId::Assign => &self.assign,
            TabId::Qb => &self.qb,
        }
    }

    /// Get a mutable reference to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut dyn Tab {
        match self.active_tab {
            TabId::Guess => &mut self.guess,
            TabId::Assign => &mut self.assign,
            TabId::Qb => &mut self.qb,
        }
    }

    /// Switch to a tab by ID.
    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }
}
