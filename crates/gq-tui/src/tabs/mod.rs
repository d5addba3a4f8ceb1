//! Tab definitions, trait, and tab bar rendering.

pub mod assign;
pub mod guess;
pub mod qb_picker;

use ratatui::prelude::*;

/// Identifies which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    /// Guess the division of one team at a time.
    Guess,
    /// Sort all teams into divisions.
    Assign,
    /// Match quarterbacks to teams.
    Qb,
}

/// Tab bar labels, in [`TabId::ALL`] order.
pub const TAB_TITLES: [&str; 3] = ["[1]Guess", "[2]Divisions", "[3]Quarterbacks"];

/// Divider drawn between tab titles.
pub const TAB_DIVIDER: &str = " | ";

impl TabId {
    /// All tab IDs in display order.
    pub const ALL: [TabId; 3] = [TabId::Guess, TabId::Assign, TabId::Qb];

    /// Parse a tab name from a string.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.to_lowercase().as_str() {
            "guess" => Some(TabId::Guess),
            "assign" | "divisions" => Some(TabId::Assign),
            "qb" | "qbs" | "quarterbacks" => Some(TabId::Qb),
            _ => None,
        }
    }

    /// Index of this tab in the tab bar.
    pub fn index(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Get the next tab (wrapping).
    pub fn next(self) -> TabId {
        TabId::ALL[(self.index() + 1) % TabId::ALL.len()]
    }

    /// Get the previous tab (wrapping).
    pub fn prev(self) -> TabId {
        TabId::ALL[(self.index() + TabId::ALL.len() - 1) % TabId::ALL.len()]
    }
}

/// Trait that each game tab implements.
pub trait Tab {
    /// Handle a key event. Return `true` if the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool;

    /// Handle a mouse event inside the content area.
    fn handle_mouse(&mut self, _mouse: crossterm::event::MouseEvent) {}

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: TabId, area: Rect) {
    let active_idx = active.index();
    let mut spans = Vec::new();

    for (i, title) in TAB_TITLES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                TAB_DIVIDER,
                Style::default().fg(Color::DarkGray),
            ));
        }
        let style = if i == active_idx {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*title, style));
    }

    let paragraph = ratatui::widgets::Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
