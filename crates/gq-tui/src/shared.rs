//! Shared utilities for the game tabs: layout helpers, hit-testing, and popups.

use std::cell::RefCell;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Screen regions recorded during the last draw, so mouse events can be
/// mapped back to the item or zone under the pointer.
#[derive(Debug)]
pub struct HitMap<T> {
    areas: RefCell<Vec<(Rect, T)>>,
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        Self {
            areas: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> HitMap<T> {
    /// Forget everything from the previous frame.
    pub fn clear(&self) {
        self.areas.borrow_mut().clear();
    }

    /// Record that `area` shows `target`.
    pub fn push(&self, area: Rect, target: T) {
        self.areas.borrow_mut().push((area, target));
    }

    /// The innermost target under a screen position. Later entries win, so
    /// items pushed after their enclosing zone take precedence.
    pub fn at(&self, column: u16, row: u16) -> Option<T> {
        self.areas
            .borrow()
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|(_, target)| target.clone())
    }
}

/// Which half of a board tab has the keyboard cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The list of unplaced items.
    Pool,
    /// The target zones.
    Board,
}

impl Focus {
    /// The other half.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Pool => Focus::Board,
            Focus::Board => Focus::Pool,
        }
    }
}

/// Feedback line shown under a board.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Text to show.
    pub text: String,
    /// Whether it reports a rejected action.
    pub is_error: bool,
}

impl Notice {
    /// A neutral message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// A rejected action.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    /// Styled line for this notice.
    pub fn line(&self) -> Line<'_> {
        let color = if self.is_error {
            Color::Yellow
        } else {
            Color::Cyan
        };
        Line::from(Span::styled(self.text.as_str(), Style::default().fg(color)))
    }
}

/// Move a cursor by `delta` within `len` entries, clamping at both ends.
pub fn step(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    cursor.saturating_add_signed(delta).min(len - 1)
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw a global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Tabs:"),
        Line::from("  1-3 / Tab   Switch mode"),
        Line::from(""),
        Line::from("Guess:"),
        Line::from("  j / k       Move between divisions"),
        Line::from("  Enter       Answer / next team"),
        Line::from("  r           Reset the score"),
        Line::from(""),
        Line::from("Divisions / Quarterbacks:"),
        Line::from("  j / k       Move the cursor"),
        Line::from("  h / l       Switch between pool and board"),
        Line::from("  Enter/Space Tap: select, place, or take back"),
        Line::from("  Mouse       Press on an item, release on a target"),
        Line::from("  s           Submit (then share, quarterbacks only)"),
        Line::from("  r           Try again"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_hits_win() {
        let hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), "zone");
        hits.push(Rect::new(2, 2, 3, 1), "item");
        assert_eq!(hits.at(3, 2), Some("item"));
        assert_eq!(hits.at(3, 5), Some("zone"));
        assert_eq!(hits.at(20, 20), None);
        hits.clear();
        assert_eq!(hits.at(3, 2), None);
    }

    #[test]
    fn step_clamps() {
        assert_eq!(step(0, -1, 5), 0);
        assert_eq!(step(4, 1, 5), 4);
        assert_eq!(step(2, 1, 5), 3);
        assert_eq!(step(3, 1, 0), 0);
    }
}
