//! Guess-the-division tab.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use gq_core::Division;
use gq_core::assets::logo_url;
use gq_modes::{GuessSession, QuizConfig};

use super::Tab;
use crate::shared::{HitMap, Notice, step};

/// Division guessing tab state.
pub struct GuessTab {
    session: GuessSession,
    /// Cursor into [`Division::DISPLAY_ORDER`].
    cursor: usize,
    notice: Option<Notice>,
    hits: HitMap<usize>,
}

impl GuessTab {
    /// Create the tab on a random team.
    pub fn new(config: &QuizConfig) -> Self {
        Self::with_session(GuessSession::new(config))
    }

    /// Wrap an existing session.
    pub fn with_session(session: GuessSession) -> Self {
        Self {
            session,
            cursor: 0,
            notice: None,
            hits: HitMap::default(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &GuessSession {
        &self.session
    }

    /// The highlighted division.
    pub fn highlighted(&self) -> Division {
        Division::DISPLAY_ORDER[self.cursor]
    }

    fn answer(&mut self, division: Division) {
        match self.session.guess(division) {
            Ok(fb) if fb.is_correct => {
                self.notice = Some(Notice::info(format!(
                    "Correct! The {} play in the {}.",
                    fb.team, fb.correct
                )));
            }
            Ok(fb) => {
                self.notice = Some(Notice::error(format!(
                    "Wrong. The {} play in the {}.",
                    fb.team, fb.correct
                )));
            }
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    fn next_team(&mut self) {
        match self.session.advance() {
            Ok(_) => self.notice = None,
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    /// Enter: answer the highlighted division, or move on once answered.
    fn activate(&mut self) {
        if self.session.is_answered() {
            self.next_team();
        } else {
            self.answer(self.highlighted());
        }
    }
}

impl Tab for GuessTab {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let len = Division::DISPLAY_ORDER.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.cursor = step(self.cursor, 1, len),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = step(self.cursor, -1, len),
            KeyCode::Right | KeyCode::Char('l') => self.cursor = step(self.cursor, 4, len),
            KeyCode::Left | KeyCode::Char('h') => self.cursor = step(self.cursor, -4, len),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('n') => self.next_team(),
            KeyCode::Char('r') => {
                self.session.reset();
                self.notice = Some(Notice::info("Score cleared."));
            }
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(idx) = self.hits.at(mouse.column, mouse.row) {
            self.cursor = idx;
            self.activate();
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        self.hits.clear();

        let block = Block::default()
            .title(" Guess the Division ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 12 || inner.width < 40 {
            frame.render_widget(Paragraph::new("Window too small"), inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Team card
                Constraint::Length(6), // Division grid
                Constraint::Min(0),    // Feedback
            ])
            .split(inner);

        let team = self.session.current_team();
        let card = vec![
            Line::from(Span::styled(
                team.name,
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(Span::styled(
                logo_url(team.abbr),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}/{}", self.session.score(), self.session.attempts()),
                    Style::default().fg(Color::Yellow).bold(),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(card).alignment(Alignment::Center), chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let feedback = self.session.feedback();
        for (idx, division) in Division::DISPLAY_ORDER.into_iter().enumerate() {
            let column = columns[idx / 4];
            let row = Rect::new(column.x, column.y + (idx % 4) as u16, column.width, 1);
            let mut style = Style::default().fg(Color::White);
            if let Some(fb) = feedback {
                if division == fb.correct {
                    style = style.fg(Color::Green).bold();
                } else if division == fb.selected {
                    style = style.fg(Color::Red);
                }
            }
            if idx == self.cursor {
                style = style.bg(Color::DarkGray);
            }
            let label = format!(" {} ", division.name());
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center),
                row,
            );
            self.hits.push(row, idx);
        }

        let mut lines = Vec::new();
        if let Some(notice) = &self.notice {
            lines.push(notice.line());
        }
        if self.session.is_answered() {
            lines.push(Line::from(Span::styled(
                "Enter or n for the next team",
                Style::default().fg(Color::DarkGray),
            )));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[2]);
    }

    fn status_hint(&self) -> &str {
        if self.session.is_answered() {
            "Enter/n:next team  r:reset  Tab:mode  ?:help  q:quit"
        } else {
            "j/k h/l:move  Enter/Space:answer  r:reset  Tab:mode  ?:help  q:quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use gq_core::league::team_by_name;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(tab: &mut GuessTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn bills_tab() -> GuessTab {
        let config = QuizConfig::default().with_seed(4);
        let bills = team_by_name("Buffalo Bills").unwrap();
        GuessTab::with_session(GuessSession::starting_with(&config, bills))
    }

    #[test]
    fn keyboard_answer_then_next() {
        let mut tab = bills_tab();
        press(&mut tab, KeyCode::Char('j'));
        assert_eq!(tab.highlighted(), Division::AfcEast);
        press(&mut tab, KeyCode::Enter);
        assert_eq!(tab.session().score(), 1);
        assert!(tab.notice.as_ref().is_some_and(|n| !n.is_error));

        press(&mut tab, KeyCode::Enter);
        assert!(!tab.session().is_answered());
        assert_eq!(tab.session().attempts(), 1);
    }

    #[test]
    fn n_does_not_skip_unanswered_team() {
        let mut tab = bills_tab();
        press(&mut tab, KeyCode::Char('n'));
        assert_eq!(tab.session().current_team().name, "Buffalo Bills");
        assert_eq!(tab.notice.as_ref().unwrap().text, "answer this team first");

        press(&mut tab, KeyCode::Char('j'));
        press(&mut tab, KeyCode::Enter);
        press(&mut tab, KeyCode::Char('n'));
        assert_ne!(tab.session().current_team().name, "Buffalo Bills");
        assert!(tab.notice.is_none());
    }

    #[test]
    fn wrong_answer_notice() {
        let mut tab = bills_tab();
        press(&mut tab, KeyCode::Char('l'));
        assert_eq!(tab.highlighted(), Division::NfcNorth);
        press(&mut tab, KeyCode::Char(' '));
        let notice = tab.notice.as_ref().unwrap();
        assert!(notice.is_error);
        assert_eq!(notice.text, "Wrong. The Buffalo Bills play in the AFC East.");
    }

    #[test]
    fn click_on_division_answers() {
        let mut tab = bills_tab();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| tab.draw(f, f.area())).unwrap();

        let (col, row) = (0..20)
            .flat_map(|r| (0..80).map(move |c| (c, r)))
            .find(|&(c, r)| tab.hits.at(c, r) == Some(1))
            .unwrap();
        tab.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(tab.session().score(), 1);
    }

    #[test]
    fn renders_team_and_divisions() {
        let tab = bills_tab();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| tab.draw(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Buffalo Bills"));
        assert!(text.contains("AFC North"));
        assert!(text.contains("NFC West"));
        assert!(text.contains("Score: 0/0"));
    }
}
