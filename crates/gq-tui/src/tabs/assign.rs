//! Division assignment tab: sort every team into its division.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use gq_core::{Division, TEAMS_PER_DIVISION, Team, division_of};
use gq_modes::{AssignSession, DropTarget, QuizConfig};

use super::Tab;
use crate::shared::{Focus, HitMap, Notice, step};

/// What sits under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hit {
    /// The pool panel.
    Pool,
    /// An unplaced team.
    PoolItem(&'static str),
    /// A division zone.
    Zone(Division),
    /// A team placed in a zone.
    Placed(&'static str, Division),
}

/// One stop of the board cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoardRow {
    Zone(Division),
    Placed(&'static Team),
}

/// Division assignment tab state.
pub struct AssignTab {
    session: AssignSession,
    focus: Focus,
    pool_cursor: usize,
    board_cursor: usize,
    notice: Option<Notice>,
    hits: HitMap<Hit>,
}

impl AssignTab {
    /// Create the tab with a freshly shuffled pool.
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            session: AssignSession::new(config),
            focus: Focus::Pool,
            pool_cursor: 0,
            board_cursor: 0,
            notice: None,
            hits: HitMap::default(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &AssignSession {
        &self.session
    }

    fn board_rows(&self) -> Vec<BoardRow> {
        Division::DISPLAY_ORDER
            .into_iter()
            .flat_map(|d| {
                std::iter::once(BoardRow::Zone(d))
                    .chain(self.session.teams_in(d).into_iter().map(BoardRow::Placed))
            })
            .collect()
    }

    fn clamp_cursors(&mut self) {
        self.pool_cursor = step(self.pool_cursor, 0, self.session.pool().len());
        self.board_cursor = step(self.board_cursor, 0, self.board_rows().len());
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Pool => {
                self.pool_cursor = step(self.pool_cursor, delta, self.session.pool().len());
            }
            Focus::Board => {
                self.board_cursor = step(self.board_cursor, delta, self.board_rows().len());
            }
        }
    }

    fn report<T>(&mut self, result: gq_modes::ModeResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                None
            }
        }
    }

    fn tap_pool_team(&mut self, team_name: &'static str) {
        self.session.tap_team(team_name);
        if let Some(name) = self.session.selected() {
            self.notice = Some(Notice::info(format!("{name} selected. Pick a division.")));
            self.focus = Focus::Board;
        } else {
            self.notice = None;
        }
    }

    fn tap_zone(&mut self, division: Division) {
        let selected = self.session.selected();
        match self.session.tap_division(division) {
            Ok(true) => {
                let name = selected.unwrap_or_default();
                self.notice = Some(Notice::info(format!("{name} -> {division}")));
                self.focus = Focus::Pool;
            }
            Ok(false) => self.notice = Some(Notice::error("Select a team first.")),
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
        self.clamp_cursors();
    }

    fn tap_placed_team(&mut self, team_name: &'static str) {
        let result = self.session.tap_placed(team_name);
        if self.report(result).is_some() {
            self.notice = Some(Notice::info(format!(
                "{team_name} is back in the pool, selected."
            )));
            self.focus = Focus::Board;
        }
        self.clamp_cursors();
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Pool => {
                if let Some(team) = self.session.pool().get(self.pool_cursor).copied() {
                    self.tap_pool_team(team.name);
                }
            }
            Focus::Board => match self.board_rows().get(self.board_cursor).copied() {
                Some(BoardRow::Zone(d)) => self.tap_zone(d),
                Some(BoardRow::Placed(team)) => self.tap_placed_team(team.name),
                None => {}
            },
        }
    }

    fn submit(&mut self) {
        let result = self.session.submit();
        if let Some(score) = self.report(result) {
            self.notice = Some(Notice::info(format!("Score: {score}")));
        }
    }

    fn try_again(&mut self) {
        self.session.try_again();
        self.focus = Focus::Pool;
        self.pool_cursor = 0;
        self.board_cursor = 0;
        self.notice = Some(Notice::info("Starting over with a new shuffle."));
    }

    fn release(&mut self, hit: Option<Hit>) {
        let Some(carried) = self.session.carrying() else {
            return;
        };
        let result = match hit {
            Some(Hit::PoolItem(name)) if name == carried => {
                self.session.cancel_drag();
                self.tap_pool_team(name);
                return;
            }
            Some(Hit::Placed(name, _)) if name == carried => {
                self.session.cancel_drag();
                self.tap_placed_team(name);
                return;
            }
            Some(Hit::Zone(d) | Hit::Placed(_, d)) => self.session.drop_on(DropTarget::Zone(d)),
            Some(Hit::Pool | Hit::PoolItem(_)) => self.session.drop_on(DropTarget::Pool),
            None => {
                self.session.cancel_drag();
                return;
            }
        };
        self.report(result);
        self.clamp_cursors();
    }

    fn draw_pool(&self, frame: &mut Frame, area: Rect) {
        let pool = self.session.pool();
        let focused = self.focus == Focus::Pool;
        let block = Block::default()
            .title(format!(" Teams ({}) ", pool.len()))
            .borders(Borders::ALL)
            .border_style(border(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.push(area, Hit::Pool);

        let height = inner.height as usize;
        let offset = self.pool_cursor.saturating_sub(height.saturating_sub(1));
        for (row, (idx, team)) in pool.iter().enumerate().skip(offset).take(height).enumerate() {
            let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            let mut style = Style::default().fg(Color::White);
            if self.session.selected() == Some(team.name) {
                style = style.fg(Color::Yellow).bold();
            }
            if self.session.carrying() == Some(team.name) {
                style = style.fg(Color::Magenta);
            }
            if focused && idx == self.pool_cursor {
                style = style.bg(Color::DarkGray);
            }
            frame.render_widget(Paragraph::new(Span::styled(team.name, style)), rect);
            self.hits.push(rect, Hit::PoolItem(team.name));
        }
    }

    fn draw_board(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let cursor_row = (self.focus == Focus::Board)
            .then(|| self.board_rows().get(self.board_cursor).copied())
            .flatten();
        let submitted = self.session.score().is_some();

        for (conf_idx, chunk) in Division::DISPLAY_ORDER.chunks(4).enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 4); 4])
                .split(rows[conf_idx]);
            for (cell, &division) in cells.iter().zip(chunk) {
                let teams = self.session.teams_in(division);
                let zone_focused = cursor_row == Some(BoardRow::Zone(division));
                let block = Block::default()
                    .title(format!(
                        " {} {}/{} ",
                        division.name(),
                        teams.len(),
                        TEAMS_PER_DIVISION
                    ))
                    .borders(Borders::ALL)
                    .border_style(border(zone_focused));
                let inner = block.inner(*cell);
                frame.render_widget(block, *cell);
                self.hits.push(*cell, Hit::Zone(division));

                for (i, team) in teams.iter().enumerate().take(inner.height as usize) {
                    let rect = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
                    let mut spans = vec![Span::raw(team.name)];
                    let mut style = Style::default().fg(Color::White);
                    if submitted {
                        match division_of(team.name) {
                            Some(home) if home == division => style = style.fg(Color::Green),
                            Some(home) => {
                                style = style.fg(Color::Red);
                                spans.push(Span::styled(
                                    format!(" -> {}", home.name()),
                                    Style::default().fg(Color::DarkGray),
                                ));
                            }
                            None => {}
                        }
                    }
                    if self.session.carrying() == Some(team.name) {
                        style = style.fg(Color::Magenta);
                    }
                    if cursor_row == Some(BoardRow::Placed(team)) {
                        style = style.bg(Color::DarkGray);
                    }
                    spans[0] = spans[0].clone().style(style);
                    frame.render_widget(Paragraph::new(Line::from(spans)), rect);
                    self.hits.push(rect, Hit::Placed(team.name, division));
                }
            }
        }
    }
}

fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

impl Tab for AssignTab {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('s') => self.submit(),
            KeyCode::Char('r') => self.try_again(),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let hit = self.hits.at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Some(Hit::PoolItem(name)) => {
                    self.focus = Focus::Pool;
                    self.session.pick_up(name);
                }
                Some(Hit::Placed(name, _)) if self.session.score().is_none() => {
                    self.focus = Focus::Board;
                    self.session.pick_up(name);
                }
                Some(Hit::Zone(d)) if self.session.selected().is_some() => self.tap_zone(d),
                _ => {}
            },
            MouseEventKind::Up(MouseButton::Left) => self.release(hit),
            MouseEventKind::ScrollDown => self.move_cursor(1),
            MouseEventKind::ScrollUp => self.move_cursor(-1),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        self.hits.clear();

        let title = match self.session.score() {
            Some(score) => format!(" Divisions: {score} "),
            None => format!(
                " Divisions: {}/{} placed ",
                self.session.assigned_count(),
                self.session.total()
            ),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 10 || inner.width < 60 {
            frame.render_widget(Paragraph::new("Window too small"), inner);
            return;
        }

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(outer[0]);

        self.draw_pool(frame, panes[0]);
        self.draw_board(frame, panes[1]);

        if let Some(notice) = &self.notice {
            frame.render_widget(Paragraph::new(notice.line()), outer[1]);
        }
    }

    fn status_hint(&self) -> &str {
        if self.session.score().is_some() {
            "r:try again  Tab:mode  ?:help  q:quit"
        } else if self.session.can_submit() {
            "s:submit  j/k:move  Enter:tap  r:restart  Tab:mode  ?:help  q:quit"
        } else {
            "j/k:move  h/l:pool/board  Enter/Space:tap  mouse:drag  r:restart  ?:help  q:quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use gq_core::all_teams;
    use gq_modes::Command;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn tab() -> AssignTab {
        AssignTab::new(&QuizConfig::default().with_seed(21))
    }

    fn press(tab: &mut AssignTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn mouse(tab: &mut AssignTab, kind: MouseEventKind, (column, row): (u16, u16)) {
        tab.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn render(tab: &AssignTab) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| tab.draw(f, f.area())).unwrap();
        terminal
    }

    fn find(tab: &AssignTab, wanted: Hit) -> (u16, u16) {
        (0..30)
            .flat_map(|r| (0..140).map(move |c| (c, r)))
            .find(|&(c, r)| tab.hits.at(c, r) == Some(wanted))
            .unwrap()
    }

    #[test]
    fn keyboard_select_and_place() {
        let mut t = tab();
        let first = t.session().pool()[0];
        let home = division_of(first.name).unwrap();

        press(&mut t, KeyCode::Enter);
        assert_eq!(t.session().selected(), Some(first.name));
        assert_eq!(t.focus, Focus::Board);

        let target = t
            .board_rows()
            .iter()
            .position(|r| *r == BoardRow::Zone(home))
            .unwrap();
        for _ in 0..target {
            press(&mut t, KeyCode::Char('j'));
        }
        press(&mut t, KeyCode::Char(' '));
        assert_eq!(t.session().assignment_of(first.name), Some(home));
        assert_eq!(t.focus, Focus::Pool);
    }

    #[test]
    fn tapping_empty_zone_without_selection() {
        let mut t = tab();
        press(&mut t, KeyCode::Char('l'));
        press(&mut t, KeyCode::Enter);
        let notice = t.notice.as_ref().unwrap();
        assert!(notice.is_error);
        assert_eq!(notice.text, "Select a team first.");
    }

    #[test]
    fn drag_from_pool_to_zone() {
        let mut t = tab();
        render(&t);
        let team = t.session().pool()[0];
        let from = find(&t, Hit::PoolItem(team.name));
        let to = find(&t, Hit::Zone(Division::NfcWest));

        mouse(&mut t, MouseEventKind::Down(MouseButton::Left), from);
        assert_eq!(t.session().carrying(), Some(team.name));
        mouse(&mut t, MouseEventKind::Up(MouseButton::Left), to);
        assert_eq!(t.session().assignment_of(team.name), Some(Division::NfcWest));

        render(&t);
        let placed = find(&t, Hit::Placed(team.name, Division::NfcWest));
        let pool = find(&t, Hit::Pool);
        mouse(&mut t, MouseEventKind::Down(MouseButton::Left), placed);
        mouse(&mut t, MouseEventKind::Up(MouseButton::Left), pool);
        assert_eq!(t.session().assignment_of(team.name), None);
    }

    #[test]
    fn click_is_a_tap() {
        let mut t = tab();
        render(&t);
        let team = t.session().pool()[2];
        let at = find(&t, Hit::PoolItem(team.name));
        mouse(&mut t, MouseEventKind::Down(MouseButton::Left), at);
        mouse(&mut t, MouseEventKind::Up(MouseButton::Left), at);
        assert_eq!(t.session().selected(), Some(team.name));
        assert_eq!(t.session().carrying(), None);
    }

    #[test]
    fn submit_and_retry() {
        let mut t = tab();
        press(&mut t, KeyCode::Char('s'));
        assert!(t.notice.as_ref().unwrap().text.contains("0/32"));

        for team in all_teams() {
            t.session
                .apply(Command::Assign {
                    key: team.name,
                    value: division_of(team.name).unwrap(),
                })
                .unwrap();
        }
        press(&mut t, KeyCode::Char('s'));
        assert_eq!(t.notice.as_ref().unwrap().text, "Score: 32 / 32 (100%)");

        let terminal = render(&t);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("32 / 32 (100%)"));

        press(&mut t, KeyCode::Char('r'));
        assert_eq!(t.session().assigned_count(), 0);
        assert!(t.session().score().is_none());
    }
}
