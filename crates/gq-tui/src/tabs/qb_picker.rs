//! Quarterback picker tab: put every starter on his team, then share.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use gq_core::{Division, QbRoster, Team};
use gq_modes::{DropTarget, ModeResult, PickStatus, QbPickerSession, QuizConfig, ShareSurface};

use super::Tab;
use crate::shared::{Focus, HitMap, Notice, step};

/// What sits under the mouse.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Hit {
    /// The pool panel.
    Pool,
    /// An unplaced quarterback.
    PoolItem(String),
    /// A team slot, by abbreviation.
    Slot(&'static str),
}

/// Team slots in board order.
fn slots() -> impl Iterator<Item = &'static Team> {
    Division::DISPLAY_ORDER.into_iter().flat_map(|d| d.teams())
}

/// Quarterback picker tab state.
pub struct QbTab<'r> {
    session: QbPickerSession<'r>,
    surface: Box<dyn ShareSurface>,
    focus: Focus,
    pool_cursor: usize,
    slot_cursor: usize,
    notice: Option<Notice>,
    hits: HitMap<Hit>,
}

impl<'r> QbTab<'r> {
    /// Create the tab over `roster`, sharing results to `surface`.
    pub fn new(roster: &'r QbRoster, config: &QuizConfig, surface: Box<dyn ShareSurface>) -> Self {
        Self {
            session: QbPickerSession::new(roster, config),
            surface,
            focus: Focus::Pool,
            pool_cursor: 0,
            slot_cursor: 0,
            notice: None,
            hits: HitMap::default(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &QbPickerSession<'r> {
        &self.session
    }

    fn pool_names(&self) -> Vec<String> {
        self.session.pool().iter().map(|q| q.name.clone()).collect()
    }

    fn slot_count(&self) -> usize {
        slots().count()
    }

    fn clamp_cursors(&mut self) {
        self.pool_cursor = step(self.pool_cursor, 0, self.session.pool().len());
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Pool => {
                self.pool_cursor = step(self.pool_cursor, delta, self.session.pool().len());
            }
            Focus::Board => {
                self.slot_cursor = step(self.slot_cursor, delta, self.slot_count());
            }
        }
    }

    fn report<T>(&mut self, result: ModeResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                None
            }
        }
    }

    fn tap_pool_qb(&mut self, name: &str) {
        let result = self.session.tap_qb(name);
        if self.report(result).is_none() {
            return;
        }
        match self.session.selected() {
            Some(selected) => {
                self.notice = Some(Notice::info(format!("{selected} selected. Pick a team.")));
                self.focus = Focus::Board;
            }
            None => self.notice = None,
        }
    }

    /// Tapping a filled slot takes its quarterback back and selects him,
    /// replacing any earlier selection. An empty slot takes the selection.
    fn tap_slot(&mut self, abbr: &'static str) {
        if self.session.assigned_qb(abbr).is_some() {
            let result = self.session.tap_assigned(abbr);
            if let Some(true) = self.report(result) {
                let name = self.session.selected().unwrap_or_default();
                self.notice = Some(Notice::info(format!("{name} is back in the pool, selected.")));
            }
            self.clamp_cursors();
            return;
        }

        let Some(selected) = self.session.selected().map(str::to_string) else {
            self.notice = Some(Notice::error("Select a quarterback first."));
            return;
        };
        let result = self.session.tap_team(abbr);
        if let Some(true) = self.report(result) {
            self.notice = Some(Notice::info(format!("{selected} -> {}", abbr.to_uppercase())));
            self.focus = Focus::Pool;
        }
        self.clamp_cursors();
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Pool => {
                if let Some(name) = self.pool_names().get(self.pool_cursor) {
                    self.tap_pool_qb(name);
                }
            }
            Focus::Board => {
                if let Some(team) = slots().nth(self.slot_cursor) {
                    self.tap_slot(team.abbr);
                }
            }
        }
    }

    /// `s`: submit while selecting, share once submitted.
    fn submit_or_share(&mut self) {
        if self.session.score().is_some() {
            let result = self.session.share(self.surface.as_mut());
            self.notice = Some(match result {
                Ok(true) => Notice::info("Results shared."),
                Ok(false) => Notice::error("Sharing is not available."),
                Err(e) => Notice::error(e.to_string()),
            });
            return;
        }
        let result = self.session.submit();
        if let Some(score) = self.report(result) {
            self.notice = Some(Notice::info(format!("Score: {score}  (s to share)")));
            self.focus = Focus::Board;
        }
    }

    fn try_again(&mut self) {
        self.session.try_again();
        self.focus = Focus::Pool;
        self.pool_cursor = 0;
        self.slot_cursor = 0;
        self.notice = Some(Notice::info("Picks cleared."));
    }

    fn release(&mut self, hit: Option<Hit>) {
        let Some(carried) = self.session.carrying().map(str::to_string) else {
            return;
        };
        let result = match hit {
            Some(Hit::PoolItem(name)) if name == carried => {
                self.session.cancel_drag();
                self.tap_pool_qb(&name);
                return;
            }
            Some(Hit::Slot(abbr)) if self.session.team_of(&carried) == Some(abbr) => {
                self.session.cancel_drag();
                self.tap_slot(abbr);
                return;
            }
            Some(Hit::Slot(abbr)) => self.session.drop_on(DropTarget::Zone(abbr.to_string())),
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
        let focused = self.focus == Focus::Pool;
        if self.session.score().is_some() {
            self.draw_corrections(frame, area);
            return;
        }
        let pool = self.session.pool();
        let block = Block::default()
            .title(format!(" Quarterbacks ({}) ", pool.len()))
            .borders(Borders::ALL)
            .border_style(border(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.push(area, Hit::Pool);

        let height = inner.height as usize;
        let offset = self.pool_cursor.saturating_sub(height.saturating_sub(1));
        for (row, (idx, qb)) in pool.iter().enumerate().skip(offset).take(height).enumerate() {
            let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            let mut style = Style::default().fg(Color::White);
            if self.session.selected() == Some(qb.name.as_str()) {
                style = style.fg(Color::Yellow).bold();
            }
            if self.session.carrying() == Some(qb.name.as_str()) {
                style = style.fg(Color::Magenta);
            }
            if focused && idx == self.pool_cursor {
                style = style.bg(Color::DarkGray);
            }
            frame.render_widget(
                Paragraph::new(Span::styled(qb.name.as_str(), style)),
                rect,
            );
            self.hits.push(rect, Hit::PoolItem(qb.name.clone()));
        }
    }

    /// After submitting, the pool panel lists the right answer for every miss.
    fn draw_corrections(&self, frame: &mut Frame, area: Rect) {
        let misses: Vec<Line> = self
            .session
            .results()
            .into_iter()
            .filter(|r| r.status != PickStatus::Correct)
            .map(|r| {
                let correct = r.correct_qb.map_or("?", |q| q.name.as_str());
                Line::from(vec![
                    Span::styled(
                        format!("{:<4}", r.team.abbr.to_uppercase()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(correct, Style::default().fg(Color::Green)),
                ])
            })
            .collect();
        let block = Block::default()
            .title(format!(" Misses ({}) ", misses.len()))
            .borders(Borders::ALL)
            .border_style(border(false));
        frame.render_widget(Paragraph::new(misses).block(block), area);
    }

    fn draw_board(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let board_focused = self.focus == Focus::Board;
        let submitted = self.session.score().is_some();
        let mut slot_idx = 0;

        for (conf_idx, chunk) in Division::DISPLAY_ORDER.chunks(4).enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 4); 4])
                .split(rows[conf_idx]);
            for (cell, division) in cells.iter().zip(chunk) {
                let block = Block::default()
                    .title(format!(" {} ", division.name()))
                    .borders(Borders::ALL)
                    .border_style(border(false));
                let inner = block.inner(*cell);
                frame.render_widget(block, *cell);

                for (i, team) in division.teams().iter().enumerate() {
                    let focused_slot = board_focused && slot_idx == self.slot_cursor;
                    slot_idx += 1;
                    if i as u16 >= inner.height {
                        continue;
                    }
                    let rect = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
                    let assigned = self.session.assigned_qb(team.abbr);
                    let mut style = match (submitted, self.session.status_of(team.abbr)) {
                        (true, PickStatus::Correct) => Style::default().fg(Color::Green),
                        (true, PickStatus::Incorrect) => Style::default().fg(Color::Red),
                        (true, PickStatus::Empty) => Style::default().fg(Color::DarkGray),
                        (false, _) => Style::default().fg(Color::White),
                    };
                    if assigned.is_some_and(|q| self.session.carrying() == Some(q.name.as_str())) {
                        style = style.fg(Color::Magenta);
                    }
                    if focused_slot {
                        style = style.bg(Color::DarkGray);
                    }
                    let line = Line::from(vec![
                        Span::styled(
                            format!("{:<4}", team.abbr.to_uppercase()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(assigned.map_or("-", |q| q.name.as_str()), style),
                    ]);
                    frame.render_widget(Paragraph::new(line), rect);
                    self.hits.push(rect, Hit::Slot(team.abbr));
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

impl Tab for QbTab<'_> {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('s') => self.submit_or_share(),
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
                    let result = self.session.pick_up(&name);
                    self.report(result);
                }
                Some(Hit::Slot(abbr)) if self.session.selected().is_some() => self.tap_slot(abbr),
                Some(Hit::Slot(abbr)) if self.session.score().is_none() => {
                    if let Some(qb) = self.session.assigned_qb(abbr) {
                        self.focus = Focus::Board;
                        let result = self.session.pick_up(&qb.name);
                        self.report(result);
                    }
                }
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
            Some(score) => format!(" Quarterbacks: {score} "),
            None => format!(
                " Quarterbacks: {}/{} placed (as of {}) ",
                self.session.assigned_count(),
                self.session.total(),
                self.session.roster().last_updated()
            ),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 14 || inner.width < 70 {
            frame.render_widget(Paragraph::new("Window too small"), inner);
            return;
        }

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(outer[0]);

        self.draw_pool(frame, panes[0]);
        self.draw_board(frame, panes[1]);

        if let Some(notice) = &self.notice {
            frame.render_widget(Paragraph::new(notice.line()), outer[1]);
        }
    }

    fn status_hint(&self) -> &str {
        if self.session.score().is_some() {
            "s:share  r:try again  Tab:mode  ?:help  q:quit"
        } else if self.session.can_submit() {
            "s:submit  j/k:move  Enter:tap  r:clear  Tab:mode  ?:help  q:quit"
        } else {
            "j/k:move  h/l:pool/board  Enter/Space:tap  mouse:drag  r:clear  ?:help  q:quit"
        }
    }
}
