//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::tabs::{self, TAB_DIVIDER, TAB_TITLES, TabId};

/// Launch the TUI application.
pub fn run(mut app: TuiApp<'_>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp<'_>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        handle_event(app, event);
    }
}

/// Handle a crossterm event.
pub fn handle_event(app: &mut TuiApp<'_>, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

/// Handle global keys, then forward the rest to the active tab.
fn handle_key(app: &mut TuiApp<'_>, key: crossterm::event::KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab => {
            app.switch_tab(app.active_tab.next());
            return;
        }
        KeyCode::BackTab => {
            app.switch_tab(app.active_tab.prev());
            return;
        }
        _ => {}
    }

    if let KeyCode::Char(c) = key.code
        && let Some(idx) = c.to_digit(10)
        && (1..=TabId::ALL.len() as u32).contains(&idx)
    {
        app.switch_tab(TabId::ALL[idx as usize - 1]);
        return;
    }

    if app.active_tab_mut().handle_key(key) {
        app.should_quit = true;
    }
}

/// Handle mouse events: tab bar clicks here, everything else in the tab.
fn handle_mouse(app: &mut TuiApp<'_>, mouse: crossterm::event::MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row == 0
                && let Some(tab) = tab_bar_hit_test(mouse.column)
            {
                app.switch_tab(tab);
                return;
            }
            app.active_tab_mut().handle_mouse(mouse);
        }
        MouseEventKind::Up(MouseButton::Left)
        | MouseEventKind::Drag(MouseButton::Left)
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown => app.active_tab_mut().handle_mouse(mouse),
        _ => {}
    }
}

/// Hit-test the tab bar for mouse clicks.
fn tab_bar_hit_test(col: u16) -> Option<TabId> {
    let divider_len = TAB_DIVIDER.chars().count() as u16;
    let mut x = 0u16;
    for (i, title) in TAB_TITLES.iter().enumerate() {
        let end_x = x + title.chars().count() as u16;
        if (x..end_x).contains(&col) {
            return Some(TabId::ALL[i]);
        }
        x = end_x + divider_len;
    }
    None
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &TuiApp<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tab_bar(frame, app.active_tab, chunks[0]);

    app.active_tab_ref().draw(frame, chunks[1]);

    let hint = app.active_tab_ref().status_hint();
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
