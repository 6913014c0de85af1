//! Main TUI entry point and event handling.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use super::render::draw_ui;
use crate::client::ApiClient;
use crate::clipboard;
use crate::models::Evaluation;
use crate::state::{Focus, ReviewState};

/// Messages sent back from the in-flight evaluation task.
#[derive(Debug)]
pub enum TuiMessage {
    EvaluationReady(Box<Evaluation>),
    EvaluationFailed(String),
}

/// Run the TUI.
pub async fn run(client: ApiClient) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!("Failed to enable raw mode: {e}. Run from a real terminal (TTY).")
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {e}")
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = ReviewState::default();
    let (tx, mut rx) = mpsc::channel(8);

    let result = run_event_loop(&mut terminal, &mut state, client, tx, &mut rx).await;

    // Always attempt cleanup, even when the loop errored
    let cleanup_result = restore_terminal(&mut terminal);

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ReviewState,
    client: ApiClient,
    tx: mpsc::Sender<TuiMessage>,
    rx: &mut mpsc::Receiver<TuiMessage>,
) -> Result<()> {
    loop {
        state.tick();

        // Drain messages from the evaluation task
        while let Ok(msg) = rx.try_recv() {
            match msg {
                TuiMessage::EvaluationReady(evaluation) => {
                    state.finish_with_result(*evaluation);
                }
                TuiMessage::EvaluationFailed(message) => {
                    state.finish_with_error(message);
                }
            }
        }

        terminal.draw(|f| draw_ui(f, state))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match handle_key(state, key) {
                KeyAction::Quit => break,
                KeyAction::Submit(prompt) => {
                    spawn_evaluation(client.clone(), tx.clone(), prompt)
                }
                KeyAction::None => {}
            }
        }
    }

    Ok(())
}

/// What the event loop should do after a key press.
enum KeyAction {
    Quit,
    Submit(String),
    None,
}

fn handle_key(state: &mut ReviewState, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    match (key.code, key.modifiers) {
        // Ctrl+C - exit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,
        (KeyCode::Esc, _) => KeyAction::Quit,
        // Tab - move between prompt input and results
        (KeyCode::Tab, _) => {
            state.focus = match state.focus {
                Focus::Input => Focus::Results,
                Focus::Results => Focus::Input,
            };
            KeyAction::None
        }
        // Alt+Enter - line break in the draft
        (KeyCode::Enter, KeyModifiers::ALT) if state.focus == Focus::Input => {
            state.insert_char('\n');
            KeyAction::None
        }
        // Enter - submit the draft (no-op while a request is in flight)
        (KeyCode::Enter, _) if state.focus == Focus::Input => match state.begin_submit() {
            Some(prompt) => KeyAction::Submit(prompt),
            None => KeyAction::None,
        },
        // Ctrl+U - clear input
        (KeyCode::Char('u'), KeyModifiers::CONTROL) if state.focus == Focus::Input => {
            state.clear_input();
            KeyAction::None
        }
        (KeyCode::Backspace, _) if state.focus == Focus::Input => {
            state.backspace();
            KeyAction::None
        }
        (KeyCode::Left, _) if state.focus == Focus::Input => {
            state.cursor_left();
            KeyAction::None
        }
        (KeyCode::Right, _) if state.focus == Focus::Input => {
            state.cursor_right();
            KeyAction::None
        }
        (KeyCode::Up, _) if state.focus == Focus::Results => {
            state.scroll_up(1);
            KeyAction::None
        }
        (KeyCode::Down, _) if state.focus == Focus::Results => {
            state.scroll_down(1);
            KeyAction::None
        }
        (KeyCode::PageUp, _) => {
            state.scroll_up(10);
            KeyAction::None
        }
        (KeyCode::PageDown, _) => {
            state.scroll_down(10);
            KeyAction::None
        }
        // 1/2/3 in results focus - copy the corresponding rewrite
        (KeyCode::Char(c @ '1'..='3'), KeyModifiers::NONE)
            if state.focus == Focus::Results =>
        {
            copy_rewrite(state, c as usize - '1' as usize);
            KeyAction::None
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) if state.focus == Focus::Results => {
            KeyAction::Quit
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT)
            if state.focus == Focus::Input =>
        {
            state.insert_char(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Fires the evaluation request on a background task so the UI keeps ticking.
fn spawn_evaluation(client: ApiClient, tx: mpsc::Sender<TuiMessage>, prompt: String) {
    tokio::spawn(async move {
        let msg = match client.evaluate(&prompt).await {
            Ok(evaluation) => TuiMessage::EvaluationReady(Box::new(evaluation)),
            Err(e) => TuiMessage::EvaluationFailed(e.to_string()),
        };
        let _ = tx.send(msg).await;
    });
}

fn copy_rewrite(state: &mut ReviewState, index: usize) {
    let Some(text) = state
        .evaluation
        .as_ref()
        .and_then(|e| e.improved_prompts.get(index))
        .map(|p| p.prompt.clone())
    else {
        return;
    };

    match clipboard::copy(&text) {
        Ok(()) => state.mark_copied(index),
        Err(e) => state.status_note = Some(format!("Copy failed: {e}")),
    }
}
