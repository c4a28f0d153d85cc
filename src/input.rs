//! Key mapping from terminal events to game inputs.

use crate::snake::Heading;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Turn(Heading),
    /// H on the start menu
    ChooseHuman,
    /// A on the start menu
    ChooseAi,
    /// R on the game-over prompt
    Restart,
    /// Q on the game-over prompt
    Quit,
    /// Esc or Ctrl+C; the window-close request, honoured on every screen
    Close,
    Other,
}

/// Map a key event. Key releases and repeats map to `Other`.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameInput::Close;
    }
    match key.code {
        KeyCode::Up => GameInput::Turn(Heading::Up),
        KeyCode::Down => GameInput::Turn(Heading::Down),
        KeyCode::Left => GameInput::Turn(Heading::Left),
        KeyCode::Right => GameInput::Turn(Heading::Right),
        KeyCode::Char('h') | KeyCode::Char('H') => GameInput::ChooseHuman,
        KeyCode::Char('a') | KeyCode::Char('A') => GameInput::ChooseAi,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        KeyCode::Esc => GameInput::Close,
        _ => GameInput::Other,
    }
}
