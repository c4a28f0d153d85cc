//! Start menu and game-over screens.

use super::game_common::{render_overlay, render_status_bar};
use crate::snake::Round;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

/// Classic start menu: choose a human or AI round.
pub fn render_start_menu(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(area);

    render_overlay(
        frame,
        chunks[0],
        Color::Green,
        "Snake Game",
        &["Press H for Human or A for AI".to_string()],
        "Arrow keys steer the snake",
    );
    render_status_bar(
        frame,
        chunks[1],
        "",
        Color::White,
        &[("[H]", "Human"), ("[A]", "AI"), ("[Esc]", "Quit")],
    );
}

/// Game-over screen. `remaining_secs` is set for the timed message of the
/// wrapped variant; otherwise the restart prompt is shown.
pub fn render_game_over(frame: &mut Frame, area: Rect, round: &Round, remaining_secs: Option<u32>) {
    let score = round.final_score().unwrap_or(round.score);
    let mut body = vec![format!("Score: {}", score)];
    if let Some(cause) = round.end_cause() {
        body.push(format!("({})", cause));
    }

    match remaining_secs {
        None => render_overlay(
            frame,
            area,
            Color::Red,
            "GAME OVER",
            &body,
            "Press R to Restart or Q to Quit",
        ),
        Some(secs) => render_overlay(
            frame,
            area,
            Color::Red,
            "Game Over",
            &body,
            &format!("Closing in {}s", secs),
        ),
    }
}
