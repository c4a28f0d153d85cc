pub mod game_common;
pub mod menu_scene;
pub mod snake_scene;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Draw whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    let tps = app.config.ticks_per_second;

    match &app.screen {
        Screen::StartMenu => menu_scene::render_start_menu(frame, area),
        Screen::Playing(round) => snake_scene::render_snake_scene(frame, area, round, tps),
        Screen::GameOver {
            round,
            remaining_ticks,
        } => {
            let remaining_secs = remaining_ticks.map(|ticks| ticks.div_ceil(tps.max(1)));
            menu_scene::render_game_over(frame, area, round, remaining_secs);
        }
        Screen::Exit => {}
    }
}
