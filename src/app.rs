//! Screen flow: start menu, play, game over.
//!
//! Pure state with no terminal access. `main` feeds it mapped key events and
//! clock ticks and draws it after each step.

use crate::config::{GameConfig, Variant};
use crate::input::GameInput;
use crate::snake::{PlayMode, Round, RoundInput, RoundState};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub enum Screen {
    /// Human/AI choice (classic variant only).
    StartMenu,
    Playing(Round),
    /// Finished round kept for display. `remaining_ticks` counts down the
    /// timed message of the wrapped variant; `None` waits for Restart/Quit.
    GameOver {
        round: Round,
        remaining_ticks: Option<u32>,
    },
    Exit,
}

pub struct App {
    pub config: GameConfig,
    pub screen: Screen,
    /// Mode of the last round started, reused on restart.
    pub mode: PlayMode,
    rng: ChaCha8Rng,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut app = Self {
            config,
            screen: Screen::StartMenu,
            mode: PlayMode::Human,
            rng,
        };
        if !app.config.variant.has_menu() {
            app.start_round(PlayMode::Human);
        }
        app
    }

    pub fn should_exit(&self) -> bool {
        matches!(self.screen, Screen::Exit)
    }

    /// Current round, if one is on screen.
    pub fn round(&self) -> Option<&Round> {
        match &self.screen {
            Screen::Playing(round) | Screen::GameOver { round, .. } => Some(round),
            Screen::StartMenu | Screen::Exit => None,
        }
    }

    pub fn handle_input(&mut self, input: GameInput) {
        if input == GameInput::Close {
            if let Screen::Playing(round) = &mut self.screen {
                round.handle_input(RoundInput::Quit);
            }
            info!("closed");
            self.screen = Screen::Exit;
            return;
        }

        match &mut self.screen {
            Screen::StartMenu => match input {
                GameInput::ChooseHuman => self.start_round(PlayMode::Human),
                GameInput::ChooseAi => self.start_round(PlayMode::Ai),
                _ => {}
            },
            Screen::Playing(round) => {
                if let GameInput::Turn(heading) = input {
                    round.handle_input(RoundInput::Turn(heading));
                }
            }
            Screen::GameOver {
                remaining_ticks: None,
                ..
            } => match input {
                GameInput::Restart => self.start_round(self.mode),
                GameInput::Quit => self.screen = Screen::Exit,
                _ => {}
            },
            Screen::GameOver { .. } | Screen::Exit => {}
        }
    }

    /// One clock tick.
    pub fn tick(&mut self) {
        match &mut self.screen {
            Screen::Playing(round) => {
                round.tick(&mut self.rng);
                let state = round.state;
                match state {
                    RoundState::Running => {}
                    RoundState::Over { .. } => self.finish_round(),
                    RoundState::Quit => self.screen = Screen::Exit,
                }
            }
            Screen::GameOver {
                remaining_ticks: Some(remaining),
                ..
            } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    self.screen = Screen::Exit;
                }
            }
            _ => {}
        }
    }

    fn start_round(&mut self, mode: PlayMode) {
        self.mode = mode;
        let round = Round::new(self.config.variant.rules(), mode, &mut self.rng);
        self.screen = Screen::Playing(round);
    }

    fn finish_round(&mut self) {
        let Screen::Playing(round) = std::mem::replace(&mut self.screen, Screen::Exit) else {
            return;
        };
        let remaining_ticks = match self.config.variant {
            Variant::Classic => None,
            Variant::Wrapped => Some(self.config.game_over_ticks()),
        };
        self.screen = Screen::GameOver {
            round,
            remaining_ticks,
        };
    }
}
