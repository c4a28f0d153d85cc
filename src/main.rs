use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use snake_arcade::app::App;
use snake_arcade::build_info::{self, BUILD_COMMIT, BUILD_DATE};
use snake_arcade::config::{parse_args, usage, Command, GameConfig};
use snake_arcade::input::map_key;
use snake_arcade::tick_clock::TickClock;
use snake_arcade::{logging, ui};
use std::io::{self, Stdout};
use std::time::Duration;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = match parse_args(&args) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Help) => {
            println!("{}", usage());
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'snake-arcade --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config) {
        eprintln!(
            "Warning: could not open log file {}: {}",
            config.log_file.display(),
            e
        );
    }
    info!(
        "starting snake-arcade {} ({}), variant={}",
        BUILD_DATE,
        BUILD_COMMIT,
        config.variant.name()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config);
    let restored = restore_terminal(&mut terminal);

    if let Err(e) = &result {
        error!("terminal error: {}", e);
    }
    if let Err(e) = &restored {
        error!("terminal restore failed: {}", e);
    }
    info!("exiting");
    first_error([result, restored])
}

/// Run every restore step even if an earlier one fails.
fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let screen = terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map(|_| ());
    let cursor = terminal.show_cursor();
    first_error([raw_mode, screen, cursor])
}

/// The first error in order, or `Ok` if every step succeeded.
fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().collect()
}

/// Main loop: draw, wait for input until the next tick, apply every queued
/// key event in order, then tick.
fn run(terminal: &mut Tui, config: GameConfig) -> io::Result<()> {
    let mut clock = TickClock::new(config.tick_interval());
    let mut app = App::new(config);

    while !app.should_exit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(clock.time_until_tick())? {
            loop {
                if let Event::Key(key) = event::read()? {
                    app.handle_input(map_key(key));
                }
                if app.should_exit() || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if !app.should_exit() && clock.consume_tick() {
            app.tick();
        }
    }

    Ok(())
}
