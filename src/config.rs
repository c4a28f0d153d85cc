//! Game configuration: defaults, optional JSON file, command-line flags.
//!
//! Precedence is defaults < `--config FILE` < the other flags.

use crate::constants::{GAME_OVER_MESSAGE_SECONDS, MAX_TICKS_PER_SECOND, TICKS_PER_SECOND};
use crate::snake::Rules;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which rule set the game runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fatal walls, Human/AI start menu, restart prompt on game over.
    Classic,
    /// Wrapping edges, human only, timed game-over message then exit.
    Wrapped,
}

impl Variant {
    pub fn rules(&self) -> Rules {
        match self {
            Self::Classic => Rules::CLASSIC,
            Self::Wrapped => Rules::WRAPPED,
        }
    }

    /// Only the classic game ships the autopilot and the start menu.
    pub fn has_menu(&self) -> bool {
        matches!(self, Self::Classic)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Wrapped => "Wrapped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: Variant,
    /// Fixed update rate of the game loop
    pub ticks_per_second: u32,
    /// RNG seed for reproducible rounds (None = entropy)
    pub seed: Option<u64>,
    /// Log destination; the terminal itself belongs to the UI
    pub log_file: PathBuf,
    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,
            log_file: std::env::temp_dir().join("snake-arcade.log"),
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> io::Result<()> {
        if self.ticks_per_second == 0 || self.ticks_per_second > MAX_TICKS_PER_SECOND {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "ticks_per_second must be between 1 and {}, got {}",
                    MAX_TICKS_PER_SECOND, self.ticks_per_second
                ),
            ));
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> io::Result<LevelFilter> {
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown log level: {}", self.log_level),
            )
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Ticks the wrapped variant keeps its game-over message on screen.
    pub fn game_over_ticks(&self) -> u32 {
        GAME_OVER_MESSAGE_SECONDS * self.ticks_per_second
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(GameConfig),
    Help,
    Version,
}

/// Flags collected before the config file is read, applied on top of it.
#[derive(Default)]
struct Overrides {
    config_path: Option<PathBuf>,
    variant: Option<Variant>,
    ticks_per_second: Option<u32>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

/// Parse `args` (program name first).
pub fn parse_args(args: &[String]) -> io::Result<Command> {
    let mut overrides = Overrides::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                overrides.config_path = Some(PathBuf::from(flag_value(args, i)?));
                i += 1;
            }
            "--wrap" | "--wrapped" => overrides.variant = Some(Variant::Wrapped),
            "--classic" => overrides.variant = Some(Variant::Classic),
            "--tps" => {
                overrides.ticks_per_second = Some(parse_number(args, i)?);
                i += 1;
            }
            "--seed" => {
                overrides.seed = Some(parse_number(args, i)?);
                i += 1;
            }
            "--log" => {
                overrides.log_file = Some(PathBuf::from(flag_value(args, i)?));
                i += 1;
            }
            "--log-level" => {
                overrides.log_level = Some(flag_value(args, i)?.to_string());
                i += 1;
            }
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", other),
                ))
            }
        }
        i += 1;
    }

    // The file is read first so the other flags override it
    let mut config = match &overrides.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(variant) = overrides.variant {
        config.variant = variant;
    }
    if let Some(tps) = overrides.ticks_per_second {
        config.ticks_per_second = tps;
    }
    if overrides.seed.is_some() {
        config.seed = overrides.seed;
    }
    if let Some(log_file) = overrides.log_file {
        config.log_file = log_file;
    }
    if let Some(log_level) = overrides.log_level {
        config.log_level = log_level;
    }

    config.validate()?;
    Ok(Command::Play(config))
}

fn flag_value(args: &[String], i: usize) -> io::Result<&str> {
    args.get(i + 1).map(String::as_str).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} requires a value", args[i]),
        )
    })
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize) -> io::Result<T> {
    flag_value(args, i)?.parse().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} requires a number", args[i]),
        )
    })
}

pub fn usage() -> &'static str {
    "Snake - Terminal Arcade\n\
     \n\
     Usage: snake-arcade [OPTIONS]\n\
     \n\
     Options:\n\
     \x20 --wrap            Edges wrap around (no AI, no menu)\n\
     \x20 --classic         Fatal walls with Human/AI menu (default)\n\
     \x20 --tps N           Ticks per second (default: 10)\n\
     \x20 --seed N          RNG seed for reproducible rounds\n\
     \x20 --config FILE     Load settings from a JSON file\n\
     \x20 --log FILE        Write the log to FILE\n\
     \x20 --log-level LVL   off, error, warn, info, debug or trace\n\
     \x20 --version, -v     Show version information\n\
     \x20 --help, -h        Show this help"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("snake-arcade")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.ticks_per_second, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.game_over_ticks(), 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"variant": "wrapped", "seed": 7}"#).unwrap();
        assert_eq!(config.variant, Variant::Wrapped);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ticks_per_second, 10);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_json_is_invalid_data() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_tick_rate_bounds() {
        let err = GameConfig::from_json(r#"{"ticks_per_second": 0}"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(GameConfig::from_json(r#"{"ticks_per_second": 61}"#).is_err());
        assert!(GameConfig::from_json(r#"{"ticks_per_second": 60}"#).is_ok());
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        assert!(GameConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
        let config = GameConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_variant_rules() {
        use crate::snake::BoundaryPolicy;
        assert_eq!(Variant::Classic.rules().policy, BoundaryPolicy::Bounded);
        assert_eq!(Variant::Wrapped.rules().policy, BoundaryPolicy::Wrapped);
        assert!(Variant::Classic.has_menu());
        assert!(!Variant::Wrapped.has_menu());
    }

    #[test]
    fn test_parse_no_args_plays_classic() {
        assert_eq!(
            parse_args(&args(&[])).unwrap(),
            Command::Play(GameConfig::default())
        );
    }

    #[test]
    fn test_parse_flags() {
        let Command::Play(config) =
            parse_args(&args(&["--wrap", "--tps", "15", "--seed", "42"])).unwrap()
        else {
            panic!("expected Play");
        };
        assert_eq!(config.variant, Variant::Wrapped);
        assert_eq!(config.ticks_per_second, 15);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["--version"])).unwrap(), Command::Version);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["--tps"])).is_err());
        assert!(parse_args(&args(&["--tps", "fast"])).is_err());
        assert!(parse_args(&args(&["--tps", "0"])).is_err());
    }

    #[test]
    fn test_config_file_then_flags_override() {
        let path = std::env::temp_dir().join(format!(
            "snake-arcade-config-test-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"variant": "wrapped", "ticks_per_second": 20}"#).unwrap();
        let path_str = path.to_string_lossy().to_string();

        let Command::Play(config) =
            parse_args(&args(&["--tps", "12", "--config", &path_str])).unwrap()
        else {
            panic!("expected Play");
        };
        fs::remove_file(&path).ok();

        assert_eq!(config.variant, Variant::Wrapped);
        assert_eq!(config.ticks_per_second, 12);
    }

    #[test]
    fn test_config_as_flag_value_is_not_a_config_flag() {
        let Command::Play(config) = parse_args(&args(&["--log", "--config"])).unwrap() else {
            panic!("expected Play");
        };
        assert_eq!(config.log_file, PathBuf::from("--config"));
        assert_eq!(config.variant, Variant::Classic);
    }

    #[test]
    fn test_tick_interval_keeps_fractional_millis() {
        let config = GameConfig {
            ticks_per_second: 60,
            ..GameConfig::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_nanos(16_666_666));
        let config = GameConfig {
            ticks_per_second: 7,
            ..GameConfig::default()
        };
        assert_eq!(config.tick_interval() * 7, Duration::from_nanos(999_999_994));
    }

    #[test]
    fn test_missing_config_file_is_not_found() {
        let err = GameConfig::load(Path::new("/nonexistent/snake-arcade.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
