//! Snake Headless Autoplay
//!
//! Plays AI rounds on the classic board without a terminal and prints the
//! score of each run plus the mean and best score.
//!
//! Usage:
//!   cargo run --bin autoplay -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of runs with incrementing seeds (default: 1)
//!   --seed N        RNG seed of the first run (default: 42)
//!   --max-ticks N   Stop a run after N ticks (default: 100000)
//!   --quiet         Only the summary line

use snake_arcade::simulator::{run_autoplay, AutoplayConfig};
use std::process;

struct CliOptions {
    autoplay: AutoplayConfig,
    quiet: bool,
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        autoplay: AutoplayConfig::default(),
        quiet: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                options.autoplay.runs = number_arg(&args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                options.autoplay.seed = number_arg(&args, i, "--seed");
            }
            "--max-ticks" => {
                i += 1;
                options.autoplay.max_ticks = number_arg(&args, i, "--max-ticks");
            }
            "--quiet" => options.quiet = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn number_arg<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("{flag} requires a number");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Snake Headless Autoplay\n\
         \n\
         Usage: autoplay [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 1)\n\
         \x20 --seed N        RNG seed of the first run (default: 42)\n\
         \x20 --max-ticks N   Stop a run after N ticks (default: 100000)\n\
         \x20 --quiet         Only the summary line\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() {
    let options = parse_args();
    let report = run_autoplay(&options.autoplay);
    report.print(options.quiet);
}
