//! Snake - Terminal Arcade Library
//!
//! Game rules, screen flow and the headless autoplay runner, exposed for
//! testing and for the `autoplay` binary.

pub mod app;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod snake;
pub mod tick_clock;
pub mod ui;
