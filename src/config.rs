//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::entities::Level;

/// A Space Invaders clone drawn into a pixel buffer and shown in the terminal.
#[derive(Clone, Debug, Parser)]
#[command(name = "space_invaders", version)]
pub struct Config {
    /// How often the aliens fire back.
    #[arg(long, value_enum, default_value_t = Level::Medium)]
    pub level: Level,

    /// Simulation ticks (and presented frames) per second.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Seed for the alien fire RNG; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write tracing output to this file.  The terminal is busy drawing, so
    /// nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}
