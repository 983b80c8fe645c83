// src/config.rs

use clap::Parser;
use std::time::Duration;

use crate::core::scanner::DEFAULT_SCAN_DELAY;

/// Command-line options. Without `--check` the interactive UI starts.
#[derive(Debug, Clone, Parser)]
#[command(name = "phishguard", version, about = "Phishing URL scanner demo")]
pub struct Config {
    /// Scan a single URL without the UI and exit.
    #[arg(long, value_name = "URL")]
    pub check: Option<String>,

    /// With --check, print the result as JSON.
    #[arg(long, requires = "check")]
    pub json: bool,

    /// Simulated scan duration in milliseconds.
    #[arg(
        long = "delay-ms",
        env = "PHISHGUARD_SCAN_DELAY_MS",
        default_value_t = DEFAULT_SCAN_DELAY.as_millis() as u64
    )]
    pub delay_ms: u64,
}

impl Config {
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
