// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io::{stderr, stdout};
use std::time::Duration;
use tracing::{error, info};

use phishguard::config::Config;
use phishguard::events::Controller;
use phishguard::{cli, logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let config = Config::parse();

    if let Err(e) = logging::initialize_logging() {
        // Logging is optional, the scanner works without it.
        eprintln!("warning: file logging disabled: {e}");
    }
    info!(?config, "PhishGuard starting.");

    if let Some(url) = config.check.clone() {
        let code = cli::run_headless(&url, &config, &mut stdout(), &mut stderr()).await?;
        std::process::exit(code);
    }

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let outcome = run_tui(&mut terminal, &config).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    if let Err(e) = &outcome {
        error!(error = ?e, "UI loop failed.");
    }
    outcome
}

async fn run_tui<B: Backend>(terminal: &mut Terminal<B>, config: &Config) -> Result<()> {
    let mut controller = Controller::new(config.scan_delay(), logging::get_export_dir());

    while !controller.app.should_quit {
        terminal.draw(|frame| ui::render(&mut controller.app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    controller.handle_key(key);
                }
            }
        }

        controller.poll_scan();
        controller.app.on_tick();
    }

    controller.shutdown();
    Ok(())
}
