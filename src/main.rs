//! Terminal 2048 runner (default binary).
//!
//! Exit codes: 0 on Escape, 1 on setup/read/write failure, 2 on interrupt.

use std::process::ExitCode;

use anyhow::Result;

use dois_mil::app;
use dois_mil::config::{parse_args, Command, Config, USAGE};
use dois_mil::core::{Grid, SimpleRng};
use dois_mil::input::{spawn_interrupt_listener, TerminalKeys};
use dois_mil::logging;
use dois_mil::term::{Screen, TerminalSession};
use dois_mil::types::ExitStatus;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Command::Play(config)) => config.with_env(),
        Ok(Command::Help) => {
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("dois-mil: {:#}\n\n{}", e, USAGE);
            return ExitCode::from(ExitStatus::Failure.code());
        }
    };

    if let Some(path) = &config.log_path {
        if let Err(e) = logging::init_global(path) {
            eprintln!("dois-mil: {:#}", e);
        }
    }

    let status = match play(&config) {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("session failed: {:#}", e);
            eprintln!("dois-mil: {:#}", e);
            ExitStatus::Failure
        }
    };
    tracing::info!(code = status.code(), "exiting");
    ExitCode::from(status.code())
}

fn play(config: &Config) -> Result<ExitStatus> {
    let mut rng = match config.seed {
        Some(seed) => SimpleRng::new(seed),
        None => SimpleRng::from_entropy(),
    };
    tracing::info!(size = config.size, seed = rng.state(), "session started");
    let mut grid = Grid::new(config.size, &mut rng);

    let interrupt = spawn_interrupt_listener()?;
    let mut keys = TerminalKeys::new(interrupt);

    let mut session = TerminalSession::enter()?;
    let mut screen = Screen::stdout();
    let result = app::run(&mut grid, &mut keys, &mut screen);

    // Always try to restore terminal state before reporting.
    let restored = session.exit();
    let status = result?;
    restored?;

    tracing::info!(score = grid.score(), "session ended");
    Ok(status)
}
