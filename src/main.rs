use clap::Parser;
use crossterm::event::{self, Event, KeyEvent};
use env_logger::{Env, Target};
use ratatui::backend::{Backend, CrosstermBackend};
use std::{
    error::Error,
    fs::File,
    io::{self, stdout},
    path::Path,
    time::{Duration, Instant},
};

use dropris::input::{translate, Command};
use dropris::ui::{Render, TerminalGuard, TerminalRenderer};
use dropris::{Args, Session};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    let config = args.into_config()?;
    let mut session = Session::from_config(&config)?;

    // Setup terminal; the guard restores it on every exit path
    let mut guard = TerminalGuard::enter()?;
    let mut renderer = TerminalRenderer::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut session, &mut renderer, config.tick_interval);

    // Cleanup
    let restored = guard.restore();
    result?;
    restored?;
    Ok(())
}

// The game draws over the whole terminal, so logs only go somewhere when asked.
fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match log_file {
        Some(path) => {
            builder.target(Target::Pipe(Box::new(File::create(path)?)));
        }
        None => {
            if std::env::var_os("RUST_LOG").is_none() {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }
    builder.init();
    Ok(())
}

/// Drives the session from one thread: key events are handled as they arrive
/// and gravity runs whenever the tick deadline passes.
fn run<B: Backend>(
    session: &mut Session,
    renderer: &mut TerminalRenderer<B>,
    tick_interval: Duration,
) -> Result<(), Box<dyn Error>> {
    renderer.render(session.cells())?;
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match translate(code, kind) {
                    Some(Command::Quit) => break,
                    Some(Command::Restart) => {
                        session.reset();
                        next_tick = Instant::now() + tick_interval;
                    }
                    Some(Command::Game(key)) => {
                        session.handle_input(key);
                    }
                    None => continue,
                }
                renderer.render(session.cells())?;
            }
        }

        let now = Instant::now();
        if now >= next_tick {
            session.tick();
            next_tick = now + tick_interval;
            renderer.render(session.cells())?;
        }
    }

    log::info!("Quit requested");
    Ok(())
}
