//! Terminal client shell for the agentic social feed.
//!
//! Run the binary to launch the root view.
//! Run with `--about` or `--lineage` to print version information and exit.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    context::AppContext,
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::version::AppVersion;
use crate::ui::{about, root::RootView};

// ───────────────────────────────────────── CLI ───────────────

fn long_version() -> &'static str {
    // clap wants a 'static str; computed once per process.
    static LONG: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    LONG.get_or_init(|| AppVersion::CURRENT.display_name())
}

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    about = "Agentic social feed client",
    version = long_version(),
)]
struct Cli {
    /// Print the about block and exit.
    #[arg(long)]
    about: bool,

    /// Print every thinker-named release and exit.
    #[arg(long)]
    lineage: bool,

    /// Hide author and work in the about block.
    #[arg(long, requires = "about")]
    brief: bool,

    /// Write the effective key bindings to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let version = AppVersion::CURRENT;

    // ── print-and-exit modes ──────────────────────────────────
    if cli.about || cli.lineage {
        if cli.about {
            for line in about::about_lines(version, !cli.brief) {
                println!("{line}");
            }
        }
        if cli.lineage {
            if cli.about {
                println!();
            }
            for line in about::lineage_lines(version.major) {
                println!("{line}");
            }
        }
        return Ok(());
    }

    if cli.write_config {
        // A file that fails to parse is reported, never overwritten.
        let path = config::config_path();
        AppConfig::rewrite(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
            AppConfig::default()
        }
    };

    // ── bootstrap shared state ────────────────────────────────
    let ctx = AppContext::bootstrap();
    tracing::info!(version = %version.semver(), codename = %version.codename(), "starting");
    let mut state = AppState::new(ctx, config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state, version).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
    version: AppVersion,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| {
            frame.render_widget(RootView::new(&*state).version(version), frame.area())
        })?;

        match events.recv().await {
            Some(AppEvent::Key(k)) => handler::handle_key(state, k),
            Some(AppEvent::Resize) | Some(AppEvent::Tick) => {}
            None => break,
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
